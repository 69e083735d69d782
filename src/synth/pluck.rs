//! Plucked strings after Karplus and Strong.

use std::collections::VecDeque;

use rand::Rng;

use super::Generator;

/// A string excited by a burst of noise, losing its high frequencies over time.
///
/// The first period is white noise. Every later sample is the average of the two
/// samples exactly one period earlier.
#[derive(Debug)]
pub struct Pluck {
    /// The last `period` samples, oldest first. Never longer than the tone.
    history: VecDeque<f64>,
    period: usize,
    emitted: usize,
}

impl Pluck {
    /// Pluck a string for a tone of `size` samples.
    pub fn new<R: Rng + ?Sized>(sample_rate: f64, frequency: f64, size: usize, rng: &mut R) -> Self {
        let period = (sample_rate / frequency).ceil().max(2.0) as usize;
        let history = (0..period.min(size))
            .map(|_| rng.gen_range(-1.0..=1.0))
            .collect();
        Self {
            history,
            period,
            emitted: 0,
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

impl Generator for Pluck {
    fn next_sample(&mut self) -> f64 {
        let value = if self.emitted < self.period {
            // past the end of the tone the string is silent
            self.history.get(self.emitted).copied().unwrap_or(0.0)
        } else {
            let averaged = (self.history[0] + self.history[1]) * 0.5;
            self.history.pop_front();
            self.history.push_back(averaged);
            averaged
        };
        self.emitted += 1;
        value
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn averages_one_period_back() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pluck = Pluck::new(44100.0, 440.0, 1000, &mut rng);
        assert_eq!(pluck.period(), 101);
        let samples: Vec<f64> = (0..1000).map(|_| pluck.next_sample()).collect();
        let p = pluck.period();
        for i in 0..p {
            assert!(samples[i].abs() <= 1.0);
        }
        for i in p..samples.len() {
            assert_eq!(samples[i], (samples[i - p] + samples[i - p + 1]) * 0.5);
        }
    }

    #[test]
    fn seeded_noise_is_reproducible() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pluck = Pluck::new(8000.0, 1000.0, 32, &mut rng);
            (0..32).map(|_| pluck.next_sample()).collect::<Vec<_>>()
        };
        assert_eq!(run(1), run(1));
        assert_ne!(run(1), run(2));
    }

    #[test]
    fn minimal_period() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(Pluck::new(100.0, 1000.0, 10, &mut rng).period(), 2);
    }

    #[test]
    fn noise_burst_is_bounded_by_the_tone() {
        let mut rng = StdRng::seed_from_u64(3);
        // a period of more than a billion samples
        let mut pluck = Pluck::new(44100.0, 0.00003, 100, &mut rng);
        assert!(pluck.period() > 1_000_000_000);
        assert_eq!(pluck.history.len(), 100);
        for _ in 0..100 {
            assert!(pluck.next_sample().abs() <= 1.0);
        }
    }
}
