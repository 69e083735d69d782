//! This namespace contains all the parts converting from tones to wave data.

pub mod envelope;
pub mod oscillator;
pub mod pluck;

use std::fmt;
use std::str::FromStr;

use log::trace;
use rand::rngs::StdRng;
use rand::SeedableRng;
use snafu::{ensure, Snafu};

use crate::resolve::Tone;
use crate::wave::SamplerInfo;
use envelope::EdgeFade;
use oscillator::{Oscillator, WaveShape};
use pluck::Pluck;

/// A source of raw wave samples in `[-1, 1]`, one tone at a time.
pub trait Generator {
    fn next_sample(&mut self) -> f64;
}

/// The centerline, used for rests.
#[derive(Debug)]
pub struct Silence;

impl Generator for Silence {
    fn next_sample(&mut self) -> f64 {
        0.0
    }
}

/// The sound model used for every tone of a score.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Timbre {
    Sine,
    Beat,
    Triangle,
    Sawtooth,
    Square,
    Pluck,
}

impl Timbre {
    pub const ALL: [Timbre; 6] = [
        Timbre::Sine,
        Timbre::Beat,
        Timbre::Triangle,
        Timbre::Sawtooth,
        Timbre::Square,
        Timbre::Pluck,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Timbre::Sine => "sine",
            Timbre::Beat => "beat",
            Timbre::Triangle => "triangle",
            Timbre::Sawtooth => "sawtooth",
            Timbre::Square => "square",
            Timbre::Pluck => "pluck",
        }
    }
}

impl Default for Timbre {
    fn default() -> Self {
        Timbre::Sine
    }
}

impl fmt::Display for Timbre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the number of a timbre (`0` to `5`) as well as its name.
///
/// ```
/// # use jianpu::synth::Timbre;
/// assert_eq!("0".parse::<Timbre>(), Ok(Timbre::Sine));
/// assert_eq!("5".parse::<Timbre>(), Ok(Timbre::Pluck));
/// assert_eq!("square".parse::<Timbre>(), Ok(Timbre::Square));
/// assert!("6".parse::<Timbre>().is_err());
/// assert!("organ".parse::<Timbre>().is_err());
/// ```
impl FromStr for Timbre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(number) = s.parse::<usize>() {
            if let Some(&timbre) = Timbre::ALL.get(number) {
                return Ok(timbre);
            }
        }
        Timbre::ALL
            .iter()
            .copied()
            .find(|timbre| timbre.name() == s)
            .ok_or_else(|| {
                format!(
                    "unknown timbre `{}`, expected 0-5 or one of sine, beat, triangle, sawtooth, square, pluck",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
pub enum SynthError {
    #[snafu(display(
        "the output would need at least {} samples, more than the limit of {}",
        samples,
        limit
    ))]
    TooLong { samples: usize, limit: usize },
}

/// Renders tones into quantized samples.
pub struct Synthesizer {
    info: SamplerInfo,
    timbre: Timbre,
    envelope: EdgeFade,
    /// Scale applied to every sample before quantization.
    volume: f64,
    /// Noise source of the plucked string.
    rng: StdRng,
    /// Largest number of samples a single output may hold.
    limit: usize,
}

impl Synthesizer {
    /// The limit starts out at the most samples a WAV data chunk can hold.
    pub fn new(info: SamplerInfo, timbre: Timbre, envelope: EdgeFade, volume: f64, seed: u64) -> Self {
        let limit = (u32::MAX / u32::from(info.width.bytes())) as usize;
        Self {
            info,
            timbre,
            envelope,
            volume,
            rng: StdRng::seed_from_u64(seed),
            limit,
        }
    }

    /// Lower the number of samples an output may hold.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = self.limit.min(limit);
        self
    }

    pub fn info(&self) -> &SamplerInfo {
        &self.info
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn generator(&mut self, frequency: f64, size: usize) -> Box<dyn Generator> {
        let sample_rate = f64::from(self.info.sample_rate);
        if frequency <= 0.0 {
            return Box::new(Silence);
        }
        let shape = match self.timbre {
            Timbre::Sine => WaveShape::Sine,
            Timbre::Beat => WaveShape::Beat,
            Timbre::Triangle => WaveShape::Triangle,
            Timbre::Sawtooth => WaveShape::Sawtooth,
            Timbre::Square => WaveShape::Square,
            Timbre::Pluck => {
                return Box::new(Pluck::new(sample_rate, frequency, size, &mut self.rng))
            }
        };
        Box::new(Oscillator::new(shape, sample_rate, frequency))
    }

    /// Append the samples of one tone to `output`.
    ///
    /// Fails without touching `output` if it would grow beyond the limit.
    pub fn render(&mut self, tone: &Tone, output: &mut Vec<i32>) -> Result<(), SynthError> {
        let size = self.info.sample_count(tone.duration);
        let samples = output.len().saturating_add(size);
        ensure!(
            samples <= self.limit,
            TooLong {
                samples,
                limit: self.limit
            }
        );
        trace!(
            "rendering {:.3} Hz for {:.4} s ({} samples)",
            tone.frequency,
            tone.duration,
            size
        );
        let sample_rate = f64::from(self.info.sample_rate);
        let mut generator = self.generator(tone.frequency, size);
        let mut envelope = self.envelope.instantiate(sample_rate, size);
        let width = self.info.width;
        output.reserve(size);
        for _ in 0..size {
            let value = generator.next_sample() * envelope.step() * self.volume;
            output.push(width.quantize(value));
        }
        Ok(())
    }

    /// Render a sequence of tones back to back.
    pub fn render_all<'t, I: IntoIterator<Item = &'t Tone>>(
        &mut self,
        tones: I,
    ) -> Result<Vec<i32>, SynthError> {
        let mut output = Vec::new();
        for tone in tones {
            self.render(tone, &mut output)?;
        }
        Ok(output)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::wave::SampleWidth;

    fn synth(timbre: Timbre) -> Synthesizer {
        Synthesizer::new(SamplerInfo::default(), timbre, EdgeFade::default(), 1.0, 0)
    }

    #[test]
    fn sample_count_and_edges() {
        let tone = Tone {
            frequency: 440.0,
            duration: 0.5,
        };
        for &timbre in Timbre::ALL.iter() {
            let samples = synth(timbre).render_all(&[tone]).unwrap();
            assert_eq!(samples.len(), 22050);
            // faded in from the centerline
            assert_eq!(samples[0], 0);
            assert!(samples.iter().all(|&s| (-32768..=32767).contains(&s)));
        }
    }

    #[test]
    fn rest_is_centerline() {
        let tone = Tone {
            frequency: 0.0,
            duration: 0.01,
        };
        let samples = synth(Timbre::Square).render_all(&[tone]).unwrap();
        assert_eq!(samples, vec![0; 441]);
    }

    #[test]
    fn full_amplitude_after_fade() {
        let tone = Tone {
            frequency: 100.0,
            duration: 1.0,
        };
        let samples = synth(Timbre::Square).render_all(&[tone]).unwrap();
        assert_eq!(samples[882], 32767);
        // period 441, low in the second half
        assert_eq!(samples[882 + 221], -32768);
        assert!(samples[441] < 32767);
    }

    #[test]
    fn volume_and_width() {
        let info = SamplerInfo {
            sample_rate: 8000,
            width: SampleWidth::Eight,
        };
        let mut quiet = Synthesizer::new(info, Timbre::Square, EdgeFade { fade: 0.0 }, 0.5, 0);
        let samples = quiet
            .render_all(&[Tone {
                frequency: 1000.0,
                duration: 0.001,
            }])
            .unwrap();
        assert_eq!(samples, vec![64, 64, 64, 64, -64, -64, -64, -64]);
    }

    #[test]
    fn pluck_is_deterministic_per_seed() {
        let tones = [
            Tone {
                frequency: 220.0,
                duration: 0.1,
            },
            Tone {
                frequency: 330.0,
                duration: 0.1,
            },
        ];
        let a = synth(Timbre::Pluck).render_all(&tones).unwrap();
        let b = synth(Timbre::Pluck).render_all(&tones).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 8820);
    }

    #[test]
    fn subhertz_pluck_renders() {
        let tone = Tone {
            frequency: 440.0 * 2.0f64.powi(-24),
            duration: 0.5,
        };
        let samples = synth(Timbre::Pluck).render_all(&[tone]).unwrap();
        assert_eq!(samples.len(), 22050);
    }

    #[test]
    fn overlong_output_is_refused() {
        let mut synth = synth(Timbre::Sine).with_limit(1000);
        assert_eq!(synth.limit(), 1000);
        let mut output = Vec::new();
        let short = Tone {
            frequency: 440.0,
            duration: 0.02,
        };
        synth.render(&short, &mut output).unwrap();
        assert_eq!(output.len(), 882);
        assert_eq!(
            synth.render(&short, &mut output),
            Err(SynthError::TooLong {
                samples: 1764,
                limit: 1000
            })
        );
        assert_eq!(output.len(), 882);

        // far beyond anything that could be allocated
        let endless = Tone {
            frequency: 440.0,
            duration: f64::INFINITY,
        };
        let err = Synthesizer::new(SamplerInfo::default(), Timbre::Sine, EdgeFade::default(), 1.0, 0)
            .render_all(&[endless])
            .unwrap_err();
        assert!(matches!(err, SynthError::TooLong { .. }));
    }
}
