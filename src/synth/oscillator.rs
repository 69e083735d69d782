use std::f64::consts::PI;

use super::Generator;

/// Shapes of the periodic waves.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WaveShape {
    Sine,
    /// Two sines 5 Hz apart, beating against each other.
    Beat,
    Triangle,
    Sawtooth,
    Square,
}

/// Frequency offset of the second partial of [`WaveShape::Beat`].
const BEAT_OFFSET: f64 = 5.0;

/// An oscillator sampling a wave of some shape at a fixed sample rate.
///
/// The wave is computed from the sample index directly, so it starts at phase
/// zero for every tone and does not accumulate rounding errors.
#[derive(Debug)]
pub struct Oscillator {
    shape: WaveShape,
    sample_rate: f64,
    frequency: f64,
    index: u64,
}

impl Oscillator {
    pub fn new(shape: WaveShape, sample_rate: f64, frequency: f64) -> Self {
        Self {
            shape,
            sample_rate,
            frequency,
            index: 0,
        }
    }

    /// Position within the current period, in `[0, 1)`.
    fn phase(&self, i: f64) -> f64 {
        (self.frequency * i / self.sample_rate).fract()
    }

    fn square(&self) -> f64 {
        let period = (self.sample_rate / self.frequency).floor().max(1.0) as u64;
        if (self.index % period) * 2 < period {
            1.0
        } else {
            -1.0
        }
    }
}

impl Generator for Oscillator {
    fn next_sample(&mut self) -> f64 {
        let i = self.index as f64;
        let angular = 2.0 * PI * i / self.sample_rate;
        let value = match self.shape {
            WaveShape::Sine => (angular * self.frequency).sin(),
            WaveShape::Beat => {
                0.6 * (angular * self.frequency).sin()
                    - 0.4 * (angular * (self.frequency + BEAT_OFFSET)).sin()
            }
            WaveShape::Triangle => (self.phase(i) * 4.0 - 2.0).abs() - 1.0,
            WaveShape::Sawtooth => 2.0 * self.phase(i) - 1.0,
            WaveShape::Square => self.square(),
        };
        self.index += 1;
        value
    }
}
