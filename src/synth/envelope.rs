/// A trapezoidal envelope that fades every tone in and out linearly.
///
/// The amplitude rises from zero to one over `fade` seconds, stays at one, and
/// falls back to zero over the last `fade` seconds of the tone. Tones shorter
/// than two fades never reach full amplitude.
///
/// # Example
///
/// ```
/// use jianpu::synth::envelope::*;
/// let e = EdgeFade { fade: 0.5 };
/// // four samples per second, six samples long
/// let mut eval = e.instantiate(4.0, 6);
/// let gains: Vec<f64> = (0..6).map(|_| eval.step()).collect();
/// assert_eq!(gains, vec![0.0, 0.5, 1.0, 1.0, 1.0, 0.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeFade {
    /// Time in seconds to go from 0.0 to 1.0, and back at the end.
    pub fade: f64,
}

impl EdgeFade {
    /// Return an evaluator for a tone of `size` samples.
    pub fn instantiate(&self, sample_rate: f64, size: usize) -> EvalEdgeFade {
        EvalEdgeFade {
            ramp: self.fade * sample_rate,
            size,
            index: 0,
        }
    }

    /// Gain at sample `index` of a tone of `size` samples.
    pub fn eval(&self, sample_rate: f64, index: usize, size: usize) -> f64 {
        let ramp = self.fade * sample_rate;
        let edge = index.min(size.saturating_sub(index)) as f64;
        if ramp <= 0.0 {
            1.0
        } else {
            (edge / ramp).min(1.0)
        }
    }
}

impl Default for EdgeFade {
    fn default() -> Self {
        EdgeFade { fade: 0.02 }
    }
}

/// Envelope evaluation that walks through a tone sample by sample.
#[derive(Debug)]
pub struct EvalEdgeFade {
    /// Length of the fade in samples.
    ramp: f64,
    size: usize,
    index: usize,
}

impl EvalEdgeFade {
    /// Return the gain for the current sample and advance to the next one.
    pub fn step(&mut self) -> f64 {
        let edge = self.index.min(self.size.saturating_sub(self.index)) as f64;
        self.index += 1;
        if self.ramp <= 0.0 {
            1.0
        } else {
            (edge / self.ramp).min(1.0)
        }
    }
}
