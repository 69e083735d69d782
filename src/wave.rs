//! This is the namespace for all parts dealing with data in sampled waves.

use std::fmt;
use std::str::FromStr;

/// Number of bits in one PCM sample.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SampleWidth {
    Eight,
    Sixteen,
}

impl SampleWidth {
    pub fn bits(self) -> u16 {
        match self {
            SampleWidth::Eight => 8,
            SampleWidth::Sixteen => 16,
        }
    }

    pub fn bytes(self) -> u16 {
        self.bits() / 8
    }

    /// Smallest representable sample.
    pub fn min(self) -> i32 {
        -(1 << (self.bits() - 1))
    }

    /// Largest representable sample.
    pub fn max(self) -> i32 {
        (1 << (self.bits() - 1)) - 1
    }

    /// Map a value in `[-1, 1]` onto the integer range of this width.
    /// Values outside are clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use jianpu::wave::SampleWidth;
    /// let w = SampleWidth::Sixteen;
    /// assert_eq!(w.quantize(0.0), 0);
    /// assert_eq!(w.quantize(1.0), 32767);
    /// assert_eq!(w.quantize(-1.0), -32768);
    /// assert_eq!(w.quantize(2.5), 32767);
    /// assert_eq!(w.quantize(-2.5), -32768);
    /// assert_eq!(w.quantize(0.5), 16384);
    /// assert_eq!(SampleWidth::Eight.quantize(-0.5), -64);
    /// ```
    pub fn quantize(self, value: f64) -> i32 {
        if value >= 1.0 {
            self.max()
        } else if value < -1.0 {
            self.min()
        } else {
            let levels = f64::from(1u32 << self.bits());
            ((value + 1.0) * 0.5 * levels + f64::from(self.min())).floor() as i32
        }
    }
}

impl Default for SampleWidth {
    fn default() -> Self {
        SampleWidth::Sixteen
    }
}

impl fmt::Display for SampleWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl FromStr for SampleWidth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "8" => Ok(SampleWidth::Eight),
            "16" => Ok(SampleWidth::Sixteen),
            _ => Err(format!("unsupported sample width `{}`, expected 8 or 16", s)),
        }
    }
}

/// Information about how audio is sampled.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SamplerInfo {
    /// Number of samples per second.
    pub sample_rate: u32,
    pub width: SampleWidth,
}

impl SamplerInfo {
    /// Number of samples covering `seconds`, rounded to the nearest sample.
    ///
    /// ```
    /// # use jianpu::wave::SamplerInfo;
    /// let info = SamplerInfo::default();
    /// assert_eq!(info.sample_count(0.5), 22050);
    /// assert_eq!(info.sample_count(0.0), 0);
    /// ```
    pub fn sample_count(&self, seconds: f64) -> usize {
        (seconds * f64::from(self.sample_rate)).round().max(0.0) as usize
    }
}

impl Default for SamplerInfo {
    fn default() -> Self {
        SamplerInfo {
            sample_rate: 44100,
            width: SampleWidth::default(),
        }
    }
}
