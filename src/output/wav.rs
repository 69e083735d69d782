//! Mono PCM files in the RIFF/WAVE container.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use log::debug;

use crate::wave::SamplerInfo;

/// Format description of the files we write.
pub fn wav_spec(info: &SamplerInfo) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate: info.sample_rate,
        bits_per_sample: info.width.bits(),
        sample_format: SampleFormat::Int,
    }
}

/// Write `samples` as a mono WAV stream. Samples must be within the range of `info.width`.
pub fn write_wav<W: Write + Seek>(
    writer: W,
    info: &SamplerInfo,
    samples: &[i32],
) -> hound::Result<()> {
    let mut wav = WavWriter::new(writer, wav_spec(info))?;
    for &sample in samples {
        wav.write_sample(sample)?;
    }
    wav.finalize()
}

/// Create (or truncate) the file at `path` and write the samples to it.
pub fn write_wav_file(path: &Path, info: &SamplerInfo, samples: &[i32]) -> hound::Result<()> {
    debug!(
        "writing {} samples at {} Hz, {} bit to {}",
        samples.len(),
        info.sample_rate,
        info.width,
        path.display()
    );
    let file = BufWriter::new(File::create(path)?);
    write_wav(file, info, samples)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::wave::SampleWidth;
    use hound::WavReader;
    use std::io::Cursor;

    fn u16_at(bytes: &[u8], at: usize) -> u16 {
        u16::from_le_bytes([bytes[at], bytes[at + 1]])
    }

    fn u32_at(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    }

    #[test]
    fn canonical_header() {
        let samples = vec![0, 1000, -1000, 32767, -32768];
        let mut buffer = Cursor::new(Vec::new());
        write_wav(&mut buffer, &SamplerInfo::default(), &samples).unwrap();
        let bytes = buffer.into_inner();

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(u32_at(&bytes, 4) as usize, bytes.len() - 8);
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(u32_at(&bytes, 16), 16);
        assert_eq!(u16_at(&bytes, 20), 1);
        assert_eq!(u16_at(&bytes, 22), 1);
        assert_eq!(u32_at(&bytes, 24), 44100);
        assert_eq!(u32_at(&bytes, 28), 88200);
        assert_eq!(u16_at(&bytes, 32), 2);
        assert_eq!(u16_at(&bytes, 34), 16);
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(u32_at(&bytes, 40), 10);
        assert_eq!(bytes.len(), 44 + 10);
    }

    #[test]
    fn read_back() {
        let info = SamplerInfo {
            sample_rate: 22050,
            width: SampleWidth::Eight,
        };
        let samples: Vec<i32> = (-128..128).collect();
        let mut buffer = Cursor::new(Vec::new());
        write_wav(&mut buffer, &info, &samples).unwrap();

        let mut reader = WavReader::new(Cursor::new(buffer.into_inner())).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 22050);
        assert_eq!(spec.bits_per_sample, 8);
        assert_eq!(reader.len() as usize, samples.len());
        let read: Vec<i32> = reader.samples::<i32>().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples);
    }
}
