//! Getting rendered samples out of the process.

pub mod wav;

pub use wav::{write_wav, write_wav_file};
