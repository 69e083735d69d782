pub mod compile;
pub mod notation;
pub mod output;
pub mod resolve;
pub mod sequence;
pub mod synth;
pub mod wave;

// Utility modules
pub mod rational;
