/// Decoding of ABI encoded job outputs
pub mod native;
