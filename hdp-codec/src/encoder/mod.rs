/// Packing and ABI encoding of job outputs
pub mod native;
/// Cairo program input in the format expected by the runner
pub mod program_input;
