pub mod native;
/// Parsing job outputs and integer literals from JSON
pub mod reader;
pub mod writer;
