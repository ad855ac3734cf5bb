pub use ethers_core::types::{H256, U256};

/// Constants
pub mod constants;
pub mod decoder;
pub mod encoder;
/// Error type shared by the library and the binaries
pub mod error;
pub mod types;
pub mod utils;

pub use error::{OutputsError, Result};

#[cfg(test)]
mod tests;
