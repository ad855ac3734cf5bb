use std::iter;

use ethers_core::types::U256;

use crate::{
    types::native::{ProgramInputEntry, Visibility},
    utils::writer::to_minimal_hex,
};

/// Prefixes the program output with its length and marks every value public.
pub fn transform_program_output(values: &[U256]) -> Vec<ProgramInputEntry> {
    iter::once(U256::from(values.len()))
        .chain(values.iter().copied())
        .map(|value| ProgramInputEntry {
            visibility: Visibility::Public,
            value: to_minimal_hex(value),
        })
        .collect()
}
