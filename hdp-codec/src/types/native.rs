use ethers_core::types::{H256, U256};
use serde::Serialize;

/// A 256-bit value split into two 128-bit limbs. Stored as `[lo, hi]`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct HiLo<T>([T; 2]);

impl<T> HiLo<T> {
    /// Create a new [HiLo] from a `[lo, hi]` array.
    pub fn from_lo_hi([lo, hi]: [T; 2]) -> Self {
        Self([lo, hi])
    }
    pub fn hi(&self) -> T
    where
        T: Copy,
    {
        self.0[1]
    }
    pub fn lo(&self) -> T
    where
        T: Copy,
    {
        self.0[0]
    }
}

/// One job output as written by the proving pipeline. Limbs are 128-bit halves of wider
/// values; the two Poseidon roots are already full field elements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawOutputRecord {
    pub from_block_number_high: u128,
    pub to_block_number_low: u128,
    pub block_n_plus_one_parent_hash_low: u128,
    pub block_n_plus_one_parent_hash_high: u128,
    pub block_n_minus_r_plus_one_parent_hash_low: u128,
    pub block_n_minus_r_plus_one_parent_hash_high: u128,
    pub mmr_last_root_poseidon: U256,
    pub mmr_last_root_keccak_low: u128,
    pub mmr_last_root_keccak_high: u128,
    pub mmr_last_len: u128,
    pub new_mmr_root_poseidon: U256,
    pub new_mmr_root_keccak_low: u128,
    pub new_mmr_root_keccak_high: u128,
    pub new_mmr_len: u128,
}

/// Job output in the shape consumed by the verifier contract: limb pairs merged into words.
/// Field order is the ABI tuple order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PackedOutputRecord {
    /// `from_block_number_high << 128 | to_block_number_low`
    pub block_numbers_packed: U256,
    pub block_n_plus_one_parent_hash: H256,
    pub block_n_minus_r_plus_one_parent_hash: H256,
    pub mmr_previous_root_poseidon: H256,
    pub mmr_previous_root_keccak: H256,
    pub mmr_new_root_poseidon: H256,
    pub mmr_new_root_keccak: H256,
    /// `new_mmr_len << 128 | mmr_last_len`
    pub mmr_sizes_packed: U256,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
}

/// Single public input entry of a Cairo program run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProgramInputEntry {
    pub visibility: Visibility,
    /// Minimal `0x`-prefixed hex.
    pub value: String,
}

impl From<HiLo<u128>> for U256 {
    fn from(value: HiLo<u128>) -> Self {
        (U256::from(value.hi()) << 128) | U256::from(value.lo())
    }
}

/// Splits a word into its low and high 128 bits.
impl From<U256> for HiLo<u128> {
    fn from(value: U256) -> Self {
        Self::from_lo_hi([value.low_u128(), (value >> 128).low_u128()])
    }
}
