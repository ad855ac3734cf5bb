use ethers_core::types::{H256, U256};

use crate::{
    constants::{
        LIMB_BITS, NUM_PACKED_OUTPUT_FIELDS, NUM_RAW_OUTPUT_FIELDS, RAW_OUTPUT_FIELDS,
    },
    error::{OutputsError, Result},
    types::native::{PackedOutputRecord, RawOutputRecord},
};

pub fn u256_to_h256(input: &U256) -> H256 {
    let mut bytes = [0; 32];
    input.to_big_endian(&mut bytes);
    H256(bytes)
}

pub fn h256_to_u256(input: &H256) -> U256 {
    U256::from_big_endian(input.as_bytes())
}

/// Returns `None` if `word` does not fit in a single limb.
pub fn u256_to_limb(word: U256) -> Option<u128> {
    (word.bits() <= LIMB_BITS).then(|| word.low_u128())
}

impl RawOutputRecord {
    /// Builds a record from words in [RAW_OUTPUT_FIELDS] order. `record` is the index of the
    /// record in its input file and is only used for error reporting.
    pub fn from_words(record: usize, words: [U256; NUM_RAW_OUTPUT_FIELDS]) -> Result<Self> {
        let limb = |idx: usize| {
            u256_to_limb(words[idx]).ok_or_else(|| OutputsError::WidthInvariant {
                record,
                field: RAW_OUTPUT_FIELDS[idx].0.to_string(),
                bits: LIMB_BITS,
                value: words[idx].to_string(),
            })
        };
        Ok(Self {
            from_block_number_high: limb(0)?,
            to_block_number_low: limb(1)?,
            block_n_plus_one_parent_hash_low: limb(2)?,
            block_n_plus_one_parent_hash_high: limb(3)?,
            block_n_minus_r_plus_one_parent_hash_low: limb(4)?,
            block_n_minus_r_plus_one_parent_hash_high: limb(5)?,
            mmr_last_root_poseidon: words[6],
            mmr_last_root_keccak_low: limb(7)?,
            mmr_last_root_keccak_high: limb(8)?,
            mmr_last_len: limb(9)?,
            new_mmr_root_poseidon: words[10],
            new_mmr_root_keccak_low: limb(11)?,
            new_mmr_root_keccak_high: limb(12)?,
            new_mmr_len: limb(13)?,
        })
    }

    /// Words in [RAW_OUTPUT_FIELDS] order.
    pub fn to_words(&self) -> [U256; NUM_RAW_OUTPUT_FIELDS] {
        [
            self.from_block_number_high.into(),
            self.to_block_number_low.into(),
            self.block_n_plus_one_parent_hash_low.into(),
            self.block_n_plus_one_parent_hash_high.into(),
            self.block_n_minus_r_plus_one_parent_hash_low.into(),
            self.block_n_minus_r_plus_one_parent_hash_high.into(),
            self.mmr_last_root_poseidon,
            self.mmr_last_root_keccak_low.into(),
            self.mmr_last_root_keccak_high.into(),
            self.mmr_last_len.into(),
            self.new_mmr_root_poseidon,
            self.new_mmr_root_keccak_low.into(),
            self.new_mmr_root_keccak_high.into(),
            self.new_mmr_len.into(),
        ]
    }
}

impl PackedOutputRecord {
    /// Builds a record from 32-byte words in ABI tuple order.
    pub fn from_words(words: [H256; NUM_PACKED_OUTPUT_FIELDS]) -> Self {
        let [
            block_numbers_packed,
            block_n_plus_one_parent_hash,
            block_n_minus_r_plus_one_parent_hash,
            mmr_previous_root_poseidon,
            mmr_previous_root_keccak,
            mmr_new_root_poseidon,
            mmr_new_root_keccak,
            mmr_sizes_packed,
        ] = words;
        Self {
            block_numbers_packed: h256_to_u256(&block_numbers_packed),
            block_n_plus_one_parent_hash,
            block_n_minus_r_plus_one_parent_hash,
            mmr_previous_root_poseidon,
            mmr_previous_root_keccak,
            mmr_new_root_poseidon,
            mmr_new_root_keccak,
            mmr_sizes_packed: h256_to_u256(&mmr_sizes_packed),
        }
    }

    /// Fields as 32-byte words in ABI tuple order.
    pub fn to_words(&self) -> [H256; NUM_PACKED_OUTPUT_FIELDS] {
        [
            u256_to_h256(&self.block_numbers_packed),
            self.block_n_plus_one_parent_hash,
            self.block_n_minus_r_plus_one_parent_hash,
            self.mmr_previous_root_poseidon,
            self.mmr_previous_root_keccak,
            self.mmr_new_root_poseidon,
            self.mmr_new_root_keccak,
            u256_to_h256(&self.mmr_sizes_packed),
        ]
    }
}
