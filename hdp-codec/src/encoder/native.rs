use ethers_core::{
    abi::{self, ParamType, Token},
    types::{H256, U256},
};
use itertools::Itertools;

pub use crate::utils::writer::to_fixed_width_hex;
use crate::{
    constants::{JOB_OUTPUTS_ABI_TYPE, WORD_BYTES},
    types::native::{HiLo, PackedOutputRecord, RawOutputRecord},
    utils::{native::u256_to_h256, writer::bytes_to_hex},
};

/// Merges two 128-bit limbs into `(upper << 128) | lower`.
pub fn merge_pair(lower: u128, upper: u128) -> U256 {
    HiLo::from_lo_hi([lower, upper]).into()
}

pub fn pack_record(raw: &RawOutputRecord) -> PackedOutputRecord {
    let merge_hash = |lo, hi| u256_to_h256(&merge_pair(lo, hi));
    PackedOutputRecord {
        block_numbers_packed: merge_pair(raw.to_block_number_low, raw.from_block_number_high),
        block_n_plus_one_parent_hash: merge_hash(
            raw.block_n_plus_one_parent_hash_low,
            raw.block_n_plus_one_parent_hash_high,
        ),
        block_n_minus_r_plus_one_parent_hash: merge_hash(
            raw.block_n_minus_r_plus_one_parent_hash_low,
            raw.block_n_minus_r_plus_one_parent_hash_high,
        ),
        mmr_previous_root_poseidon: u256_to_h256(&raw.mmr_last_root_poseidon),
        mmr_previous_root_keccak: merge_hash(
            raw.mmr_last_root_keccak_low,
            raw.mmr_last_root_keccak_high,
        ),
        mmr_new_root_poseidon: u256_to_h256(&raw.new_mmr_root_poseidon),
        mmr_new_root_keccak: merge_hash(raw.new_mmr_root_keccak_low, raw.new_mmr_root_keccak_high),
        mmr_sizes_packed: merge_pair(raw.mmr_last_len, raw.new_mmr_len),
    }
}

pub fn pack_records(raws: &[RawOutputRecord]) -> Vec<PackedOutputRecord> {
    let packed = raws.iter().map(pack_record).collect_vec();
    log::debug!("Packed {} job outputs", packed.len());
    packed
}

/// [ParamType] of [JOB_OUTPUTS_ABI_TYPE].
pub fn job_outputs_param_type() -> ParamType {
    let bytes32 = || ParamType::FixedBytes(WORD_BYTES);
    ParamType::Array(Box::new(ParamType::Tuple(vec![
        ParamType::Uint(256),
        bytes32(),
        bytes32(),
        bytes32(),
        bytes32(),
        bytes32(),
        bytes32(),
        ParamType::Uint(256),
    ])))
}

impl PackedOutputRecord {
    pub fn to_token(&self) -> Token {
        let bytes32 = |hash: &H256| Token::FixedBytes(hash.as_bytes().to_vec());
        Token::Tuple(vec![
            Token::Uint(self.block_numbers_packed),
            bytes32(&self.block_n_plus_one_parent_hash),
            bytes32(&self.block_n_minus_r_plus_one_parent_hash),
            bytes32(&self.mmr_previous_root_poseidon),
            bytes32(&self.mmr_previous_root_keccak),
            bytes32(&self.mmr_new_root_poseidon),
            bytes32(&self.mmr_new_root_keccak),
            Token::Uint(self.mmr_sizes_packed),
        ])
    }
}

/// ABI encodes `records` as a single `tuple(uint256,bytes32,...,uint256)[]` argument.
pub fn encode(records: &[PackedOutputRecord]) -> Vec<u8> {
    let tuples = records.iter().map(PackedOutputRecord::to_token).collect_vec();
    log::trace!("Encoding {} records as {JOB_OUTPUTS_ABI_TYPE}", tuples.len());
    abi::encode(&[Token::Array(tuples)])
}

/// [encode] as a `0x`-prefixed hex string.
pub fn encode_hex(records: &[PackedOutputRecord]) -> String {
    bytes_to_hex(&encode(records))
}

/// Packs and encodes raw job outputs in one pass. Limb widths are checked when a
/// [RawOutputRecord] is built, so nothing here can fail.
pub fn pack_and_encode(raws: &[RawOutputRecord]) -> String {
    encode_hex(&pack_records(raws))
}
