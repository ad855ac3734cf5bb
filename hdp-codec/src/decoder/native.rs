use ethers_core::{
    abi::{self, Token},
    types::{H256, U256},
};

use crate::{
    constants::{NUM_PACKED_OUTPUT_FIELDS, WORD_BYTES},
    encoder::native::job_outputs_param_type,
    error::{OutputsError, Result},
    types::native::{HiLo, PackedOutputRecord, RawOutputRecord},
    utils::native::h256_to_u256,
};

/// Splits a word into `(word & (2^128 - 1), word >> 128)`.
pub fn split_pair(word: U256) -> HiLo<u128> {
    word.into()
}

impl TryFrom<Token> for PackedOutputRecord {
    type Error = OutputsError;

    fn try_from(token: Token) -> Result<Self> {
        let fields = token
            .into_tuple()
            .ok_or_else(|| OutputsError::input_format("expected a job output tuple"))?;
        let num_fields = fields.len();
        let fields: [Token; NUM_PACKED_OUTPUT_FIELDS] = fields.try_into().map_err(|_| {
            OutputsError::input_format(format!(
                "expected {NUM_PACKED_OUTPUT_FIELDS} tuple fields, got {num_fields}"
            ))
        })?;
        let [
            block_numbers,
            n_plus_one,
            n_minus_r_plus_one,
            prev_poseidon,
            prev_keccak,
            new_poseidon,
            new_keccak,
            mmr_sizes,
        ] = fields;
        Ok(Self {
            block_numbers_packed: read_uint(block_numbers)?,
            block_n_plus_one_parent_hash: read_bytes32(n_plus_one)?,
            block_n_minus_r_plus_one_parent_hash: read_bytes32(n_minus_r_plus_one)?,
            mmr_previous_root_poseidon: read_bytes32(prev_poseidon)?,
            mmr_previous_root_keccak: read_bytes32(prev_keccak)?,
            mmr_new_root_poseidon: read_bytes32(new_poseidon)?,
            mmr_new_root_keccak: read_bytes32(new_keccak)?,
            mmr_sizes_packed: read_uint(mmr_sizes)?,
        })
    }
}

fn read_uint(token: Token) -> Result<U256> {
    token.into_uint().ok_or_else(|| OutputsError::input_format("expected uint256"))
}

fn read_bytes32(token: Token) -> Result<H256> {
    match token.into_fixed_bytes() {
        Some(bytes) if bytes.len() == WORD_BYTES => Ok(H256::from_slice(&bytes)),
        _ => Err(OutputsError::input_format("expected bytes32")),
    }
}

/// Decodes the output of [encode](crate::encoder::native::encode).
pub fn decode(data: &[u8]) -> Result<Vec<PackedOutputRecord>> {
    let mut tokens = abi::decode(&[job_outputs_param_type()], data)
        .map_err(|e| OutputsError::input_format(format!("invalid ABI encoded job outputs: {e}")))?;
    let tuples = tokens
        .pop()
        .and_then(Token::into_array)
        .ok_or_else(|| OutputsError::input_format("expected an array of job outputs"))?;
    tuples.into_iter().map(PackedOutputRecord::try_from).collect()
}

/// [decode] from a hex string, with or without the `0x` prefix.
pub fn decode_hex(encoded: &str) -> Result<Vec<PackedOutputRecord>> {
    let encoded = encoded.trim();
    let digits = encoded.strip_prefix("0x").unwrap_or(encoded);
    let data = hex::decode(digits)
        .map_err(|e| OutputsError::input_format(format!("invalid hex string: {e}")))?;
    decode(&data)
}

impl PackedOutputRecord {
    /// Splits the merged words back into the limbs they were built from.
    pub fn unpack(&self) -> RawOutputRecord {
        let limbs = |hash: &H256| split_pair(h256_to_u256(hash));
        let block_numbers = split_pair(self.block_numbers_packed);
        let n_plus_one = limbs(&self.block_n_plus_one_parent_hash);
        let n_minus_r_plus_one = limbs(&self.block_n_minus_r_plus_one_parent_hash);
        let prev_keccak = limbs(&self.mmr_previous_root_keccak);
        let new_keccak = limbs(&self.mmr_new_root_keccak);
        let mmr_sizes = split_pair(self.mmr_sizes_packed);
        RawOutputRecord {
            from_block_number_high: block_numbers.hi(),
            to_block_number_low: block_numbers.lo(),
            block_n_plus_one_parent_hash_low: n_plus_one.lo(),
            block_n_plus_one_parent_hash_high: n_plus_one.hi(),
            block_n_minus_r_plus_one_parent_hash_low: n_minus_r_plus_one.lo(),
            block_n_minus_r_plus_one_parent_hash_high: n_minus_r_plus_one.hi(),
            mmr_last_root_poseidon: h256_to_u256(&self.mmr_previous_root_poseidon),
            mmr_last_root_keccak_low: prev_keccak.lo(),
            mmr_last_root_keccak_high: prev_keccak.hi(),
            mmr_last_len: mmr_sizes.lo(),
            new_mmr_root_poseidon: h256_to_u256(&self.mmr_new_root_poseidon),
            new_mmr_root_keccak_low: new_keccak.lo(),
            new_mmr_root_keccak_high: new_keccak.hi(),
            new_mmr_len: mmr_sizes.hi(),
        }
    }
}
