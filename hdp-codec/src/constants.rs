/// Bit width of a single limb emitted by the proving job.
pub const LIMB_BITS: usize = 128;
/// Byte width of every packed output field.
pub const WORD_BYTES: usize = 32;

pub const NUM_RAW_OUTPUT_FIELDS: usize = 14;
pub const NUM_PACKED_OUTPUT_FIELDS: usize = 8;

/// Keys of a raw job output as `(snake_case, camelCase)`. The proving pipeline writes
/// snake_case; the camelCase spelling is accepted as an alias.
pub const RAW_OUTPUT_FIELDS: [(&str, &str); NUM_RAW_OUTPUT_FIELDS] = [
    ("from_block_number_high", "fromBlockNumberHigh"),
    ("to_block_number_low", "toBlockNumberLow"),
    ("block_n_plus_one_parent_hash_low", "blockNPlusOneParentHashLow"),
    ("block_n_plus_one_parent_hash_high", "blockNPlusOneParentHashHigh"),
    ("block_n_minus_r_plus_one_parent_hash_low", "blockNMinusRPlusOneParentHashLow"),
    ("block_n_minus_r_plus_one_parent_hash_high", "blockNMinusRPlusOneParentHashHigh"),
    ("mmr_last_root_poseidon", "mmrLastRootPoseidon"),
    ("mmr_last_root_keccak_low", "mmrLastRootKeccakLow"),
    ("mmr_last_root_keccak_high", "mmrLastRootKeccakHigh"),
    ("mmr_last_len", "mmrLastLen"),
    ("new_mmr_root_poseidon", "newMmrRootPoseidon"),
    ("new_mmr_root_keccak_low", "newMmrRootKeccakLow"),
    ("new_mmr_root_keccak_high", "newMmrRootKeccakHigh"),
    ("new_mmr_len", "newMmrLen"),
];

/// Keys of a packed job output, in ABI tuple order.
pub const PACKED_OUTPUT_FIELDS: [&str; NUM_PACKED_OUTPUT_FIELDS] = [
    "blockNumbersPacked",
    "blockNPlusOneParentHash",
    "blockNMinusRPlusOneParentHash",
    "mmrPreviousRootPoseidon",
    "mmrPreviousRootKeccak",
    "mmrNewRootPoseidon",
    "mmrNewRootKeccak",
    "mmrSizesPacked",
];

/// Solidity type of the encoded job outputs, as passed to the verifier test harness.
pub const JOB_OUTPUTS_ABI_TYPE: &str =
    "tuple(uint256,bytes32,bytes32,bytes32,bytes32,bytes32,bytes32,uint256)[]";
