use std::fs::{self, File};

use ethers_core::types::{H256, U256};
use serde_json::json;
use test_log::test;

use crate::{
    decoder::native::{decode_hex, split_pair},
    encoder::native::{pack_and_encode, pack_records, to_fixed_width_hex},
    error::OutputsError,
    types::native::RawOutputRecord,
    utils::{
        reader::{read_packed_outputs, read_raw_outputs},
        writer::write_json_pretty,
    },
};

const JOB_OUTPUTS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/tests/job_outputs.json");
const JOB_OUTPUTS_ABI: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/tests/job_outputs.abi");

fn load_job_outputs() -> Vec<RawOutputRecord> {
    read_raw_outputs(File::open(JOB_OUTPUTS).unwrap()).unwrap()
}

fn zero_raw_json() -> serde_json::Value {
    json!({
        "from_block_number_high": "0",
        "to_block_number_low": "0",
        "block_n_plus_one_parent_hash_low": "0",
        "block_n_plus_one_parent_hash_high": "0",
        "block_n_minus_r_plus_one_parent_hash_low": "0",
        "block_n_minus_r_plus_one_parent_hash_high": "0",
        "mmr_last_root_poseidon": "0",
        "mmr_last_root_keccak_low": "0",
        "mmr_last_root_keccak_high": "0",
        "mmr_last_len": "0",
        "new_mmr_root_poseidon": "0",
        "new_mmr_root_keccak_low": "0",
        "new_mmr_root_keccak_high": "0",
        "new_mmr_len": "0"
    })
}

#[test]
fn test_job_outputs_encoding() {
    let raws = load_job_outputs();
    assert_eq!(raws.len(), 2);
    let expected = fs::read_to_string(JOB_OUTPUTS_ABI).unwrap();
    assert_eq!(pack_and_encode(&raws), expected.trim());
}

#[test]
fn test_job_outputs_end_to_end_example() {
    let raws = load_job_outputs();
    let packed = pack_records(&raws);
    let first = &packed[0];
    assert_eq!(to_fixed_width_hex(first.block_numbers_packed), format!("0x{}64", "0".repeat(62)));
    for hash in [
        first.block_n_plus_one_parent_hash,
        first.block_n_minus_r_plus_one_parent_hash,
        first.mmr_previous_root_poseidon,
        first.mmr_previous_root_keccak,
        first.mmr_new_root_poseidon,
        first.mmr_new_root_keccak,
    ] {
        assert_eq!(hash, H256::zero());
    }
    let sizes = split_pair(first.mmr_sizes_packed);
    assert_eq!((sizes.lo(), sizes.hi()), (5, 6));
}

#[test]
fn test_job_outputs_decode_in_order() {
    let raws = load_job_outputs();
    let decoded = decode_hex(&pack_and_encode(&raws)).unwrap();
    assert_eq!(decoded, pack_records(&raws));
    let unpacked = decoded.iter().map(|record| record.unpack()).collect::<Vec<_>>();
    assert_eq!(unpacked, raws);
    assert_eq!(unpacked[1].from_block_number_high, 9734438);
    assert_eq!(unpacked[1].to_block_number_low, 9734440);
}

#[test]
fn test_camel_case_aliases() {
    let raw = json!([{
        "fromBlockNumberHigh": "1",
        "toBlockNumberLow": "2",
        "blockNPlusOneParentHashLow": "0",
        "blockNPlusOneParentHashHigh": "0",
        "blockNMinusRPlusOneParentHashLow": "0",
        "blockNMinusRPlusOneParentHashHigh": "0",
        "mmrLastRootPoseidon": "0x10",
        "mmrLastRootKeccakLow": "0",
        "mmrLastRootKeccakHigh": "0",
        "mmrLastLen": "3",
        "newMmrRootPoseidon": "0",
        "newMmrRootKeccakLow": "0",
        "newMmrRootKeccakHigh": "0",
        "newMmrLen": "4"
    }]);
    let raws = read_raw_outputs(raw.to_string().as_bytes()).unwrap();
    assert_eq!(raws[0].from_block_number_high, 1);
    assert_eq!(raws[0].to_block_number_low, 2);
    assert_eq!(raws[0].mmr_last_root_poseidon, U256::from(16));
}

#[test]
fn test_limb_overflow_is_width_error() {
    let mut raw = zero_raw_json();
    raw["mmr_last_root_keccak_high"] = json!((U256::one() << 128).to_string());
    let err = read_raw_outputs(json!([zero_raw_json(), raw]).to_string().as_bytes()).unwrap_err();
    match err {
        OutputsError::WidthInvariant { record, field, bits, .. } => {
            assert_eq!(record, 1);
            assert_eq!(field, "mmr_last_root_keccak_high");
            assert_eq!(bits, 128);
        }
        other => panic!("unexpected error: {other}"),
    }

    // Poseidon roots are full words, so the same value is fine there
    let mut raw = zero_raw_json();
    raw["new_mmr_root_poseidon"] = json!((U256::one() << 128).to_string());
    assert!(read_raw_outputs(json!([raw]).to_string().as_bytes()).is_ok());
}

#[test]
fn test_missing_and_malformed_fields() {
    let mut raw = zero_raw_json();
    raw.as_object_mut().unwrap().remove("new_mmr_len");
    let err = read_raw_outputs(json!([raw]).to_string().as_bytes()).unwrap_err();
    assert!(matches!(&err, OutputsError::InputFormat(msg) if msg.contains("new_mmr_len")), "{err}");

    let mut raw = zero_raw_json();
    raw["mmr_last_len"] = json!("five");
    let err = read_raw_outputs(json!([raw]).to_string().as_bytes()).unwrap_err();
    assert!(
        matches!(&err, OutputsError::InputFormat(msg) if msg.contains("mmr_last_len")),
        "{err}"
    );
}

#[test]
fn test_packed_json_round_trip() {
    let packed = pack_records(&load_job_outputs());
    let mut json = vec![];
    write_json_pretty(&mut json, &packed).unwrap();
    assert_eq!(read_packed_outputs(&json[..]).unwrap(), packed);
}

#[test]
fn test_packed_json_short_zero_rejected() {
    let packed = pack_records(&load_job_outputs());
    let mut json = serde_json::to_value(&packed).unwrap();
    assert_eq!(json[0]["mmrNewRootKeccak"], json!(format!("0x{}", "0".repeat(64))));
    json[0]["mmrNewRootKeccak"] = json!("0x00");
    let err = read_packed_outputs(json.to_string().as_bytes()).unwrap_err();
    match err {
        OutputsError::WidthInvariant { record, field, bits, .. } => {
            assert_eq!(record, 0);
            assert_eq!(field, "mmrNewRootKeccak");
            assert_eq!(bits, 256);
        }
        other => panic!("unexpected error: {other}"),
    }
}
