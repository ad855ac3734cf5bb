use std::io::Write;

use ethers_core::types::{H256, U256};
use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::{
    constants::{PACKED_OUTPUT_FIELDS, RAW_OUTPUT_FIELDS},
    error::Result,
    types::native::{PackedOutputRecord, RawOutputRecord},
    utils::native::u256_to_h256,
};

/// `0x` followed by exactly 64 lowercase hex digits.
pub fn to_fixed_width_hex(word: U256) -> String {
    h256_to_hex(&u256_to_h256(&word))
}

pub fn h256_to_hex(hash: &H256) -> String {
    format!("0x{}", hex::encode(hash.as_bytes()))
}

/// `0x` followed by the minimal number of hex digits; zero is `0x0`.
pub fn to_minimal_hex(word: U256) -> String {
    format!("0x{word:x}")
}

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Writes `value` as JSON indented by four spaces, followed by a newline.
pub fn write_json_pretty<T: Serialize + ?Sized>(mut writer: impl Write, value: &T) -> Result<()> {
    let mut ser =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Serialized with camelCase keys and fixed-width hex values, the shape accepted by
/// [read_packed_outputs](crate::utils::reader::read_packed_outputs).
impl Serialize for PackedOutputRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PACKED_OUTPUT_FIELDS.len()))?;
        for (field, word) in PACKED_OUTPUT_FIELDS.iter().zip(self.to_words()) {
            map.serialize_entry(field, &h256_to_hex(&word))?;
        }
        map.end()
    }
}

/// Serialized with snake_case keys and decimal string values, the shape accepted by
/// [read_raw_outputs](crate::utils::reader::read_raw_outputs).
impl Serialize for RawOutputRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RAW_OUTPUT_FIELDS.len()))?;
        for ((field, _), word) in RAW_OUTPUT_FIELDS.iter().zip(self.to_words()) {
            map.serialize_entry(field, &word.to_string())?;
        }
        map.end()
    }
}
