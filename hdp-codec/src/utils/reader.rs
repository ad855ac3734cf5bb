use std::io::Read;

use ethers_core::types::{H256, U256};
use serde_json::Value;

use crate::{
    constants::{
        NUM_PACKED_OUTPUT_FIELDS, NUM_RAW_OUTPUT_FIELDS, PACKED_OUTPUT_FIELDS, RAW_OUTPUT_FIELDS,
        WORD_BYTES,
    },
    error::{OutputsError, Result},
    types::native::{PackedOutputRecord, RawOutputRecord},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordError {
    /// Not an unsigned integer literal.
    Malformed,
    /// Well formed, but wider than its slot.
    Width,
}

/// Parses a decimal or `0x`-prefixed hex literal into a 256-bit word.
pub fn parse_word(literal: &str) -> std::result::Result<U256, WordError> {
    let literal = literal.trim();
    if let Some(digits) = literal.strip_prefix("0x").or_else(|| literal.strip_prefix("0X")) {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(WordError::Malformed);
        }
        let digits = digits.trim_start_matches('0');
        if digits.len() > 2 * WORD_BYTES {
            return Err(WordError::Width);
        }
        let bytes = hex::decode(format!("{digits:0>64}")).map_err(|_| WordError::Malformed)?;
        return Ok(U256::from_big_endian(&bytes));
    }
    if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WordError::Malformed);
    }
    // digits only, so the only possible failure is overflow
    U256::from_dec_str(literal).map_err(|_| WordError::Width)
}

/// Parses a packed field: `0x` followed by exactly 64 hex digits. Short forms such as `0x00`
/// are rejected rather than padded.
pub fn parse_fixed_word(literal: &str) -> std::result::Result<H256, WordError> {
    let digits = literal.strip_prefix("0x").ok_or(WordError::Malformed)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(WordError::Malformed);
    }
    if digits.len() != 2 * WORD_BYTES {
        return Err(WordError::Width);
    }
    let bytes = hex::decode(digits).map_err(|_| WordError::Malformed)?;
    Ok(H256::from_slice(&bytes))
}

/// Reads a word from a JSON string (decimal or hex) or a JSON integer of any size.
pub fn read_word(value: &Value) -> std::result::Result<U256, WordError> {
    match value {
        Value::String(s) => parse_word(s),
        // With `arbitrary_precision` this is the literal as written in the input.
        Value::Number(n) => parse_word(&n.to_string()),
        _ => Err(WordError::Malformed),
    }
}

fn field_error(
    record: usize,
    field: &str,
    bits: usize,
    value: &Value,
    err: WordError,
) -> OutputsError {
    match err {
        WordError::Malformed => OutputsError::input_format(format!(
            "record {record}: field `{field}` is not an unsigned integer: {value}"
        )),
        WordError::Width => OutputsError::WidthInvariant {
            record,
            field: field.to_string(),
            bits,
            value: value.to_string(),
        },
    }
}

fn expect_array(json: Value, what: &str) -> Result<Vec<Value>> {
    match json {
        Value::Array(values) => Ok(values),
        other => Err(OutputsError::input_format(format!(
            "expected a JSON array of {what}, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn read_raw_output(record: usize, value: &Value) -> Result<RawOutputRecord> {
    let object = value.as_object().ok_or_else(|| {
        OutputsError::input_format(format!(
            "record {record}: expected an object, got {}",
            json_kind(value)
        ))
    })?;
    let mut words = [U256::zero(); NUM_RAW_OUTPUT_FIELDS];
    for (word, &(snake, camel)) in words.iter_mut().zip(RAW_OUTPUT_FIELDS.iter()) {
        let value = object.get(snake).or_else(|| object.get(camel)).ok_or_else(|| {
            OutputsError::input_format(format!("record {record}: missing field `{snake}`"))
        })?;
        *word = read_word(value).map_err(|err| field_error(record, snake, 256, value, err))?;
    }
    RawOutputRecord::from_words(record, words)
}

/// Reads the JSON array of raw job outputs written by the proving pipeline.
pub fn read_raw_outputs(reader: impl Read) -> Result<Vec<RawOutputRecord>> {
    let json: Value = serde_json::from_reader(reader)?;
    let records = expect_array(json, "job outputs")?;
    records.iter().enumerate().map(|(record, value)| read_raw_output(record, value)).collect()
}

pub fn read_packed_output(record: usize, value: &Value) -> Result<PackedOutputRecord> {
    let object = value.as_object().ok_or_else(|| {
        OutputsError::input_format(format!(
            "record {record}: expected an object, got {}",
            json_kind(value)
        ))
    })?;
    let mut words = [H256::zero(); NUM_PACKED_OUTPUT_FIELDS];
    for (word, &field) in words.iter_mut().zip(PACKED_OUTPUT_FIELDS.iter()) {
        let value = object.get(field).ok_or_else(|| {
            OutputsError::input_format(format!("record {record}: missing field `{field}`"))
        })?;
        let literal = value.as_str().ok_or_else(|| {
            OutputsError::input_format(format!(
                "record {record}: field `{field}` must be a hex string"
            ))
        })?;
        *word = parse_fixed_word(literal)
            .map_err(|err| field_error(record, field, 8 * WORD_BYTES, value, err))?;
    }
    Ok(PackedOutputRecord::from_words(words))
}

/// Reads a JSON array of packed job outputs. Every field must already be 32 bytes wide.
pub fn read_packed_outputs(reader: impl Read) -> Result<Vec<PackedOutputRecord>> {
    let json: Value = serde_json::from_reader(reader)?;
    let records = expect_array(json, "packed job outputs")?;
    records.iter().enumerate().map(|(record, value)| read_packed_output(record, value)).collect()
}

/// Reads the public output of a Cairo program run: a nested list of felts of which only the
/// first inner list is used.
pub fn read_program_output(reader: impl Read) -> Result<Vec<U256>> {
    let json: Value = serde_json::from_reader(reader)?;
    let outer = expect_array(json, "program outputs")?;
    let first = outer
        .into_iter()
        .next()
        .ok_or_else(|| OutputsError::input_format("program output list is empty"))?;
    let values = expect_array(first, "felts")?;
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            read_word(value).map_err(|err| field_error(idx, "program_output", 256, value, err))
        })
        .collect()
}

/// Reads all of `reader`, failing with [OutputsError::Usage] if nothing was supplied.
pub fn read_to_nonempty_string(mut reader: impl Read, what: &str) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    if buf.trim().is_empty() {
        return Err(OutputsError::Usage(format!("no {what} supplied on stdin")));
    }
    Ok(buf)
}
