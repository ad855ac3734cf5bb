use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputsError {
    /// Required input was not supplied.
    #[error("usage error: {0}")]
    Usage(String),

    /// Input could not be read or is not the expected structure.
    #[error("invalid input: {0}")]
    InputFormat(String),

    /// A value does not fit the slot it is packed into.
    #[error("record {record}: field `{field}` violates its {bits}-bit width (got {value})")]
    WidthInvariant { record: usize, field: String, bits: usize, value: String },
}

impl OutputsError {
    pub fn input_format(msg: impl Into<String>) -> Self {
        Self::InputFormat(msg.into())
    }
}

impl From<std::io::Error> for OutputsError {
    fn from(err: std::io::Error) -> Self {
        Self::InputFormat(format!("i/o error: {err}"))
    }
}

impl From<serde_json::Error> for OutputsError {
    fn from(err: serde_json::Error) -> Self {
        Self::InputFormat(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OutputsError>;
