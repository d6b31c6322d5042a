use thiserror::Error;

/// chargeback error types
#[derive(Error, Debug)]
pub enum ChargebackError {
    /// Input stream is structurally broken (bad header, undecodable row).
    /// Fatal: no partial output is produced.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A cost value could not be parsed (strict mode only)
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error (unknown provider, bad flag combination)
    #[error("config error: {0}")]
    Config(String),

    /// Failed to write a report (JSON document or unmapped-rows CSV)
    #[error("output error: {0}")]
    Output(String),
}

/// Result type alias for chargeback
pub type Result<T> = std::result::Result<T, ChargebackError>;
