use thiserror::Error;

pub type Result<T> = std::result::Result<T, EolError>;

#[derive(Debug, Error)]
pub enum EolError {
    #[error("invalid hex escape (\\{0})")]
    InvalidHexEscape(String),

    #[error("unrecognized escape (\\{0})")]
    UnrecognizedEscape(char),

    #[error("trailing backslash in EOL pattern")]
    TrailingBackslash,

    #[error("no EOL sequence specified")]
    EmptySequence,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
