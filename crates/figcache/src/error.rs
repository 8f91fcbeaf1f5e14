use thiserror::Error;

/// Errors produced while parsing the text of a FIGlet font definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty font file")]
    Empty,
    #[error("header too short")]
    HeaderTooShort,
    #[error("invalid FIGlet font header")]
    InvalidHeader,
    #[error("incomplete header")]
    IncompleteHeader,
    #[error("invalid height: {0}")]
    InvalidHeight(String),
    #[error("invalid baseline: {0}")]
    InvalidBaseline(String),
    #[error("invalid max length: {0}")]
    InvalidMaxLength(String),
    #[error("invalid old layout: {0}")]
    InvalidOldLayout(String),
    #[error("unexpected end of file in comments")]
    UnexpectedEof,
}

/// Errors produced while loading a font from bytes or from disk.
#[derive(Debug, Error)]
pub enum FontError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("figlet read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("utf8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("zip error: {0}")]
    Zip(String),
    #[error("zip archive contained no .flf")]
    MissingFlf,
    #[error("gzip compressed .flf not supported; provide .flf or zipped archive")]
    Gzip,
}

pub type Result<T> = std::result::Result<T, FontError>;
