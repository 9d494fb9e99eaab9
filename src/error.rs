use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompressionError {
    #[error("Declared input length {declared} exceeds buffer length {actual}")]
    InputLengthOutOfBounds { declared: usize, actual: usize },

    #[error("Stream ends inside a literal run")]
    TruncatedLiteral,

    #[error("Repeat run is missing its value byte")]
    MissingRepeatByte,

    #[error("Output too short: produced {produced} of {expected} bytes")]
    OutputTooShort { expected: usize, produced: usize },
}
