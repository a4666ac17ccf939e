//! Error type shared by every operation of the crate.

use ark_serialize::SerializationError;
use thiserror::Error;

use crate::ciphertext::Group;

pub type Result<T> = std::result::Result<T, SheError>;

#[derive(Error, Debug)]
pub enum SheError {
    #[error("initialization failed: {0}")]
    Initialization(String),

    #[error("message magnitude needs {bits} bits but at most {max_bits} are representable")]
    EncodingOverflow { bits: u64, max_bits: u64 },

    #[error("operation is not defined for {left} and {right} ciphertexts")]
    TypeMismatch { left: Group, right: Group },

    #[error("plaintext lies outside the discrete log window of +/-{max}")]
    DecryptionRangeExceeded { max: i64 },

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("cannot allocate precomputed tables")]
    ResourceExhausted,

    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] SerializationError),

    #[error("{0} trailing bytes after the encoded value")]
    TrailingBytes(usize),

    #[error("invalid hex string: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("pairing primitive failure: {0}")]
    PrimitiveFailure(String),
}
