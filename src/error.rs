// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

/// Which fail-fast input check rejected a derivation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidParameter {
    ZeroRounds,
    EmptyPassword,
    EmptySalt,
    ZeroKeyLength,
    KeyLengthTooLong { len: usize, max: usize },
    SaltTooLong { len: usize, max: usize },
}

impl std::fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroRounds => f.write_str("rounds must be at least 1"),
            Self::EmptyPassword => f.write_str("password must not be empty"),
            Self::EmptySalt => f.write_str("salt must not be empty"),
            Self::ZeroKeyLength => f.write_str("key length must not be zero"),
            Self::KeyLengthTooLong { len, max } => {
                write!(f, "key length {len} exceeds the maximum of {max} bytes")
            }
            Self::SaltTooLong { len, max } => {
                write!(f, "salt length {len} exceeds the maximum of {max} bytes")
            }
        }
    }
}

/// Derivation failure. Both variants leave the output buffer randomised.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfError {
    #[error("invalid KDF parameters: {0}")]
    InvalidParameters(InvalidParameter),

    #[error("could not allocate KDF scratch memory")]
    ResourceExhausted,
}

impl From<InvalidParameter> for KdfError {
    fn from(err: InvalidParameter) -> Self {
        KdfError::InvalidParameters(err)
    }
}

/// Failure while loading the optional configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, KdfError>;
