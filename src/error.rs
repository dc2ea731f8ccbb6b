// src/error.rs
//! Public error types for the entire crate
//!
//! Two layers:
//! - [`BackendError`] — what a provider reports (unknown algorithm, bad key, bad padding…)
//! - [`CryptographyError`] — what the facade reports to its caller, always
//!   chaining the backend cause through `source()`

use crate::enums::CipherMode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CryptographyError>;

/// Errors raised by a [`Provider`](crate::provider::Provider) and the ciphers
/// and key generators it hands out.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BackendError {
    #[error("no such algorithm: {0}")]
    NoSuchAlgorithm(String),

    #[error("no such padding: {0}")]
    NoSuchPadding(String),

    #[error("unsupported cipher mode: {0}")]
    UnsupportedMode(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("invalid key size for {algorithm}: {bits} bits")]
    InvalidKeySize { algorithm: String, bits: u32 },

    #[error("input length {len} is not a multiple of the {block_size}-byte block size")]
    IllegalBlockSize { len: usize, block_size: usize },

    #[error("bad padding: ciphertext was not produced with this key and transformation")]
    BadPadding,

    #[error("cipher used before initialization")]
    NotInitialized,

    #[error("RSA operation failed: {0}")]
    Rsa(#[from] rsa::Error),
}

/// Caller-visible error type of [`CipherFacade`](crate::facade::CipherFacade).
///
/// `encrypt`/`decrypt` collapse every failure into [`EncryptionFailed`] or
/// [`DecryptionFailed`]; the specific kind stays reachable via [`inner`].
///
/// [`EncryptionFailed`]: CryptographyError::EncryptionFailed
/// [`DecryptionFailed`]: CryptographyError::DecryptionFailed
/// [`inner`]: CryptographyError::inner
#[derive(Error, Debug)]
pub enum CryptographyError {
    #[error("the key must be set before running a cipher operation")]
    MissingKey,

    #[error("failed to generate key")]
    KeyGenerationFailed(#[source] BackendError),

    #[error("{mode} operation failed")]
    CryptOperationFailed {
        mode: CipherMode,
        #[source]
        source: BackendError,
    },

    #[error("failed to encrypt content")]
    EncryptionFailed(#[source] Box<CryptographyError>),

    #[error("failed to decrypt content")]
    DecryptionFailed(#[source] Box<CryptographyError>),
}

impl CryptographyError {
    /// The facade error wrapped by `EncryptionFailed`/`DecryptionFailed`.
    pub fn inner(&self) -> Option<&CryptographyError> {
        match self {
            CryptographyError::EncryptionFailed(inner)
            | CryptographyError::DecryptionFailed(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }

    /// Walk down to the provider error that started it all, if any.
    pub fn root_backend_error(&self) -> Option<&BackendError> {
        match self {
            CryptographyError::KeyGenerationFailed(source)
            | CryptographyError::CryptOperationFailed { source, .. } => Some(source),
            CryptographyError::EncryptionFailed(inner)
            | CryptographyError::DecryptionFailed(inner) => inner.root_backend_error(),
            CryptographyError::MissingKey => None,
        }
    }

    /// True when this error (or the one it wraps) is [`CryptographyError::MissingKey`].
    pub fn is_missing_key(&self) -> bool {
        match self {
            CryptographyError::MissingKey => true,
            other => other.inner().is_some_and(CryptographyError::is_missing_key),
        }
    }
}

/// Errors raised while loading or applying a [`Config`](crate::config::Config).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("no provider named {0:?} is registered")]
    UnknownProvider(String),
}
