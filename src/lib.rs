// src/lib.rs
//! cipher-facade — configure once, encrypt and decrypt byte payloads
//!
//! Features:
//! - One [`CipherFacade`] for symmetric and asymmetric transformations
//! - Pluggable [`Provider`] backends, with a RustCrypto provider built in
//! - Process-wide provider [`registry`]
//! - Key material zeroized on drop

pub mod aliases;
pub mod config;
pub mod consts;
pub mod enums;
pub mod error;
pub mod facade;
pub mod key_ops;
pub mod provider;
pub mod registry;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use enums::{AsymmetricAlgorithm, CipherMode, SymmetricAlgorithm};
pub use error::{BackendError, ConfigError, CryptographyError, Result};
pub use facade::CipherFacade;
pub use key_ops::{key_representations, Key, KeyRepr, SecretKey};
pub use provider::{Cipher, KeyGenerator, Provider, RustCryptoProvider};
