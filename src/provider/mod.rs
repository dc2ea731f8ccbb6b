// src/provider/mod.rs
//! Provider interface — where cipher instances and key generators come from
//!
//! A provider answers two questions by name: "give me a cipher for this
//! transformation" and "give me a key generator for this algorithm". The
//! facade never does more than that; everything cryptographic lives behind
//! these traits.
//!
//! [`RustCryptoProvider`] is the built-in backend and the first entry of the
//! process-wide [`registry`](crate::registry).

mod block;
mod keygen;
mod rsa_cipher;
mod rustcrypto;
pub mod transformation;

use std::fmt;

use crate::enums::CipherMode;
use crate::error::BackendError;
use crate::key_ops::Key;

pub use block::{BlockFamily, BlockPadding};
pub use rustcrypto::RustCryptoProvider;
pub use transformation::Transformation;

/// A pluggable backend supplying ciphers and key generators by name.
pub trait Provider: Send + Sync + fmt::Debug {
    /// Registry name; two providers with the same name are the same provider
    fn name(&self) -> &str;

    /// Fresh, uninitialized cipher for `transformation`.
    ///
    /// Returns [`BackendError::NoSuchAlgorithm`] when this provider does not
    /// know the algorithm, which lets the registry fall through to the next
    /// provider.
    fn cipher(&self, transformation: &str) -> Result<Box<dyn Cipher>, BackendError>;

    /// Fresh key generator for `algorithm`, at its default key length.
    fn key_generator(&self, algorithm: &str) -> Result<Box<dyn KeyGenerator>, BackendError>;
}

/// A single-use cipher instance: `init` once, then `do_final` over the whole payload.
pub trait Cipher: Send {
    fn init(&mut self, mode: CipherMode, key: &Key) -> Result<(), BackendError>;

    fn do_final(&mut self, input: &[u8]) -> Result<Vec<u8>, BackendError>;
}

pub trait KeyGenerator: Send {
    /// Override the default key length (in bits)
    fn init(&mut self, bits: u32) -> Result<(), BackendError>;

    fn generate_key(&mut self) -> Result<Key, BackendError>;
}
