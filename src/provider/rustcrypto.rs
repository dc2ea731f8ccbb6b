// src/provider/rustcrypto.rs
//! The built-in provider, backed by the RustCrypto crates

use tracing::trace;

use super::block::BlockCipher;
use super::keygen::SymmetricKeyGenerator;
use super::rsa_cipher::RsaCipher;
use super::transformation::Transformation;
use super::{Cipher, KeyGenerator, Provider};
use crate::consts::RUSTCRYPTO_PROVIDER_NAME;
use crate::error::BackendError;

/// Default backend: AES, DES, DESede and RC2 in ECB mode, plus RSA.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustCryptoProvider;

impl RustCryptoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Provider for RustCryptoProvider {
    fn name(&self) -> &str {
        RUSTCRYPTO_PROVIDER_NAME
    }

    fn cipher(&self, transformation: &str) -> Result<Box<dyn Cipher>, BackendError> {
        trace!(transformation, "RustCrypto cipher lookup");
        let parsed = Transformation::parse(transformation)?;

        if let Some(block) = BlockCipher::for_transformation(&parsed)? {
            return Ok(Box::new(block));
        }
        if let Some(rsa) = RsaCipher::for_transformation(&parsed)? {
            return Ok(Box::new(rsa));
        }
        Err(BackendError::NoSuchAlgorithm(transformation.to_owned()))
    }

    fn key_generator(&self, algorithm: &str) -> Result<Box<dyn KeyGenerator>, BackendError> {
        trace!(algorithm, "RustCrypto key generator lookup");
        SymmetricKeyGenerator::for_algorithm(algorithm)
            .map(|generator| Box::new(generator) as Box<dyn KeyGenerator>)
            .ok_or_else(|| BackendError::NoSuchAlgorithm(algorithm.to_owned()))
    }
}
