// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible algorithm choices and the
//! encrypt/decrypt direction.

use std::fmt;

use serde::Deserialize;

use crate::consts::*;

/// Direction a cipher runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherMode {
    Encrypt,
    Decrypt,
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherMode::Encrypt => f.write_str("encrypt"),
            CipherMode::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// Symmetric algorithms, each paired with the key-generation recipe it needs
///
/// Config files name a choice by variant, e.g. `symmetric = "DesEde"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[non_exhaustive]
pub enum SymmetricAlgorithm {
    #[default]
    Default,
    Aes,
    Des,
    DesEde,
    TripleDes,
    Rc2,
}

impl SymmetricAlgorithm {
    pub const ALL: [SymmetricAlgorithm; 6] = [
        SymmetricAlgorithm::Default,
        SymmetricAlgorithm::Aes,
        SymmetricAlgorithm::Des,
        SymmetricAlgorithm::DesEde,
        SymmetricAlgorithm::TripleDes,
        SymmetricAlgorithm::Rc2,
    ];

    /// Transformation string handed to the provider
    pub fn transformation(self) -> &'static str {
        match self {
            SymmetricAlgorithm::Default | SymmetricAlgorithm::Aes => AES_TRANSFORMATION,
            SymmetricAlgorithm::Des => DES_TRANSFORMATION,
            SymmetricAlgorithm::DesEde | SymmetricAlgorithm::TripleDes => DESEDE_TRANSFORMATION,
            SymmetricAlgorithm::Rc2 => RC2_TRANSFORMATION,
        }
    }

    /// Algorithm name used to obtain a key generator
    pub fn key_algorithm(self) -> &'static str {
        match self {
            SymmetricAlgorithm::Default | SymmetricAlgorithm::Aes => AES_KEY_ALGORITHM,
            SymmetricAlgorithm::Des => DES_KEY_ALGORITHM,
            SymmetricAlgorithm::DesEde | SymmetricAlgorithm::TripleDes => DESEDE_KEY_ALGORITHM,
            SymmetricAlgorithm::Rc2 => RC2_KEY_ALGORITHM,
        }
    }

    /// Default key length in bits
    pub fn size(self) -> u32 {
        match self {
            SymmetricAlgorithm::Default | SymmetricAlgorithm::Aes => AES_DEFAULT_KEY_BITS,
            SymmetricAlgorithm::Des => DES_DEFAULT_KEY_BITS,
            SymmetricAlgorithm::DesEde | SymmetricAlgorithm::TripleDes => DESEDE_DEFAULT_KEY_BITS,
            SymmetricAlgorithm::Rc2 => RC2_DEFAULT_KEY_BITS,
        }
    }
}

/// Asymmetric algorithms — keys are always supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[non_exhaustive]
pub enum AsymmetricAlgorithm {
    #[default]
    Default,
    Rsa,
    RsaOaepSha256,
}

impl AsymmetricAlgorithm {
    pub fn transformation(self) -> &'static str {
        match self {
            AsymmetricAlgorithm::Default | AsymmetricAlgorithm::Rsa => RSA_PKCS1_TRANSFORMATION,
            AsymmetricAlgorithm::RsaOaepSha256 => RSA_OAEP_SHA256_TRANSFORMATION,
        }
    }
}
