// src/key_ops.rs
//! Key handles and representation utilities
//!
//! The facade treats a [`Key`] as opaque: it stores one and hands it to the
//! provider. Only providers look inside.

use std::fmt;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use rsa::{RsaPrivateKey, RsaPublicKey};
use subtle::ConstantTimeEq;

use crate::aliases::KeyMaterial;

/// Symmetric secret key: algorithm name plus raw bytes
pub struct SecretKey {
    algorithm: String,
    material: KeyMaterial,
}

impl SecretKey {
    pub fn new(algorithm: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            algorithm: algorithm.into(),
            material: KeyMaterial::new(bytes),
        }
    }

    /// Rebuild a key from its lowercase or uppercase hex rendering
    pub fn from_hex(
        algorithm: impl Into<String>,
        hex_str: &str,
    ) -> Result<Self, hex::FromHexError> {
        Ok(Self::new(algorithm, hex::decode(hex_str)?))
    }

    /// Key-generation algorithm this key belongs to (`AES`, `DESede`, …)
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.material.as_slice()
    }

    pub fn len_bits(&self) -> usize {
        self.as_bytes().len() * 8
    }

    pub fn representations(&self) -> KeyRepr {
        key_representations(self)
    }
}

impl Clone for SecretKey {
    fn clone(&self) -> Self {
        Self::new(self.algorithm.clone(), self.as_bytes().to_vec())
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("algorithm", &self.algorithm)
            .field("bits", &self.len_bits())
            .finish_non_exhaustive()
    }
}

// Key bytes compared in constant time; slices of different length are unequal
impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        let same_bytes: bool = self.as_bytes().ct_eq(other.as_bytes()).into();
        same_bytes && self.algorithm.eq_ignore_ascii_case(&other.algorithm)
    }
}

impl Eq for SecretKey {}

/// Any key the facade can carry
#[derive(Clone)]
pub enum Key {
    Secret(SecretKey),
    RsaPublic(RsaPublicKey),
    RsaPrivate(RsaPrivateKey),
}

impl Key {
    pub fn algorithm(&self) -> &str {
        match self {
            Key::Secret(secret) => secret.algorithm(),
            Key::RsaPublic(_) | Key::RsaPrivate(_) => "RSA",
        }
    }

    pub fn as_secret(&self) -> Option<&SecretKey> {
        match self {
            Key::Secret(secret) => Some(secret),
            _ => None,
        }
    }

    pub fn is_symmetric(&self) -> bool {
        matches!(self, Key::Secret(_))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Secret(secret) => secret.fmt(f),
            Key::RsaPublic(_) => f.write_str("Key::RsaPublic(..)"),
            Key::RsaPrivate(_) => f.write_str("Key::RsaPrivate(..)"),
        }
    }
}

impl From<SecretKey> for Key {
    fn from(key: SecretKey) -> Self {
        Key::Secret(key)
    }
}

impl From<RsaPublicKey> for Key {
    fn from(key: RsaPublicKey) -> Self {
        Key::RsaPublic(key)
    }
}

impl From<RsaPrivateKey> for Key {
    fn from(key: RsaPrivateKey) -> Self {
        Key::RsaPrivate(key)
    }
}

/// Multiple string representations of a key for export/display
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn key_representations(key: &SecretKey) -> KeyRepr {
    KeyRepr {
        hex: hex::encode(key.as_bytes()),
        base64: STANDARD.encode(key.as_bytes()),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(key.as_bytes()),
    }
}
