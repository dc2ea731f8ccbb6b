// src/provider/rsa_cipher.rs
//! RSA with PKCS#1 v1.5 or OAEP (SHA-256) padding
//!
//! Keys are always supplied by the caller: public key to encrypt, private key
//! to decrypt. Private-key operations are always blinded.

use rsa::rand_core::OsRng;
use rsa::{Oaep, Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use tracing::trace;

use super::transformation::Transformation;
use super::Cipher;
use crate::enums::CipherMode;
use crate::error::BackendError;
use crate::key_ops::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RsaPadding {
    Pkcs1,
    OaepSha256,
}

enum RsaState {
    Encrypt(RsaPublicKey),
    Decrypt(RsaPrivateKey),
}

pub(super) struct RsaCipher {
    padding: RsaPadding,
    state: Option<RsaState>,
}

impl RsaCipher {
    /// `Ok(None)` means "not an RSA transformation"
    pub(super) fn for_transformation(t: &Transformation<'_>) -> Result<Option<Self>, BackendError> {
        if !t.algorithm.eq_ignore_ascii_case("RSA") {
            return Ok(None);
        }

        let mode = t.mode_or("ECB");
        if !(mode.eq_ignore_ascii_case("ECB") || mode.eq_ignore_ascii_case("NONE")) {
            return Err(BackendError::UnsupportedMode(mode.to_owned()));
        }

        let padding_name = t.padding_or("PKCS1Padding");
        let padding = match padding_name.to_ascii_uppercase().as_str() {
            "PKCS1PADDING" => RsaPadding::Pkcs1,
            "OAEPWITHSHA-256ANDMGF1PADDING" => RsaPadding::OaepSha256,
            _ => return Err(BackendError::NoSuchPadding(padding_name.to_owned())),
        };

        Ok(Some(Self {
            padding,
            state: None,
        }))
    }
}

impl Cipher for RsaCipher {
    fn init(&mut self, mode: CipherMode, key: &Key) -> Result<(), BackendError> {
        let state = match (mode, key) {
            (CipherMode::Encrypt, Key::RsaPublic(public)) => RsaState::Encrypt(public.clone()),
            (CipherMode::Decrypt, Key::RsaPrivate(private)) => RsaState::Decrypt(private.clone()),
            (CipherMode::Encrypt, _) => {
                return Err(BackendError::InvalidKey(
                    "RSA encryption requires a public key".into(),
                ))
            }
            (CipherMode::Decrypt, _) => {
                return Err(BackendError::InvalidKey(
                    "RSA decryption requires a private key".into(),
                ))
            }
        };
        self.state = Some(state);
        Ok(())
    }

    fn do_final(&mut self, input: &[u8]) -> Result<Vec<u8>, BackendError> {
        let state = self.state.as_ref().ok_or(BackendError::NotInitialized)?;
        trace!(padding = ?self.padding, len = input.len(), "rsa do_final");

        let out = match (state, self.padding) {
            (RsaState::Encrypt(public), RsaPadding::Pkcs1) => {
                public.encrypt(&mut OsRng, Pkcs1v15Encrypt, input)?
            }
            (RsaState::Encrypt(public), RsaPadding::OaepSha256) => {
                public.encrypt(&mut OsRng, Oaep::new::<Sha256>(), input)?
            }
            (RsaState::Decrypt(private), RsaPadding::Pkcs1) => {
                private.decrypt_blinded(&mut OsRng, Pkcs1v15Encrypt, input)?
            }
            (RsaState::Decrypt(private), RsaPadding::OaepSha256) => {
                private.decrypt_blinded(&mut OsRng, Oaep::new::<Sha256>(), input)?
            }
        };
        Ok(out)
    }
}
