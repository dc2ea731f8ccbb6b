// src/provider/block.rs
//! ECB block ciphers (AES, DES, DESede, RC2) over the RustCrypto crates

use aes::{Aes128, Aes192, Aes256};
use cipher::block_padding::{NoPadding, Pkcs7};
use cipher::{BlockDecryptMut, BlockEncryptMut, BlockSizeUser, InvalidLength, KeyInit};
use des::{Des, TdesEde2, TdesEde3};
use rc2::Rc2;
use tracing::trace;

use super::transformation::Transformation;
use super::Cipher;
use crate::aliases::KeyMaterial;
use crate::enums::CipherMode;
use crate::error::BackendError;
use crate::key_ops::Key;

/// Block cipher families the built-in provider knows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFamily {
    Aes,
    Des,
    DesEde,
    Rc2,
}

impl BlockFamily {
    /// Case-insensitive lookup; `TripleDES` is an alias of `DESede`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "AES" => Some(BlockFamily::Aes),
            "DES" => Some(BlockFamily::Des),
            "DESEDE" | "TRIPLEDES" => Some(BlockFamily::DesEde),
            "RC2" => Some(BlockFamily::Rc2),
            _ => None,
        }
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            BlockFamily::Aes => "AES",
            BlockFamily::Des => "DES",
            BlockFamily::DesEde => "DESede",
            BlockFamily::Rc2 => "RC2",
        }
    }

    pub fn block_size(self) -> usize {
        match self {
            BlockFamily::Aes => 16,
            BlockFamily::Des | BlockFamily::DesEde | BlockFamily::Rc2 => 8,
        }
    }

    fn accepts_key_len(self, len: usize) -> bool {
        match self {
            BlockFamily::Aes => matches!(len, 16 | 24 | 32),
            BlockFamily::Des => len == 8,
            BlockFamily::DesEde => matches!(len, 16 | 24),
            BlockFamily::Rc2 => (5..=128).contains(&len),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockPadding {
    Pkcs5,
    None,
}

impl BlockPadding {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "PKCS5PADDING" | "PKCS7PADDING" => Some(BlockPadding::Pkcs5),
            "NOPADDING" => Some(BlockPadding::None),
            _ => None,
        }
    }
}

pub(super) struct BlockCipher {
    family: BlockFamily,
    padding: BlockPadding,
    state: Option<(CipherMode, KeyMaterial)>,
}

impl BlockCipher {
    /// `Ok(None)` means "not a block cipher transformation"
    pub(super) fn for_transformation(t: &Transformation<'_>) -> Result<Option<Self>, BackendError> {
        let Some(family) = BlockFamily::from_name(t.algorithm) else {
            return Ok(None);
        };

        let mode = t.mode_or("ECB");
        if !mode.eq_ignore_ascii_case("ECB") {
            return Err(BackendError::UnsupportedMode(mode.to_owned()));
        }

        let padding_name = t.padding_or("PKCS5Padding");
        let padding = BlockPadding::from_name(padding_name)
            .ok_or_else(|| BackendError::NoSuchPadding(padding_name.to_owned()))?;

        Ok(Some(Self {
            family,
            padding,
            state: None,
        }))
    }
}

impl Cipher for BlockCipher {
    fn init(&mut self, mode: CipherMode, key: &Key) -> Result<(), BackendError> {
        let secret = key.as_secret().ok_or_else(|| {
            BackendError::InvalidKey(format!(
                "{} requires a secret key, got an {} key",
                self.family.canonical_name(),
                key.algorithm()
            ))
        })?;

        if BlockFamily::from_name(secret.algorithm()) != Some(self.family) {
            return Err(BackendError::InvalidKey(format!(
                "{} key cannot be used with {}",
                secret.algorithm(),
                self.family.canonical_name()
            )));
        }

        let len = secret.as_bytes().len();
        if !self.family.accepts_key_len(len) {
            return Err(BackendError::InvalidKey(format!(
                "{}-byte key is not valid for {}",
                len,
                self.family.canonical_name()
            )));
        }

        self.state = Some((mode, KeyMaterial::new(secret.as_bytes().to_vec())));
        Ok(())
    }

    fn do_final(&mut self, input: &[u8]) -> Result<Vec<u8>, BackendError> {
        let (mode, key) = self.state.as_ref().ok_or(BackendError::NotInitialized)?;
        let key = key.as_slice();
        trace!(
            family = self.family.canonical_name(),
            %mode,
            len = input.len(),
            "block cipher do_final"
        );

        let run = Run {
            mode: *mode,
            padding: self.padding,
            input,
        };
        let invalid = |_: InvalidLength| BackendError::InvalidKey("key rejected by cipher".into());

        match (self.family, key.len()) {
            (BlockFamily::Aes, 16) => run.with(Aes128::new_from_slice(key).map_err(invalid)?),
            (BlockFamily::Aes, 24) => run.with(Aes192::new_from_slice(key).map_err(invalid)?),
            (BlockFamily::Aes, _) => run.with(Aes256::new_from_slice(key).map_err(invalid)?),
            (BlockFamily::Des, _) => run.with(Des::new_from_slice(key).map_err(invalid)?),
            (BlockFamily::DesEde, 16) => run.with(TdesEde2::new_from_slice(key).map_err(invalid)?),
            (BlockFamily::DesEde, _) => run.with(TdesEde3::new_from_slice(key).map_err(invalid)?),
            (BlockFamily::Rc2, len) => run.with(Rc2::new_with_eff_key_len(key, len * 8)),
        }
    }
}

/// One `do_final` call, generic over the concrete block cipher
struct Run<'a> {
    mode: CipherMode,
    padding: BlockPadding,
    input: &'a [u8],
}

impl Run<'_> {
    fn with<C>(self, cipher: C) -> Result<Vec<u8>, BackendError>
    where
        C: BlockEncryptMut + BlockDecryptMut + BlockSizeUser,
    {
        let block_size = C::block_size();
        let aligned = self.input.len() % block_size == 0;

        match (self.mode, self.padding) {
            (CipherMode::Encrypt, BlockPadding::Pkcs5) => {
                Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(self.input))
            }
            (CipherMode::Encrypt, BlockPadding::None) => {
                if !aligned {
                    return Err(self.illegal_block_size(block_size));
                }
                Ok(cipher.encrypt_padded_vec_mut::<NoPadding>(self.input))
            }
            (CipherMode::Decrypt, padding) => {
                if !aligned {
                    return Err(self.illegal_block_size(block_size));
                }
                match padding {
                    BlockPadding::Pkcs5 => cipher
                        .decrypt_padded_vec_mut::<Pkcs7>(self.input)
                        .map_err(|_| BackendError::BadPadding),
                    BlockPadding::None => cipher
                        .decrypt_padded_vec_mut::<NoPadding>(self.input)
                        .map_err(|_| BackendError::BadPadding),
                }
            }
        }
    }

    fn illegal_block_size(&self, block_size: usize) -> BackendError {
        BackendError::IllegalBlockSize {
            len: self.input.len(),
            block_size,
        }
    }
}
