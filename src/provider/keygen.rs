// src/provider/keygen.rs
//! Symmetric key generation

use rand::RngCore;
use tracing::debug;

use super::block::BlockFamily;
use super::KeyGenerator;
use crate::consts::{
    AES_DEFAULT_KEY_BITS, DESEDE_DEFAULT_KEY_BITS, DES_DEFAULT_KEY_BITS, RC2_DEFAULT_KEY_BITS,
};
use crate::error::BackendError;
use crate::key_ops::{Key, SecretKey};

pub(super) struct SymmetricKeyGenerator {
    family: BlockFamily,
    bits: u32,
}

impl SymmetricKeyGenerator {
    pub(super) fn for_algorithm(algorithm: &str) -> Option<Self> {
        let family = BlockFamily::from_name(algorithm)?;
        let bits = match family {
            BlockFamily::Aes => AES_DEFAULT_KEY_BITS,
            BlockFamily::Des => DES_DEFAULT_KEY_BITS,
            BlockFamily::DesEde => DESEDE_DEFAULT_KEY_BITS,
            BlockFamily::Rc2 => RC2_DEFAULT_KEY_BITS,
        };
        Some(Self { family, bits })
    }

    fn valid_size(&self, bits: u32) -> bool {
        match self.family {
            BlockFamily::Aes => matches!(bits, 128 | 192 | 256),
            BlockFamily::Des => matches!(bits, 56 | 64),
            BlockFamily::DesEde => matches!(bits, 112 | 168),
            BlockFamily::Rc2 => (40..=1024).contains(&bits) && bits % 8 == 0,
        }
    }

    /// Bytes of key material for the configured size
    fn key_len(&self) -> usize {
        match self.family {
            BlockFamily::Des => 8,
            // Two-key triple DES still travels as a 24-byte K1|K2|K1 key
            BlockFamily::DesEde => 24,
            BlockFamily::Aes | BlockFamily::Rc2 => (self.bits / 8) as usize,
        }
    }
}

impl KeyGenerator for SymmetricKeyGenerator {
    fn init(&mut self, bits: u32) -> Result<(), BackendError> {
        if !self.valid_size(bits) {
            return Err(BackendError::InvalidKeySize {
                algorithm: self.family.canonical_name().to_owned(),
                bits,
            });
        }
        self.bits = bits;
        Ok(())
    }

    fn generate_key(&mut self) -> Result<Key, BackendError> {
        let mut bytes = vec![0u8; self.key_len()];
        rand::rng().fill_bytes(&mut bytes);

        if self.family == BlockFamily::DesEde && self.bits == 112 {
            let (head, tail) = bytes.split_at_mut(16);
            tail.copy_from_slice(&head[..8]);
        }
        if matches!(self.family, BlockFamily::Des | BlockFamily::DesEde) {
            set_odd_parity(&mut bytes);
        }

        debug!(
            algorithm = self.family.canonical_name(),
            bits = self.bits,
            "generated secret key"
        );
        Ok(Key::Secret(SecretKey::new(
            self.family.canonical_name(),
            bytes,
        )))
    }
}

/// DES keys carry an odd-parity bit in the low bit of every byte
fn set_odd_parity(bytes: &mut [u8]) {
    for b in bytes.iter_mut() {
        let high = *b & 0xFE;
        *b = if high.count_ones() % 2 == 0 { high | 1 } else { high };
    }
}
