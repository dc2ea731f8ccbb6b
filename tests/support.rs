// tests/support.rs
//! Test providers — a toy XOR backend and a call-counting wrapper

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cipher_facade::{
    BackendError, Cipher, CipherMode, Key, KeyGenerator, Provider, RustCryptoProvider, SecretKey,
};

/// Repeating-key XOR under the transformation name `XOR`
#[derive(Debug)]
#[allow(dead_code)]
pub struct XorProvider {
    name: &'static str,
}

#[allow(dead_code)]
impl XorProvider {
    pub fn named(name: &'static str) -> Arc<dyn Provider> {
        Arc::new(Self { name })
    }
}

struct XorCipher {
    key: Option<Vec<u8>>,
}

impl Cipher for XorCipher {
    fn init(&mut self, _mode: CipherMode, key: &Key) -> Result<(), BackendError> {
        let secret = key
            .as_secret()
            .filter(|s| !s.as_bytes().is_empty())
            .ok_or_else(|| BackendError::InvalidKey("XOR needs a non-empty secret key".into()))?;
        self.key = Some(secret.as_bytes().to_vec());
        Ok(())
    }

    fn do_final(&mut self, input: &[u8]) -> Result<Vec<u8>, BackendError> {
        let key = self.key.as_ref().ok_or(BackendError::NotInitialized)?;
        Ok(input
            .iter()
            .zip(key.iter().cycle())
            .map(|(b, k)| b ^ k)
            .collect())
    }
}

struct XorKeyGenerator {
    len: usize,
}

impl KeyGenerator for XorKeyGenerator {
    fn init(&mut self, bits: u32) -> Result<(), BackendError> {
        if bits == 0 || bits % 8 != 0 {
            return Err(BackendError::InvalidKeySize {
                algorithm: "XOR".into(),
                bits,
            });
        }
        self.len = (bits / 8) as usize;
        Ok(())
    }

    fn generate_key(&mut self) -> Result<Key, BackendError> {
        Ok(SecretKey::new("XOR", vec![0xA5; self.len]).into())
    }
}

impl Provider for XorProvider {
    fn name(&self) -> &str {
        self.name
    }

    fn cipher(&self, transformation: &str) -> Result<Box<dyn Cipher>, BackendError> {
        if transformation.eq_ignore_ascii_case("XOR") {
            Ok(Box::new(XorCipher { key: None }))
        } else {
            Err(BackendError::NoSuchAlgorithm(transformation.to_owned()))
        }
    }

    fn key_generator(&self, algorithm: &str) -> Result<Box<dyn KeyGenerator>, BackendError> {
        if algorithm.eq_ignore_ascii_case("XOR") {
            Ok(Box::new(XorKeyGenerator { len: 4 }))
        } else {
            Err(BackendError::NoSuchAlgorithm(algorithm.to_owned()))
        }
    }
}

/// Delegates to [`RustCryptoProvider`] and counts every lookup
#[derive(Debug)]
#[allow(dead_code)]
pub struct CountingProvider {
    name: &'static str,
    inner: RustCryptoProvider,
    pub cipher_calls: AtomicUsize,
    pub key_generator_calls: AtomicUsize,
}

#[allow(dead_code)]
impl CountingProvider {
    pub fn named(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            inner: RustCryptoProvider::new(),
            cipher_calls: AtomicUsize::new(0),
            key_generator_calls: AtomicUsize::new(0),
        })
    }

    pub fn cipher_calls(&self) -> usize {
        self.cipher_calls.load(Ordering::SeqCst)
    }

    pub fn key_generator_calls(&self) -> usize {
        self.key_generator_calls.load(Ordering::SeqCst)
    }
}

impl Provider for CountingProvider {
    fn name(&self) -> &str {
        self.name
    }

    fn cipher(&self, transformation: &str) -> Result<Box<dyn Cipher>, BackendError> {
        self.cipher_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.cipher(transformation)
    }

    fn key_generator(&self, algorithm: &str) -> Result<Box<dyn KeyGenerator>, BackendError> {
        self.key_generator_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.key_generator(algorithm)
    }
}
