// src/facade.rs
//! The cipher facade — configuration in, encrypt/decrypt out
//!
//! A [`CipherFacade`] carries the whole configuration (transformation,
//! key-generation algorithm, key size, provider, key). Nothing is validated
//! when a field is set; problems surface when an operation runs.
//!
//! ```no_run
//! use cipher_facade::{CipherFacade, SymmetricAlgorithm};
//!
//! let mut facade = CipherFacade::new();
//! facade.set_symmetric_algorithm(SymmetricAlgorithm::Aes);
//! let key = facade.generate_key()?;
//! facade.set_key(key);
//!
//! let ciphertext = facade.encrypt(b"attack at dawn")?;
//! assert_eq!(facade.decrypt(&ciphertext)?, b"attack at dawn");
//! # Ok::<(), cipher_facade::CryptographyError>(())
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::enums::{AsymmetricAlgorithm, CipherMode, SymmetricAlgorithm};
use crate::error::{BackendError, ConfigError, CryptographyError, Result};
use crate::key_ops::Key;
use crate::provider::{Cipher, KeyGenerator, Provider};
use crate::registry;

#[derive(Debug, Clone)]
pub struct CipherFacade {
    algorithm: String,
    key_algorithm: String,
    size: Option<u32>,
    provider: Option<Arc<dyn Provider>>,
    key: Option<Key>,
}

impl Default for CipherFacade {
    fn default() -> Self {
        Self::new()
    }
}

impl CipherFacade {
    /// Facade preconfigured with [`SymmetricAlgorithm::Default`], no provider, no key
    pub fn new() -> Self {
        let default = SymmetricAlgorithm::Default;
        Self {
            algorithm: default.transformation().to_owned(),
            key_algorithm: default.key_algorithm().to_owned(),
            size: Some(default.size()),
            provider: None,
            key: None,
        }
    }

    /// Build a facade from a loaded [`Config`].
    ///
    /// Fields are applied in order: `symmetric`/`asymmetric` choice, then the
    /// explicit `algorithm`, `key_algorithm` and `size`. A `key_algorithm`
    /// without a `size` leaves the size to the generator's default.
    ///
    /// A named provider must already be registered; it is then pinned on the
    /// facade exactly as [`set_provider`](Self::set_provider) would.
    pub fn from_config(config: &Config) -> std::result::Result<Self, ConfigError> {
        let mut facade = Self::new();
        let cipher = &config.cipher;

        if let Some(symmetric) = cipher.symmetric {
            facade.set_symmetric_algorithm(symmetric);
        }
        if let Some(asymmetric) = cipher.asymmetric {
            facade.set_asymmetric_algorithm(asymmetric);
        }
        if let Some(algorithm) = &cipher.algorithm {
            facade.set_algorithm(algorithm.as_str());
        }
        if let Some(key_algorithm) = &cipher.key_algorithm {
            facade.set_key_algorithm(key_algorithm.as_str());
            facade.clear_size();
        }
        if let Some(bits) = cipher.size {
            facade.set_size(bits);
        }

        if let Some(name) = &cipher.provider {
            let provider =
                registry::lookup(name).ok_or_else(|| ConfigError::UnknownProvider(name.clone()))?;
            facade.set_provider(Some(provider));
        }
        Ok(facade)
    }

    // ──────────────────────────────────────────────────────────────
    // Configuration
    // ──────────────────────────────────────────────────────────────

    /// Set the transformation string verbatim
    pub fn set_algorithm(&mut self, algorithm: impl Into<String>) {
        self.algorithm = algorithm.into();
    }

    /// Set transformation, key-generation algorithm and key size together
    pub fn set_symmetric_algorithm(&mut self, algorithm: SymmetricAlgorithm) {
        self.algorithm = algorithm.transformation().to_owned();
        self.key_algorithm = algorithm.key_algorithm().to_owned();
        self.size = Some(algorithm.size());
    }

    /// Set only the transformation; asymmetric keys come from the caller
    pub fn set_asymmetric_algorithm(&mut self, algorithm: AsymmetricAlgorithm) {
        self.algorithm = algorithm.transformation().to_owned();
    }

    /// Pin a provider for every lookup made by this facade.
    ///
    /// `Some` also registers the provider process-wide (see [`registry`]).
    /// `None` only unpins it here; the provider stays registered.
    pub fn set_provider(&mut self, provider: Option<Arc<dyn Provider>>) {
        if let Some(provider) = &provider {
            registry::register(Arc::clone(provider));
        }
        self.provider = provider;
    }

    pub fn set_size(&mut self, bits: u32) {
        self.size = Some(bits);
    }

    /// Let the key generator pick its default length
    pub fn clear_size(&mut self) {
        self.size = None;
    }

    pub fn set_key_algorithm(&mut self, key_algorithm: impl Into<String>) {
        self.key_algorithm = key_algorithm.into();
    }

    pub fn set_key(&mut self, key: impl Into<Key>) {
        self.key = Some(key.into());
    }

    pub fn clear_key(&mut self) {
        self.key = None;
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn key_algorithm(&self) -> &str {
        &self.key_algorithm
    }

    pub fn size(&self) -> Option<u32> {
        self.size
    }

    pub fn provider(&self) -> Option<&Arc<dyn Provider>> {
        self.provider.as_ref()
    }

    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    // ──────────────────────────────────────────────────────────────
    // Operations
    // ──────────────────────────────────────────────────────────────

    /// Generate a fresh symmetric key for the configured key algorithm.
    ///
    /// Uses the configured size when set, the generator's default otherwise.
    pub fn generate_key(&self) -> Result<Key> {
        debug!(
            key_algorithm = %self.key_algorithm,
            size = ?self.size,
            provider = self.provider_name(),
            "generating key"
        );

        let generate = || -> std::result::Result<Key, BackendError> {
            let mut generator = self.key_generator()?;
            if let Some(bits) = self.size {
                generator.init(bits)?;
            }
            generator.generate_key()
        };
        generate().map_err(CryptographyError::KeyGenerationFailed)
    }

    /// Encrypt `content` in one shot
    pub fn encrypt(&self, content: &[u8]) -> Result<Vec<u8>> {
        self.transform(content, CipherMode::Encrypt)
            .map_err(|e| CryptographyError::EncryptionFailed(Box::new(e)))
    }

    /// Decrypt `content` in one shot
    pub fn decrypt(&self, content: &[u8]) -> Result<Vec<u8>> {
        self.transform(content, CipherMode::Decrypt)
            .map_err(|e| CryptographyError::DecryptionFailed(Box::new(e)))
    }

    fn transform(&self, content: &[u8], mode: CipherMode) -> Result<Vec<u8>> {
        // Checked before any provider is touched
        let key = self.key.as_ref().ok_or(CryptographyError::MissingKey)?;

        debug!(
            algorithm = %self.algorithm,
            %mode,
            provider = self.provider_name(),
            len = content.len(),
            "running cipher"
        );

        let run = || -> std::result::Result<Vec<u8>, BackendError> {
            let mut cipher = self.cipher()?;
            cipher.init(mode, key)?;
            cipher.do_final(content)
        };
        run().map_err(|source| CryptographyError::CryptOperationFailed { mode, source })
    }

    fn cipher(&self) -> std::result::Result<Box<dyn Cipher>, BackendError> {
        match &self.provider {
            Some(provider) => provider.cipher(&self.algorithm),
            None => registry::default_cipher(&self.algorithm),
        }
    }

    fn key_generator(&self) -> std::result::Result<Box<dyn KeyGenerator>, BackendError> {
        match &self.provider {
            Some(provider) => provider.key_generator(&self.key_algorithm),
            None => registry::default_key_generator(&self.key_algorithm),
        }
    }

    fn provider_name(&self) -> &str {
        self.provider.as_deref().map_or("<registry>", |p| p.name())
    }
}
