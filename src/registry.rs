// src/registry.rs
//! Process-wide provider registry
//!
//! This is global mutable state shared by every [`CipherFacade`] in the
//! process. Rules:
//!
//! - created lazily on first use, with [`RustCryptoProvider`] as entry #1
//! - registration is additive and idempotent by [`Provider::name`]
//! - nothing is ever unregistered
//!
//! A facade with no explicit provider resolves names here, walking providers
//! in registration order. A facade with an explicit provider never consults
//! the registry for lookups; `set_provider` only *adds* to it.
//!
//! [`CipherFacade`]: crate::facade::CipherFacade

use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::error::BackendError;
use crate::provider::{Cipher, KeyGenerator, Provider, RustCryptoProvider};

static REGISTRY: Lazy<RwLock<Vec<Arc<dyn Provider>>>> =
    Lazy::new(|| RwLock::new(vec![Arc::new(RustCryptoProvider::new()) as Arc<dyn Provider>]));

fn snapshot() -> Vec<Arc<dyn Provider>> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Add `provider` unless one with the same name is already registered.
///
/// Returns `true` when the provider was added.
pub fn register(provider: Arc<dyn Provider>) -> bool {
    let mut providers = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    if providers.iter().any(|p| p.name() == provider.name()) {
        trace!(provider = provider.name(), "provider already registered");
        return false;
    }
    debug!(provider = provider.name(), "registering provider");
    providers.push(provider);
    true
}

pub fn lookup(name: &str) -> Option<Arc<dyn Provider>> {
    snapshot().into_iter().find(|p| p.name() == name)
}

pub fn is_registered(name: &str) -> bool {
    lookup(name).is_some()
}

/// Registered provider names, in lookup order
pub fn provider_names() -> Vec<String> {
    snapshot().iter().map(|p| p.name().to_owned()).collect()
}

/// First provider that knows `transformation` wins.
///
/// A provider answering anything other than `NoSuchAlgorithm` (a bad padding
/// name, say) ends the walk with that error.
pub fn default_cipher(transformation: &str) -> Result<Box<dyn Cipher>, BackendError> {
    first_match(transformation, |p| p.cipher(transformation))
}

pub fn default_key_generator(algorithm: &str) -> Result<Box<dyn KeyGenerator>, BackendError> {
    first_match(algorithm, |p| p.key_generator(algorithm))
}

fn first_match<T>(
    name: &str,
    mut get: impl FnMut(&dyn Provider) -> Result<T, BackendError>,
) -> Result<T, BackendError> {
    for provider in snapshot() {
        match get(provider.as_ref()) {
            Ok(found) => {
                trace!(provider = provider.name(), name, "resolved via registry");
                return Ok(found);
            }
            Err(BackendError::NoSuchAlgorithm(_)) => continue,
            Err(other) => return Err(other),
        }
    }
    Err(BackendError::NoSuchAlgorithm(name.to_owned()))
}
