// src/aliases.rs
//! Secret container types
//!
//! These are the canonical secret types used throughout cipher-facade.

use zeroize::Zeroizing;

/// Raw symmetric key bytes, wiped on drop
pub type KeyMaterial = Zeroizing<Vec<u8>>;
