// src/consts.rs
//! Shared constants — transformation strings, key algorithms and default sizes

/// Name the built-in provider registers under
pub const RUSTCRYPTO_PROVIDER_NAME: &str = "RustCrypto";

/// Environment variable pointing at the TOML configuration file
pub const CONFIG_ENV_VAR: &str = "CIPHER_FACADE_CONFIG";

/// Configuration file used when the environment variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "cipher-facade.toml";

// Symmetric transformations
pub const AES_TRANSFORMATION: &str = "AES/ECB/PKCS5Padding";
pub const DES_TRANSFORMATION: &str = "DES/ECB/PKCS5Padding";
pub const DESEDE_TRANSFORMATION: &str = "DESede/ECB/PKCS5Padding";
pub const RC2_TRANSFORMATION: &str = "RC2/ECB/PKCS5Padding";

// Asymmetric transformations
pub const RSA_PKCS1_TRANSFORMATION: &str = "RSA/ECB/PKCS1Padding";
pub const RSA_OAEP_SHA256_TRANSFORMATION: &str = "RSA/ECB/OAEPWithSHA-256AndMGF1Padding";

// Key-generation algorithms
pub const AES_KEY_ALGORITHM: &str = "AES";
pub const DES_KEY_ALGORITHM: &str = "DES";
pub const DESEDE_KEY_ALGORITHM: &str = "DESede";
pub const RC2_KEY_ALGORITHM: &str = "RC2";

/// Default key sizes in bits
pub const AES_DEFAULT_KEY_BITS: u32 = 128;
pub const DES_DEFAULT_KEY_BITS: u32 = 56;
pub const DESEDE_DEFAULT_KEY_BITS: u32 = 168;
pub const RC2_DEFAULT_KEY_BITS: u32 = 128;
