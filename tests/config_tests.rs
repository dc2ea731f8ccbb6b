// tests/config_tests.rs
use std::fs;

use cipher_facade::config::{load_from, Config};
use cipher_facade::{AsymmetricAlgorithm, CipherFacade, ConfigError, SymmetricAlgorithm};
use tempfile::tempdir;

#[test]
fn test_defaults_match_default_symmetric_algorithm() {
    let config = Config::default();
    assert_eq!(config.cipher.symmetric, Some(SymmetricAlgorithm::Default));
    assert_eq!(config.cipher.asymmetric, None);
    assert_eq!(config.cipher.algorithm, None);
    assert_eq!(config.cipher.key_algorithm, None);
    assert_eq!(config.cipher.size, None);
    assert_eq!(config.cipher.provider, None);

    let facade = CipherFacade::from_config(&config).unwrap();
    let default = SymmetricAlgorithm::Default;
    assert_eq!(facade.algorithm(), default.transformation());
    assert_eq!(facade.key_algorithm(), default.key_algorithm());
    assert_eq!(facade.size(), Some(default.size()));
}

#[test]
fn test_empty_toml_is_all_defaults() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
fn test_partial_desede_section_generates_a_usable_key() {
    let config = Config::from_toml_str(
        r#"
        [cipher]
        algorithm = "DESede/ECB/PKCS5Padding"
        key_algorithm = "DESede"
        "#,
    )
    .unwrap();
    assert_eq!(config.cipher.size, None);

    let mut facade = CipherFacade::from_config(&config).unwrap();
    assert_eq!(facade.algorithm(), "DESede/ECB/PKCS5Padding");
    assert_eq!(facade.key_algorithm(), "DESede");
    assert_eq!(facade.size(), None);

    let key = facade.generate_key().unwrap();
    assert_eq!(key.algorithm(), "DESede");
    assert_eq!(key.as_secret().unwrap().as_bytes().len(), 24);

    facade.set_key(key);
    let ciphertext = facade.encrypt(b"partial section").unwrap();
    assert_eq!(facade.decrypt(&ciphertext).unwrap(), b"partial section");
}

#[test]
fn test_explicit_size_wins_over_key_algorithm_default() {
    let config = Config::from_toml_str("[cipher]\nkey_algorithm = \"AES\"\nsize = 256\n").unwrap();
    let facade = CipherFacade::from_config(&config).unwrap();
    assert_eq!(facade.size(), Some(256));
    let key = facade.generate_key().unwrap();
    assert_eq!(key.as_secret().unwrap().len_bits(), 256);
}

#[test]
fn test_symmetric_choice_sets_full_recipe() {
    let config = Config::from_toml_str("[cipher]\nsymmetric = \"DesEde\"\n").unwrap();
    assert_eq!(config.cipher.symmetric, Some(SymmetricAlgorithm::DesEde));

    let facade = CipherFacade::from_config(&config).unwrap();
    assert_eq!(facade.algorithm(), SymmetricAlgorithm::DesEde.transformation());
    assert_eq!(facade.key_algorithm(), "DESede");
    assert_eq!(facade.size(), Some(168));
}

#[test]
fn test_asymmetric_choice_sets_only_the_transformation() {
    let config =
        Config::from_toml_str("[cipher]\nasymmetric = \"RsaOaepSha256\"\n").unwrap();
    let facade = CipherFacade::from_config(&config).unwrap();
    assert_eq!(
        facade.algorithm(),
        AsymmetricAlgorithm::RsaOaepSha256.transformation()
    );
    assert_eq!(facade.key_algorithm(), SymmetricAlgorithm::Default.key_algorithm());
    assert_eq!(facade.size(), Some(SymmetricAlgorithm::Default.size()));
}

#[test]
fn test_unknown_algorithm_choice_is_rejected() {
    let err = Config::from_toml_str("[cipher]\nsymmetric = \"Blowfish\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_unknown_field_is_rejected() {
    let err = Config::from_toml_str("[cipher]\nmode = \"CBC\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_load_from_file_and_build_facade() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cipher-facade.toml");
    fs::write(
        &path,
        r#"
        [cipher]
        algorithm = "RC2/ECB/PKCS5Padding"
        key_algorithm = "RC2"
        size = 64
        provider = "RustCrypto"
        "#,
    )
    .unwrap();

    let config = load_from(&path).unwrap();
    let mut facade = CipherFacade::from_config(&config).unwrap();
    assert_eq!(facade.algorithm(), "RC2/ECB/PKCS5Padding");
    assert_eq!(facade.size(), Some(64));
    assert_eq!(facade.provider().map(|p| p.name()), Some("RustCrypto"));

    let key = facade.generate_key().unwrap();
    assert_eq!(key.as_secret().unwrap().len_bits(), 64);
    facade.set_key(key);
    let ciphertext = facade.encrypt(b"configured").unwrap();
    assert_eq!(facade.decrypt(&ciphertext).unwrap(), b"configured");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = load_from(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_unknown_provider_is_rejected() {
    let config = Config::from_toml_str("[cipher]\nprovider = \"NoSuchProvider\"\n").unwrap();
    let err = CipherFacade::from_config(&config).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownProvider(name) if name == "NoSuchProvider"));
}
