use crate::config::app::CipherSection;
use crate::enums::SymmetricAlgorithm;

/// A missing `[cipher]` section means the default symmetric recipe
pub fn default_cipher() -> CipherSection {
    CipherSection {
        symmetric: Some(SymmetricAlgorithm::Default),
        ..CipherSection::default()
    }
}
