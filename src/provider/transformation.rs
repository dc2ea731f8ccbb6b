// src/provider/transformation.rs
//! `ALG[/MODE[/PADDING]]` transformation strings

use crate::error::BackendError;

/// A parsed transformation. Mode and padding are `None` when omitted,
/// so each cipher family can pick its own defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation<'a> {
    pub algorithm: &'a str,
    pub mode: Option<&'a str>,
    pub padding: Option<&'a str>,
}

impl<'a> Transformation<'a> {
    pub fn parse(raw: &'a str) -> Result<Self, BackendError> {
        let invalid = || BackendError::NoSuchAlgorithm(raw.to_owned());

        let mut parts = raw.split('/').map(str::trim);
        let algorithm = parts.next().filter(|p| !p.is_empty()).ok_or_else(invalid)?;
        let mode = parts.next();
        let padding = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }
        // "AES/" or "AES//PKCS5Padding" are malformed, not "use the default"
        if mode.is_some_and(str::is_empty) || padding.is_some_and(str::is_empty) {
            return Err(invalid());
        }

        Ok(Self {
            algorithm,
            mode,
            padding,
        })
    }

    pub fn mode_or(&self, default: &'a str) -> &'a str {
        self.mode.unwrap_or(default)
    }

    pub fn padding_or(&self, default: &'a str) -> &'a str {
        self.padding.unwrap_or(default)
    }
}
