// src/config/mod.rs
//! Configuration system for cipher-facade
//!
//! TOML file + env override, with built-in defaults when no file exists.

pub use app::{load, load_from, CipherSection, Config};

mod app;
mod defaults;
