//! Shared RAG document assistant client library (config, REST wire types,
//! request dispatch). Used by the `doc-assist` CLI and the terminal UI.

pub mod api;
pub mod client;
pub mod config;

pub use api::{Answer, Document, Source};
pub use client::{Client, RequestError};
pub use config::{default_config_path, ApiSection, Config, ConfigError};
