//! Local participant configuration.
//!
//! Loaded from JSON. Every field is optional; missing fields fall back to
//! the defaults below.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::session::Color;

/// Order latency used until the first sync arrives.
pub const DEFAULT_ORDER_LATENCY: u32 = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Identity announced to the server in a handshake response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocalIdentity {
    pub name: String,
    pub color1: Color,
    pub color2: Color,
    pub password: String,
}

impl Default for LocalIdentity {
    fn default() -> Self {
        LocalIdentity {
            name: "Test Player".to_string(),
            color1: Color::PALE_GREEN,
            color2: Color::PEACH_PUFF,
            password: "Foo".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Index of the local client in the lobby.
    pub local_client_index: u32,
    /// Frames ahead before any sync has been received.
    pub initial_order_latency: u32,
    pub identity: LocalIdentity,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        DispatchConfig {
            local_client_index: 0,
            initial_order_latency: DEFAULT_ORDER_LATENCY,
            identity: LocalIdentity::default(),
        }
    }
}

impl DispatchConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }
}
