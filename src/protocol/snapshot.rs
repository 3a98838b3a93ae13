//! Session snapshot and handshake payload encoding.
//!
//! Snapshots travel as the text payload of handshake and sync orders. The
//! encoding is JSON and round-trips every client record and global setting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::{Color, Session};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn encode_session(session: &Session) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(session)?)
}

pub fn decode_session(s: &str) -> Result<Session, SnapshotError> {
    Ok(serde_json::from_str(s)?)
}

/// Identity and capabilities a client sends back in answer to a handshake
/// request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandshakeResponse {
    pub name: String,
    pub color1: Color,
    pub color2: Color,
    pub mods: Vec<String>,
    pub password: String,
}

impl HandshakeResponse {
    pub fn encode(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(s: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(s)?)
    }
}
