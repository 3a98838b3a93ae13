//! Lobby-side session model.
//!
//! Contains the client records and global settings that every participant
//! keeps in agreement through handshake and sync orders.

pub mod client;
pub mod lobby;
pub mod settings;

pub use client::{Client, ClientState, Color};
pub use lobby::Session;
pub use settings::GlobalSettings;
