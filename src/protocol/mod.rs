//! Boundary encodings.
//!
//! Decoding of wire order packets into typed orders, and the session
//! snapshot and handshake payload formats carried inside orders.

pub mod snapshot;
pub mod wire;

pub use snapshot::{decode_session, encode_session, HandshakeResponse, SnapshotError};
pub use wire::{decode_frame, decode_order, encode_frame, encode_order, OrderPacket, WireError};
