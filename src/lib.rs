//! Concord: deterministic order dispatch for lockstep RTS sessions.
//!
//! Exposes the session and world models, order decoding, the dispatcher,
//! and a multi-peer replay harness for integration tests and embedders.

pub mod config;
pub mod dispatch;
pub mod effects;
pub mod manager;
pub mod order;
pub mod protocol;
pub mod replay;
pub mod session;
pub mod world;

pub use dispatch::{process_frame, process_order, DispatchError};
pub use effects::{Effect, EffectLog, Effects};
pub use manager::OrderManager;
pub use order::{Order, OrderKind};
