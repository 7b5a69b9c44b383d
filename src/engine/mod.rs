//! Host-facing controller.
//!
//! Owns the authoritative game, runs searches off the caller's thread and
//! hands results back through a channel.

mod controller;
mod error;

pub use controller::{EngineController, SearchJob};
pub use error::EngineError;
