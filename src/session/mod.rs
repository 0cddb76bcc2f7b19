//! Call session lifecycle
//!
//! This module owns the finite-state lifecycle of the single current
//! session (idle -> recording/processing -> analyzed/error):
//! - `CallSession`: the reducer-style state record with guarded transitions
//! - `SessionController`: the async orchestrator wiring capture to analysis

mod controller;
mod state;

pub use controller::SessionController;
pub use state::{CallSession, Phase, SessionError, SessionSnapshot};
