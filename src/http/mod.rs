//! HTTP API server for the session lifecycle
//!
//! One session per process, driven over REST:
//! - GET  /session               - current phase plus result or error
//! - GET  /session/report        - rendered views of the analyzed call
//! - POST /session/audio         - submit an uploaded clip (base64 + MIME)
//! - POST /session/record/start  - begin a live recording
//! - POST /session/record/stop   - finalize and analyze
//! - POST /session/reset         - back to idle
//! - GET  /health                - health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
