pub mod analysis;
pub mod capture;
pub mod config;
pub mod http;
pub mod render;
pub mod session;

pub use analysis::{AnalysisError, AnalysisResult, Analyzer, GeminiClient};
pub use capture::{AudioClip, CaptureError, MicrophoneRecorder};
pub use config::Config;
pub use http::{create_router, AppState};
pub use render::AnalysisReport;
pub use session::{CallSession, Phase, SessionController, SessionError, SessionSnapshot};
