use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::analysis::AnalysisResult;

/// Lifecycle phase of the current call session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Recording,
    Processing,
    Analyzed,
    Error,
}

/// Transition refused by the state machine
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("A recording is already in progress")]
    StillRecording,

    #[error("An analysis is already in flight")]
    StillProcessing,

    #[error("Cannot reset while recording or processing")]
    ResetWhileBusy,

    #[error("No analysis is in flight")]
    NotProcessing,
}

/// The single current-session record.
///
/// Holds at most one `AnalysisResult` or one error message, never both.
/// All mutation goes through explicit transitions so the lifecycle stays
/// auditable and testable in isolation from any rendering layer.
#[derive(Debug)]
pub struct CallSession {
    session_id: Option<String>,
    phase: Phase,
    analysis: Option<AnalysisResult>,
    error: Option<String>,
    started_at: Option<DateTime<Utc>>,
}

/// Serializable point-in-time view of the session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Option<String>,
    pub phase: Phase,
    pub analysis: Option<AnalysisResult>,
    pub error: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
}

impl CallSession {
    pub fn new() -> Self {
        Self {
            session_id: None,
            phase: Phase::Idle,
            analysis: None,
            error: None,
            started_at: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a new capture action may start right now
    pub fn capture_allowed(&self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Recording => Err(SessionError::StillRecording),
            Phase::Processing => Err(SessionError::StillProcessing),
            _ => Ok(()),
        }
    }

    /// Idle/Analyzed/Error -> Recording. Clears any prior result and error.
    pub fn begin_recording(&mut self) -> Result<(), SessionError> {
        self.capture_allowed()?;
        self.session_id = Some(format!("call-{}", uuid::Uuid::new_v4()));
        self.analysis = None;
        self.error = None;
        self.started_at = Some(Utc::now());
        self.phase = Phase::Recording;
        Ok(())
    }

    /// Enter Processing, from Recording (stop finalized a clip) or directly
    /// from Idle/Analyzed/Error (file selection). Clears any prior result
    /// and error.
    pub fn begin_processing(&mut self) -> Result<(), SessionError> {
        if self.phase == Phase::Processing {
            return Err(SessionError::StillProcessing);
        }
        if self.phase != Phase::Recording {
            // Fresh capture action; a stopped recording keeps its identity
            self.session_id = Some(format!("call-{}", uuid::Uuid::new_v4()));
            self.started_at = Some(Utc::now());
        }
        self.analysis = None;
        self.error = None;
        self.phase = Phase::Processing;
        Ok(())
    }

    /// Processing -> Analyzed with the exact result attached
    pub fn complete(&mut self, result: AnalysisResult) -> Result<(), SessionError> {
        if self.phase != Phase::Processing {
            return Err(SessionError::NotProcessing);
        }
        self.analysis = Some(result);
        self.error = None;
        self.phase = Phase::Analyzed;
        Ok(())
    }

    /// Any phase -> Error with a human-readable message. An analysis is
    /// all-or-nothing, so any partial result is dropped here.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.analysis = None;
        self.error = Some(message.into());
        self.phase = Phase::Error;
    }

    /// Analyzed/Error/Idle -> Idle, discarding result and error.
    ///
    /// Refused while Recording or Processing: in-flight work has no
    /// cancellation path.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Recording | Phase::Processing => Err(SessionError::ResetWhileBusy),
            _ => {
                self.session_id = None;
                self.analysis = None;
                self.error = None;
                self.started_at = None;
                self.phase = Phase::Idle;
                Ok(())
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.session_id.clone(),
            phase: self.phase,
            analysis: self.analysis.clone(),
            error: self.error.clone(),
            started_at: self.started_at,
        }
    }
}

impl Default for CallSession {
    fn default() -> Self {
        Self::new()
    }
}
