use std::path::Path;
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::state::{CallSession, SessionError, SessionSnapshot};
use crate::analysis::Analyzer;
use crate::capture::{AudioClip, CaptureError, MicrophoneRecorder};

/// Orchestrates the capture -> analyze -> render pipeline for the single
/// current session.
///
/// Guard violations (starting a capture while busy, resetting mid-flight)
/// come back as `SessionError`; capture and analysis failures land in the
/// session record as its Error state instead.
pub struct SessionController {
    session: Arc<RwLock<CallSession>>,
    recorder: Arc<StdMutex<MicrophoneRecorder>>,
    analyzer: Arc<dyn Analyzer>,
    analysis_task: Mutex<Option<JoinHandle<()>>>,
}

impl SessionController {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            session: Arc::new(RwLock::new(CallSession::new())),
            recorder: Arc::new(StdMutex::new(MicrophoneRecorder::new())),
            analyzer,
            analysis_task: Mutex::new(None),
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.read().await.snapshot()
    }

    /// Handle a user-selected audio file: read it, then submit for analysis.
    pub async fn select_file(&self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        self.session.read().await.capture_allowed()?;

        match AudioClip::from_file(path).await {
            Ok(clip) => self.submit_clip(clip).await,
            Err(e) => {
                error!("File selection failed: {}", e);
                self.session.write().await.fail(e.to_string());
                Ok(())
            }
        }
    }

    /// Transition to Processing and dispatch exactly one analysis task for
    /// this clip. The only way out of Processing is the task's outcome.
    pub async fn submit_clip(&self, clip: AudioClip) -> Result<(), SessionError> {
        self.session.write().await.begin_processing()?;

        info!(
            "Dispatching analysis: {} bytes of {}",
            clip.bytes.len(),
            clip.mime_type
        );

        let analyzer = Arc::clone(&self.analyzer);
        let session = Arc::clone(&self.session);

        let handle = tokio::spawn(async move {
            match analyzer.analyze(&clip.bytes, &clip.mime_type).await {
                Ok(result) => {
                    let mut session = session.write().await;
                    match session.complete(result) {
                        Ok(()) => info!("Analysis complete"),
                        Err(e) => warn!("Discarding analysis result: {}", e),
                    }
                }
                Err(e) => {
                    // Cause is for diagnostics only; the user sees the
                    // generic message.
                    error!("Analysis failed: {}", e);
                    session.write().await.fail(e.user_message());
                }
            }
        });

        *self.analysis_task.lock().await = Some(handle);
        Ok(())
    }

    /// Acquire the microphone and enter Recording. A capture failure moves
    /// the session to Error with the capture message verbatim; no analysis
    /// call is made.
    pub async fn start_recording(&self) -> Result<(), SessionError> {
        self.session.write().await.begin_recording()?;

        let recorder = Arc::clone(&self.recorder);
        let started = tokio::task::spawn_blocking(move || {
            let mut recorder = recorder.lock().unwrap_or_else(|e| e.into_inner());
            recorder.start()
        })
        .await;

        match started {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                error!("Microphone capture failed: {}", e);
                self.session.write().await.fail(e.to_string());
                Ok(())
            }
            Err(e) => {
                error!("Capture task failed: {}", e);
                self.session
                    .write()
                    .await
                    .fail(CaptureError::MicrophoneUnavailable.to_string());
                Ok(())
            }
        }
    }

    /// Finalize the recording and submit the clip. A stop with no active
    /// recording is a no-op, so a second stop never dispatches a second
    /// analysis.
    pub async fn stop_recording(&self) -> Result<(), SessionError> {
        let recorder = Arc::clone(&self.recorder);
        let stopped = tokio::task::spawn_blocking(move || {
            let mut recorder = recorder.lock().unwrap_or_else(|e| e.into_inner());
            recorder.stop()
        })
        .await;

        match stopped {
            Ok(Ok(Some(clip))) => self.submit_clip(clip).await,
            Ok(Ok(None)) => {
                info!("Stop requested with no active recording");
                Ok(())
            }
            Ok(Err(e)) => {
                error!("Failed to finalize recording: {}", e);
                self.session.write().await.fail(e.to_string());
                Ok(())
            }
            Err(e) => {
                error!("Capture task failed: {}", e);
                self.session
                    .write()
                    .await
                    .fail(CaptureError::MicrophoneUnavailable.to_string());
                Ok(())
            }
        }
    }

    /// Return to Idle, discarding the prior result or error
    pub async fn reset(&self) -> Result<(), SessionError> {
        self.session.write().await.reset()
    }

    /// Await the in-flight analysis task, if any. Used by the one-shot CLI
    /// path and by tests; the HTTP surface polls the snapshot instead.
    pub async fn wait_for_analysis(&self) {
        let handle = self.analysis_task.lock().await.take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                error!("Analysis task panicked: {}", e);
                self.session
                    .write()
                    .await
                    .fail("Failed to analyze audio. Please check the file and try again.");
            }
        }
    }
}
