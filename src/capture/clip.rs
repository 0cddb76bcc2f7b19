use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Failure modes of the capture adapter.
///
/// Capture errors are surfaced to the user verbatim.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Microphone access denied or not available.")]
    MicrophoneUnavailable,

    #[error("A recording is already in progress.")]
    AlreadyRecording,

    #[error("Failed to read audio file: {0}")]
    File(String),

    #[error("Failed to encode recording: {0}")]
    Encode(String),
}

/// One finalized audio blob, ready for analysis
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl AudioClip {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Load a user-selected audio file.
    ///
    /// The MIME type is guessed from the extension; an unrecognized
    /// extension is advisory only (warn, never a hard rejection).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, CaptureError> {
        let path = path.as_ref();

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| CaptureError::File(format!("{}: {}", path.display(), e)))?;

        let mime_type = match guess_audio_mime(path) {
            Some(mime) => mime,
            None => {
                warn!(
                    "File {} has no recognized audio extension, submitting as octet-stream",
                    path.display()
                );
                "application/octet-stream"
            }
        };

        info!(
            "Selected audio file: {} ({} bytes, {})",
            path.display(),
            bytes.len(),
            mime_type
        );

        Ok(Self::new(bytes, mime_type))
    }
}

/// Map a file extension to its audio MIME type
fn guess_audio_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "wav" => Some("audio/wav"),
        "mp3" => Some("audio/mpeg"),
        "m4a" => Some("audio/mp4"),
        "ogg" => Some("audio/ogg"),
        "webm" => Some("audio/webm"),
        "flac" => Some("audio/flac"),
        _ => None,
    }
}
