//! Audio capture adapter
//!
//! Produces one finalized `AudioClip` per capture action, either from a
//! user-selected file or from a live microphone recording. The microphone
//! is a scoped acquisition: exactly one recording at a time, released on
//! every exit path.

mod clip;
mod microphone;

pub use clip::{AudioClip, CaptureError};
pub use microphone::{encode_wav, MicrophoneRecorder};
