use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::SampleFormat;
use hound::{WavSpec, WavWriter};
use tracing::{info, warn};

use super::clip::{AudioClip, CaptureError};

/// In-memory microphone recorder.
///
/// The cpal stream is not `Send`, so it lives on a dedicated capture thread
/// for the duration of a recording. The device is released on every exit
/// path: normal stop, start failure, and drop.
pub struct MicrophoneRecorder {
    active: Option<ActiveRecording>,
}

struct ActiveRecording {
    stop: Arc<AtomicBool>,
    samples: Arc<Mutex<Vec<i16>>>,
    sample_rate: u32,
    channels: u16,
    thread: Option<JoinHandle<()>>,
}

impl Drop for ActiveRecording {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl MicrophoneRecorder {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Acquire the default input device and start buffering audio.
    ///
    /// Any acquisition failure (no device, permission, stream error) is
    /// reported as `MicrophoneUnavailable`; the detailed cause goes to logs.
    pub fn start(&mut self) -> Result<(), CaptureError> {
        if self.active.is_some() {
            return Err(CaptureError::AlreadyRecording);
        }

        let stop = Arc::new(AtomicBool::new(false));
        let samples = Arc::new(Mutex::new(Vec::new()));
        let (ready_tx, ready_rx) = mpsc::channel();

        let thread_stop = Arc::clone(&stop);
        let thread_samples = Arc::clone(&samples);
        let thread = std::thread::spawn(move || {
            capture_loop(thread_stop, thread_samples, ready_tx);
        });

        match ready_rx.recv() {
            Ok(Ok((sample_rate, channels))) => {
                info!(
                    "Microphone capture started ({}Hz, {} channels)",
                    sample_rate, channels
                );
                self.active = Some(ActiveRecording {
                    stop,
                    samples,
                    sample_rate,
                    channels,
                    thread: Some(thread),
                });
                Ok(())
            }
            Ok(Err(cause)) => {
                warn!("Microphone acquisition failed: {}", cause);
                let _ = thread.join();
                Err(CaptureError::MicrophoneUnavailable)
            }
            Err(_) => {
                warn!("Capture thread exited before reporting readiness");
                let _ = thread.join();
                Err(CaptureError::MicrophoneUnavailable)
            }
        }
    }

    /// Finalize the buffered audio into one WAV clip and release the device.
    ///
    /// Returns `None` when no recording is active (stop is a no-op then).
    pub fn stop(&mut self) -> Result<Option<AudioClip>, CaptureError> {
        let Some(mut active) = self.active.take() else {
            return Ok(None);
        };

        active.stop.store(true, Ordering::SeqCst);
        if let Some(thread) = active.thread.take() {
            let _ = thread.join();
        }

        let samples = active
            .samples
            .lock()
            .map(|mut buf| std::mem::take(&mut *buf))
            .unwrap_or_default();

        info!(
            "Microphone capture stopped: {} samples at {}Hz",
            samples.len(),
            active.sample_rate
        );

        let bytes = encode_wav(&samples, active.sample_rate, active.channels)?;
        Ok(Some(AudioClip::new(bytes, "audio/wav")))
    }
}

impl Default for MicrophoneRecorder {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the cpal stream for the duration of a recording.
///
/// Reports readiness (or the acquisition failure) once, then parks until the
/// stop flag is set. Dropping the stream releases the device.
fn capture_loop(
    stop: Arc<AtomicBool>,
    samples: Arc<Mutex<Vec<i16>>>,
    ready: mpsc::Sender<Result<(u32, u16), String>>,
) {
    let host = cpal::default_host();

    let Some(device) = host.default_input_device() else {
        let _ = ready.send(Err("no default input device".to_string()));
        return;
    };

    let supported = match device.default_input_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            let _ = ready.send(Err(format!("no usable input config: {}", e)));
            return;
        }
    };

    let sample_rate = supported.sample_rate().0;
    let channels = supported.channels();
    let sample_format = supported.sample_format();
    let stream_config: cpal::StreamConfig = supported.into();

    let stream = match sample_format {
        SampleFormat::F32 => {
            let samples = Arc::clone(&samples);
            device.build_input_stream(
                &stream_config,
                move |data: &[f32], _| push_f32(&samples, data),
                stream_error,
                None,
            )
        }
        SampleFormat::I16 => {
            let samples = Arc::clone(&samples);
            device.build_input_stream(
                &stream_config,
                move |data: &[i16], _| push_i16(&samples, data),
                stream_error,
                None,
            )
        }
        other => {
            let _ = ready.send(Err(format!("unsupported sample format: {:?}", other)));
            return;
        }
    };

    let stream = match stream {
        Ok(s) => s,
        Err(e) => {
            let _ = ready.send(Err(format!("failed to build input stream: {}", e)));
            return;
        }
    };

    if let Err(e) = stream.play() {
        let _ = ready.send(Err(format!("failed to start input stream: {}", e)));
        return;
    }

    let _ = ready.send(Ok((sample_rate, channels)));

    while !stop.load(Ordering::SeqCst) {
        std::thread::sleep(Duration::from_millis(50));
    }

    // Dropping the stream releases the microphone
    drop(stream);
}

fn stream_error(err: cpal::StreamError) {
    warn!("Audio input stream error: {}", err);
}

fn push_f32(samples: &Arc<Mutex<Vec<i16>>>, data: &[f32]) {
    if let Ok(mut buf) = samples.lock() {
        buf.extend(
            data.iter()
                .map(|&s| (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16),
        );
    }
}

fn push_i16(samples: &Arc<Mutex<Vec<i16>>>, data: &[i16]) {
    if let Ok(mut buf) = samples.lock() {
        buf.extend_from_slice(data);
    }
}

/// Encode interleaved i16 PCM samples as an in-memory WAV file
pub fn encode_wav(samples: &[i16], sample_rate: u32, channels: u16) -> Result<Vec<u8>, CaptureError> {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec)
            .map_err(|e| CaptureError::Encode(e.to_string()))?;
        for &sample in samples {
            writer
                .write_sample(sample)
                .map_err(|e| CaptureError::Encode(e.to_string()))?;
        }
        writer
            .finalize()
            .map_err(|e| CaptureError::Encode(e.to_string()))?;
    }

    Ok(cursor.into_inner())
}
