// Tests for the capture adapter pieces that need no audio hardware:
// WAV finalization and file selection.

use anyhow::Result;
use vocaledge::capture::{encode_wav, AudioClip, CaptureError};

#[test]
fn test_encode_wav_round_trips_through_hound() -> Result<()> {
    let samples: Vec<i16> = vec![0, 100, -100, i16::MAX, i16::MIN];
    let bytes = encode_wav(&samples, 16000, 1)?;

    let reader = hound::WavReader::new(std::io::Cursor::new(bytes))?;
    let spec = reader.spec();
    assert_eq!(spec.sample_rate, 16000);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);

    let decoded: Vec<i16> = reader.into_samples::<i16>().collect::<Result<_, _>>()?;
    assert_eq!(decoded, samples);

    Ok(())
}

#[test]
fn test_encode_wav_handles_empty_recording() -> Result<()> {
    let bytes = encode_wav(&[], 48000, 2)?;

    let reader = hound::WavReader::new(std::io::Cursor::new(bytes))?;
    assert_eq!(reader.len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_from_file_guesses_audio_mime_from_extension() -> Result<()> {
    let dir = tempfile::TempDir::new()?;

    let wav_path = dir.path().join("call.wav");
    std::fs::write(&wav_path, [0u8; 16])?;
    let clip = AudioClip::from_file(&wav_path).await?;
    assert_eq!(clip.mime_type, "audio/wav");
    assert_eq!(clip.bytes.len(), 16);

    let mp3_path = dir.path().join("call.MP3");
    std::fs::write(&mp3_path, [0u8; 8])?;
    let clip = AudioClip::from_file(&mp3_path).await?;
    assert_eq!(clip.mime_type, "audio/mpeg");

    Ok(())
}

#[tokio::test]
async fn test_from_file_unknown_extension_is_advisory_only() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("call.bin");
    std::fs::write(&path, [0u8; 4])?;

    // No hard rejection, just a fallback MIME type
    let clip = AudioClip::from_file(&path).await?;
    assert_eq!(clip.mime_type, "application/octet-stream");

    Ok(())
}

#[tokio::test]
async fn test_from_file_missing_file_fails() {
    let err = AudioClip::from_file("does/not/exist.wav")
        .await
        .expect_err("missing file must fail");
    assert!(matches!(err, CaptureError::File(_)));
}

#[test]
fn test_microphone_error_message_is_the_user_facing_one() {
    assert_eq!(
        CaptureError::MicrophoneUnavailable.to_string(),
        "Microphone access denied or not available."
    );
}
