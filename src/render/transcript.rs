use serde::Serialize;

use crate::analysis::{AnalysisResult, TranscriptTurn};

/// Tone tag derived from per-turn sentiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Positive,
    Neutral,
    Concerns,
}

impl Tone {
    /// Positive above 0.3, Concerns below -0.3, Neutral between
    pub fn from_sentiment(sentiment: f64) -> Self {
        if sentiment > 0.3 {
            Tone::Positive
        } else if sentiment < -0.3 {
            Tone::Concerns
        } else {
            Tone::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Positive => "Positive",
            Tone::Neutral => "Neutral",
            Tone::Concerns => "Concerns",
        }
    }
}

/// One rendered transcript entry
#[derive(Debug, Clone, Serialize)]
pub struct TurnView {
    pub speaker: String,
    pub timestamp: String,
    pub text: String,
    pub sentiment: f64,
    pub tone: Tone,
}

impl TurnView {
    fn from_turn(turn: &TranscriptTurn) -> Self {
        Self {
            speaker: turn.speaker.label().to_string(),
            timestamp: turn.timestamp.clone(),
            text: turn.text.clone(),
            sentiment: turn.sentiment,
            tone: Tone::from_sentiment(turn.sentiment),
        }
    }
}

/// Diarized transcript view. An empty transcript renders as an empty list,
/// not an error.
pub fn transcript_view(result: &AnalysisResult) -> Vec<TurnView> {
    result.transcript.iter().map(TurnView::from_turn).collect()
}
