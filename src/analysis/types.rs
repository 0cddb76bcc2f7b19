use serde::{Deserialize, Serialize};

use super::error::AnalysisError;

/// Speaker role assigned by diarization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    Salesperson,
    Prospect,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::Salesperson => "Salesperson",
            Speaker::Prospect => "Prospect",
        }
    }
}

/// One diarized utterance from the call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptTurn {
    /// Who spoke this turn
    pub speaker: Speaker,

    /// What was said
    pub text: String,

    /// Position in the call, formatted M:SS (e.g. "1:07")
    pub timestamp: String,

    /// Per-turn sentiment, -1.0 (frustrated) to 1.0 (excited)
    pub sentiment: f64,
}

/// A single piece of coaching feedback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachingInsight {
    pub title: String,
    pub description: String,
}

/// Paired strengths / missed-opportunities feedback block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachingCard {
    pub strengths: Vec<CoachingInsight>,
    #[serde(rename = "missedOpportunities")]
    pub missed_opportunities: Vec<CoachingInsight>,
}

/// Speaking-time split between the two parties, as percentages.
///
/// The two values usually sum to ~100 but the service does not guarantee it,
/// so they are carried as independent numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalkRatio {
    pub sales: f64,
    pub prospect: f64,
}

/// Call-level summary metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(rename = "talkRatio")]
    pub talk_ratio: TalkRatio,

    /// Whole-call sentiment, displayed with its sign
    #[serde(rename = "overallSentiment")]
    pub overall_sentiment: f64,

    /// Synthetic prospect-interest score, 0 to 100
    #[serde(rename = "engagementScore")]
    pub engagement_score: f64,
}

/// The complete typed result of one analysis call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub transcript: Vec<TranscriptTurn>,
    #[serde(rename = "coachingCard")]
    pub coaching_card: CoachingCard,
    pub metrics: Metrics,
}

impl AnalysisResult {
    /// Check the parsed response against the documented domains.
    ///
    /// The service declares a strict output schema, but it is a third party:
    /// anything outside the contract rejects the whole result rather than
    /// rendering a partial one.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        for (i, turn) in self.transcript.iter().enumerate() {
            if turn.text.trim().is_empty() {
                return Err(AnalysisError::InvalidResult(format!(
                    "transcript turn {} has empty text",
                    i
                )));
            }
            if !is_call_timestamp(&turn.timestamp) {
                return Err(AnalysisError::InvalidResult(format!(
                    "transcript turn {} has malformed timestamp {:?} (expected M:SS)",
                    i, turn.timestamp
                )));
            }
            if !(-1.0..=1.0).contains(&turn.sentiment) {
                return Err(AnalysisError::InvalidResult(format!(
                    "transcript turn {} sentiment {} outside [-1, 1]",
                    i, turn.sentiment
                )));
            }
        }

        let score = self.metrics.engagement_score;
        if !(0.0..=100.0).contains(&score) {
            return Err(AnalysisError::InvalidResult(format!(
                "engagement score {} outside [0, 100]",
                score
            )));
        }

        // Talk ratio and overall sentiment are accepted as received: the
        // service does not guarantee the split sums to 100 and the views
        // display whatever arrives.
        Ok(())
    }
}

/// True if `s` looks like an M:SS call timestamp (e.g. "0:00", "12:45")
fn is_call_timestamp(s: &str) -> bool {
    let Some((minutes, seconds)) = s.split_once(':') else {
        return false;
    };
    if minutes.is_empty() || !minutes.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if seconds.len() != 2 || !seconds.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    // Seconds field is 00-59
    seconds.parse::<u8>().map(|v| v < 60).unwrap_or(false)
}

/// Parse an M:SS timestamp into seconds since call start (for the timeline)
pub fn timestamp_seconds(s: &str) -> Option<u64> {
    let (minutes, seconds) = s.split_once(':')?;
    let m: u64 = minutes.parse().ok()?;
    let sec: u64 = seconds.parse().ok()?;
    Some(m * 60 + sec)
}
