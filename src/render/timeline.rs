use serde::Serialize;

use crate::analysis::{timestamp_seconds, AnalysisResult};

const SPARK_LEVELS: [char; 8] = ['\u{2581}', '\u{2582}', '\u{2583}', '\u{2584}', '\u{2585}', '\u{2586}', '\u{2587}', '\u{2588}'];

/// One point on the sentiment timeline
#[derive(Debug, Clone, Serialize)]
pub struct TimelinePoint {
    /// M:SS label as received
    pub label: String,
    /// Seconds since call start, when the label parses
    pub seconds: Option<u64>,
    /// Sentiment over domain [-1, 1]
    pub sentiment: f64,
}

/// Ordered per-turn sentiment points for charting
pub fn timeline_view(result: &AnalysisResult) -> Vec<TimelinePoint> {
    result
        .transcript
        .iter()
        .map(|turn| TimelinePoint {
            label: turn.timestamp.clone(),
            seconds: timestamp_seconds(&turn.timestamp),
            sentiment: turn.sentiment,
        })
        .collect()
}

/// Plain-text sparkline over the [-1, 1] sentiment domain, one glyph per
/// point. Empty input renders an empty string.
pub fn sparkline(points: &[TimelinePoint]) -> String {
    points
        .iter()
        .map(|p| {
            let normalized = (p.sentiment.clamp(-1.0, 1.0) + 1.0) / 2.0;
            let index = (normalized * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
            SPARK_LEVELS[index]
        })
        .collect()
}
