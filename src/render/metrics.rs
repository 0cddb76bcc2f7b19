use serde::Serialize;

use crate::analysis::AnalysisResult;

/// Gauge segments in the engagement meter
pub const ENGAGEMENT_SEGMENTS: u8 = 5;

/// Summary metrics panel, preformatted for display.
///
/// Values are rendered as received from the service: the talk-ratio split is
/// not forced to sum to 100 and nothing is clamped here (out-of-domain
/// values were already rejected at validation).
#[derive(Debug, Clone, Serialize)]
pub struct MetricsView {
    /// e.g. "60%"
    pub talk_ratio_sales: String,
    /// e.g. "40%"
    pub talk_ratio_prospect: String,
    /// Signed, one decimal, e.g. "+0.3"
    pub overall_sentiment: String,
    /// e.g. "75/100"
    pub engagement: String,
    /// Filled segments out of `ENGAGEMENT_SEGMENTS` (score / 20)
    pub engagement_filled: u8,
}

/// Metrics panel view
pub fn metrics_view(result: &AnalysisResult) -> MetricsView {
    let m = &result.metrics;
    MetricsView {
        talk_ratio_sales: format_percent(m.talk_ratio.sales),
        talk_ratio_prospect: format_percent(m.talk_ratio.prospect),
        overall_sentiment: format_signed(m.overall_sentiment),
        engagement: format!("{:.0}/100", m.engagement_score),
        engagement_filled: engagement_filled(m.engagement_score),
    }
}

fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        format!("{}%", value)
    }
}

fn format_signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn engagement_filled(score: f64) -> u8 {
    let filled = (score / 20.0).floor();
    filled.clamp(0.0, ENGAGEMENT_SEGMENTS as f64) as u8
}
