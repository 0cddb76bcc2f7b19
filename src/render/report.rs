use std::fmt::Write;

use serde::Serialize;

use super::coaching::{coaching_view, CoachingView};
use super::metrics::{metrics_view, MetricsView, ENGAGEMENT_SEGMENTS};
use super::timeline::{sparkline, timeline_view, TimelinePoint};
use super::transcript::{transcript_view, TurnView};
use crate::analysis::AnalysisResult;

/// Complete rendered view of one analysis.
///
/// A pure function of the typed result: no independent state, safe to
/// rebuild on every query.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub metrics: MetricsView,
    pub timeline: Vec<TimelinePoint>,
    pub transcript: Vec<TurnView>,
    pub coaching: CoachingView,
}

impl AnalysisReport {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            metrics: metrics_view(result),
            timeline: timeline_view(result),
            transcript: transcript_view(result),
            coaching: coaching_view(result),
        }
    }

    /// Plain-text rendering for the one-shot CLI path
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Call Intelligence Report");
        let _ = writeln!(out, "========================");
        let _ = writeln!(
            out,
            "Talk ratio:        {} salesperson / {} prospect",
            self.metrics.talk_ratio_sales, self.metrics.talk_ratio_prospect
        );
        let _ = writeln!(
            out,
            "Overall sentiment: {}",
            self.metrics.overall_sentiment
        );
        let _ = writeln!(
            out,
            "Engagement:        {} [{}{}]",
            self.metrics.engagement,
            "#".repeat(self.metrics.engagement_filled as usize),
            "-".repeat((ENGAGEMENT_SEGMENTS - self.metrics.engagement_filled) as usize),
        );

        if !self.timeline.is_empty() {
            let _ = writeln!(out, "\nSentiment timeline: {}", sparkline(&self.timeline));
        }

        if !self.transcript.is_empty() {
            let _ = writeln!(out, "\nTranscript");
            let _ = writeln!(out, "----------");
            for turn in &self.transcript {
                let _ = writeln!(
                    out,
                    "[{}] {} ({}): {}",
                    turn.timestamp,
                    turn.speaker,
                    turn.tone.label(),
                    turn.text
                );
            }
        }

        for section in [&self.coaching.strengths, &self.coaching.opportunities] {
            if section.items.is_empty() {
                continue;
            }
            let _ = writeln!(out, "\n{}", section.heading);
            let _ = writeln!(out, "{}", "-".repeat(section.heading.len()));
            for item in &section.items {
                let _ = writeln!(out, "* {}: {}", item.title, item.description);
            }
        }

        out
    }
}
