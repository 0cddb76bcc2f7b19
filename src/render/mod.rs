//! Presentation views
//!
//! Stateless renderers keyed off the typed `AnalysisResult`:
//! - transcript entries with tone tags
//! - sentiment timeline points (and a plain-text sparkline)
//! - coaching card sections
//! - preformatted summary metrics
//!
//! Every builder is a pure function of the result; edge cases (empty
//! transcript, zero metrics, coaching lists of any length) render as empty
//! or zero views, never as errors.

mod coaching;
mod metrics;
mod report;
mod timeline;
mod transcript;

pub use coaching::{coaching_view, CoachingSectionView, CoachingView};
pub use metrics::{metrics_view, MetricsView, ENGAGEMENT_SEGMENTS};
pub use report::AnalysisReport;
pub use timeline::{sparkline, timeline_view, TimelinePoint};
pub use transcript::{transcript_view, Tone, TurnView};
