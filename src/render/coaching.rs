use serde::Serialize;

use crate::analysis::{AnalysisResult, CoachingInsight};

/// One section of the coaching card
#[derive(Debug, Clone, Serialize)]
pub struct CoachingSectionView {
    pub heading: String,
    pub items: Vec<CoachingInsight>,
}

/// Paired strengths / missed-opportunities view.
///
/// The service is asked for exactly 3 of each, but whatever arrives is
/// rendered: any length including zero.
#[derive(Debug, Clone, Serialize)]
pub struct CoachingView {
    pub strengths: CoachingSectionView,
    pub opportunities: CoachingSectionView,
}

pub fn coaching_view(result: &AnalysisResult) -> CoachingView {
    CoachingView {
        strengths: CoachingSectionView {
            heading: "Winning Behaviors".to_string(),
            items: result.coaching_card.strengths.clone(),
        },
        opportunities: CoachingSectionView {
            heading: "Growth Opportunities".to_string(),
            items: result.coaching_card.missed_opportunities.clone(),
        },
    }
}
