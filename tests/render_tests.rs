// Tests for the presentation views
//
// Renderers are pure functions of the typed result; these tests pin the
// display formats and the empty/zero edge cases.

use vocaledge::analysis::{
    AnalysisResult, CoachingCard, CoachingInsight, Metrics, Speaker, TalkRatio, TranscriptTurn,
};
use vocaledge::render::{
    metrics_view, sparkline, timeline_view, transcript_view, AnalysisReport, Tone,
};

fn result_with_metrics(sales: f64, prospect: f64, overall: f64, engagement: f64) -> AnalysisResult {
    AnalysisResult {
        transcript: vec![],
        coaching_card: CoachingCard {
            strengths: vec![],
            missed_opportunities: vec![],
        },
        metrics: Metrics {
            talk_ratio: TalkRatio { sales, prospect },
            overall_sentiment: overall,
            engagement_score: engagement,
        },
    }
}

fn turn(speaker: Speaker, text: &str, timestamp: &str, sentiment: f64) -> TranscriptTurn {
    TranscriptTurn {
        speaker,
        text: text.to_string(),
        timestamp: timestamp.to_string(),
        sentiment,
    }
}

/// Reference call: one positive salesperson turn, 60/40 split,
/// +0.3 overall, 75 engagement.
fn example_scenario() -> AnalysisResult {
    let mut result = result_with_metrics(60.0, 40.0, 0.3, 75.0);
    result.transcript = vec![turn(Speaker::Salesperson, "Hi", "0:00", 0.5)];
    result.coaching_card.strengths = vec![CoachingInsight {
        title: "Good opener".to_string(),
        description: "Warm, confident greeting.".to_string(),
    }];
    result
}

#[test]
fn test_example_scenario_metrics_panel() {
    let view = metrics_view(&example_scenario());

    assert_eq!(view.talk_ratio_sales, "60%");
    assert_eq!(view.talk_ratio_prospect, "40%");
    assert_eq!(view.overall_sentiment, "+0.3");
    assert_eq!(view.engagement, "75/100");
    assert_eq!(view.engagement_filled, 3);
}

#[test]
fn test_example_scenario_transcript_tagged_positive() {
    let turns = transcript_view(&example_scenario());

    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].speaker, "Salesperson");
    assert_eq!(turns[0].timestamp, "0:00");
    assert_eq!(turns[0].tone, Tone::Positive);
    assert_eq!(turns[0].tone.label(), "Positive");
}

#[test]
fn test_tone_thresholds() {
    assert_eq!(Tone::from_sentiment(0.31), Tone::Positive);
    assert_eq!(Tone::from_sentiment(0.3), Tone::Neutral);
    assert_eq!(Tone::from_sentiment(0.0), Tone::Neutral);
    assert_eq!(Tone::from_sentiment(-0.3), Tone::Neutral);
    assert_eq!(Tone::from_sentiment(-0.31), Tone::Concerns);
    assert_eq!(Tone::from_sentiment(-0.31).label(), "Concerns");
}

#[test]
fn test_zero_metrics_render_zero_not_undefined() {
    let view = metrics_view(&result_with_metrics(0.0, 0.0, 0.0, 0.0));

    assert_eq!(view.talk_ratio_sales, "0%");
    assert_eq!(view.talk_ratio_prospect, "0%");
    assert_eq!(view.overall_sentiment, "0.0");
    assert_eq!(view.engagement, "0/100");
    assert_eq!(view.engagement_filled, 0);
}

#[test]
fn test_negative_and_fractional_metrics_formatting() {
    let view = metrics_view(&result_with_metrics(62.5, 37.5, -0.42, 99.0));

    assert_eq!(view.talk_ratio_sales, "62.5%");
    assert_eq!(view.talk_ratio_prospect, "37.5%");
    assert_eq!(view.overall_sentiment, "-0.4");
    assert_eq!(view.engagement, "99/100");
    assert_eq!(view.engagement_filled, 4);
}

#[test]
fn test_full_engagement_fills_every_segment() {
    let view = metrics_view(&result_with_metrics(50.0, 50.0, 1.0, 100.0));
    assert_eq!(view.engagement, "100/100");
    assert_eq!(view.engagement_filled, 5);
}

#[test]
fn test_empty_transcript_renders_empty_views() {
    let result = result_with_metrics(50.0, 50.0, 0.0, 10.0);

    assert!(transcript_view(&result).is_empty());
    let timeline = timeline_view(&result);
    assert!(timeline.is_empty());
    assert_eq!(sparkline(&timeline), "");

    // The full report still builds fine
    let report = AnalysisReport::from_result(&result);
    assert!(report.transcript.is_empty());
}

#[test]
fn test_timeline_points_parse_timestamps() {
    let mut result = result_with_metrics(50.0, 50.0, 0.0, 50.0);
    result.transcript = vec![
        turn(Speaker::Salesperson, "Hi", "0:00", -1.0),
        turn(Speaker::Prospect, "Hello", "1:07", 0.0),
        turn(Speaker::Salesperson, "Great", "2:30", 1.0),
    ];

    let timeline = timeline_view(&result);
    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline[0].seconds, Some(0));
    assert_eq!(timeline[1].seconds, Some(67));
    assert_eq!(timeline[2].seconds, Some(150));

    // One glyph per point, extremes at the ends of the scale
    let spark = sparkline(&timeline);
    assert_eq!(spark.chars().count(), 3);
    assert_eq!(spark.chars().next(), Some('\u{2581}'));
    assert_eq!(spark.chars().last(), Some('\u{2588}'));
}

#[test]
fn test_coaching_lists_of_any_length_render() {
    // Strengths only, no opportunities
    let report = AnalysisReport::from_result(&example_scenario());
    assert_eq!(report.coaching.strengths.heading, "Winning Behaviors");
    assert_eq!(report.coaching.strengths.items.len(), 1);
    assert_eq!(report.coaching.opportunities.heading, "Growth Opportunities");
    assert!(report.coaching.opportunities.items.is_empty());

    let text = report.to_text();
    assert!(text.contains("Winning Behaviors"));
    assert!(text.contains("Good opener"));
    assert!(!text.contains("Growth Opportunities"));
}

#[test]
fn test_report_text_contains_metrics_and_transcript() {
    let text = AnalysisReport::from_result(&example_scenario()).to_text();

    assert!(text.contains("60% salesperson / 40% prospect"));
    assert!(text.contains("Overall sentiment: +0.3"));
    assert!(text.contains("75/100"));
    assert!(text.contains("[0:00] Salesperson (Positive): Hi"));
}
