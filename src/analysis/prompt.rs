//! Fixed instruction set and output-schema declaration for the analysis call.
//!
//! These are part of the external contract: the service is asked to honor
//! the schema, and the client still validates the parsed result afterwards.

use serde_json::{json, Value};

/// System instruction sent with every analysis request
pub const SYSTEM_INSTRUCTION: &str = "\
You are a world-class Sales Performance Coach.
Analyze the provided audio of a sales call.
1. Provide a diarized transcript distinguishing between the \"Salesperson\" and the \"Prospect\".
2. Assess sentiment for each turn on a scale of -1 (Frustrated/Negative) to 1 (Excited/Positive).
3. Generate a \"Coaching Card\" with exactly 3 things the salesperson did well (strengths) and 3 missed opportunities.
4. Calculate metrics: Talk Ratio (percentage), Overall Sentiment, and Engagement Score (0-100).

Output must be strictly valid JSON.";

/// User-visible part that accompanies the audio payload
pub const ANALYSIS_REQUEST_TEXT: &str =
    "Analyze this sales call audio and provide the requested intelligence.";

/// Structured-output schema the service is contracted to honor.
///
/// Field names and required-ness mirror `AnalysisResult` exactly.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "transcript": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "speaker": {
                            "type": "STRING",
                            "description": "Either 'Salesperson' or 'Prospect'"
                        },
                        "text": { "type": "STRING" },
                        "timestamp": {
                            "type": "STRING",
                            "description": "Format M:SS"
                        },
                        "sentiment": {
                            "type": "NUMBER",
                            "description": "Between -1 and 1"
                        }
                    },
                    "required": ["speaker", "text", "timestamp", "sentiment"]
                }
            },
            "coachingCard": {
                "type": "OBJECT",
                "properties": {
                    "strengths": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "title": { "type": "STRING" },
                                "description": { "type": "STRING" }
                            },
                            "required": ["title", "description"]
                        }
                    },
                    "missedOpportunities": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "title": { "type": "STRING" },
                                "description": { "type": "STRING" }
                            },
                            "required": ["title", "description"]
                        }
                    }
                },
                "required": ["strengths", "missedOpportunities"]
            },
            "metrics": {
                "type": "OBJECT",
                "properties": {
                    "talkRatio": {
                        "type": "OBJECT",
                        "properties": {
                            "sales": { "type": "NUMBER" },
                            "prospect": { "type": "NUMBER" }
                        },
                        "required": ["sales", "prospect"]
                    },
                    "overallSentiment": { "type": "NUMBER" },
                    "engagementScore": { "type": "NUMBER" }
                },
                "required": ["talkRatio", "overallSentiment", "engagementScore"]
            }
        },
        "required": ["transcript", "coachingCard", "metrics"]
    })
}
