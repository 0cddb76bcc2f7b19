//! Analysis client for the external generative service
//!
//! This module owns the full contract with the model:
//! - the fixed instruction set and strict output schema (`prompt`)
//! - the typed result and its defensive validation (`types`)
//! - the single-attempt request/response call (`client`)

mod client;
mod error;
mod prompt;
mod types;

pub use client::{
    build_generate_request, parse_analysis, strip_data_url_prefix, Analyzer, GeminiClient,
    API_KEY_ENV,
};
pub use error::AnalysisError;
pub use prompt::{response_schema, ANALYSIS_REQUEST_TEXT, SYSTEM_INSTRUCTION};
pub use types::{
    timestamp_seconds, AnalysisResult, CoachingCard, CoachingInsight, Metrics, Speaker, TalkRatio,
    TranscriptTurn,
};
