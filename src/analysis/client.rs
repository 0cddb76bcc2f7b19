use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use super::error::AnalysisError;
use super::prompt::{response_schema, ANALYSIS_REQUEST_TEXT, SYSTEM_INSTRUCTION};
use super::types::AnalysisResult;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Name of the environment variable carrying the service credential.
///
/// Absence is not validated upfront; it surfaces as an authentication
/// failure from the service on first use.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// The seam between the session state machine and the external service.
///
/// Production uses `GeminiClient`; tests substitute a mock.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Submit one audio clip for analysis. Single attempt, no retry; the
    /// caller decides whether the user may retry manually.
    async fn analyze(
        &self,
        audio: &[u8],
        mime_type: &str,
    ) -> Result<AnalysisResult, AnalysisError>;
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Client for the Gemini generateContent endpoint
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client with the credential read from the process environment.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MODEL)
    }
}

#[async_trait]
impl Analyzer for GeminiClient {
    async fn analyze(
        &self,
        audio: &[u8],
        mime_type: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let audio_b64 = base64::engine::general_purpose::STANDARD.encode(audio);
        let request = build_generate_request(&audio_b64, mime_type);

        info!(
            "Submitting {} bytes of {} audio for analysis (model={})",
            audio.len(),
            mime_type,
            self.model
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Status(status.as_u16()));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
            .ok_or(AnalysisError::EmptyResponse)?;

        debug!("Analysis candidate text: {} bytes", text.len());

        parse_analysis(&text)
    }
}

/// Build the deterministic generateContent request body.
///
/// `audio_b64` must already be bare base64 (no data-URL prefix).
pub fn build_generate_request(audio_b64: &str, mime_type: &str) -> Value {
    json!({
        "systemInstruction": {
            "parts": [{ "text": SYSTEM_INSTRUCTION }]
        },
        "contents": [{
            "parts": [
                { "text": ANALYSIS_REQUEST_TEXT },
                {
                    "inlineData": {
                        "mimeType": mime_type,
                        "data": audio_b64
                    }
                }
            ]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

/// Strip a `data:<mime>;base64,` prefix if present, leaving bare base64.
pub fn strip_data_url_prefix(data: &str) -> &str {
    if data.starts_with("data:") {
        match data.split_once(',') {
            Some((_, rest)) => rest,
            None => data,
        }
    } else {
        data
    }
}

/// Parse and validate candidate text as a complete `AnalysisResult`.
///
/// Any deviation from the schema is a hard failure; there is no best-effort
/// partial parse.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, AnalysisError> {
    let result: AnalysisResult = serde_json::from_str(text)
        .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;
    result.validate()?;
    Ok(result)
}
