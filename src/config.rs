use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Settings for the external analysis service.
///
/// The API key is deliberately not part of the file: it comes from the
/// process environment (`GEMINI_API_KEY`) and its absence surfaces as an
/// authentication failure on first use, not at startup.
#[derive(Debug, Deserialize)]
pub struct GeminiConfig {
    pub model: String,
    pub base_url: String,
}

impl Config {
    /// Load configuration from an optional file over built-in defaults
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "vocaledge")?
            .set_default("service.http.bind", "127.0.0.1")?
            .set_default("service.http.port", 8787)?
            .set_default("gemini.model", "gemini-3-pro-preview")?
            .set_default(
                "gemini.base_url",
                "https://generativelanguage.googleapis.com",
            )?
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
