use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::error::{ConfigError, GenerationError};

/// A backend able to turn a prompt into generated text.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Name of the backend, for logging.
    fn name(&self) -> &str;

    /// Send a prompt to the backend and return the generated text.
    async fn send_prompt(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationTuning,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationTuning {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetails {
    message: String,
}

/// Client for the Gemini generateContent endpoint.
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
    max_output_tokens: u32,
    temperature: f32,
}

impl GeminiClient {
    /// Validate the generation configuration. No I/O happens here.
    pub fn new(config: GenerationConfig) -> Result<Self, ConfigError> {
        let api_key = config.api_key.ok_or(ConfigError::MissingApiKey)?;
        Ok(Self {
            api_key,
            model: config.model,
            base_url: config.base_url,
            client: Client::new(),
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
        })
    }
}

/// Build the error for a non-success response, preferring the message
/// carried in the JSON error body over the raw payload.
fn api_error(status: StatusCode, body: String) -> GenerationError {
    let message = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body,
    };
    GenerationError::Api { status, message }
}

/// Pull the generated text out of the response envelope.
fn extract_generated_text(body: &str) -> Result<String, GenerationError> {
    let envelope: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::Envelope(format!("unexpected response shape: {e}")))?;

    let candidate = envelope
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| GenerationError::Envelope("response contains no candidates".to_string()))?;

    let part = candidate
        .content
        .parts
        .into_iter()
        .next()
        .ok_or_else(|| GenerationError::Envelope("candidate has no content parts".to_string()))?;

    Ok(part.text)
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn send_prompt(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationTuning {
                max_output_tokens: self.max_output_tokens,
                temperature: self.temperature,
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("X-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, response_text));
        }

        let text = extract_generated_text(&response_text)?;
        debug!("Gemini returned {} characters of generated text", text.len());
        Ok(text)
    }
}
