//! Blocking client for an OpenAI-compatible `/responses` endpoint

use crate::evidence::model::display_name;
use crate::io::configuration::{
    DEFAULT_BASE_URL, DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    REQUEST_TIMEOUT_SECS,
};
use crate::io::error::{BrandError, Result, WithPath};
use crate::io::image::read_data_url;
use crate::vision::design::DesignData;
use crate::vision::prompts::{SYSTEM_PROMPT, user_prompt};
use crate::vision::schema::{SCHEMA_NAME, design_data_schema};
use reqwest::blocking::Client;
use serde_json::{Value, json};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

const MAX_ERROR_BODY_CHARS: usize = 500;

/// Model and endpoint settings for vision requests
#[derive(Debug, Clone, PartialEq)]
pub struct VisionSettings {
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Token ceiling for each response
    pub max_output_tokens: u32,
    /// API base URL without the trailing endpoint
    pub base_url: String,
}

impl Default for VisionSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Sends one structured-output request per image
#[derive(Debug, Clone)]
pub struct VisionClient {
    http: Client,
    api_key: String,
    settings: VisionSettings,
}

impl VisionClient {
    /// Build a client with the request timeout applied
    ///
    /// # Errors
    ///
    /// Returns a vision request error when the HTTP client cannot be constructed
    pub fn new(api_key: String, settings: VisionSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            api_key,
            settings,
        })
    }

    /// Endpoint the requests are posted to
    pub fn endpoint(&self) -> String {
        format!("{}/responses", self.settings.base_url.trim_end_matches('/'))
    }

    /// Request body for an image already encoded as a data URL
    pub fn request_body(&self, image_name: &str, data_url: &str) -> Value {
        json!({
            "model": self.settings.model,
            "input": [
                {
                    "role": "system",
                    "content": [{ "type": "input_text", "text": SYSTEM_PROMPT }],
                },
                {
                    "role": "user",
                    "content": [
                        { "type": "input_text", "text": user_prompt(image_name) },
                        { "type": "input_image", "image_url": data_url, "detail": "auto" },
                    ],
                },
            ],
            "temperature": self.settings.temperature,
            "max_output_tokens": self.settings.max_output_tokens,
            "text": {
                "format": {
                    "type": "json_schema",
                    "name": SCHEMA_NAME,
                    "schema": design_data_schema(),
                    "strict": true,
                }
            },
        })
    }

    /// Analyze a single image
    ///
    /// # Errors
    ///
    /// Returns an error naming `path` when the file cannot be read, the request
    /// fails, the status is not successful, or the output is empty or not valid
    /// design data
    pub fn analyze(&self, path: &Path) -> Result<DesignData> {
        let data_url = read_data_url(path)?;
        let body = self.request_body(&display_name(path), &data_url);

        info!(path = %path.display(), model = %self.settings.model, "requesting vision analysis");
        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .with_path(path)?;

        let status = response.status();
        if !status.is_success() {
            let body: String = response
                .text()
                .unwrap_or_default()
                .chars()
                .take(MAX_ERROR_BODY_CHARS)
                .collect();
            return Err(BrandError::VisionStatus {
                path: path.to_path_buf(),
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().with_path(path)?;
        let text = output_text(&payload).ok_or_else(|| BrandError::VisionResponse {
            path: path.to_path_buf(),
            reason: "response contained no output text".to_string(),
        })?;
        debug!(path = %path.display(), chars = text.len(), "vision output received");

        parse_design_data(&text).map_err(|e| BrandError::VisionResponse {
            path: path.to_path_buf(),
            reason: format!("output is not valid design data: {e}"),
        })
    }
}

/// Locate the model's text output in a `/responses` payload
///
/// Prefers the top-level `output_text`, otherwise concatenates every
/// `output[].content[].text`. Blank output yields `None`.
pub fn output_text(payload: &Value) -> Option<String> {
    let direct = payload
        .get("output_text")
        .and_then(Value::as_str)
        .map(str::to_string);

    let text = direct.unwrap_or_else(|| {
        payload
            .get("output")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|item| item.get("content").and_then(Value::as_array))
            .flatten()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect::<String>()
    });

    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parse model output into design data
///
/// # Errors
///
/// Returns the serde error when the text is not a JSON object of the expected shape
pub fn parse_design_data(text: &str) -> serde_json::Result<DesignData> {
    serde_json::from_str(text)
}
