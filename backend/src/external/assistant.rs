//! Generative language API client backing the irrigation chat assistant

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Chat relay client
#[derive(Clone)]
pub struct AssistantClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct GenerateMessageRequest {
    prompt: MessagePrompt,
    temperature: f64,
    #[serde(rename = "candidateCount")]
    candidate_count: u32,
    #[serde(rename = "topP")]
    top_p: f64,
    #[serde(rename = "topK")]
    top_k: u32,
}

#[derive(Debug, Serialize)]
struct MessagePrompt {
    messages: Vec<PromptMessage>,
}

#[derive(Debug, Serialize)]
struct PromptMessage {
    author: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct GenerateMessageResponse {
    #[serde(default)]
    candidates: Vec<MessageCandidate>,
}

#[derive(Debug, Deserialize)]
struct MessageCandidate {
    content: String,
}

impl AssistantClient {
    /// Create a new AssistantClient against the default endpoint
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(
            api_key,
            "https://generativelanguage.googleapis.com/v1beta2".to_string(),
            model,
        )
    }

    /// Create a new AssistantClient with custom base URL (configuration or testing)
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
            model,
            timeout: Duration::from_secs(10),
        }
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether an API key has been configured
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Relay a user message, with forecast context prepended as a system turn
    pub async fn generate_reply(&self, context: &str, message: &str) -> AppResult<String> {
        let url = format!(
            "{}/models/{}:generateMessage?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = GenerateMessageRequest {
            prompt: MessagePrompt {
                messages: vec![
                    PromptMessage {
                        author: "system".to_string(),
                        content: context.to_string(),
                    },
                    PromptMessage {
                        author: "user".to_string(),
                        content: message.to_string(),
                    },
                ],
            },
            temperature: 0.7,
            candidate_count: 1,
            top_p: 0.8,
            top_k: 40,
        };

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalService(format!("Assistant API request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Assistant API error: {} - {}",
                status, body
            )));
        }

        let data: GenerateMessageResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse assistant response: {}", e))
        })?;

        data.candidates
            .into_iter()
            .next()
            .map(|c| c.content)
            .ok_or_else(|| AppError::ExternalService("Assistant returned no candidates".to_string()))
    }
}
