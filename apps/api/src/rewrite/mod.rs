//! Rewrite client, the single point of entry for all calls to the hosted
//! text-rewriting service.
//!
//! ARCHITECTURAL RULE: no other module may call the rewriting API directly.
//! The service is an opaque collaborator: raw text + mode + instructions in,
//! rewritten text out. One attempt per call; failures propagate to the
//! caller as-is.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

use crate::models::resume::OptimizationMode;
use crate::templates::TemplateId;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
/// Hardcoded on purpose — a configurable model invites silent output drift.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("rewriting service returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single rewrite client shared by all handlers.
#[derive(Clone)]
pub struct RewriteClient {
    client: Client,
    api_key: String,
}

impl RewriteClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Rewrites raw resume text. The mode drives both the rule set and the
    /// sampling temperature; the template id selects formatting instructions.
    pub async fn rewrite(
        &self,
        raw_content: &str,
        mode: OptimizationMode,
        template_id: TemplateId,
        job_description: Option<&str>,
        job_title: Option<&str>,
    ) -> Result<String, RewriteError> {
        let system = prompts::build_system_prompt(mode, template_id, job_description, job_title);
        let user_content = prompts::build_user_content(raw_content, job_title);

        let request_body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            temperature: mode.temperature(),
            system: &system,
            messages: vec![Message {
                role: "user",
                content: &user_content,
            }],
        };

        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(RewriteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: MessagesResponse = response.json().await?;
        debug!(
            "Rewrite succeeded: input_tokens={}, output_tokens={}",
            parsed.usage.input_tokens, parsed.usage.output_tokens
        );

        parsed
            .content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.clone())
            .filter(|text| !text.trim().is_empty())
            .ok_or(RewriteError::EmptyContent)
    }
}
