//! Chat-completions client (OpenAI wire format, DeepSeek by default).

use crate::config::AssistantConfig;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

const SYSTEM_PROMPT: &str =
    "You are a friendly, practical horticulture assistant for houseplant owners.";

/// Send one prompt and return the assistant's answer.
pub fn ask(cfg: &AssistantConfig, prompt: &str) -> AppResult<String> {
    if cfg.api_key.trim().is_empty() {
        return Err(AppError::Config(
            "assistant.api_key is empty; set it with `plantlog config --edit`".into(),
        ));
    }

    let request = ChatRequest {
        model: &cfg.model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT,
            },
            ChatMessage {
                role: "user",
                content: prompt,
            },
        ],
        max_tokens: cfg.max_tokens,
        temperature: cfg.temperature,
    };

    let client = super::http_client()?;
    let response = client
        .post(format!(
            "{}/v1/chat/completions",
            cfg.base_url.trim_end_matches('/')
        ))
        .bearer_auth(&cfg.api_key)
        .json(&request)
        .send()?;

    let parsed: ChatResponse = super::check_status(response)?.json()?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| AppError::Other("assistant returned no answer".into()))
}
