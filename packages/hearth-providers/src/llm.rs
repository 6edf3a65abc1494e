use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use serde_json::Value;

use crate::{Error, Result};

// Greedy on purpose: first `{` through last `}` keeps nested objects intact.
const JSON_OBJECT_PATTERN: &str = r"\{[\s\S]*\}";

/// Sends a chat completion and returns the generated text.
pub async fn complete(cfg: &hearth_config::LlmProviderConfig, messages: &[Value]) -> Result<String> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"temperature": cfg.temperature,
		"max_tokens": cfg.max_tokens,
		"messages": messages,
	});
	let res = client
		.post(&url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	generated_text(&json)
}

/// Pulls the generated text out of an OpenAI-style (`choices[0].message.content`) or
/// Anthropic-style (`content[0].text`) response.
pub fn generated_text(json: &Value) -> Result<String> {
	let openai = json
		.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|c| c.as_str());
	let anthropic = || {
		json.get("content")
			.and_then(|v| v.as_array())
			.and_then(|arr| arr.first())
			.and_then(|block| block.get("text"))
			.and_then(|t| t.as_str())
	};

	openai.or_else(anthropic).map(str::to_string).ok_or_else(|| Error::InvalidResponse {
		message: "Provider response is missing generated text.".to_string(),
	})
}

/// The outermost `{...}` span in free-form generated text, if any.
pub fn extract_json_object(text: &str) -> Option<&str> {
	Regex::new(JSON_OBJECT_PATTERN).ok()?.find(text).map(|found| found.as_str())
}
