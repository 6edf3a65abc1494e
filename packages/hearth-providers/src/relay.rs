//! Client half of the AI insight relay and the wire types both halves share.

use std::time::Duration;

use hearth_domain::{AiInsightResult, Property};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightRequest {
	pub query: String,
	#[serde(default)]
	pub properties: Vec<Property>,
	#[serde(rename = "searchType", default)]
	pub search_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightResponse {
	pub success: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<AiInsightResult>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}
impl InsightResponse {
	pub fn ok(data: AiInsightResult) -> Self {
		Self { success: true, data: Some(data), error: None }
	}

	pub fn failed(error: impl Into<String>, fallback: AiInsightResult) -> Self {
		Self { success: false, data: Some(fallback), error: Some(error.into()) }
	}

	/// The result to show, present only on success.
	pub fn into_result(self) -> Option<AiInsightResult> {
		if self.success { self.data } else { None }
	}
}

/// Posts one request to the relay endpoint. Non-2xx statuses are errors.
pub async fn request_insights(
	cfg: &hearth_config::Relay,
	request: &InsightRequest,
) -> Result<InsightResponse> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let res = client.post(&cfg.url).json(request).send().await?;
	let json: InsightResponse = res.error_for_status()?.json().await?;

	Ok(json)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_uses_camel_case_search_type() {
		let request = InsightRequest {
			query: "condo".to_string(),
			properties: Vec::new(),
			search_type: "text".to_string(),
		};
		let json = serde_json::to_value(&request).expect("encode failed");

		assert_eq!(json["searchType"], "text");
		assert!(json.get("search_type").is_none());
	}

	#[test]
	fn unsuccessful_response_yields_nothing() {
		let response: InsightResponse = serde_json::from_value(serde_json::json!({
			"success": false,
			"error": "provider down",
			"data": {
				"insight": "fallback",
				"recommendations": [],
				"market_analysis": "",
				"search_tips": ""
			}
		}))
		.expect("decode failed");

		assert!(response.into_result().is_none());
	}

	#[test]
	fn successful_response_without_data_yields_nothing() {
		let response: InsightResponse =
			serde_json::from_value(serde_json::json!({ "success": true })).expect("decode failed");

		assert!(response.into_result().is_none());
	}
}
