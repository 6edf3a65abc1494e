//! Server half of the insight relay: prompt the LLM, then validate what comes back.
//!
//! Unparseable or incomplete model output is replaced by [`server_fallback`] and still reported
//! as success. Only a failed provider call is reported as failure.

use hearth_config::MAX_RELAY_PROPERTIES;
use hearth_domain::{AiInsightResult, Property};
use hearth_providers::{
	llm,
	relay::{InsightRequest, InsightResponse},
};
use serde_json::Value;

use crate::HearthService;

const SYSTEM_PROMPT: &str = "You are a real-estate market analyst. Reply with a single JSON object and nothing else. \
The object must have the keys \"insight\" (string), \"recommendations\" (array of objects with \
\"property_id\" (string), \"reason\" (string) and \"score\" (number from 0 to 100)), \
\"market_analysis\" (string) and \"search_tips\" (string). Only recommend property ids from the \
listings provided.";

const REQUIRED_TEXT_FIELDS: [&str; 3] = ["insight", "market_analysis", "search_tips"];

impl HearthService {
	pub async fn relay_insights(&self, mut request: InsightRequest) -> InsightResponse {
		request.properties.truncate(MAX_RELAY_PROPERTIES as usize);

		let messages = build_messages(&request);

		match self.providers.llm.complete(&self.cfg.providers.llm, &messages).await {
			Ok(text) => match parse_insight(&text) {
				Some(result) => InsightResponse::ok(result),
				None => {
					tracing::warn!(
						query = %request.query,
						"Provider reply did not match the insight shape. Using server fallback."
					);

					InsightResponse::ok(server_fallback(&request.query, &request.properties))
				},
			},
			Err(err) => {
				tracing::error!(query = %request.query, error = %err, "Insight provider call failed.");

				InsightResponse::failed(
					err.to_string(),
					server_fallback(&request.query, &request.properties),
				)
			},
		}
	}
}

pub fn build_messages(request: &InsightRequest) -> Vec<Value> {
	let listings: Vec<Value> = request.properties.iter().map(listing_summary).collect();
	let user = serde_json::json!({
		"query": request.query,
		"search_type": request.search_type,
		"properties": listings,
	});

	vec![
		serde_json::json!({ "role": "system", "content": SYSTEM_PROMPT }),
		serde_json::json!({ "role": "user", "content": user.to_string() }),
	]
}

/// Extracts and validates an insight object from free-form model output. Scores are clamped
/// into range. Returns `None` when no object is present or a required field is missing.
pub fn parse_insight(text: &str) -> Option<AiInsightResult> {
	let raw = llm::extract_json_object(text)?;
	let value: Value = serde_json::from_str(raw).ok()?;
	let object = value.as_object()?;

	if !REQUIRED_TEXT_FIELDS.iter().all(|field| object.get(*field).is_some_and(Value::is_string)) {
		return None;
	}
	if !object.get("recommendations").is_some_and(Value::is_array) {
		return None;
	}

	let mut result: AiInsightResult = serde_json::from_value(value).ok()?;

	for recommendation in &mut result.recommendations {
		recommendation.clamp_score();
	}

	Some(result)
}

/// Relay-side substitute for unusable model output.
pub fn server_fallback(query: &str, properties: &[Property]) -> AiInsightResult {
	let mut result = AiInsightResult::unavailable(query);

	result.insight = format!(
		"Found {} properties for \"{}\". Detailed AI analysis could not be generated for this search.",
		properties.len(),
		query.trim()
	);

	result
}

fn listing_summary(property: &Property) -> Value {
	serde_json::json!({
		"id": property.id,
		"address": property.address,
		"location": property.locality(),
		"property_type": property.property_type,
		"listing_type": property.listing_type,
		"bedrooms": property.bedrooms,
		"bathrooms": property.bathrooms,
		"square_feet": property.square_feet,
		"current_value": property.current_value,
		"year_built": property.year_built,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_object_wrapped_in_prose_and_clamps_scores() {
		let text = r#"Here is the analysis:
{"insight": "Luxury demand is strong.", "recommendations": [
  {"property_id": "prop-001", "reason": "Views", "score": 130},
  {"property_id": "prop-003", "reason": "Beach", "score": -4}
], "market_analysis": "Tight supply.", "search_tips": "Act fast."}
Thanks!"#;
		let result = parse_insight(text).expect("Expected insight.");

		assert_eq!(result.score_for("prop-001"), 100.0);
		assert_eq!(result.score_for("prop-003"), 0.0);
	}

	#[test]
	fn missing_required_field_is_rejected() {
		let text = r#"{"insight": "x", "recommendations": [], "market_analysis": "y"}"#;

		assert!(parse_insight(text).is_none());
	}

	#[test]
	fn wrong_field_type_is_rejected() {
		let text =
			r#"{"insight": "x", "recommendations": {}, "market_analysis": "y", "search_tips": "z"}"#;

		assert!(parse_insight(text).is_none());
		assert!(parse_insight("no json at all").is_none());
		assert!(parse_insight("{not json}").is_none());
	}

	#[test]
	fn server_fallback_mentions_query_and_count() {
		let properties = vec![Property::new("a", "1 Main St"), Property::new("b", "2 Main St")];
		let result = server_fallback(" condo ", &properties);

		assert!(result.insight.contains("\"condo\""));
		assert!(result.insight.contains('2'));
		assert!(result.recommendations.is_empty());
	}

	#[test]
	fn prompt_carries_query_and_listing_ids() {
		let request = InsightRequest {
			query: "austin family home".to_string(),
			properties: vec![Property::new("prop-004", "4817 Ridgeview Ln")],
			search_type: "text".to_string(),
		};
		let messages = build_messages(&request);
		let user = messages[1]["content"].as_str().expect("Expected user content.");

		assert_eq!(messages.len(), 2);
		assert!(user.contains("austin family home"));
		assert!(user.contains("prop-004"));
	}
}
