use hearth_config::MAX_RELAY_PROPERTIES;
use hearth_domain::{AiInsightResult, Property};
use hearth_providers::relay::InsightRequest;

use crate::HearthService;

impl HearthService {
	/// Asks the relay for insights on `properties` (truncated to the configured cap, never more
	/// than ten). Always resolves: any failure yields [`AiInsightResult::unavailable`].
	pub async fn analyze(
		&self,
		query: &str,
		properties: &[Property],
		search_type: &str,
	) -> AiInsightResult {
		let request = InsightRequest {
			query: query.to_string(),
			properties: properties.iter().take(self.relay_property_cap()).cloned().collect(),
			search_type: search_type.to_string(),
		};

		match self.providers.relay.request(&self.cfg.relay, &request).await {
			Ok(response) => match response.into_result() {
				Some(result) => result,
				None => {
					tracing::warn!(query, "Insight relay reported failure. Using local fallback.");

					AiInsightResult::unavailable(query)
				},
			},
			Err(err) => {
				tracing::warn!(query, error = %err, "Insight relay request failed. Using local fallback.");

				AiInsightResult::unavailable(query)
			},
		}
	}

	fn relay_property_cap(&self) -> usize {
		self.cfg.relay.max_properties.min(MAX_RELAY_PROPERTIES) as usize
	}
}
