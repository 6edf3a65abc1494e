use serde::{Deserialize, Serialize};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// AI commentary for one query. Scores are opaque model output; only the 0-100 range and
/// "higher is better" are meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiInsightResult {
	pub insight: String,
	#[serde(default)]
	pub recommendations: Vec<Recommendation>,
	pub market_analysis: String,
	pub search_tips: String,
}
impl AiInsightResult {
	/// Locally synthesized result used whenever the relay cannot produce one.
	pub fn unavailable(query: &str) -> Self {
		Self {
			insight: format!("AI insights for \"{}\" are temporarily unavailable.", query.trim()),
			recommendations: Vec::new(),
			market_analysis: "Market analysis is currently unavailable. Check back shortly for pricing trends in this area.".to_string(),
			search_tips: "Try narrowing your search by city, price range, or property type to surface the most relevant listings.".to_string(),
		}
	}

	/// Score recommended for `property_id`, or zero when the property was not recommended. The
	/// first recommendation for a given property wins.
	pub fn score_for(&self, property_id: &str) -> f64 {
		self.recommendations
			.iter()
			.find(|rec| rec.property_id == property_id)
			.map(|rec| rec.score)
			.unwrap_or(0.0)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
	pub property_id: String,
	pub reason: String,
	pub score: f64,
}
impl Recommendation {
	pub fn is_in_range(&self) -> bool {
		self.score.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&self.score)
	}

	pub fn clamp_score(&mut self) {
		self.score =
			if self.score.is_finite() { self.score.clamp(MIN_SCORE, MAX_SCORE) } else { MIN_SCORE };
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rec(id: &str, score: f64) -> Recommendation {
		Recommendation { property_id: id.to_string(), reason: "fit".to_string(), score }
	}

	#[test]
	fn unavailable_mentions_query_and_has_no_recommendations() {
		let result = AiInsightResult::unavailable("  lake house  ");

		assert!(result.insight.contains("lake house"));
		assert!(result.recommendations.is_empty());
		assert!(!result.market_analysis.is_empty());
		assert!(!result.search_tips.is_empty());
	}

	#[test]
	fn missing_recommendation_scores_zero() {
		let mut result = AiInsightResult::unavailable("q");

		result.recommendations = vec![rec("a", 91.0), rec("a", 12.0)];

		assert_eq!(result.score_for("a"), 91.0);
		assert_eq!(result.score_for("b"), 0.0);
	}

	#[test]
	fn clamps_out_of_range_scores() {
		let mut high = rec("a", 140.0);
		let mut nan = rec("b", f64::NAN);

		high.clamp_score();
		nan.clamp_score();

		assert_eq!(high.score, 100.0);
		assert_eq!(nan.score, 0.0);
		assert!(high.is_in_range() && nan.is_in_range());
	}
}
