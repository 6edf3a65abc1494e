use std::{cmp::Ordering, collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
	insight::AiInsightResult,
	property::{Property, UnknownVariant},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
	#[default]
	Newest,
	PriceLow,
	PriceHigh,
	AiRecommended,
}
impl SortKey {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Newest => "newest",
			Self::PriceLow => "price-low",
			Self::PriceHigh => "price-high",
			Self::AiRecommended => "ai-recommended",
		}
	}
}
impl FromStr for SortKey {
	type Err = UnknownVariant;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		match raw.trim() {
			"newest" => Ok(Self::Newest),
			"price-low" => Ok(Self::PriceLow),
			"price-high" => Ok(Self::PriceHigh),
			"ai-recommended" => Ok(Self::AiRecommended),
			_ => Err(UnknownVariant { kind: "sort key", value: raw.to_string() }),
		}
	}
}
impl fmt::Display for SortKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Returns a reordered copy of `properties`; the input is left untouched.
///
/// Sorting is stable and there is no secondary key, so ties keep their input order.
/// `AiRecommended` reads scores from `insights`; without insights every score is zero and the
/// input order is preserved.
pub fn sort_properties(
	properties: &[Property],
	key: SortKey,
	insights: Option<&AiInsightResult>,
) -> Vec<Property> {
	let mut sorted = properties.to_vec();

	match key {
		SortKey::Newest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
		SortKey::PriceLow => sorted.sort_by_key(|property| property.current_value_or_zero()),
		SortKey::PriceHigh =>
			sorted.sort_by(|a, b| b.current_value_or_zero().cmp(&a.current_value_or_zero())),
		SortKey::AiRecommended => {
			let scores: HashMap<&str, f64> = insights
				.map(|insights| {
					insights
						.recommendations
						.iter()
						.rev()
						.map(|rec| (rec.property_id.as_str(), rec.score))
						.collect()
				})
				.unwrap_or_default();
			let score = |property: &Property| {
				scores.get(property.id.as_str()).copied().unwrap_or(0.0)
			};

			sorted.sort_by(|a, b| cmp_f64_desc(score(a), score(b)));
		},
	}

	sorted
}

/// Descending order with NaN sorted last.
pub fn cmp_f64_desc(a: f64, b: f64) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}

#[cfg(test)]
mod tests {
	use time::macros::datetime;

	use super::*;
	use crate::insight::Recommendation;

	fn priced(id: &str, value: Option<i64>) -> Property {
		let mut property = Property::new(id, format!("{id} Road"));

		property.current_value = value;

		property
	}

	fn ids(properties: &[Property]) -> Vec<&str> {
		properties.iter().map(|p| p.id.as_str()).collect()
	}

	#[test]
	fn price_high_reverses_price_low_for_distinct_values() {
		let input = vec![
			priced("a", Some(300)),
			priced("b", Some(100)),
			priced("c", Some(900)),
			priced("d", Some(450)),
		];
		let low = sort_properties(&input, SortKey::PriceLow, None);
		let high = sort_properties(&low, SortKey::PriceHigh, None);
		let mut reversed = ids(&low);

		reversed.reverse();

		assert_eq!(ids(&low), vec!["b", "a", "d", "c"]);
		assert_eq!(ids(&high), reversed);
	}

	#[test]
	fn missing_price_sorts_as_zero() {
		let input = vec![priced("a", Some(10)), priced("b", None), priced("c", Some(0))];

		assert_eq!(ids(&sort_properties(&input, SortKey::PriceLow, None)), vec!["b", "c", "a"]);
		assert_eq!(ids(&sort_properties(&input, SortKey::PriceHigh, None)), vec!["a", "b", "c"]);
	}

	#[test]
	fn input_is_not_mutated() {
		let input = vec![priced("a", Some(1)), priced("b", Some(2))];
		let before = input.clone();
		let _ = sort_properties(&input, SortKey::PriceHigh, None);

		assert_eq!(input, before);
	}

	#[test]
	fn newest_orders_by_creation_descending_with_unknown_last() {
		let mut old = priced("old", None);
		let mut new = priced("new", None);
		let unknown = priced("unknown", None);

		old.created_at = Some(datetime!(2023-01-01 0:00 UTC));
		new.created_at = Some(datetime!(2024-06-01 0:00 UTC));

		let sorted = sort_properties(&[unknown, old, new], SortKey::Newest, None);

		assert_eq!(ids(&sorted), vec!["new", "old", "unknown"]);
	}

	#[test]
	fn ai_recommended_uses_scores_and_zero_default() {
		let input = vec![priced("a", None), priced("b", None), priced("c", None)];
		let mut insights = AiInsightResult::unavailable("q");

		insights.recommendations = vec![
			Recommendation { property_id: "c".to_string(), reason: String::new(), score: 88.0 },
			Recommendation { property_id: "a".to_string(), reason: String::new(), score: 42.0 },
		];

		let sorted = sort_properties(&input, SortKey::AiRecommended, Some(&insights));

		assert_eq!(ids(&sorted), vec!["c", "a", "b"]);
		assert_eq!(
			ids(&sort_properties(&input, SortKey::AiRecommended, None)),
			vec!["a", "b", "c"]
		);
	}

	#[test]
	fn ties_keep_input_order() {
		let input = vec![priced("x", Some(5)), priced("y", Some(5)), priced("z", Some(5))];

		assert_eq!(ids(&sort_properties(&input, SortKey::PriceHigh, None)), vec!["x", "y", "z"]);
	}

	#[test]
	fn sort_keys_round_trip_through_text() {
		for key in [SortKey::Newest, SortKey::PriceLow, SortKey::PriceHigh, SortKey::AiRecommended]
		{
			assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
		}

		assert!("cheapest".parse::<SortKey>().is_err());
	}
}
