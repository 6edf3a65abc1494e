//! Remote-first property retrieval with sample-data fallback.
//!
//! Every operation tries the gateway first. An error or an empty answer moves on to the sample
//! store; nothing past that point fails; gateway errors come back as text next to the results.

use hearth_domain::{Property, SearchFilters, normalize_query, parse_remote_id};
use serde::{Deserialize, Serialize};

use crate::{HearthService, catalog::sample_key, classifier};

/// Which stage produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalSource {
	Remote,
	Fallback,
	Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Retrieval {
	pub results: Vec<Property>,
	pub source: RetrievalSource,
	/// Gateway failure that triggered the fallback, if any.
	pub error: Option<String>,
}
impl Retrieval {
	fn remote(results: Vec<Property>) -> Self {
		Self { results, source: RetrievalSource::Remote, error: None }
	}

	fn fallback(results: Vec<Property>, error: Option<String>) -> Self {
		let source =
			if results.is_empty() { RetrievalSource::Empty } else { RetrievalSource::Fallback };

		Self { results, source, error }
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lookup {
	pub property: Option<Property>,
	pub source: RetrievalSource,
}

impl HearthService {
	pub async fn list(&self, filters: &SearchFilters) -> Retrieval {
		let remote = self.gateway.list(filters).await;

		self.settle(remote, &filters.location_query(), "list")
	}

	pub async fn search(&self, text: &str) -> Retrieval {
		let remote = self.gateway.search(text.trim()).await;

		self.settle(remote, text, "search")
	}

	/// Looks `id` up remotely when it is a well-formed remote identifier, then in the sample
	/// store. Malformed identifiers never reach the gateway.
	pub async fn get_property(&self, id: &str) -> Lookup {
		if let Some(remote_id) = parse_remote_id(id.trim()) {
			match self.gateway.get_by_id(remote_id).await {
				Ok(Some(property)) =>
					return Lookup { property: Some(property), source: RetrievalSource::Remote },
				Ok(None) => tracing::info!(%remote_id, "Property not found remotely."),
				Err(err) => {
					tracing::warn!(%remote_id, error = %err, "Remote lookup failed. Using samples.");
				},
			}
		}

		match self.catalog.get(&sample_key(id)) {
			Some(property) =>
				Lookup { property: Some(property.clone()), source: RetrievalSource::Fallback },
			None => Lookup { property: None, source: RetrievalSource::Empty },
		}
	}

	/// Classifier output for `query`, memoized per normalized query.
	pub fn sample_results(&self, query: &str) -> Vec<Property> {
		let normalized = normalize_query(query);

		self.cache
			.get_or_insert_with(&normalized, || classifier::classify(&self.catalog, &normalized))
	}

	fn settle(
		&self,
		remote: crate::Result<Vec<Property>>,
		fallback_query: &str,
		operation: &'static str,
	) -> Retrieval {
		let error = match remote {
			Ok(results) if !results.is_empty() => return Retrieval::remote(results),
			Ok(_) => {
				tracing::info!(operation, "Remote returned no properties. Using samples.");

				None
			},
			Err(err) => {
				tracing::warn!(operation, error = %err, "Remote retrieval failed. Using samples.");

				Some(err.to_string())
			},
		};

		Retrieval::fallback(self.sample_results(fallback_query), error)
	}
}
