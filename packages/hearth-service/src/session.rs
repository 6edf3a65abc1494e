//! Observable search state for one UI session.
//!
//! Each `list` or `search` takes a ticket. A response is applied only when its ticket is the
//! most recent one, so an older request that resolves late cannot overwrite newer results.

use std::sync::{
	Mutex,
	atomic::{AtomicU64, Ordering},
};

use hearth_domain::{Property, SearchFilters};
use serde::Serialize;

use crate::{HearthService, Retrieval, RetrievalSource};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
	pub query: String,
	pub filters: SearchFilters,
	pub loading: bool,
	pub results: Vec<Property>,
	pub source: Option<RetrievalSource>,
	/// Shown as a dismissible banner; results stay visible alongside it.
	pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
	generation: u64,
}

#[derive(Debug, Default)]
pub struct SearchSession {
	generation: AtomicU64,
	state: Mutex<SearchState>,
}
impl SearchSession {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a request for `query` and supersedes every earlier ticket.
	pub fn begin(&self, query: &str) -> SearchTicket {
		let mut state = self.state.lock().unwrap_or_else(|err| err.into_inner());
		let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

		state.query = query.to_string();
		state.loading = true;

		SearchTicket { generation }
	}

	/// Applies `retrieval` if `ticket` is still current. Returns whether it was applied.
	pub fn complete(&self, ticket: &SearchTicket, retrieval: Retrieval) -> bool {
		let mut state = self.state.lock().unwrap_or_else(|err| err.into_inner());
		let latest = self.generation.load(Ordering::SeqCst);

		if ticket.generation != latest {
			tracing::debug!(
				ticket = ticket.generation,
				latest,
				"Discarding stale search response."
			);

			return false;
		}

		state.loading = false;
		state.results = retrieval.results;
		state.source = Some(retrieval.source);
		state.error = retrieval.error;

		true
	}

	pub fn snapshot(&self) -> SearchState {
		self.state.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}

	pub fn dismiss_error(&self) {
		self.state.lock().unwrap_or_else(|err| err.into_inner()).error = None;
	}

	/// Overlays the fields present in `update` onto the session filters and returns the result.
	pub fn update_filters(&self, update: SearchFilters) -> SearchFilters {
		let mut state = self.state.lock().unwrap_or_else(|err| err.into_inner());

		state.filters.apply(update);

		state.filters.clone()
	}

	pub fn replace_filters(&self, filters: SearchFilters) {
		self.state.lock().unwrap_or_else(|err| err.into_inner()).filters = filters;
	}

	pub async fn search(&self, service: &HearthService, query: &str) -> bool {
		let ticket = self.begin(query);
		let retrieval = service.search(query).await;

		self.complete(&ticket, retrieval)
	}

	/// Lists with the session's current filters.
	pub async fn list(&self, service: &HearthService) -> bool {
		let filters = self.snapshot().filters;
		let ticket = self.begin(&filters.location_query());
		let retrieval = service.list(&filters).await;

		self.complete(&ticket, retrieval)
	}
}
