use std::{collections::HashMap, sync::Mutex};

use hearth_domain::{Property, normalize_query};

/// Memoized classifier output keyed by normalized query. Entries never expire; `clear` is the
/// only way to drop them.
#[derive(Debug, Default)]
pub struct ResultCache {
	entries: Mutex<HashMap<String, Vec<Property>>>,
}
impl ResultCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, query: &str) -> Option<Vec<Property>> {
		let entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());

		entries.get(&normalize_query(query)).cloned()
	}

	pub fn put(&self, query: &str, results: Vec<Property>) {
		let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());

		entries.insert(normalize_query(query), results);
	}

	/// Returns the cached entry, computing and storing it on a miss. The lock is held while
	/// `compute` runs, so concurrent misses for one key compute it once.
	pub fn get_or_insert_with(
		&self,
		query: &str,
		compute: impl FnOnce() -> Vec<Property>,
	) -> Vec<Property> {
		let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());

		entries.entry(normalize_query(query)).or_insert_with(compute).clone()
	}

	pub fn clear(&self) {
		self.entries.lock().unwrap_or_else(|err| err.into_inner()).clear();
	}

	pub fn len(&self) -> usize {
		self.entries.lock().unwrap_or_else(|err| err.into_inner()).len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
