use hearth_config::Retrieval;
use hearth_domain::{Property, SearchFilters};
use hearth_storage::{db::Db, properties};
use uuid::Uuid;

use crate::{BoxFuture, PropertyGateway, Result};

/// Gateway backed by the Postgres listing tables.
pub struct PgGateway {
	db: Db,
	limit: i64,
	search_type: String,
}
impl PgGateway {
	pub fn new(db: Db, cfg: &Retrieval) -> Self {
		Self { db, limit: i64::from(cfg.max_results), search_type: cfg.search_type.clone() }
	}

	async fn list_rows(&self, filters: &SearchFilters) -> Result<Vec<Property>> {
		Ok(properties::list_properties(&self.db.pool, filters, self.limit).await?)
	}

	async fn find(&self, id: Uuid) -> Result<Option<Property>> {
		Ok(properties::get_property(&self.db.pool, id).await?)
	}

	async fn search_and_record(&self, text: &str) -> Result<Vec<Property>> {
		let found = properties::search_properties(&self.db.pool, text, self.limit).await?;
		let pool = self.db.pool.clone();
		let query = text.to_string();
		let search_type = self.search_type.clone();

		// History writes never hold up or fail the search.
		tokio::spawn(async move {
			if let Err(err) = properties::record_search(&pool, &query, &search_type).await {
				tracing::warn!(error = %err, "Failed to record search history.");
			}
		});

		Ok(found)
	}
}
impl PropertyGateway for PgGateway {
	fn list<'a>(&'a self, filters: &'a SearchFilters) -> BoxFuture<'a, Result<Vec<Property>>> {
		Box::pin(self.list_rows(filters))
	}

	fn search<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<Vec<Property>>> {
		Box::pin(self.search_and_record(text))
	}

	fn get_by_id(&self, id: Uuid) -> BoxFuture<'_, Result<Option<Property>>> {
		Box::pin(self.find(id))
	}
}
