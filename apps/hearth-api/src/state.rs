use std::sync::Arc;

use hearth_service::{HearthService, PgGateway};
use hearth_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<HearthService>,
}
impl AppState {
	pub async fn new(config: hearth_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let gateway = PgGateway::new(db, &config.retrieval);

		Ok(Self::from_service(HearthService::new(config, Arc::new(gateway))))
	}

	pub fn from_service(service: HearthService) -> Self {
		Self { service: Arc::new(service) }
	}
}
