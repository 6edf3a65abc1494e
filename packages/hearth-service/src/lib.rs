pub mod cache;
pub mod catalog;
pub mod classifier;
pub mod gateway;
pub mod insights;
pub mod relay;
pub mod retrieval;
pub mod session;

mod error;

pub use cache::ResultCache;
pub use catalog::SampleCatalog;
pub use error::{Error, Result};
pub use gateway::PgGateway;
pub use retrieval::{Lookup, Retrieval, RetrievalSource};
pub use session::{SearchSession, SearchState, SearchTicket};

use std::{future::Future, pin::Pin, sync::Arc};

use hearth_config::{Config, LlmProviderConfig, Relay};
use hearth_domain::{Property, SearchFilters};
use hearth_providers::{
	llm,
	relay::{self as relay_client, InsightRequest, InsightResponse},
};
use serde_json::Value;
use uuid::Uuid;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The hosted listing store. Implementations report failures and never fall back on their own.
pub trait PropertyGateway
where
	Self: Send + Sync,
{
	fn list<'a>(&'a self, filters: &'a SearchFilters) -> BoxFuture<'a, Result<Vec<Property>>>;

	fn search<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<Vec<Property>>>;

	fn get_by_id(&self, id: Uuid) -> BoxFuture<'_, Result<Option<Property>>>;
}

pub trait InsightRelay
where
	Self: Send + Sync,
{
	fn request<'a>(
		&'a self,
		cfg: &'a Relay,
		request: &'a InsightRequest,
	) -> BoxFuture<'a, hearth_providers::Result<InsightResponse>>;
}

pub trait LlmProvider
where
	Self: Send + Sync,
{
	fn complete<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, hearth_providers::Result<String>>;
}

#[derive(Clone)]
pub struct Providers {
	pub relay: Arc<dyn InsightRelay>,
	pub llm: Arc<dyn LlmProvider>,
}
impl Providers {
	pub fn new(relay: Arc<dyn InsightRelay>, llm: Arc<dyn LlmProvider>) -> Self {
		Self { relay, llm }
	}
}
impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);

		Self { relay: provider.clone(), llm: provider }
	}
}

pub struct HearthService {
	pub cfg: Config,
	pub gateway: Arc<dyn PropertyGateway>,
	pub catalog: SampleCatalog,
	pub cache: Arc<ResultCache>,
	pub providers: Providers,
}
impl HearthService {
	pub fn new(cfg: Config, gateway: Arc<dyn PropertyGateway>) -> Self {
		Self::with_providers(cfg, gateway, Providers::default())
	}

	pub fn with_providers(
		cfg: Config,
		gateway: Arc<dyn PropertyGateway>,
		providers: Providers,
	) -> Self {
		Self {
			cfg,
			gateway,
			catalog: SampleCatalog::default(),
			cache: Arc::new(ResultCache::new()),
			providers,
		}
	}

	/// Shares `cache` instead of the private one created by the constructors.
	pub fn with_cache(mut self, cache: Arc<ResultCache>) -> Self {
		self.cache = cache;

		self
	}

	pub fn with_catalog(mut self, catalog: SampleCatalog) -> Self {
		self.catalog = catalog;

		self
	}
}

struct DefaultProviders;
impl InsightRelay for DefaultProviders {
	fn request<'a>(
		&'a self,
		cfg: &'a Relay,
		request: &'a InsightRequest,
	) -> BoxFuture<'a, hearth_providers::Result<InsightResponse>> {
		Box::pin(relay_client::request_insights(cfg, request))
	}
}
impl LlmProvider for DefaultProviders {
	fn complete<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, hearth_providers::Result<String>> {
		Box::pin(llm::complete(cfg, messages))
	}
}
