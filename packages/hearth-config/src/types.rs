use serde::Deserialize;
use serde_json::{Map, Value};

pub const MAX_REMOTE_RESULTS: u32 = 50;
pub const MAX_RELAY_PROPERTIES: u32 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub retrieval: Retrieval,
	pub relay: Relay,
	pub providers: Providers,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	/// Address of the AI relay function router.
	pub relay_bind: String,
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Retrieval {
	/// Row cap applied to every remote list and search query.
	#[serde(default = "default_max_results")]
	pub max_results: u32,
	/// Tag recorded next to each remote text search.
	#[serde(default = "default_search_type")]
	pub search_type: String,
}
impl Default for Retrieval {
	fn default() -> Self {
		Self { max_results: default_max_results(), search_type: default_search_type() }
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Relay {
	pub url: String,
	pub timeout_ms: u64,
	#[serde(default = "default_max_properties")]
	pub max_properties: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Providers {
	pub llm: LlmProviderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub temperature: f32,
	#[serde(default = "default_max_tokens")]
	pub max_tokens: u32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

fn default_max_results() -> u32 {
	MAX_REMOTE_RESULTS
}

fn default_search_type() -> String {
	"text".to_string()
}

fn default_max_properties() -> u32 {
	MAX_RELAY_PROPERTIES
}

fn default_max_tokens() -> u32 {
	1_024
}
