mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, LlmProviderConfig, MAX_RELAY_PROPERTIES, MAX_REMOTE_RESULTS, Postgres, Providers,
	Relay, Retrieval, Service, Storage,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse(&raw).map_err(|err| match err {
		Error::ParseConfig { source, .. } => Error::ParseConfig { path: path.to_path_buf(), source },
		other => other,
	})
}

pub fn parse(raw: &str) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: Default::default(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	for (label, value) in [
		("service.http_bind", &cfg.service.http_bind),
		("service.relay_bind", &cfg.service.relay_bind),
		("storage.postgres.dsn", &cfg.storage.postgres.dsn),
		("relay.url", &cfg.relay.url),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if !(1..=MAX_REMOTE_RESULTS).contains(&cfg.retrieval.max_results) {
		return Err(Error::Validation {
			message: format!("retrieval.max_results must be in the range 1-{MAX_REMOTE_RESULTS}."),
		});
	}
	if cfg.retrieval.search_type.is_empty() {
		return Err(Error::Validation {
			message: "retrieval.search_type must be non-empty.".to_string(),
		});
	}
	if !(1..=MAX_RELAY_PROPERTIES).contains(&cfg.relay.max_properties) {
		return Err(Error::Validation {
			message: format!(
				"relay.max_properties must be in the range 1-{MAX_RELAY_PROPERTIES}."
			),
		});
	}

	let llm = &cfg.providers.llm;

	if llm.api_key.trim().is_empty() {
		return Err(Error::Validation {
			message: "Provider llm api_key must be non-empty.".to_string(),
		});
	}
	if !llm.temperature.is_finite() {
		return Err(Error::Validation {
			message: "providers.llm.temperature must be a finite number.".to_string(),
		});
	}
	if !(0.0..=2.0).contains(&llm.temperature) {
		return Err(Error::Validation {
			message: "providers.llm.temperature must be in the range 0.0-2.0.".to_string(),
		});
	}
	if llm.max_tokens == 0 {
		return Err(Error::Validation {
			message: "providers.llm.max_tokens must be greater than zero.".to_string(),
		});
	}
	if llm.default_headers.values().any(|value| !value.is_string()) {
		return Err(Error::Validation {
			message: "providers.llm.default_headers values must be strings.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.retrieval.search_type = cfg.retrieval.search_type.trim().to_string();

	while cfg.providers.llm.api_base.ends_with('/') {
		cfg.providers.llm.api_base.pop();
	}
}
