use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use hearth_config::{Error, MAX_RELAY_PROPERTIES, MAX_REMOTE_RESULTS};

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn sample_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let mut table = root.as_table_mut().expect("Sample config must be a table.");

	for part in section.split('.') {
		table = table
			.get_mut(part)
			.and_then(Value::as_table_mut)
			.unwrap_or_else(|| panic!("Sample config must include [{section}]."));
	}

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render sample config.")
}

fn write_temp_config(raw: &str) -> PathBuf {
	let nanos = SystemTime::now().duration_since(UNIX_EPOCH).expect("Clock error.").as_nanos();
	let seq = COUNTER.fetch_add(1, Ordering::SeqCst);
	let path = env::temp_dir().join(format!("hearth_config_test_{nanos}_{seq}.toml"));

	fs::write(&path, raw).expect("Failed to write temp config.");

	path
}

fn validation_message(raw: &str) -> String {
	match hearth_config::parse(raw) {
		Err(Error::Validation { message }) => message,
		other => panic!("Expected validation error, got {other:?}."),
	}
}

#[test]
fn sample_config_loads_from_disk() {
	let path = write_temp_config(SAMPLE_CONFIG_TOML);
	let cfg = hearth_config::load(&path).expect("Failed to load sample config.");

	fs::remove_file(&path).ok();

	assert_eq!(cfg.retrieval.max_results, MAX_REMOTE_RESULTS);
	assert_eq!(cfg.relay.max_properties, MAX_RELAY_PROPERTIES);
	assert_eq!(cfg.retrieval.search_type, "text");
}

#[test]
fn trailing_slash_is_removed_from_api_base() {
	let cfg = hearth_config::parse(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");

	assert_eq!(cfg.providers.llm.api_base, "https://api.openai.com");
}

#[test]
fn retrieval_section_is_optional() {
	let mut root: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");

	root.as_table_mut().expect("Sample config must be a table.").remove("retrieval");

	let raw = toml::to_string(&root).expect("Failed to render sample config.");
	let cfg = hearth_config::parse(&raw).expect("Config without [retrieval] should load.");

	assert_eq!(cfg.retrieval.max_results, 50);
	assert_eq!(cfg.retrieval.search_type, "text");
}

#[test]
fn missing_file_reports_path() {
	let path = env::temp_dir().join("hearth_config_test_missing.toml");

	match hearth_config::load(&path) {
		Err(Error::ReadConfig { path: reported, .. }) => assert_eq!(reported, path),
		other => panic!("Expected read error, got {other:?}."),
	}
}

#[test]
fn rejects_max_results_above_cap() {
	let raw = sample_with("retrieval", "max_results", Value::Integer(51));

	assert_eq!(validation_message(&raw), "retrieval.max_results must be in the range 1-50.");
}

#[test]
fn rejects_zero_max_results() {
	let raw = sample_with("retrieval", "max_results", Value::Integer(0));

	assert!(validation_message(&raw).starts_with("retrieval.max_results"));
}

#[test]
fn rejects_relay_payload_above_ten_properties() {
	let raw = sample_with("relay", "max_properties", Value::Integer(11));

	assert_eq!(validation_message(&raw), "relay.max_properties must be in the range 1-10.");
}

#[test]
fn rejects_blank_search_type() {
	let raw = sample_with("retrieval", "search_type", Value::String("   ".to_string()));

	assert_eq!(validation_message(&raw), "retrieval.search_type must be non-empty.");
}

#[test]
fn rejects_blank_api_key() {
	let raw = sample_with("providers.llm", "api_key", Value::String(" ".to_string()));

	assert_eq!(validation_message(&raw), "Provider llm api_key must be non-empty.");
}

#[test]
fn rejects_out_of_range_temperature() {
	let raw = sample_with("providers.llm", "temperature", Value::Float(3.5));

	assert_eq!(
		validation_message(&raw),
		"providers.llm.temperature must be in the range 0.0-2.0."
	);
}

#[test]
fn rejects_non_string_default_headers() {
	let raw = sample_with("providers.llm.default_headers", "x-retries", Value::Integer(3));

	assert_eq!(
		validation_message(&raw),
		"providers.llm.default_headers values must be strings."
	);
}

#[test]
fn rejects_blank_relay_url() {
	let raw = sample_with("relay", "url", Value::String(String::new()));

	assert_eq!(validation_message(&raw), "relay.url must be non-empty.");
}
