use reqwest::header::AUTHORIZATION;
use serde_json::{Map, Value};

#[test]
fn builds_bearer_auth_header() {
	let headers =
		hearth_providers::auth_headers("secret", &Map::new()).expect("Failed to build headers.");
	let value = headers.get(AUTHORIZATION).expect("Missing authorization header.");

	assert_eq!(value, "Bearer secret");
}

#[test]
fn merges_default_headers() {
	let mut defaults = Map::new();

	defaults.insert("anthropic-version".to_string(), Value::String("2023-06-01".to_string()));

	let headers =
		hearth_providers::auth_headers("secret", &defaults).expect("Failed to build headers.");

	assert_eq!(headers.get("anthropic-version").expect("Missing header."), "2023-06-01");
}

#[test]
fn rejects_non_string_default_header() {
	let mut defaults = Map::new();

	defaults.insert("x-retries".to_string(), Value::from(3));

	let err = hearth_providers::auth_headers("secret", &defaults).expect_err("Expected failure.");

	assert!(matches!(err, hearth_providers::Error::InvalidConfig { .. }));
}
