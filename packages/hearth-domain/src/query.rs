use regex::Regex;
use uuid::Uuid;

/// Canonical 8-4-4-4-12 form with an RFC 4122 version (1-5) and variant (8, 9, a, b) nibble.
const REMOTE_ID_PATTERN: &str =
	r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";

/// Lower-cased, trimmed form of a search string. Cache keys and classifier input use this form.
pub fn normalize_query(raw: &str) -> String {
	raw.trim().to_lowercase()
}

pub fn is_remote_id(raw: &str) -> bool {
	Regex::new(REMOTE_ID_PATTERN).map(|re| re.is_match(raw)).unwrap_or(false)
}

/// Parses identifiers the remote store can hold. Anything else returns `None` and must not be
/// sent to the remote store.
pub fn parse_remote_id(raw: &str) -> Option<Uuid> {
	if !is_remote_id(raw) {
		return None;
	}

	Uuid::parse_str(raw).ok()
}
