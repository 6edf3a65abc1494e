//! Keyword rules that pick a fixed sample result set for a query.
//!
//! This is a placeholder for real relevance ranking: there is no scoring or tokenization, only
//! raw substring checks. Rule order and the five-entry result sets are load-bearing for callers
//! and must not change without changing their expectations too.

use hearth_domain::Property;

use crate::catalog::SampleCatalog;

pub const RESULT_SIZE: usize = 5;

struct Rule {
	name: &'static str,
	matches: fn(&str) -> bool,
	ids: [&'static str; RESULT_SIZE],
}

const RULES: [Rule; 6] = [
	Rule {
		name: "mountain-cabin",
		matches: is_cabin_query,
		ids: ["prop-006", "prop-005", "prop-004", "prop-008", "prop-001"],
	},
	Rule {
		name: "beverly-hills",
		matches: is_beverly_query,
		ids: ["prop-001", "prop-003", "prop-002", "prop-005", "prop-006"],
	},
	Rule {
		name: "new-york",
		matches: is_new_york_query,
		ids: ["prop-002", "prop-001", "prop-003", "prop-007", "prop-005"],
	},
	Rule {
		name: "miami",
		matches: is_miami_query,
		ids: ["prop-003", "prop-001", "prop-002", "prop-004", "prop-008"],
	},
	Rule {
		name: "austin",
		matches: is_austin_query,
		ids: ["prop-004", "prop-006", "prop-008", "prop-005", "prop-003"],
	},
	Rule {
		name: "seattle",
		matches: is_seattle_query,
		ids: ["prop-005", "prop-008", "prop-006", "prop-004", "prop-002"],
	},
];

/// Sample listings for an already-normalized query. The first matching rule wins; with no
/// match the first five catalog entries are returned in catalog order.
pub fn classify(catalog: &SampleCatalog, normalized_query: &str) -> Vec<Property> {
	match RULES.iter().find(|rule| (rule.matches)(normalized_query)) {
		Some(rule) => catalog.pick(&rule.ids),
		None => catalog.first(RESULT_SIZE),
	}
}

/// Name of the rule `normalized_query` falls under, `None` for the default set.
pub fn matched_rule(normalized_query: &str) -> Option<&'static str> {
	RULES.iter().find(|rule| (rule.matches)(normalized_query)).map(|rule| rule.name)
}

fn is_cabin_query(q: &str) -> bool {
	(q.contains("mountain") && q.contains("cabin")) || (q.contains("colorado") && q.contains("cabin"))
}

fn is_beverly_query(q: &str) -> bool {
	q.contains("beverly") || (q.contains("luxury") && q.contains("ca"))
}

fn is_new_york_query(q: &str) -> bool {
	q.contains("new york") || q.contains("nyc") || q.contains("manhattan")
}

fn is_miami_query(q: &str) -> bool {
	q.contains("miami") || q.contains("florida") || q.contains("fl")
}

fn is_austin_query(q: &str) -> bool {
	q.contains("austin") || q.contains("texas") || q.contains("tx")
}

fn is_seattle_query(q: &str) -> bool {
	q.contains("seattle") || q.contains("washington") || q.contains("wa")
}
