const INIT: &str = include_str!("../../../sql/init.sql");

/// The bootstrap script with every `\ir` include inlined, in include order.
pub fn render_schema() -> String {
	let mut out = String::new();

	for line in INIT.lines() {
		let trimmed = line.trim();

		match trimmed.strip_prefix("\\ir ").map(str::trim) {
			Some(path) => out.push_str(include_for(path).unwrap_or(line)),
			None => out.push_str(line),
		}

		out.push('\n');
	}

	out
}

fn include_for(path: &str) -> Option<&'static str> {
	let sql = match path {
		"00_extensions.sql" => include_str!("../../../sql/00_extensions.sql"),
		"tables/001_neighborhoods.sql" => include_str!("../../../sql/tables/001_neighborhoods.sql"),
		"tables/002_properties.sql" => include_str!("../../../sql/tables/002_properties.sql"),
		"tables/003_property_photos.sql" =>
			include_str!("../../../sql/tables/003_property_photos.sql"),
		"tables/004_property_features.sql" =>
			include_str!("../../../sql/tables/004_property_features.sql"),
		"tables/005_market_data.sql" => include_str!("../../../sql/tables/005_market_data.sql"),
		"tables/006_search_history.sql" =>
			include_str!("../../../sql/tables/006_search_history.sql"),
		_ => return None,
	};

	Some(sql)
}
