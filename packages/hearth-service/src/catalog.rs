//! Hand-authored listings served when the remote store is empty or unreachable.

use hearth_domain::{
	Feature, ListingType, MarketData, Neighborhood, Photo, Property, PropertyType,
};
use time::{OffsetDateTime, macros::datetime};

const KEY_PREFIX: &str = "prop-";

/// Read-only sample store. Lookups are exact; see [`sample_key`] for short identifiers.
#[derive(Debug, Clone)]
pub struct SampleCatalog {
	properties: Vec<Property>,
}
impl SampleCatalog {
	pub fn new(properties: Vec<Property>) -> Self {
		Self { properties }
	}

	pub fn all(&self) -> &[Property] {
		&self.properties
	}

	pub fn len(&self) -> usize {
		self.properties.len()
	}

	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}

	pub fn list(&self) -> Vec<Property> {
		self.properties.clone()
	}

	pub fn filter(&self, predicate: impl Fn(&Property) -> bool) -> Vec<Property> {
		self.properties.iter().filter(|property| predicate(property)).cloned().collect()
	}

	pub fn get(&self, id: &str) -> Option<&Property> {
		self.properties.iter().find(|property| property.id == id)
	}

	/// Listings for `ids` in the given order. Unknown ids are skipped.
	pub fn pick(&self, ids: &[&str]) -> Vec<Property> {
		ids.iter().filter_map(|id| self.get(id)).cloned().collect()
	}

	pub fn first(&self, count: usize) -> Vec<Property> {
		self.properties.iter().take(count).cloned().collect()
	}
}
impl Default for SampleCatalog {
	fn default() -> Self {
		Self::new(sample_properties())
	}
}

/// Maps a short numeric identifier ("1", "02") to its catalog key ("prop-001"). Any other
/// identifier is returned unchanged.
pub fn sample_key(id: &str) -> String {
	let trimmed = id.trim();

	match trimmed.parse::<u32>() {
		Ok(number) if number > 0 && trimmed.bytes().all(|b| b.is_ascii_digit()) =>
			format!("{KEY_PREFIX}{number:03}"),
		_ => trimmed.to_string(),
	}
}

pub fn sample_properties() -> Vec<Property> {
	vec![
		beverly_hills_estate(),
		manhattan_condo(),
		miami_beach_condo(),
		austin_family_home(),
		seattle_townhouse(),
		mountain_cabin(),
		chicago_rental(),
		portland_bungalow(),
	]
}

struct Listing {
	id: &'static str,
	address: &'static str,
	city: &'static str,
	state: &'static str,
	zip_code: &'static str,
	property_type: PropertyType,
	listing_type: ListingType,
	bedrooms: i32,
	bathrooms: f64,
	square_feet: i32,
	current_value: i64,
	year_built: i32,
	coordinates: (f64, f64),
	created_at: OffsetDateTime,
}
impl Listing {
	fn build(self) -> Property {
		let mut property = Property::new(self.id, self.address);

		property.city = Some(self.city.to_string());
		property.state = Some(self.state.to_string());
		property.zip_code = Some(self.zip_code.to_string());
		property.property_type = Some(self.property_type);
		property.listing_type = Some(self.listing_type);
		property.bedrooms = Some(self.bedrooms);
		property.bathrooms = Some(self.bathrooms);
		property.square_feet = Some(self.square_feet);
		property.current_value = Some(self.current_value);
		property.year_built = Some(self.year_built);
		property.latitude = Some(self.coordinates.0);
		property.longitude = Some(self.coordinates.1);
		property.status = Some("active".to_string());
		property.created_at = Some(self.created_at);
		property.updated_at = Some(self.created_at);
		property.photos = vec![
			photo(self.id, "front", true, 1),
			photo(self.id, "living-room", false, 2),
			photo(self.id, "kitchen", false, 3),
		];

		property
	}
}

fn photo(id: &str, view: &str, is_primary: bool, display_order: i32) -> Photo {
	Photo {
		url: format!("https://images.hearth.example/{id}/{view}.jpg"),
		is_primary,
		display_order: Some(display_order),
		caption: Some(view.replace('-', " ")),
	}
}

fn feature(feature_type: &str, name: &str, value: &str) -> Feature {
	Feature {
		feature_type: Some(feature_type.to_string()),
		name: name.to_string(),
		value: Some(value.to_string()),
	}
}

fn neighborhood(name: &str, city: &str, state: &str, median_home_value: i64) -> Neighborhood {
	Neighborhood {
		name: name.to_string(),
		city: Some(city.to_string()),
		state: Some(state.to_string()),
		median_home_value: Some(median_home_value),
		median_household_income: None,
		population: None,
		school_rating: None,
		crime_index: None,
	}
}

fn market(price_estimate: i64, rent_estimate: i64, days_on_market: i32) -> MarketData {
	MarketData {
		price_estimate: Some(price_estimate),
		rent_estimate: Some(rent_estimate),
		price_per_sqft: None,
		days_on_market: Some(days_on_market),
		tax_assessment: None,
		price_trend: None,
		cost_breakdown: None,
		price_history: None,
		recorded_at: Some(datetime!(2024-06-01 0:00 UTC)),
	}
}

fn beverly_hills_estate() -> Property {
	let mut property = Listing {
		id: "prop-001",
		address: "901 Crescent Ridge Dr",
		city: "Beverly Hills",
		state: "CA",
		zip_code: "90210",
		property_type: PropertyType::SingleFamily,
		listing_type: ListingType::Sale,
		bedrooms: 6,
		bathrooms: 7.5,
		square_feet: 8_200,
		current_value: 8_750_000,
		year_built: 2008,
		coordinates: (34.0901, -118.4065),
		created_at: datetime!(2024-05-20 16:30 UTC),
	}
	.build();

	property.lot_size = Some(36_000.0);
	property.last_sale_price = Some(6_900_000);
	property.last_sale_date = Some("2019-06-14".to_string());
	property.has_pool = Some(true);
	property.has_fireplace = Some(true);
	property.has_ac = Some(true);
	property.has_basement = Some(false);
	property.garage_spaces = Some(4);
	property.parking_spaces = Some(6);
	property.walk_score = Some(38);
	property.transit_score = Some(25);
	property.school_district = Some("Beverly Hills Unified".to_string());
	property.owner_name = Some("Crescent Holdings LLC".to_string());
	property.features = vec![
		feature("interior", "Wine cellar", "1,200 bottles"),
		feature("exterior", "Infinity pool", "Heated"),
		feature("view", "Canyon views", "Panoramic"),
	];
	property.neighborhood = Some(neighborhood("Trousdale Estates", "Beverly Hills", "CA", 7_400_000));
	property.market_data = vec![market(8_900_000, 42_000, 21)];

	property
}

fn manhattan_condo() -> Property {
	let mut property = Listing {
		id: "prop-002",
		address: "250 W 57th St, Apt 32B",
		city: "New York",
		state: "NY",
		zip_code: "10019",
		property_type: PropertyType::Condo,
		listing_type: ListingType::Sale,
		bedrooms: 2,
		bathrooms: 2.0,
		square_feet: 1_450,
		current_value: 2_450_000,
		year_built: 1929,
		coordinates: (40.7654, -73.9817),
		created_at: datetime!(2024-04-02 14:00 UTC),
	}
	.build();

	property.has_pool = Some(false);
	property.has_fireplace = Some(false);
	property.has_ac = Some(true);
	property.garage_spaces = Some(0);
	property.hoa_fee = Some(2_100.0);
	property.walk_score = Some(99);
	property.transit_score = Some(100);
	property.school_district = Some("NYC District 2".to_string());
	property.features = vec![
		feature("building", "Doorman", "24 hour"),
		feature("view", "Central Park views", "Partial"),
	];
	property.neighborhood = Some(neighborhood("Midtown West", "New York", "NY", 1_650_000));
	property.market_data = vec![market(2_400_000, 9_800, 45)];

	property
}

fn miami_beach_condo() -> Property {
	let mut property = Listing {
		id: "prop-003",
		address: "1500 Ocean Dr, Unit 1204",
		city: "Miami",
		state: "FL",
		zip_code: "33139",
		property_type: PropertyType::Condo,
		listing_type: ListingType::Sale,
		bedrooms: 3,
		bathrooms: 3.0,
		square_feet: 2_100,
		current_value: 1_250_000,
		year_built: 2016,
		coordinates: (25.7867, -80.1300),
		created_at: datetime!(2024-03-15 18:45 UTC),
	}
	.build();

	property.has_pool = Some(true);
	property.has_fireplace = Some(false);
	property.has_ac = Some(true);
	property.garage_spaces = Some(1);
	property.hoa_fee = Some(1_450.0);
	property.walk_score = Some(92);
	property.transit_score = Some(61);
	property.features = vec![
		feature("view", "Oceanfront", "Direct"),
		feature("building", "Rooftop pool", "Shared"),
	];
	property.neighborhood = Some(neighborhood("South Beach", "Miami", "FL", 980_000));
	property.market_data = vec![market(1_275_000, 6_200, 33)];

	property
}

fn austin_family_home() -> Property {
	let mut property = Listing {
		id: "prop-004",
		address: "4817 Ridgeview Ln",
		city: "Austin",
		state: "TX",
		zip_code: "78731",
		property_type: PropertyType::SingleFamily,
		listing_type: ListingType::Sale,
		bedrooms: 4,
		bathrooms: 3.0,
		square_feet: 2_850,
		current_value: 685_000,
		year_built: 1998,
		coordinates: (30.3524, -97.7710),
		created_at: datetime!(2024-02-28 15:10 UTC),
	}
	.build();

	property.lot_size = Some(9_800.0);
	property.last_sale_price = Some(512_000);
	property.last_sale_date = Some("2017-08-03".to_string());
	property.has_pool = Some(false);
	property.has_fireplace = Some(true);
	property.has_ac = Some(true);
	property.garage_spaces = Some(2);
	property.walk_score = Some(41);
	property.school_district = Some("Austin ISD".to_string());
	property.features = vec![feature("exterior", "Covered patio", "Cedar")];
	property.neighborhood = Some(neighborhood("Northwest Hills", "Austin", "TX", 720_000));
	property.market_data = vec![market(699_000, 3_600, 18)];

	property
}

fn seattle_townhouse() -> Property {
	let mut property = Listing {
		id: "prop-005",
		address: "2231 Queen Anne Ave N",
		city: "Seattle",
		state: "WA",
		zip_code: "98109",
		property_type: PropertyType::Townhouse,
		listing_type: ListingType::Sale,
		bedrooms: 3,
		bathrooms: 2.5,
		square_feet: 1_900,
		current_value: 925_000,
		year_built: 2012,
		coordinates: (47.6385, -122.3569),
		created_at: datetime!(2024-05-01 17:20 UTC),
	}
	.build();

	property.has_pool = Some(false);
	property.has_fireplace = Some(true);
	property.has_ac = Some(false);
	property.garage_spaces = Some(1);
	property.hoa_fee = Some(180.0);
	property.walk_score = Some(88);
	property.transit_score = Some(70);
	property.features = vec![feature("view", "Roof deck", "Space Needle")];
	property.neighborhood = Some(neighborhood("Queen Anne", "Seattle", "WA", 1_100_000));
	property.market_data = vec![market(940_000, 4_300, 27)];

	property
}

fn mountain_cabin() -> Property {
	let mut property = Listing {
		id: "prop-006",
		address: "88 Aspen Hollow Rd",
		city: "Breckenridge",
		state: "CO",
		zip_code: "80424",
		property_type: PropertyType::Cabin,
		listing_type: ListingType::Sale,
		bedrooms: 3,
		bathrooms: 2.0,
		square_feet: 2_200,
		current_value: 1_150_000,
		year_built: 1985,
		coordinates: (39.4817, -106.0384),
		created_at: datetime!(2024-01-18 20:00 UTC),
	}
	.build();

	property.lot_size = Some(43_560.0);
	property.has_pool = Some(false);
	property.has_fireplace = Some(true);
	property.has_ac = Some(false);
	property.has_basement = Some(true);
	property.garage_spaces = Some(2);
	property.walk_score = Some(12);
	property.features = vec![
		feature("interior", "Stone fireplace", "Wood burning"),
		feature("exterior", "Hot tub", "Eight person"),
	];
	property.neighborhood = Some(neighborhood("Blue River", "Breckenridge", "CO", 1_300_000));
	property.market_data = vec![market(1_180_000, 5_900, 64)];

	property
}

fn chicago_rental() -> Property {
	let mut property = Listing {
		id: "prop-007",
		address: "640 N Wabash Ave, Unit 1805",
		city: "Chicago",
		state: "IL",
		zip_code: "60611",
		property_type: PropertyType::Apartment,
		listing_type: ListingType::Rent,
		bedrooms: 2,
		bathrooms: 2.0,
		square_feet: 1_150,
		current_value: 3_400,
		year_built: 2005,
		coordinates: (41.8935, -87.6264),
		created_at: datetime!(2024-05-10 13:05 UTC),
	}
	.build();

	property.has_pool = Some(true);
	property.has_ac = Some(true);
	property.parking_spaces = Some(1);
	property.walk_score = Some(97);
	property.transit_score = Some(95);
	property.features = vec![feature("building", "Fitness center", "Included")];
	property.neighborhood = Some(neighborhood("River North", "Chicago", "IL", 540_000));

	property
}

fn portland_bungalow() -> Property {
	let mut property = Listing {
		id: "prop-008",
		address: "3315 SE Belmont St",
		city: "Portland",
		state: "OR",
		zip_code: "97214",
		property_type: PropertyType::SingleFamily,
		listing_type: ListingType::Sale,
		bedrooms: 3,
		bathrooms: 2.0,
		square_feet: 1_750,
		current_value: 735_000,
		year_built: 1924,
		coordinates: (45.5164, -122.6309),
		created_at: datetime!(2024-03-30 19:40 UTC),
	}
	.build();

	property.lot_size = Some(5_000.0);
	property.has_pool = Some(false);
	property.has_fireplace = Some(true);
	property.has_basement = Some(true);
	property.garage_spaces = Some(1);
	property.walk_score = Some(90);
	property.transit_score = Some(62);
	property.features = vec![feature("exterior", "Craftsman porch", "Restored")];
	property.neighborhood = Some(neighborhood("Sunnyside", "Portland", "OR", 690_000));
	property.market_data = vec![market(748_000, 3_300, 12)];

	property
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn catalog_ids_are_unique_and_prefixed() {
		let catalog = SampleCatalog::default();
		let ids: HashSet<&str> = catalog.all().iter().map(|p| p.id.as_str()).collect();

		assert_eq!(catalog.len(), 8);
		assert_eq!(ids.len(), 8);
		assert!(ids.iter().all(|id| id.starts_with(KEY_PREFIX)));
	}

	#[test]
	fn every_sample_has_a_primary_photo_and_timestamp() {
		for property in SampleCatalog::default().all() {
			assert!(property.primary_photo().is_some_and(|photo| photo.is_primary));
			assert!(property.created_at.is_some());
			assert!(property.current_value.is_some_and(|value| value >= 0));
		}
	}

	#[test]
	fn maps_short_numeric_ids() {
		assert_eq!(sample_key("1"), "prop-001");
		assert_eq!(sample_key(" 08 "), "prop-008");
		assert_eq!(sample_key("prop-003"), "prop-003");
		assert_eq!(sample_key("0"), "0");
		assert_eq!(sample_key("+2"), "+2");
	}

	#[test]
	fn lookups_are_exact() {
		let catalog = SampleCatalog::default();

		assert!(catalog.get("prop-002").is_some());
		assert!(catalog.get("PROP-002").is_none());
		assert!(catalog.get("2").is_none());
	}

	#[test]
	fn pick_keeps_order_and_skips_unknown() {
		let catalog = SampleCatalog::default();
		let picked = catalog.pick(&["prop-006", "missing", "prop-001"]);
		let ids: Vec<&str> = picked.iter().map(|p| p.id.as_str()).collect();

		assert_eq!(ids, vec!["prop-006", "prop-001"]);
	}

	#[test]
	fn filter_applies_predicate() {
		let rentals = SampleCatalog::default()
			.filter(|property| property.listing_type == Some(ListingType::Rent));

		assert_eq!(rentals.len(), 1);
		assert_eq!(rentals[0].id, "prop-007");
	}
}
