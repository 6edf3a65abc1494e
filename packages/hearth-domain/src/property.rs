use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
	#[serde(alias = "single-family")]
	SingleFamily,
	Condo,
	Townhouse,
	Apartment,
	Cabin,
	Commercial,
	Land,
}
impl PropertyType {
	pub const ALL: [Self; 7] = [
		Self::SingleFamily,
		Self::Condo,
		Self::Townhouse,
		Self::Apartment,
		Self::Cabin,
		Self::Commercial,
		Self::Land,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::SingleFamily => "single_family",
			Self::Condo => "condo",
			Self::Townhouse => "townhouse",
			Self::Apartment => "apartment",
			Self::Cabin => "cabin",
			Self::Commercial => "commercial",
			Self::Land => "land",
		}
	}
}
impl FromStr for PropertyType {
	type Err = UnknownVariant;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		let needle = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");

		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str() == needle)
			.ok_or_else(|| UnknownVariant { kind: "property type", value: raw.to_string() })
	}
}
impl fmt::Display for PropertyType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
	Sale,
	Rent,
}
impl ListingType {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Sale => "sale",
			Self::Rent => "rent",
		}
	}
}
impl FromStr for ListingType {
	type Err = UnknownVariant;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		match raw.trim().to_ascii_lowercase().as_str() {
			"sale" => Ok(Self::Sale),
			"rent" => Ok(Self::Rent),
			_ => Err(UnknownVariant { kind: "listing type", value: raw.to_string() }),
		}
	}
}
impl fmt::Display for ListingType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
	pub kind: &'static str,
	pub value: String,
}
impl fmt::Display for UnknownVariant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Unknown {}: {:?}.", self.kind, self.value)
	}
}
impl std::error::Error for UnknownVariant {}

/// A real-estate listing. Only `id` and `address` are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
	pub id: String,
	pub address: String,
	#[serde(default)]
	pub city: Option<String>,
	#[serde(default)]
	pub state: Option<String>,
	#[serde(default)]
	pub zip_code: Option<String>,
	#[serde(default)]
	pub property_type: Option<PropertyType>,
	#[serde(default)]
	pub listing_type: Option<ListingType>,
	#[serde(default)]
	pub bedrooms: Option<i32>,
	#[serde(default)]
	pub bathrooms: Option<f64>,
	#[serde(default)]
	pub square_feet: Option<i32>,
	#[serde(default)]
	pub lot_size: Option<f64>,
	#[serde(default)]
	pub current_value: Option<i64>,
	#[serde(default)]
	pub last_sale_price: Option<i64>,
	/// ISO 8601 calendar date.
	#[serde(default)]
	pub last_sale_date: Option<String>,
	#[serde(default)]
	pub year_built: Option<i32>,
	#[serde(default)]
	pub latitude: Option<f64>,
	#[serde(default)]
	pub longitude: Option<f64>,
	#[serde(default)]
	pub status: Option<String>,
	#[serde(default)]
	pub has_pool: Option<bool>,
	#[serde(default)]
	pub has_fireplace: Option<bool>,
	#[serde(default)]
	pub has_ac: Option<bool>,
	#[serde(default)]
	pub has_basement: Option<bool>,
	#[serde(default)]
	pub garage_spaces: Option<i32>,
	#[serde(default)]
	pub parking_spaces: Option<i32>,
	#[serde(default)]
	pub hoa_fee: Option<f64>,
	#[serde(default)]
	pub walk_score: Option<i32>,
	#[serde(default)]
	pub transit_score: Option<i32>,
	#[serde(default)]
	pub school_district: Option<String>,
	#[serde(default)]
	pub owner_name: Option<String>,
	#[serde(default, with = "crate::timestamp")]
	pub created_at: Option<OffsetDateTime>,
	#[serde(default, with = "crate::timestamp")]
	pub updated_at: Option<OffsetDateTime>,
	#[serde(default)]
	pub photos: Vec<Photo>,
	#[serde(default)]
	pub features: Vec<Feature>,
	#[serde(default)]
	pub neighborhood: Option<Neighborhood>,
	#[serde(default)]
	pub market_data: Vec<MarketData>,
}
impl Property {
	/// Bare listing with every optional attribute and relation absent.
	pub fn new(id: impl Into<String>, address: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			address: address.into(),
			city: None,
			state: None,
			zip_code: None,
			property_type: None,
			listing_type: None,
			bedrooms: None,
			bathrooms: None,
			square_feet: None,
			lot_size: None,
			current_value: None,
			last_sale_price: None,
			last_sale_date: None,
			year_built: None,
			latitude: None,
			longitude: None,
			status: None,
			has_pool: None,
			has_fireplace: None,
			has_ac: None,
			has_basement: None,
			garage_spaces: None,
			parking_spaces: None,
			hoa_fee: None,
			walk_score: None,
			transit_score: None,
			school_district: None,
			owner_name: None,
			created_at: None,
			updated_at: None,
			photos: Vec::new(),
			features: Vec::new(),
			neighborhood: None,
			market_data: Vec::new(),
		}
	}

	/// The photo to display for this listing.
	///
	/// Primary flags are not unique, so the first flagged photo in list order wins. Listings with
	/// no flagged photo fall back to their first photo.
	pub fn primary_photo(&self) -> Option<&Photo> {
		self.photos.iter().find(|photo| photo.is_primary).or_else(|| self.photos.first())
	}

	pub fn current_value_or_zero(&self) -> i64 {
		self.current_value.unwrap_or(0)
	}

	/// "City, ST" when either part is known.
	pub fn locality(&self) -> Option<String> {
		match (self.city.as_deref(), self.state.as_deref()) {
			(Some(city), Some(state)) => Some(format!("{city}, {state}")),
			(Some(part), None) | (None, Some(part)) => Some(part.to_string()),
			(None, None) => None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
	pub url: String,
	#[serde(default)]
	pub is_primary: bool,
	#[serde(default)]
	pub display_order: Option<i32>,
	#[serde(default)]
	pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
	#[serde(default)]
	pub feature_type: Option<String>,
	pub name: String,
	#[serde(default)]
	pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighborhood {
	pub name: String,
	#[serde(default)]
	pub city: Option<String>,
	#[serde(default)]
	pub state: Option<String>,
	#[serde(default)]
	pub median_home_value: Option<i64>,
	#[serde(default)]
	pub median_household_income: Option<i64>,
	#[serde(default)]
	pub population: Option<i64>,
	#[serde(default)]
	pub school_rating: Option<f64>,
	#[serde(default)]
	pub crime_index: Option<f64>,
}

/// Point-in-time market snapshot for a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
	#[serde(default)]
	pub price_estimate: Option<i64>,
	#[serde(default)]
	pub rent_estimate: Option<i64>,
	#[serde(default)]
	pub price_per_sqft: Option<f64>,
	#[serde(default)]
	pub days_on_market: Option<i32>,
	#[serde(default)]
	pub tax_assessment: Option<i64>,
	#[serde(default)]
	pub price_trend: Option<Value>,
	#[serde(default)]
	pub cost_breakdown: Option<Value>,
	#[serde(default)]
	pub price_history: Option<Value>,
	#[serde(default, with = "crate::timestamp")]
	pub recorded_at: Option<OffsetDateTime>,
}
