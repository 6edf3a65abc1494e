use hearth_domain::{Feature, MarketData, Neighborhood, Photo, Property};
use serde_json::Value;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct PropertyRow {
	pub id: Uuid,
	pub address: String,
	pub city: Option<String>,
	pub state: Option<String>,
	pub zip_code: Option<String>,
	pub property_type: Option<String>,
	pub listing_type: Option<String>,
	pub bedrooms: Option<i32>,
	pub bathrooms: Option<f64>,
	pub square_feet: Option<i32>,
	pub lot_size: Option<f64>,
	pub current_value: Option<i64>,
	pub last_sale_price: Option<i64>,
	pub last_sale_date: Option<Date>,
	pub year_built: Option<i32>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
	pub status: Option<String>,
	pub has_pool: Option<bool>,
	pub has_fireplace: Option<bool>,
	pub has_ac: Option<bool>,
	pub has_basement: Option<bool>,
	pub garage_spaces: Option<i32>,
	pub parking_spaces: Option<i32>,
	pub hoa_fee: Option<f64>,
	pub walk_score: Option<i32>,
	pub transit_score: Option<i32>,
	pub school_district: Option<String>,
	pub owner_name: Option<String>,
	pub neighborhood_id: Option<Uuid>,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}
impl PropertyRow {
	/// Converts the row into a listing without relations. Unrecognized enum text is dropped.
	pub fn into_property(self) -> Property {
		let mut property = Property::new(self.id.to_string(), self.address);

		property.city = self.city;
		property.state = self.state;
		property.zip_code = self.zip_code;
		property.property_type = self.property_type.and_then(|raw| raw.parse().ok());
		property.listing_type = self.listing_type.and_then(|raw| raw.parse().ok());
		property.bedrooms = self.bedrooms;
		property.bathrooms = self.bathrooms;
		property.square_feet = self.square_feet;
		property.lot_size = self.lot_size;
		property.current_value = self.current_value;
		property.last_sale_price = self.last_sale_price;
		property.last_sale_date = self.last_sale_date.map(|date| date.to_string());
		property.year_built = self.year_built;
		property.latitude = self.latitude;
		property.longitude = self.longitude;
		property.status = self.status;
		property.has_pool = self.has_pool;
		property.has_fireplace = self.has_fireplace;
		property.has_ac = self.has_ac;
		property.has_basement = self.has_basement;
		property.garage_spaces = self.garage_spaces;
		property.parking_spaces = self.parking_spaces;
		property.hoa_fee = self.hoa_fee;
		property.walk_score = self.walk_score;
		property.transit_score = self.transit_score;
		property.school_district = self.school_district;
		property.owner_name = self.owner_name;
		property.created_at = Some(self.created_at);
		property.updated_at = Some(self.updated_at);

		property
	}
}

#[derive(Debug, sqlx::FromRow)]
pub struct PhotoRow {
	pub property_id: Uuid,
	pub url: String,
	pub is_primary: bool,
	pub display_order: Option<i32>,
	pub caption: Option<String>,
}
impl From<PhotoRow> for Photo {
	fn from(row: PhotoRow) -> Self {
		Self {
			url: row.url,
			is_primary: row.is_primary,
			display_order: row.display_order,
			caption: row.caption,
		}
	}
}

#[derive(Debug, sqlx::FromRow)]
pub struct FeatureRow {
	pub property_id: Uuid,
	pub feature_type: Option<String>,
	pub name: String,
	pub value: Option<String>,
}
impl From<FeatureRow> for Feature {
	fn from(row: FeatureRow) -> Self {
		Self { feature_type: row.feature_type, name: row.name, value: row.value }
	}
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NeighborhoodRow {
	pub neighborhood_id: Uuid,
	pub name: String,
	pub city: Option<String>,
	pub state: Option<String>,
	pub median_home_value: Option<i64>,
	pub median_household_income: Option<i64>,
	pub population: Option<i64>,
	pub school_rating: Option<f64>,
	pub crime_index: Option<f64>,
}
impl From<NeighborhoodRow> for Neighborhood {
	fn from(row: NeighborhoodRow) -> Self {
		Self {
			name: row.name,
			city: row.city,
			state: row.state,
			median_home_value: row.median_home_value,
			median_household_income: row.median_household_income,
			population: row.population,
			school_rating: row.school_rating,
			crime_index: row.crime_index,
		}
	}
}

#[derive(Debug, sqlx::FromRow)]
pub struct MarketDataRow {
	pub property_id: Uuid,
	pub price_estimate: Option<i64>,
	pub rent_estimate: Option<i64>,
	pub price_per_sqft: Option<f64>,
	pub days_on_market: Option<i32>,
	pub tax_assessment: Option<i64>,
	pub price_trend: Option<Value>,
	pub cost_breakdown: Option<Value>,
	pub price_history: Option<Value>,
	pub recorded_at: OffsetDateTime,
}
impl From<MarketDataRow> for MarketData {
	fn from(row: MarketDataRow) -> Self {
		Self {
			price_estimate: row.price_estimate,
			rent_estimate: row.rent_estimate,
			price_per_sqft: row.price_per_sqft,
			days_on_market: row.days_on_market,
			tax_assessment: row.tax_assessment,
			price_trend: row.price_trend,
			cost_breakdown: row.cost_breakdown,
			price_history: row.price_history,
			recorded_at: Some(row.recorded_at),
		}
	}
}
