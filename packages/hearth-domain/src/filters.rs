use serde::{Deserialize, Serialize};

use crate::property::{ListingType, PropertyType};

/// Sparse search criteria. An absent field leaves that dimension unconstrained.
///
/// Amenity requirements only constrain when set to `true`; `Some(false)` means "don't care".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
	pub city: Option<String>,
	pub state: Option<String>,
	pub min_price: Option<i64>,
	pub max_price: Option<i64>,
	pub min_bedrooms: Option<i32>,
	pub min_bathrooms: Option<f64>,
	pub property_type: Option<PropertyType>,
	pub listing_type: Option<ListingType>,
	pub min_square_feet: Option<i32>,
	pub max_square_feet: Option<i32>,
	pub min_year_built: Option<i32>,
	pub has_pool: Option<bool>,
	pub has_garage: Option<bool>,
	pub has_fireplace: Option<bool>,
}
impl SearchFilters {
	pub fn city(&self) -> Option<&str> {
		non_blank(self.city.as_deref())
	}

	pub fn state(&self) -> Option<&str> {
		non_blank(self.state.as_deref())
	}

	pub fn requires_pool(&self) -> bool {
		self.has_pool == Some(true)
	}

	pub fn requires_garage(&self) -> bool {
		self.has_garage == Some(true)
	}

	pub fn requires_fireplace(&self) -> bool {
		self.has_fireplace == Some(true)
	}

	/// True when no field would produce a predicate.
	pub fn is_unconstrained(&self) -> bool {
		self.city().is_none()
			&& self.state().is_none()
			&& self.min_price.is_none()
			&& self.max_price.is_none()
			&& self.min_bedrooms.is_none()
			&& self.min_bathrooms.is_none()
			&& self.property_type.is_none()
			&& self.listing_type.is_none()
			&& self.min_square_feet.is_none()
			&& self.max_square_feet.is_none()
			&& self.min_year_built.is_none()
			&& !self.requires_pool()
			&& !self.requires_garage()
			&& !self.requires_fireplace()
	}

	/// Location text used to pick a sample result set when remote listing falls back. Empty when
	/// neither city nor state is set.
	pub fn location_query(&self) -> String {
		[self.city(), self.state()].into_iter().flatten().collect::<Vec<_>>().join(" ")
	}

	/// Field-level overlay: every field present in `update` replaces the current value, absent
	/// fields keep theirs.
	pub fn apply(&mut self, update: SearchFilters) {
		let SearchFilters {
			city,
			state,
			min_price,
			max_price,
			min_bedrooms,
			min_bathrooms,
			property_type,
			listing_type,
			min_square_feet,
			max_square_feet,
			min_year_built,
			has_pool,
			has_garage,
			has_fireplace,
		} = update;

		overlay(&mut self.city, city);
		overlay(&mut self.state, state);
		overlay(&mut self.min_price, min_price);
		overlay(&mut self.max_price, max_price);
		overlay(&mut self.min_bedrooms, min_bedrooms);
		overlay(&mut self.min_bathrooms, min_bathrooms);
		overlay(&mut self.property_type, property_type);
		overlay(&mut self.listing_type, listing_type);
		overlay(&mut self.min_square_feet, min_square_feet);
		overlay(&mut self.max_square_feet, max_square_feet);
		overlay(&mut self.min_year_built, min_year_built);
		overlay(&mut self.has_pool, has_pool);
		overlay(&mut self.has_garage, has_garage);
		overlay(&mut self.has_fireplace, has_fireplace);
	}
}

fn non_blank(value: Option<&str>) -> Option<&str> {
	value.map(str::trim).filter(|value| !value.is_empty())
}

fn overlay<T>(slot: &mut Option<T>, value: Option<T>) {
	if value.is_some() {
		*slot = value;
	}
}
