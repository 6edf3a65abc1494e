use std::collections::HashMap;

use hearth_domain::{Feature, MarketData, Neighborhood, Photo, Property, SearchFilters};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
	Result,
	models::{FeatureRow, MarketDataRow, NeighborhoodRow, PhotoRow, PropertyRow},
};

const PROPERTY_SELECT: &str = "\
SELECT
	id,
	address,
	city,
	state,
	zip_code,
	property_type,
	listing_type,
	bedrooms,
	bathrooms,
	square_feet,
	lot_size,
	current_value,
	last_sale_price,
	last_sale_date,
	year_built,
	latitude,
	longitude,
	status,
	has_pool,
	has_fireplace,
	has_ac,
	has_basement,
	garage_spaces,
	parking_spaces,
	hoa_fee,
	walk_score,
	transit_score,
	school_district,
	owner_name,
	neighborhood_id,
	created_at,
	updated_at
FROM properties";

/// Filtered listing, newest first, capped at `limit` rows.
pub async fn list_properties(
	pool: &PgPool,
	filters: &SearchFilters,
	limit: i64,
) -> Result<Vec<Property>> {
	let mut builder = list_query(filters, limit);
	let rows: Vec<PropertyRow> = builder.build_query_as().fetch_all(pool).await?;

	hydrate(pool, rows).await
}

/// Case-insensitive substring match against address, city, state, or zip code.
pub async fn search_properties(pool: &PgPool, text: &str, limit: i64) -> Result<Vec<Property>> {
	let mut builder = search_query(text, limit);
	let rows: Vec<PropertyRow> = builder.build_query_as().fetch_all(pool).await?;

	hydrate(pool, rows).await
}

pub async fn get_property(pool: &PgPool, id: Uuid) -> Result<Option<Property>> {
	let mut builder = QueryBuilder::<Postgres>::new(PROPERTY_SELECT);

	builder.push(" WHERE id = ");
	builder.push_bind(id);

	let row: Option<PropertyRow> = builder.build_query_as().fetch_optional(pool).await?;
	let Some(row) = row else {
		return Ok(None);
	};

	Ok(hydrate(pool, vec![row]).await?.pop())
}

pub async fn record_search(pool: &PgPool, query: &str, search_type: &str) -> Result<()> {
	sqlx::query("INSERT INTO search_history (query, search_type) VALUES ($1, $2)")
		.bind(query)
		.bind(search_type)
		.execute(pool)
		.await?;

	Ok(())
}

pub fn list_query(filters: &SearchFilters, limit: i64) -> QueryBuilder<'static, Postgres> {
	let mut builder = QueryBuilder::new(PROPERTY_SELECT);
	let mut predicates = Predicates::default();

	if let Some(city) = filters.city() {
		predicates.push(&mut builder, "city ILIKE ");
		builder.push_bind(contains_pattern(city));
	}
	if let Some(state) = filters.state() {
		predicates.push(&mut builder, "state ILIKE ");
		builder.push_bind(contains_pattern(state));
	}
	if let Some(min_price) = filters.min_price {
		predicates.push(&mut builder, "current_value >= ");
		builder.push_bind(min_price);
	}
	if let Some(max_price) = filters.max_price {
		predicates.push(&mut builder, "current_value <= ");
		builder.push_bind(max_price);
	}
	if let Some(min_bedrooms) = filters.min_bedrooms {
		predicates.push(&mut builder, "bedrooms >= ");
		builder.push_bind(min_bedrooms);
	}
	if let Some(min_bathrooms) = filters.min_bathrooms {
		predicates.push(&mut builder, "bathrooms >= ");
		builder.push_bind(min_bathrooms);
	}
	if let Some(kind) = filters.property_type {
		predicates.push(&mut builder, "property_type = ");
		builder.push_bind(kind.as_str());
	}
	if let Some(listing) = filters.listing_type {
		predicates.push(&mut builder, "listing_type = ");
		builder.push_bind(listing.as_str());
	}
	if let Some(min_square_feet) = filters.min_square_feet {
		predicates.push(&mut builder, "square_feet >= ");
		builder.push_bind(min_square_feet);
	}
	if let Some(max_square_feet) = filters.max_square_feet {
		predicates.push(&mut builder, "square_feet <= ");
		builder.push_bind(max_square_feet);
	}
	if let Some(min_year_built) = filters.min_year_built {
		predicates.push(&mut builder, "year_built >= ");
		builder.push_bind(min_year_built);
	}
	if filters.requires_pool() {
		predicates.push(&mut builder, "has_pool = TRUE");
	}
	if filters.requires_garage() {
		predicates.push(&mut builder, "garage_spaces >= 1");
	}
	if filters.requires_fireplace() {
		predicates.push(&mut builder, "has_fireplace = TRUE");
	}

	push_order_and_limit(&mut builder, limit);

	builder
}

pub fn search_query(text: &str, limit: i64) -> QueryBuilder<'static, Postgres> {
	let pattern = contains_pattern(text.trim());
	let mut builder = QueryBuilder::new(PROPERTY_SELECT);

	builder.push(" WHERE (");

	for (idx, column) in ["address", "city", "state", "zip_code"].into_iter().enumerate() {
		if idx > 0 {
			builder.push(" OR ");
		}

		builder.push(column);
		builder.push(" ILIKE ");
		builder.push_bind(pattern.clone());
	}

	builder.push(")");

	push_order_and_limit(&mut builder, limit);

	builder
}

/// Escapes `%`, `_`, and `\` so user text matches literally under `ILIKE`.
pub fn escape_like(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());

	for ch in raw.chars() {
		if matches!(ch, '%' | '_' | '\\') {
			out.push('\\');
		}

		out.push(ch);
	}

	out
}

fn contains_pattern(raw: &str) -> String {
	format!("%{}%", escape_like(raw))
}

fn push_order_and_limit(builder: &mut QueryBuilder<'static, Postgres>, limit: i64) {
	builder.push(" ORDER BY created_at DESC LIMIT ");
	builder.push_bind(limit);
}

#[derive(Default)]
struct Predicates {
	count: usize,
}
impl Predicates {
	fn push(&mut self, builder: &mut QueryBuilder<'static, Postgres>, sql: &str) {
		builder.push(if self.count == 0 { " WHERE " } else { " AND " });
		builder.push(sql);

		self.count += 1;
	}
}

async fn hydrate(pool: &PgPool, rows: Vec<PropertyRow>) -> Result<Vec<Property>> {
	if rows.is_empty() {
		return Ok(Vec::new());
	}

	let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
	let neighborhood_ids: Vec<Uuid> = rows.iter().filter_map(|row| row.neighborhood_id).collect();
	let photos: Vec<PhotoRow> = sqlx::query_as(
		"\
SELECT property_id, url, is_primary, display_order, caption
FROM property_photos
WHERE property_id = ANY($1)
ORDER BY property_id, display_order NULLS LAST, photo_id",
	)
	.bind(&ids)
	.fetch_all(pool)
	.await?;
	let features: Vec<FeatureRow> = sqlx::query_as(
		"\
SELECT property_id, feature_type, name, value
FROM property_features
WHERE property_id = ANY($1)
ORDER BY property_id, feature_id",
	)
	.bind(&ids)
	.fetch_all(pool)
	.await?;
	let market: Vec<MarketDataRow> = sqlx::query_as(
		"\
SELECT
	property_id,
	price_estimate,
	rent_estimate,
	price_per_sqft,
	days_on_market,
	tax_assessment,
	price_trend,
	cost_breakdown,
	price_history,
	recorded_at
FROM market_data
WHERE property_id = ANY($1)
ORDER BY property_id, recorded_at DESC",
	)
	.bind(&ids)
	.fetch_all(pool)
	.await?;
	let neighborhoods: Vec<NeighborhoodRow> = if neighborhood_ids.is_empty() {
		Vec::new()
	} else {
		sqlx::query_as(
			"\
SELECT
	neighborhood_id,
	name,
	city,
	state,
	median_home_value,
	median_household_income,
	population,
	school_rating,
	crime_index
FROM neighborhoods
WHERE neighborhood_id = ANY($1)",
		)
		.bind(&neighborhood_ids)
		.fetch_all(pool)
		.await?
	};
	let mut photos_by_property: HashMap<Uuid, Vec<Photo>> = HashMap::new();
	let mut features_by_property: HashMap<Uuid, Vec<Feature>> = HashMap::new();
	let mut market_by_property: HashMap<Uuid, Vec<MarketData>> = HashMap::new();
	let neighborhoods: HashMap<Uuid, NeighborhoodRow> =
		neighborhoods.into_iter().map(|row| (row.neighborhood_id, row)).collect();

	for row in photos {
		photos_by_property.entry(row.property_id).or_default().push(row.into());
	}
	for row in features {
		features_by_property.entry(row.property_id).or_default().push(row.into());
	}
	for row in market {
		market_by_property.entry(row.property_id).or_default().push(row.into());
	}

	let properties = rows
		.into_iter()
		.map(|row| {
			let id = row.id;
			let neighborhood = row
				.neighborhood_id
				.and_then(|key| neighborhoods.get(&key))
				.cloned()
				.map(Neighborhood::from);
			let mut property = row.into_property();

			property.photos = photos_by_property.remove(&id).unwrap_or_default();
			property.features = features_by_property.remove(&id).unwrap_or_default();
			property.market_data = market_by_property.remove(&id).unwrap_or_default();
			property.neighborhood = neighborhood;

			property
		})
		.collect();

	Ok(properties)
}
