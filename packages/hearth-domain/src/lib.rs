pub mod filters;
pub mod insight;
pub mod property;
pub mod query;
pub mod sort;
pub mod timestamp;

pub use filters::SearchFilters;
pub use insight::{AiInsightResult, Recommendation};
pub use property::{
	Feature, ListingType, MarketData, Neighborhood, Photo, Property, PropertyType, UnknownVariant,
};
pub use query::{is_remote_id, normalize_query, parse_remote_id};
pub use sort::{SortKey, sort_properties};
