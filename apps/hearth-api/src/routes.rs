use axum::{
	Json, Router,
	extract::{Path, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use hearth_domain::{AiInsightResult, Property, SearchFilters, SortKey, sort_properties};
use hearth_providers::relay::{InsightRequest, InsightResponse};
use hearth_service::{Lookup, Retrieval, RetrievalSource};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/properties/list", post(list))
		.route("/v1/properties/search", post(search))
		.route("/v1/properties/sort", post(sort))
		.route("/v1/properties/{id}", get(get_property))
		.route("/v1/insights", post(insights))
		.with_state(state)
}

/// The insight relay function, served on its own listener.
pub fn relay_router(state: AppState) -> Router {
	Router::new().route("/functions/v1/ai-insights", post(relay)).with_state(state)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListBody {
	pub filters: SearchFilters,
	pub sort: Option<SortKey>,
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
	pub query: String,
	#[serde(default)]
	pub sort: Option<SortKey>,
}

#[derive(Debug, Deserialize)]
pub struct SortBody {
	pub properties: Vec<Property>,
	pub sort: SortKey,
	#[serde(default)]
	pub insights: Option<AiInsightResult>,
}

#[derive(Debug, Serialize)]
pub struct PropertiesResponse {
	pub results: Vec<Property>,
	pub source: RetrievalSource,
	pub error: Option<String>,
}
impl PropertiesResponse {
	fn sorted(retrieval: Retrieval, sort: Option<SortKey>) -> Self {
		let results = match sort {
			Some(key) => sort_properties(&retrieval.results, key, None),
			None => retrieval.results,
		};

		Self { results, source: retrieval.source, error: retrieval.error }
	}
}

#[derive(Debug, Serialize)]
pub struct SortResponse {
	pub results: Vec<Property>,
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn list(
	State(state): State<AppState>,
	Json(payload): Json<ListBody>,
) -> Json<PropertiesResponse> {
	let retrieval = state.service.list(&payload.filters).await;

	Json(PropertiesResponse::sorted(retrieval, payload.sort))
}

async fn search(
	State(state): State<AppState>,
	Json(payload): Json<SearchBody>,
) -> Result<Json<PropertiesResponse>, ApiError> {
	if payload.query.trim().is_empty() {
		return Err(hearth_service::Error::InvalidRequest {
			message: "query must be non-empty.".to_string(),
		}
		.into());
	}

	let retrieval = state.service.search(&payload.query).await;

	Ok(Json(PropertiesResponse::sorted(retrieval, payload.sort)))
}

async fn get_property(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<Lookup>, ApiError> {
	let lookup = state.service.get_property(&id).await;

	if lookup.property.is_none() {
		return Err(json_error(
			StatusCode::NOT_FOUND,
			"NOT_FOUND",
			format!("Property {id:?} was not found."),
		));
	}

	Ok(Json(lookup))
}

async fn sort(Json(payload): Json<SortBody>) -> Json<SortResponse> {
	let results = sort_properties(&payload.properties, payload.sort, payload.insights.as_ref());

	Json(SortResponse { results })
}

async fn insights(
	State(state): State<AppState>,
	Json(payload): Json<InsightRequest>,
) -> Json<AiInsightResult> {
	let result =
		state.service.analyze(&payload.query, &payload.properties, &payload.search_type).await;

	Json(result)
}

async fn relay(
	State(state): State<AppState>,
	Json(payload): Json<InsightRequest>,
) -> (StatusCode, Json<InsightResponse>) {
	let response = state.service.relay_insights(payload).await;
	let status =
		if response.success { StatusCode::OK } else { StatusCode::INTERNAL_SERVER_ERROR };

	(status, Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

pub fn json_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
	ApiError { status, error_code: code.to_string(), message: message.into() }
}

impl From<hearth_service::Error> for ApiError {
	fn from(err: hearth_service::Error) -> Self {
		match err {
			hearth_service::Error::InvalidRequest { message } =>
				json_error(StatusCode::BAD_REQUEST, "INVALID_REQUEST", message),
			hearth_service::Error::Provider { message } => {
				tracing::error!(error = %message, "Provider error.");

				json_error(StatusCode::BAD_GATEWAY, "PROVIDER_ERROR", "Upstream provider failed.")
			},
			hearth_service::Error::Storage { message } => {
				tracing::error!(error = %message, "Storage error.");

				json_error(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", "Internal error.")
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
