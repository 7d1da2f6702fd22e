use axum::{
	Json, Router,
	extract::{Path, Query, State},
	http::StatusCode,
	middleware,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;

use crate::{middleware as mw, state::AppState};
use medcat_service::{Error, ListResponse, SearchRequest, SearchResponse, SuggestResponse};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/medicines", get(list))
		.route("/medicines/search", get(search))
		.route("/medicines/suggest/", get(suggest_missing))
		.route("/medicines/suggest/{term}", get(suggest))
		.layer(middleware::from_fn_with_state(state.cors.clone(), mw::cors))
		.layer(middleware::from_fn(mw::log_request))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn list(State(state): State<AppState>) -> Result<Json<ListResponse>, ApiError> {
	let response = state.service.list().await?;

	Ok(Json(response))
}

async fn search(
	State(state): State<AppState>,
	Query(params): Query<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.search(params).await?;

	Ok(Json(response))
}

async fn suggest(
	State(state): State<AppState>,
	Path(term): Path<String>,
) -> Result<Json<SuggestResponse>, ApiError> {
	let response = state.service.suggest(&term).await?;

	Ok(Json(response))
}

async fn suggest_missing(State(state): State<AppState>) -> Result<Json<SuggestResponse>, ApiError> {
	let response = state.service.suggest("").await?;

	Ok(Json(response))
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
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}
impl From<Error> for ApiError {
	fn from(err: Error) -> Self {
		match err {
			Error::InvalidRequest { message } =>
				ApiError::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", message),
			Error::Storage { message } => {
				tracing::error!(error = %message, "Request failed on storage.");

				ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", message)
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
