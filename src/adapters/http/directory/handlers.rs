//! HTTP handlers for the directory.

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::profile::dto::ProfileCardResponse;
use crate::adapters::http::profile::ProfileApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{GetDirectoryFacetsQuery, SearchDirectoryQuery};

use super::dto::{DirectoryQueryParams, DirectoryResponse, FacetsResponse};

/// GET /api/directory - Filtered, ordered list of public profiles
pub async fn search_directory(
    State(state): State<AppState>,
    Query(params): Query<DirectoryQueryParams>,
) -> Result<Response, ProfileApiError> {
    let filter = match params.into_filter() {
        Ok(filter) => filter,
        Err(e) => {
            return Ok(ErrorResponse::invalid_field("sort_by", e.to_string())
                .into_response_with(StatusCode::BAD_REQUEST))
        }
    };

    let result = state
        .search_directory_handler()
        .handle(SearchDirectoryQuery { filter })
        .await?;

    let response = DirectoryResponse {
        profiles: result.profiles.iter().map(ProfileCardResponse::from).collect(),
        total: result.total,
        has_active_filters: result.filter.has_active_filters(),
        filter: result.filter,
    };
    Ok(Json(response).into_response())
}

/// GET /api/directory/facets - Option lists for the filter form
pub async fn get_facets(State(state): State<AppState>) -> Result<impl IntoResponse, ProfileApiError> {
    let facets = state
        .directory_facets_handler()
        .handle(GetDirectoryFacetsQuery)
        .await?;
    Ok(Json(FacetsResponse::from(facets)))
}
