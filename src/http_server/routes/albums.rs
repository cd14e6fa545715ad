use std::sync::Arc;

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::entities::album;
use crate::http_server::{
    error::ApiError,
    extract::{Json, Query},
    state::AppState,
};
use crate::services::album::{AlbumService, AlbumSortMode};

#[derive(Debug, Serialize)]
pub struct AlbumListResponse {
    status: bool,
    albums: Vec<album::Model>,
}

#[derive(Debug, Deserialize)]
pub struct AlbumListParams {
    page: Option<u64>,
    #[serde(rename = "pageSize")]
    page_size: Option<u64>,
    query: Option<String>,
}

pub async fn list_albums(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AlbumListParams>,
) -> Result<Json<AlbumListResponse>, ApiError> {
    let albums = AlbumService::new(state.db.clone())
        .list(params.page, params.page_size, params.query.as_deref())
        .await?;

    Ok(Json(AlbumListResponse {
        status: true,
        albums,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SortModeBody {
    filter: Option<String>,
    page: Option<u64>,
    #[serde(rename = "pageSize")]
    page_size: Option<u64>,
}

pub async fn list_albums_by_sort_mode(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SortModeBody>,
) -> Result<Json<AlbumListResponse>, ApiError> {
    let filter = body
        .filter
        .ok_or_else(|| ApiError::Validation("filter is required".to_string()))?;
    let mode: AlbumSortMode = filter.parse()?;

    let albums = AlbumService::new(state.db.clone())
        .sorted(mode, body.page, body.page_size)
        .await?;

    Ok(Json(AlbumListResponse {
        status: true,
        albums,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    search: Option<String>,
}

pub async fn search_albums(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchBody>,
) -> Result<Json<AlbumListResponse>, ApiError> {
    let search = body
        .search
        .ok_or_else(|| ApiError::Validation("search is required".to_string()))?;

    let albums = AlbumService::new(state.db.clone()).search(&search).await?;

    Ok(Json(AlbumListResponse {
        status: true,
        albums,
    }))
}
