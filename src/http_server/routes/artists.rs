use std::sync::Arc;

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::entities::artist;
use crate::http_server::{
    error::ApiError,
    extract::{Json, Path, Query},
    state::AppState,
};
use crate::services::artist::{AgeFilter, ArtistService, ArtistSortMode};

#[derive(Debug, Serialize)]
pub struct ArtistListResponse {
    status: bool,
    artists: Vec<artist::Model>,
}

#[derive(Debug, Deserialize)]
pub struct ArtistListParams {
    page: Option<u64>,
    #[serde(rename = "pageSize")]
    page_size: Option<u64>,
    query: Option<String>,
}

pub async fn list_artists(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ArtistListParams>,
) -> Result<Json<ArtistListResponse>, ApiError> {
    let artists = ArtistService::new(state.db.clone())
        .list(params.page, params.page_size, params.query.as_deref())
        .await?;

    Ok(Json(ArtistListResponse {
        status: true,
        artists,
    }))
}

#[derive(Debug, Serialize)]
pub struct ArtistResponse {
    status: bool,
    artist: artist::Model,
}

pub async fn get_artist(
    State(state): State<Arc<AppState>>,
    Path(artist_id): Path<i64>,
) -> Result<Json<ArtistResponse>, ApiError> {
    let artist = ArtistService::new(state.db.clone())
        .by_id(artist_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("artist could not be found".to_string()))?;

    Ok(Json(ArtistResponse {
        status: true,
        artist,
    }))
}

#[derive(Debug, Deserialize)]
pub struct GenreBody {
    genre: Option<String>,
    page: Option<u64>,
    #[serde(rename = "pageSize")]
    page_size: Option<u64>,
}

pub async fn list_artists_by_genre(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenreBody>,
) -> Result<Json<ArtistListResponse>, ApiError> {
    let genre = body
        .genre
        .ok_or_else(|| ApiError::Validation("genre is required".to_string()))?;

    let artists = ArtistService::new(state.db.clone())
        .by_genre(&genre, body.page, body.page_size)
        .await?;

    Ok(Json(ArtistListResponse {
        status: true,
        artists,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SortModeBody {
    filter: Option<String>,
    page: Option<u64>,
    #[serde(rename = "pageSize")]
    page_size: Option<u64>,
}

pub async fn list_artists_by_sort_mode(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SortModeBody>,
) -> Result<Json<ArtistListResponse>, ApiError> {
    let filter = body
        .filter
        .ok_or_else(|| ApiError::Validation("filter is required".to_string()))?;
    let mode: ArtistSortMode = filter.parse()?;

    let artists = ArtistService::new(state.db.clone())
        .sorted(mode, body.page, body.page_size)
        .await?;

    Ok(Json(ArtistListResponse {
        status: true,
        artists,
    }))
}

#[derive(Debug, Deserialize)]
pub struct DemographicBody {
    gender: Option<String>,
    #[serde(rename = "ageFilter")]
    age_filter: Option<String>,
    #[serde(rename = "groupType")]
    group_type: Option<String>,
    page: Option<u64>,
    #[serde(rename = "pageSize")]
    page_size: Option<u64>,
}

pub async fn filter_artists(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DemographicBody>,
) -> Result<Json<ArtistListResponse>, ApiError> {
    let age_filter = body
        .age_filter
        .as_deref()
        .map(|s| s.parse::<AgeFilter>())
        .transpose()?;

    let artists = ArtistService::new(state.db.clone())
        .demographic(
            body.gender.as_deref(),
            age_filter,
            body.group_type.as_deref(),
            body.page,
            body.page_size,
        )
        .await?;

    Ok(Json(ArtistListResponse {
        status: true,
        artists,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    search: Option<String>,
}

pub async fn search_artists(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchBody>,
) -> Result<Json<ArtistListResponse>, ApiError> {
    let search = body
        .search
        .ok_or_else(|| ApiError::Validation("search is required".to_string()))?;

    let artists = ArtistService::new(state.db.clone()).search(&search).await?;

    Ok(Json(ArtistListResponse {
        status: true,
        artists,
    }))
}
