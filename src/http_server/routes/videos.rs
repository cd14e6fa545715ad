use std::sync::Arc;

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::entities::video;
use crate::http_server::{
    error::ApiError,
    extract::{Json, Query},
    state::AppState,
};
use crate::services::video::VideoService;

#[derive(Debug, Deserialize)]
pub struct VideoListParams {
    page: Option<u64>,
    #[serde(rename = "pageSize")]
    page_size: Option<u64>,
    query: Option<String>,
    album_id: Option<i64>,
    category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VideoListResponse {
    status: bool,
    videos: Vec<video::Model>,
}

pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VideoListParams>,
) -> Result<Json<VideoListResponse>, ApiError> {
    let videos = VideoService::new(state.db.clone())
        .list(
            params.page,
            params.page_size,
            params.query.as_deref(),
            params.album_id,
            params.category.as_deref(),
        )
        .await?;

    Ok(Json(VideoListResponse {
        status: true,
        videos,
    }))
}

#[derive(Debug, Deserialize)]
pub struct VideoGenreParams {
    genre: Option<String>,
    page: Option<u64>,
    #[serde(rename = "pageSize")]
    page_size: Option<u64>,
}

pub async fn list_videos_by_genre(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VideoGenreParams>,
) -> Result<Json<VideoListResponse>, ApiError> {
    let genre = params
        .genre
        .ok_or_else(|| ApiError::Validation("genre is required".to_string()))?;

    let videos = VideoService::new(state.db.clone())
        .by_genre(&genre, params.page, params.page_size)
        .await?;

    Ok(Json(VideoListResponse {
        status: true,
        videos,
    }))
}
