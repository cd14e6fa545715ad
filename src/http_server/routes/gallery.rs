use std::sync::Arc;

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::entities::gallery_item;
use crate::http_server::{
    error::ApiError,
    extract::{Json, Query},
    state::AppState,
};
use crate::services::gallery::GalleryService;

#[derive(Debug, Deserialize)]
pub struct GalleryListParams {
    page: Option<u64>,
    #[serde(rename = "pageSize")]
    page_size: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct GalleryListResponse {
    status: bool,
    gallery: Vec<gallery_item::Model>,
}

pub async fn list_gallery(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GalleryListParams>,
) -> Result<Json<GalleryListResponse>, ApiError> {
    let gallery = GalleryService::new(state.db.clone())
        .list(params.page, params.page_size)
        .await?;

    Ok(Json(GalleryListResponse {
        status: true,
        gallery,
    }))
}
