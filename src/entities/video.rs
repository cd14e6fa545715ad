use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A music video. `views` and `duration` arrive from the ingestion
/// pipeline as text; numeric comparisons parse them.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "videos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub album_id: Option<i64>,
    pub artist_id: Option<i64>,
    pub artist_name: Option<String>,
    pub video_id: Option<String>,
    pub genre: Option<String>,
    pub duration: Option<String>,
    pub views: Option<String>,
    pub release_date: Option<String>,
    pub description: Option<String>,
    pub img: Option<String>,
    pub category: Option<String>,
}

impl ActiveModelBehavior for ActiveModel {}
