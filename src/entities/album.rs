use sea_orm::entity::prelude::*;
use serde::Serialize;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "albums")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub artist_id: i64,
    pub artist_name: Option<String>,
    pub name: String,
    pub label: Option<String>,
    pub album_type: Option<String>,
    pub release_date: Option<String>,
    pub img: Option<String>,
    pub tracks: Option<i32>,
    pub duration: Option<i32>,
    pub apple_music: Option<String>,
    pub spotify: Option<String>,
    pub amazon: Option<String>,
    pub youtube_music: Option<String>,
    pub tidal: Option<String>,
}

impl ActiveModelBehavior for ActiveModel {}
