use sea_orm::entity::prelude::*;
use serde::Serialize;

/// An artist as ingested by the upstream pipeline. `genre` is a
/// comma-joined string rather than a relation, and `views` /
/// `monthly_listeners` are stored as text.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "artists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub nick_names: Option<String>,
    pub genre: Option<String>,
    pub gender: Option<String>,
    pub group_type: Option<String>,
    pub dob: Option<String>,
    pub birthplace: Option<String>,
    pub occupation: Option<String>,
    pub label: Option<String>,
    pub img: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub soundcloud: Option<String>,
    pub website: Option<String>,
    pub youtube_count: Option<i64>,
    pub facebook_count: Option<i64>,
    pub instagram_count: Option<i64>,
    pub twitter_count: Option<i64>,
    pub soundcloud_count: Option<i64>,
    pub spotify_count: Option<i64>,
    pub views: Option<String>,
    pub monthly_listeners: Option<String>,
}

impl ActiveModelBehavior for ActiveModel {}
