use std::str::FromStr;
use std::sync::Arc;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::database::Database;
use crate::entities::album;
use crate::http_server::error::ApiError;
use crate::query_builder::{apply_pagination, apply_text_search, dedup_by_key};

/// Album name marking a catch-all bucket; excluded from listings and
/// search.
pub const OTHER_ALBUM_NAME: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumSortMode {
    Tracks,
    Duration,
    RecentFirst,
    OldestFirst,
    /// No distinguishing sort; an unsorted paginated fetch.
    MostPopularArtist,
}

impl FromStr for AlbumSortMode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tracks" => Ok(Self::Tracks),
            "duration" => Ok(Self::Duration),
            "recent_first" => Ok(Self::RecentFirst),
            "oldest_first" => Ok(Self::OldestFirst),
            "most_popular_artist" => Ok(Self::MostPopularArtist),
            _ => Err(ApiError::Validation("albums not found".to_string())),
        }
    }
}

pub struct AlbumService {
    db: Arc<Database>,
}

impl AlbumService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
        query: Option<&str>,
    ) -> Result<Vec<album::Model>, ApiError> {
        let mut select = album::Entity::find().filter(album::Column::Name.ne(OTHER_ALBUM_NAME));
        if let Some(term) = query {
            select = apply_text_search(select, album::Column::Name, term);
        }

        let albums = apply_pagination(select, page, page_size)
            .all(&self.db.conn)
            .await?;
        // Listings collapse re-releases that share a name
        Ok(dedup_by_key(albums, |a| a.name.clone()))
    }

    pub async fn sorted(
        &self,
        mode: AlbumSortMode,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<Vec<album::Model>, ApiError> {
        let base = album::Entity::find().filter(album::Column::ArtistId.ne(0));

        let select = match mode {
            AlbumSortMode::Tracks => base.order_by_desc(album::Column::Tracks),
            AlbumSortMode::Duration => base.order_by_desc(album::Column::Duration),
            AlbumSortMode::RecentFirst => base.order_by_desc(album::Column::ReleaseDate),
            AlbumSortMode::OldestFirst => base.order_by_asc(album::Column::ReleaseDate),
            AlbumSortMode::MostPopularArtist => base,
        };

        let albums = apply_pagination(select, page, page_size)
            .all(&self.db.conn)
            .await?;
        Ok(dedup_by_key(albums, |a| a.id))
    }

    pub async fn search(&self, term: &str) -> Result<Vec<album::Model>, ApiError> {
        let select = apply_text_search(
            album::Entity::find().filter(album::Column::Name.ne(OTHER_ALBUM_NAME)),
            album::Column::Name,
            term,
        );
        let albums = select.all(&self.db.conn).await?;

        if albums.is_empty() {
            return Err(ApiError::NotFound("album could not be found".to_string()));
        }
        Ok(albums)
    }
}
