use std::sync::Arc;

use sea_orm::{
    ColumnTrait, Condition, DatabaseBackend, EntityTrait, QueryFilter, QuerySelect, Statement,
};

use crate::database::Database;
use crate::entities::video;
use crate::http_server::error::ApiError;
use crate::query_builder::{apply_pagination, contains_pattern, dedup_by_key, sql_page_bounds};

/// Minimum parsed view count for the trending category.
pub const TRENDING_VIEW_FLOOR: i64 = 10_000_000;

/// Trending ignores the caller's pagination and considers a fixed
/// candidate window instead.
const TRENDING_CANDIDATE_CAP: u64 = 200;

/// View counts arrive as text; unparseable values count as zero.
pub fn parse_views(raw: Option<&str>) -> i64 {
    raw.map(|s| s.trim().replace(',', ""))
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

pub struct VideoService {
    db: Arc<Database>,
}

impl VideoService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
        query: Option<&str>,
        album_id: Option<i64>,
        category: Option<&str>,
    ) -> Result<Vec<video::Model>, ApiError> {
        let mut select = video::Entity::find();
        if query.is_some() || album_id.is_some() {
            let mut condition = Condition::any();
            if let Some(term) = query {
                condition = condition.add(video::Column::Title.contains(term));
            }
            if let Some(album_id) = album_id {
                condition = condition.add(video::Column::AlbumId.eq(album_id));
            }
            select = select.filter(condition);
        }

        let videos = if category == Some("trending") {
            // Trending replaces the paged result set: take a capped
            // candidate window under the same filter, then keep only
            // heavily-viewed videos.
            select
                .limit(TRENDING_CANDIDATE_CAP)
                .all(&self.db.conn)
                .await?
                .into_iter()
                .filter(|v| parse_views(v.views.as_deref()) > TRENDING_VIEW_FLOOR)
                .collect()
        } else {
            apply_pagination(select, page, page_size)
                .all(&self.db.conn)
                .await?
        };

        Ok(dedup_by_key(videos, |v| v.id))
    }

    /// Genre membership over the comma-joined `genre` column, as a
    /// parameterized raw query.
    pub async fn by_genre(
        &self,
        genre: &str,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<Vec<video::Model>, ApiError> {
        let (limit, offset) = sql_page_bounds(page, page_size);
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT * FROM videos WHERE genre LIKE ? LIMIT ? OFFSET ?",
            [contains_pattern(genre).into(), limit.into(), offset.into()],
        );

        let videos = video::Entity::find()
            .from_raw_sql(stmt)
            .all(&self.db.conn)
            .await?;
        Ok(dedup_by_key(videos, |v| v.id))
    }
}
