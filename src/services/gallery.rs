use std::sync::Arc;

use sea_orm::EntityTrait;

use crate::database::Database;
use crate::entities::gallery_item;
use crate::http_server::error::ApiError;
use crate::query_builder::apply_pagination;

pub struct GalleryService {
    db: Arc<Database>,
}

impl GalleryService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<Vec<gallery_item::Model>, ApiError> {
        let items = apply_pagination(gallery_item::Entity::find(), page, page_size)
            .all(&self.db.conn)
            .await?;
        Ok(items)
    }
}
