use std::sync::Arc;

use migration::MigratorTrait;
use sea_orm::{ActiveValue::NotSet, ActiveValue::Set, Database as SeaDatabase};

use crate::database::Database;
use crate::entities::{album, artist, gallery_item, video};

/// Fresh in-memory database with the real migrations applied.
pub async fn test_db() -> Arc<Database> {
    let conn = SeaDatabase::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&conn, None).await.unwrap();
    Arc::new(Database { conn })
}

pub fn artist_fixture(id: i64, name: &str) -> artist::ActiveModel {
    artist::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        nick_names: NotSet,
        genre: NotSet,
        gender: NotSet,
        group_type: NotSet,
        dob: NotSet,
        birthplace: NotSet,
        occupation: NotSet,
        label: NotSet,
        img: NotSet,
        youtube: NotSet,
        facebook: NotSet,
        instagram: NotSet,
        twitter: NotSet,
        soundcloud: NotSet,
        website: NotSet,
        youtube_count: NotSet,
        facebook_count: NotSet,
        instagram_count: NotSet,
        twitter_count: NotSet,
        soundcloud_count: NotSet,
        spotify_count: NotSet,
        views: NotSet,
        monthly_listeners: NotSet,
    }
}

pub fn album_fixture(id: i64, artist_id: i64, name: &str) -> album::ActiveModel {
    album::ActiveModel {
        id: Set(id),
        artist_id: Set(artist_id),
        artist_name: NotSet,
        name: Set(name.to_string()),
        label: NotSet,
        album_type: NotSet,
        release_date: NotSet,
        img: NotSet,
        tracks: NotSet,
        duration: NotSet,
        apple_music: NotSet,
        spotify: NotSet,
        amazon: NotSet,
        youtube_music: NotSet,
        tidal: NotSet,
    }
}

pub fn video_fixture(id: i64, title: &str) -> video::ActiveModel {
    video::ActiveModel {
        id: Set(id),
        title: Set(title.to_string()),
        album_id: NotSet,
        artist_id: NotSet,
        artist_name: NotSet,
        video_id: NotSet,
        genre: NotSet,
        duration: NotSet,
        views: NotSet,
        release_date: NotSet,
        description: NotSet,
        img: NotSet,
        category: NotSet,
    }
}

pub fn gallery_fixture(id: i64, artist_id: i64) -> gallery_item::ActiveModel {
    gallery_item::ActiveModel {
        id: Set(id),
        artist_id: Set(artist_id),
        source: NotSet,
        url: NotSet,
        thumbnail_url: NotSet,
        width: NotSet,
        height: NotSet,
        location: NotSet,
        date_taken: NotSet,
    }
}
