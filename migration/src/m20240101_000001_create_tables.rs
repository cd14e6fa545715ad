use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Artists table. Text dates and text counters mirror the upstream
        // ingestion pipeline, which owns all writes to these tables.
        manager
            .create_table(
                Table::create()
                    .table("artists")
                    .if_not_exists()
                    .col(pk_auto("id"))
                    .col(string("name"))
                    .col(string_null("nick_names"))
                    .col(string_null("genre"))
                    .col(string_null("gender"))
                    .col(string_null("group_type"))
                    .col(string_null("dob"))
                    .col(string_null("birthplace"))
                    .col(string_null("occupation"))
                    .col(string_null("label"))
                    .col(string_null("img"))
                    .col(string_null("youtube"))
                    .col(string_null("facebook"))
                    .col(string_null("instagram"))
                    .col(string_null("twitter"))
                    .col(string_null("soundcloud"))
                    .col(string_null("website"))
                    .col(big_integer_null("youtube_count"))
                    .col(big_integer_null("facebook_count"))
                    .col(big_integer_null("instagram_count"))
                    .col(big_integer_null("twitter_count"))
                    .col(big_integer_null("soundcloud_count"))
                    .col(big_integer_null("spotify_count"))
                    .col(string_null("views"))
                    .col(string_null("monthly_listeners"))
                    .to_owned(),
            )
            .await?;

        // Albums table
        manager
            .create_table(
                Table::create()
                    .table("albums")
                    .if_not_exists()
                    .col(pk_auto("id"))
                    .col(big_integer("artist_id"))
                    .col(string_null("artist_name"))
                    .col(string("name"))
                    .col(string_null("label"))
                    .col(string_null("album_type"))
                    .col(string_null("release_date"))
                    .col(string_null("img"))
                    .col(integer_null("tracks"))
                    .col(integer_null("duration"))
                    .col(string_null("apple_music"))
                    .col(string_null("spotify"))
                    .col(string_null("amazon"))
                    .col(string_null("youtube_music"))
                    .col(string_null("tidal"))
                    .to_owned(),
            )
            .await?;

        // Videos table
        manager
            .create_table(
                Table::create()
                    .table("videos")
                    .if_not_exists()
                    .col(pk_auto("id"))
                    .col(string("title"))
                    .col(big_integer_null("album_id"))
                    .col(big_integer_null("artist_id"))
                    .col(string_null("artist_name"))
                    .col(string_null("video_id"))
                    .col(string_null("genre"))
                    .col(string_null("duration"))
                    .col(string_null("views"))
                    .col(string_null("release_date"))
                    .col(string_null("description"))
                    .col(string_null("img"))
                    .col(string_null("category"))
                    .to_owned(),
            )
            .await?;

        // Gallery table
        manager
            .create_table(
                Table::create()
                    .table("gallery")
                    .if_not_exists()
                    .col(pk_auto("id"))
                    .col(big_integer("artist_id"))
                    .col(string_null("source"))
                    .col(string_null("url"))
                    .col(string_null("thumbnail_url"))
                    .col(integer_null("width"))
                    .col(integer_null("height"))
                    .col(string_null("location"))
                    .col(string_null("date_taken"))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table("gallery").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("videos").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("albums").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("artists").to_owned())
            .await?;
        Ok(())
    }
}
