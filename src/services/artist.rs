use std::str::FromStr;
use std::sync::Arc;

use sea_orm::{
    ColumnTrait, DatabaseBackend, EntityTrait, QueryFilter, QueryOrder, Statement, Value,
};

use crate::database::Database;
use crate::entities::{artist, video};
use crate::http_server::error::ApiError;
use crate::query_builder::{apply_pagination, apply_text_search, contains_pattern, sql_page_bounds};

/// Artist name marking a soft-deleted placeholder row; excluded from
/// every listing and lookup.
pub const PLACEHOLDER_ARTIST_NAME: &str = "0";

/// Supported sort modes for `/artists/sortmode`. Unrecognized strings
/// and the contract's dormant modes (`rip`, `recently-updated`,
/// `social_followers`, `most_photos`, `following`) fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistSortMode {
    Views,
    NameAsc,
    NameDesc,
    DobAsc,
    DobDesc,
    MonthlyListeners,
    Birthday,
}

impl FromStr for ArtistSortMode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "views" => Ok(Self::Views),
            "a-z" => Ok(Self::NameAsc),
            "z-a" => Ok(Self::NameDesc),
            "y-to-o" => Ok(Self::DobAsc),
            "o-to-y" => Ok(Self::DobDesc),
            "monthly-listeners" => Ok(Self::MonthlyListeners),
            "birthday" => Ok(Self::Birthday),
            _ => Err(ApiError::Validation("artists not found".to_string())),
        }
    }
}

/// Age-range predicates for the demographic filter. A closed enum, so
/// the SQL fragments below never contain caller-supplied text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeFilter {
    Under20,
    Twenties,
    Thirties,
    Over40,
}

impl FromStr for AgeFilter {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "20>age" => Ok(Self::Under20),
            "20-30" => Ok(Self::Twenties),
            "30-40" => Ok(Self::Thirties),
            "40<age" => Ok(Self::Over40),
            other => Err(ApiError::Validation(format!(
                "unknown ageFilter: {other}"
            ))),
        }
    }
}

impl AgeFilter {
    fn predicate(self) -> &'static str {
        match self {
            AgeFilter::Under20 => {
                " AND (CAST(strftime('%Y', 'now') AS INTEGER) - CAST(strftime('%Y', dob) AS INTEGER)) < 20"
            }
            AgeFilter::Twenties => {
                " AND (CAST(strftime('%Y', 'now') AS INTEGER) - CAST(strftime('%Y', dob) AS INTEGER)) BETWEEN 20 AND 30"
            }
            AgeFilter::Thirties => {
                " AND (CAST(strftime('%Y', 'now') AS INTEGER) - CAST(strftime('%Y', dob) AS INTEGER)) BETWEEN 30 AND 40"
            }
            AgeFilter::Over40 => {
                " AND (CAST(strftime('%Y', 'now') AS INTEGER) - CAST(strftime('%Y', dob) AS INTEGER)) > 40"
            }
        }
    }
}

pub struct ArtistService {
    db: Arc<Database>,
}

impl ArtistService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn by_id(&self, id: i64) -> Result<Option<artist::Model>, ApiError> {
        let artist = artist::Entity::find()
            .filter(artist::Column::Id.eq(id))
            .filter(artist::Column::Name.ne(PLACEHOLDER_ARTIST_NAME))
            .one(&self.db.conn)
            .await?;
        Ok(artist)
    }

    /// Lookup-surface contract method; not routed.
    #[allow(dead_code)]
    pub async fn by_name(&self, name: &str) -> Result<Option<artist::Model>, ApiError> {
        let artist = artist::Entity::find()
            .filter(artist::Column::Name.eq(name))
            .one(&self.db.conn)
            .await?;
        Ok(artist)
    }

    /// Lookup-surface contract method; not routed.
    #[allow(dead_code)]
    pub async fn videos_for(&self, artist_id: i64) -> Result<Vec<video::Model>, ApiError> {
        let videos = video::Entity::find()
            .filter(video::Column::ArtistId.eq(artist_id))
            .all(&self.db.conn)
            .await?;
        Ok(videos)
    }

    pub async fn list(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
        query: Option<&str>,
    ) -> Result<Vec<artist::Model>, ApiError> {
        let mut select =
            artist::Entity::find().filter(artist::Column::Name.ne(PLACEHOLDER_ARTIST_NAME));
        if let Some(term) = query {
            select = apply_text_search(select, artist::Column::Name, term);
        }

        let artists = apply_pagination(select, page, page_size)
            .all(&self.db.conn)
            .await?;
        Ok(crate::query_builder::dedup_by_key(artists, |a| a.id))
    }

    /// Genre membership over the comma-joined `genre` column, as a
    /// parameterized raw query.
    pub async fn by_genre(
        &self,
        genre: &str,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<Vec<artist::Model>, ApiError> {
        let (limit, offset) = sql_page_bounds(page, page_size);
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT * FROM artists WHERE name <> '0' AND genre LIKE ? LIMIT ? OFFSET ?",
            [contains_pattern(genre).into(), limit.into(), offset.into()],
        );

        let artists = artist::Entity::find()
            .from_raw_sql(stmt)
            .all(&self.db.conn)
            .await?;
        Ok(crate::query_builder::dedup_by_key(artists, |a| a.id))
    }

    pub async fn sorted(
        &self,
        mode: ArtistSortMode,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<Vec<artist::Model>, ApiError> {
        let base = artist::Entity::find().filter(artist::Column::Name.ne(PLACEHOLDER_ARTIST_NAME));

        let select = match mode {
            // Birthday is a date-part comparison the filter builder
            // cannot express; it intentionally queries all artists,
            // placeholder included.
            ArtistSortMode::Birthday => return self.with_birthday_today(page, page_size).await,
            ArtistSortMode::Views => base.order_by_desc(artist::Column::Views),
            ArtistSortMode::NameAsc => base.order_by_asc(artist::Column::Name),
            ArtistSortMode::NameDesc => base.order_by_desc(artist::Column::Name),
            ArtistSortMode::DobAsc => base.order_by_asc(artist::Column::Dob),
            ArtistSortMode::DobDesc => base.order_by_desc(artist::Column::Dob),
            ArtistSortMode::MonthlyListeners => {
                base.order_by_desc(artist::Column::MonthlyListeners)
            }
        };

        let artists = apply_pagination(select, page, page_size)
            .all(&self.db.conn)
            .await?;
        Ok(crate::query_builder::dedup_by_key(artists, |a| a.id))
    }

    async fn with_birthday_today(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<Vec<artist::Model>, ApiError> {
        let (limit, offset) = sql_page_bounds(page, page_size);
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT * FROM artists \
             WHERE dob IS NOT NULL \
             AND strftime('%m-%d', dob) = strftime('%m-%d', 'now', 'localtime') \
             LIMIT ? OFFSET ?",
            [limit.into(), offset.into()],
        );

        let artists = artist::Entity::find()
            .from_raw_sql(stmt)
            .all(&self.db.conn)
            .await?;
        Ok(artists)
    }

    /// Conjunction of typed demographic predicates compiled to a
    /// parameterized statement. Caller-supplied values are always
    /// bound, never spliced into the SQL text.
    pub async fn demographic(
        &self,
        gender: Option<&str>,
        age_filter: Option<AgeFilter>,
        group_type: Option<&str>,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<Vec<artist::Model>, ApiError> {
        let mut sql = String::from("SELECT * FROM artists WHERE name <> '0'");
        let mut values: Vec<Value> = Vec::new();

        if let Some(gender) = gender {
            sql.push_str(" AND gender = ?");
            values.push(gender.into());
        }
        if let Some(group_type) = group_type {
            sql.push_str(" AND group_type = ?");
            values.push(group_type.into());
        }
        if let Some(age_filter) = age_filter {
            sql.push_str(age_filter.predicate());
        }

        let (limit, offset) = sql_page_bounds(page, page_size);
        sql.push_str(" LIMIT ? OFFSET ?");
        values.push(limit.into());
        values.push(offset.into());

        let artists = artist::Entity::find()
            .from_raw_sql(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                sql,
                values,
            ))
            .all(&self.db.conn)
            .await?;

        if artists.is_empty() {
            return Err(ApiError::NotFound("artists not found".to_string()));
        }
        Ok(artists)
    }

    pub async fn search(&self, term: &str) -> Result<Vec<artist::Model>, ApiError> {
        let select = apply_text_search(
            artist::Entity::find().filter(artist::Column::Name.ne(PLACEHOLDER_ARTIST_NAME)),
            artist::Column::Name,
            term,
        );
        let artists = select.all(&self.db.conn).await?;

        if artists.is_empty() {
            return Err(ApiError::NotFound("artist could not be found".to_string()));
        }
        Ok(artists)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use sea_orm::{ActiveModelTrait, ActiveValue::Set};

    use super::*;
    use crate::test_utils::{artist_fixture, test_db, video_fixture};

    #[test]
    fn sort_mode_parses_supported_values() {
        assert_eq!("a-z".parse::<ArtistSortMode>().unwrap(), ArtistSortMode::NameAsc);
        assert_eq!("z-a".parse::<ArtistSortMode>().unwrap(), ArtistSortMode::NameDesc);
        assert_eq!("views".parse::<ArtistSortMode>().unwrap(), ArtistSortMode::Views);
        assert_eq!(
            "birthday".parse::<ArtistSortMode>().unwrap(),
            ArtistSortMode::Birthday
        );
    }

    #[test]
    fn dormant_sort_modes_fail_to_parse() {
        for mode in ["rip", "recently-updated", "social_followers", "most_photos", "following"] {
            assert!(mode.parse::<ArtistSortMode>().is_err());
        }
        assert!("bogus".parse::<ArtistSortMode>().is_err());
    }

    #[test]
    fn age_filter_parses_the_four_ranges() {
        assert_eq!("20>age".parse::<AgeFilter>().unwrap(), AgeFilter::Under20);
        assert_eq!("20-30".parse::<AgeFilter>().unwrap(), AgeFilter::Twenties);
        assert_eq!("30-40".parse::<AgeFilter>().unwrap(), AgeFilter::Thirties);
        assert_eq!("40<age".parse::<AgeFilter>().unwrap(), AgeFilter::Over40);
        assert!("ancient".parse::<AgeFilter>().is_err());
    }

    #[tokio::test]
    async fn by_id_skips_placeholder_rows() {
        let db = test_db().await;
        artist_fixture(1, "0").insert(&db.conn).await.unwrap();
        artist_fixture(2, "Jane").insert(&db.conn).await.unwrap();

        let service = ArtistService::new(db);
        assert!(service.by_id(1).await.unwrap().is_none());
        assert_eq!(service.by_id(2).await.unwrap().unwrap().name, "Jane");
    }

    #[tokio::test]
    async fn by_name_matches_exactly() {
        let db = test_db().await;
        artist_fixture(1, "Jane").insert(&db.conn).await.unwrap();

        let service = ArtistService::new(db);
        assert!(service.by_name("Jane").await.unwrap().is_some());
        assert!(service.by_name("Jan").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn videos_for_returns_artist_videos() {
        let db = test_db().await;
        artist_fixture(1, "Jane").insert(&db.conn).await.unwrap();
        let mut video = video_fixture(10, "Clip");
        video.artist_id = Set(Some(1));
        video.insert(&db.conn).await.unwrap();
        let mut other = video_fixture(11, "Other clip");
        other.artist_id = Set(Some(2));
        other.insert(&db.conn).await.unwrap();

        let videos = ArtistService::new(db).videos_for(1).await.unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "Clip");
    }

    #[tokio::test]
    async fn sorted_a_to_z_orders_by_name() {
        let db = test_db().await;
        for (id, name) in [(1, "Mika"), (2, "Adele"), (3, "Zed")] {
            artist_fixture(id, name).insert(&db.conn).await.unwrap();
        }

        let service = ArtistService::new(db);
        let ascending = service
            .sorted(ArtistSortMode::NameAsc, None, None)
            .await
            .unwrap();
        let names: Vec<_> = ascending.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Adele", "Mika", "Zed"]);

        let descending = service
            .sorted(ArtistSortMode::NameDesc, None, None)
            .await
            .unwrap();
        let names: Vec<_> = descending.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Mika", "Adele"]);
    }

    #[tokio::test]
    async fn sorted_by_dob_ascends_and_descends() {
        let db = test_db().await;
        let mut older = artist_fixture(1, "Older");
        older.dob = Set(Some("1970-03-01".to_string()));
        older.insert(&db.conn).await.unwrap();
        let mut younger = artist_fixture(2, "Younger");
        younger.dob = Set(Some("2001-08-15".to_string()));
        younger.insert(&db.conn).await.unwrap();

        let service = ArtistService::new(db);
        let ascending = service
            .sorted(ArtistSortMode::DobAsc, None, None)
            .await
            .unwrap();
        assert_eq!(ascending[0].name, "Older");

        let descending = service
            .sorted(ArtistSortMode::DobDesc, None, None)
            .await
            .unwrap();
        assert_eq!(descending[0].name, "Younger");
    }

    #[tokio::test]
    async fn birthday_mode_matches_todays_month_and_day() {
        let db = test_db().await;
        let today = chrono::Local::now().format("%m-%d").to_string();
        let mut birthday = artist_fixture(1, "Birthday");
        birthday.dob = Set(Some(format!("1990-{today}")));
        birthday.insert(&db.conn).await.unwrap();
        let mut not_today = artist_fixture(2, "Not Today");
        not_today.dob = Set(Some("1990-01-01".to_string()));
        // Avoid a false failure when the suite runs on January 1st
        if today == "01-01" {
            not_today.dob = Set(Some("1990-07-02".to_string()));
        }
        not_today.insert(&db.conn).await.unwrap();

        let artists = ArtistService::new(db)
            .sorted(ArtistSortMode::Birthday, None, None)
            .await
            .unwrap();
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "Birthday");
    }

    #[tokio::test]
    async fn by_genre_matches_token_in_joined_field() {
        let db = test_db().await;
        let mut rapper = artist_fixture(1, "Rapper");
        rapper.genre = Set(Some("hip hop, trap".to_string()));
        rapper.insert(&db.conn).await.unwrap();
        let mut singer = artist_fixture(2, "Singer");
        singer.genre = Set(Some("r&b".to_string()));
        singer.insert(&db.conn).await.unwrap();

        let artists = ArtistService::new(db)
            .by_genre("hip hop", None, None)
            .await
            .unwrap();
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "Rapper");
    }

    #[tokio::test]
    async fn by_genre_huge_page_returns_empty() {
        let db = test_db().await;
        let mut rapper = artist_fixture(1, "Rapper");
        rapper.genre = Set(Some("hip hop".to_string()));
        rapper.insert(&db.conn).await.unwrap();

        let artists = ArtistService::new(db)
            .by_genre("hip hop", Some(u64::MAX), Some(10))
            .await
            .unwrap();
        assert!(artists.is_empty());
    }

    #[tokio::test]
    async fn demographic_filters_by_gender_and_group() {
        let db = test_db().await;
        let mut solo_male = artist_fixture(1, "Solo Male");
        solo_male.gender = Set(Some("Male".to_string()));
        solo_male.group_type = Set(Some("solo".to_string()));
        solo_male.insert(&db.conn).await.unwrap();
        let mut group = artist_fixture(2, "Group");
        group.gender = Set(Some("Male".to_string()));
        group.group_type = Set(Some("group".to_string()));
        group.insert(&db.conn).await.unwrap();

        let artists = ArtistService::new(db)
            .demographic(Some("Male"), None, Some("solo"), None, None)
            .await
            .unwrap();
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "Solo Male");
    }

    #[tokio::test]
    async fn demographic_age_range_uses_dob() {
        let db = test_db().await;
        let thirty_five_years_ago = chrono::Local::now().year() - 35;
        let mut mid = artist_fixture(1, "Mid");
        mid.dob = Set(Some(format!("{thirty_five_years_ago}-06-01")));
        mid.insert(&db.conn).await.unwrap();
        let mut young = artist_fixture(2, "Young");
        let eighteen_years_ago = chrono::Local::now().year() - 18;
        young.dob = Set(Some(format!("{eighteen_years_ago}-06-01")));
        young.insert(&db.conn).await.unwrap();

        let artists = ArtistService::new(db)
            .demographic(None, Some(AgeFilter::Thirties), None, None, None)
            .await
            .unwrap();
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "Mid");
    }

    #[tokio::test]
    async fn demographic_binds_values_instead_of_splicing() {
        let db = test_db().await;
        let mut artist = artist_fixture(1, "Jane");
        artist.gender = Set(Some("Female".to_string()));
        artist.insert(&db.conn).await.unwrap();

        // A tautology injected through the gender field must match
        // nothing rather than widen the predicate.
        let result = ArtistService::new(db)
            .demographic(Some("' OR '1'='1"), None, None, None, None)
            .await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn search_misses_yield_not_found() {
        let db = test_db().await;
        let result = ArtistService::new(db).search("nobody").await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
