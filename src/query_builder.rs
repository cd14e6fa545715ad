use std::collections::HashSet;
use std::hash::Hash;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect};

pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Resolve 1-indexed pagination parameters into (limit, offset).
/// Defaults are page 1 with 10 rows; non-positive values clamp to 1.
/// Offsets saturate, so absurd page numbers read past the end of the
/// table and come back empty instead of overflowing.
pub fn page_bounds(page: Option<u64>, page_size: Option<u64>) -> (u64, u64) {
    let page = page.unwrap_or(1).max(1);
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    (page_size, (page - 1).saturating_mul(page_size))
}

/// `page_bounds` clamped into SQLite's signed range, for binding into
/// raw statements. An unclamped cast would wrap negative, and SQLite
/// reads a negative LIMIT as "no limit".
pub fn sql_page_bounds(page: Option<u64>, page_size: Option<u64>) -> (i64, i64) {
    let (limit, offset) = page_bounds(page, page_size);
    (
        i64::try_from(limit).unwrap_or(i64::MAX),
        i64::try_from(offset).unwrap_or(i64::MAX),
    )
}

/// Apply pagination to a query with defaults and bounds checking.
pub fn apply_pagination<T: EntityTrait>(
    query: sea_orm::Select<T>,
    page: Option<u64>,
    page_size: Option<u64>,
) -> sea_orm::Select<T> {
    let (limit, offset) = sql_page_bounds(page, page_size);
    query.limit(limit as u64).offset(offset as u64)
}

/// Apply case-insensitive substring search to a single column using
/// SQLite's LIKE operator (case-insensitive for ASCII by default).
pub fn apply_text_search<T, C>(
    query: sea_orm::Select<T>,
    column: C,
    search_term: &str,
) -> sea_orm::Select<T>
where
    T: EntityTrait,
    C: ColumnTrait,
{
    if search_term.is_empty() {
        return query;
    }
    query.filter(column.like(format!("%{}%", search_term)))
}

/// LIKE pattern for substring matching, bound as a query parameter in
/// raw statements.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", term)
}

/// Collapse duplicate rows by key, keeping first occurrence order.
pub fn dedup_by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}
