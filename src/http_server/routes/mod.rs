pub mod albums;
pub mod artists;
pub mod entries;
pub mod gallery;
pub mod videos;
