pub mod album;
pub mod artist;
pub mod gallery;
pub mod video;
