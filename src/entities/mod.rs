pub mod album;
pub mod artist;
pub mod gallery_item;
pub mod video;
