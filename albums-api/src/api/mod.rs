//! HTTP API handlers for albums-api

pub mod albums;
pub mod health;

pub use albums::{
    album_routes, create_album, delete_album, get_album, list_albums, search_albums, update_album,
};
pub use health::health_routes;
