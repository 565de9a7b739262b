//! Album CRUD and search endpoints
//!
//! `/albums/search` is a static segment, so it always wins over `/albums/:id`.

use albums_common::Album;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;

use crate::{search::SearchQuery, ApiError, ApiResult, AppState};

/// Build album routes
pub fn album_routes() -> Router<AppState> {
    Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route("/albums/search", get(search_albums))
        .route(
            "/albums/:id",
            get(get_album).put(update_album).delete(delete_album),
        )
}

/// Unwrap a JSON body, turning extractor failures into 400 text
fn json_body(payload: Result<Json<Album>, JsonRejection>) -> ApiResult<Album> {
    payload.map(|Json(album)| album).map_err(|rejection| {
        debug!("Rejected album body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })
}

/// GET /albums
pub async fn list_albums(State(state): State<AppState>) -> Json<Vec<Album>> {
    let store = state.store.read().await;
    Json(store.all().to_vec())
}

/// GET /albums/search?artistName=Beyoncé&primaryGenreName=Pop
///
/// Keys are limited to `primaryGenreName`, `artistName` and
/// `collectionName`; any other key fails the whole request.
pub async fn search_albums(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Album>>> {
    let query = SearchQuery::from_pairs(pairs).map_err(|forbidden| {
        debug!("Search rejected: {}", forbidden);
        forbidden
    })?;

    let store = state.store.read().await;
    let results = query.apply(store.all()).into_iter().cloned().collect();
    Ok(Json(results))
}

/// GET /albums/:id
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Album>> {
    let store = state.store.read().await;
    store.get(&id).cloned().map(Json).ok_or(ApiError::NotFound)
}

/// POST /albums
///
/// The server assigns `albumId`; a client-supplied one is discarded.
pub async fn create_album(
    State(state): State<AppState>,
    payload: Result<Json<Album>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let album = json_body(payload)?;
    album
        .validate()
        .map_err(|_| ApiError::BadRequest("album is not valid".to_string()))?;

    let id = state.store.write().await.insert(album);
    debug!("Created album {}", id);
    Ok(StatusCode::CREATED)
}

/// PUT /albums/:id
///
/// Checked in order: body id matches path id, album is valid, album exists.
pub async fn update_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Album>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let album = json_body(payload)?;
    if album.id() != Some(id.as_str()) {
        return Err(ApiError::BadRequest("Can't change id of album".to_string()));
    }
    album
        .validate()
        .map_err(|_| ApiError::BadRequest("updated album is not valid".to_string()))?;

    state.store.write().await.replace(&id, album)?;
    debug!("Replaced album {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /albums/:id
pub async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.write().await.remove(&id)?;
    debug!("Deleted album {}", id);
    Ok(StatusCode::NO_CONTENT)
}
