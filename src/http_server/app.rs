use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use color_eyre::eyre::{Context, eyre};
use tower::ServiceBuilder;
#[cfg(not(debug_assertions))]
use tower_http::cors::AllowMethods;
use tower_http::cors::CorsLayer;

use crate::{
    database::Database,
    http_server::{routes, state::AppState},
};

async fn root() -> &'static str {
    "melodex api"
}

pub struct HttpServerConfig {
    pub port: u16,
    pub database: Database,
}

pub fn router(app_state: Arc<AppState>) -> Router {
    #[cfg(debug_assertions)]
    let cors_layer = CorsLayer::permissive();

    #[cfg(not(debug_assertions))]
    let cors_layer = CorsLayer::new().allow_methods(AllowMethods::any());

    Router::new()
        .route("/", get(root))
        .route("/videos", get(routes::videos::list_videos))
        .route("/videos/genre", get(routes::videos::list_videos_by_genre))
        .route("/artists", get(routes::artists::list_artists))
        .route("/artists/genre", post(routes::artists::list_artists_by_genre))
        .route(
            "/artists/sortmode",
            post(routes::artists::list_artists_by_sort_mode),
        )
        .route("/artists/filter", post(routes::artists::filter_artists))
        .route("/artists/search", post(routes::artists::search_artists))
        .route("/artists/{artist_id}", get(routes::artists::get_artist))
        .route("/albums", get(routes::albums::list_albums))
        .route(
            "/albums/sortmode",
            post(routes::albums::list_albums_by_sort_mode),
        )
        .route("/albums/search", post(routes::albums::search_albums))
        .route("/gallery", get(routes::gallery::list_gallery))
        .route("/entries", post(routes::entries::add_entry))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(app_state)
}

pub async fn start(config: HttpServerConfig) -> color_eyre::Result<()> {
    let app_state = Arc::new(AppState {
        db: Arc::new(config.database),
    });

    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .wrap_err_with(|| eyre!("Failed to bind to port {}", config.port))?;
    log::info!("Listening on 0.0.0.0:{}", config.port);
    axum::serve(listener, app)
        .await
        .wrap_err("Failed to start HTTP server")?;

    Ok(())
}
