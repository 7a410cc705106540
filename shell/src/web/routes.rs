use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, get_service};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::Config;
use crate::web::health_handler;

/// Assets are served as-is, anything else falls back to the application
/// shell so that client routes survive a page reload.
pub fn all_routes(config: &Config) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(assets_routes(config))
        .fallback_service(shell_service(config))
}

pub fn assets_routes(config: &Config) -> Router {
    Router::new().nest_service(
        "/assets",
        get_service(
            ServeDir::new(config.dist_dir.join("assets"))
                .not_found_service(file_not_found.into_service()),
        ),
    )
}

fn shell_service(config: &Config) -> ServeDir<ServeFile> {
    ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_file()))
}

async fn file_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "File not found")
}
