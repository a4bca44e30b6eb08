//! Serves the bundled browser front end.
//!
//! Only three fixed files are exposed; anything else falls through to the
//! router's 404 fallback.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeFile;

use crate::AppState;

pub fn frontend_routes(frontend_dir: &Path) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(frontend_dir.join("index.html")))
        .route_service("/style.css", ServeFile::new(frontend_dir.join("style.css")))
        .route_service("/app.js", ServeFile::new(frontend_dir.join("app.js")))
}
