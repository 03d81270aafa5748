use super::{
    handlers::{
        scan_and_analyze::scan_and_analyze,
        scan_product::scan_product,
    },
    validators::MAX_IMAGE_SIZE,
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};

/// Headroom for multipart boundaries and the scanType field.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn scan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/scan", state.args.server.root_path),
            post(scan_product),
        )
        .route(
            &format!("{}/scan/analyze", state.args.server.root_path),
            post(scan_and_analyze),
        )
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + MULTIPART_OVERHEAD))
}
