use super::handlers::analyze_ingredients::analyze_ingredients;
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/analysis", state.args.server.root_path),
        post(analyze_ingredients),
    )
}
