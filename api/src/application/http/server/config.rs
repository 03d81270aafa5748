use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{api_entities::response::Response, app_state::AppState};

/// Non-secret runtime settings, API keys are never part of it.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub gemini_model: String,
    pub temperature: f32,
    pub max_analysis_attempts: u32,
    pub ocr_language: String,
    pub ocr_timeout_secs: u64,
    pub product_database_url: String,
    pub product_database_timeout_secs: u64,
    pub llm_timeout_secs: u64,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get runtime configuration",
    responses(
        (status = 200, body = ConfigResponse)
    ),
)]
pub async fn get_config(State(state): State<AppState>) -> Response<ConfigResponse> {
    let args = &state.args;

    Response::OK(ConfigResponse {
        gemini_model: args.llm.gemini_model.clone(),
        temperature: args.llm.temperature,
        max_analysis_attempts: args.llm.max_attempts,
        ocr_language: args.ocr.language.clone(),
        ocr_timeout_secs: args.ocr.timeout_secs,
        product_database_url: args.product_database.base_url.clone(),
        product_database_timeout_secs: args.product_database.timeout_secs,
        llm_timeout_secs: args.llm.timeout_secs,
    })
}
