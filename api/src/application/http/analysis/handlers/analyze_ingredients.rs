use axum::extract::State;
use ecoscan_core::domain::{
    analysis::{entities::SustainabilityReport, services::AnalysisService},
    ingredient::IngredientList,
};
use tracing::info;

use crate::application::http::{
    analysis::validators::AnalyzeIngredientsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analysis",
    tag = "analysis",
    summary = "Analyze an ingredient list",
    description = "Grades every ingredient and the whole product for environmental sustainability",
    request_body = AnalyzeIngredientsRequest,
    responses(
        (status = 200, body = SustainabilityReport),
        (status = 400, description = "Empty ingredient list"),
        (status = 502, description = "Sustainability analysis could not be completed"),
        (status = 503, description = "LLM service unavailable")
    ),
)]
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeIngredientsRequest>,
) -> Result<Response<SustainabilityReport>, ApiError> {
    info!(
        source = payload.source.as_deref().unwrap_or("unknown"),
        product_name = payload.product_name.as_deref(),
        barcode = payload.barcode.as_deref(),
        "analysis requested"
    );

    let report = state
        .service
        .analyze(IngredientList::from(payload.ingredients))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
