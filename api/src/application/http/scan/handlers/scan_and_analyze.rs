use axum::extract::{Multipart, State};
use ecoscan_core::domain::{
    acquisition::{entities::AcquisitionResult, services::AcquisitionService},
    analysis::{entities::SustainabilityReport, services::AnalysisService},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::application::http::{
    scan::validators::{ScanUpload, ScanUploadForm},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanAndAnalyzeResponse {
    pub acquisition: AcquisitionResult,
    pub report: SustainabilityReport,
}

#[utoipa::path(
    post,
    path = "/scan/analyze",
    tag = "scan",
    summary = "Scan a product and analyze its ingredients",
    description = "Extracts the ingredient list from the image, then grades it for environmental sustainability",
    request_body(content = ScanUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = ScanAndAnalyzeResponse),
        (status = 400, description = "Invalid scan type, missing file or no barcode found"),
        (status = 404, description = "Product not found"),
        (status = 502, description = "Sustainability analysis could not be completed"),
        (status = 503, description = "External service unavailable")
    ),
)]
pub async fn scan_and_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<ScanAndAnalyzeResponse>, ApiError> {
    let upload = ScanUpload::from_multipart(multipart).await?;

    let acquisition = state
        .service
        .acquire(upload.scan_type, upload.image)
        .await
        .map_err(ApiError::from)?;

    info!(
        source = acquisition.source(),
        ingredient_count = acquisition.ingredients().len(),
        "ingredients acquired"
    );

    let report = state
        .service
        .analyze(acquisition.ingredients().clone())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ScanAndAnalyzeResponse {
        acquisition,
        report,
    }))
}
