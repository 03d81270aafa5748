use axum::extract::{Multipart, State};
use ecoscan_core::domain::acquisition::{entities::AcquisitionResult, services::AcquisitionService};
use tracing::info;

use crate::application::http::{
    scan::validators::{ScanUpload, ScanUploadForm},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/scan",
    tag = "scan",
    summary = "Extract ingredients from a product image",
    description = "Reads the barcode and looks the product up, or runs OCR on the label, depending on scanType",
    request_body(content = ScanUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AcquisitionResult),
        (status = 400, description = "Invalid scan type, missing file or no barcode found"),
        (status = 404, description = "Product not found"),
        (status = 503, description = "OCR service or product database unavailable")
    ),
)]
pub async fn scan_product(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<AcquisitionResult>, ApiError> {
    let upload = ScanUpload::from_multipart(multipart).await?;

    let result = state
        .service
        .acquire(upload.scan_type, upload.image)
        .await
        .map_err(ApiError::from)?;

    info!(
        source = result.source(),
        ingredient_count = result.ingredients().len(),
        "ingredients acquired"
    );

    Ok(Response::OK(result))
}
