use bytes::Bytes;
use tracing::instrument;

use crate::domain::{acquisition::ports::BarcodeDecoder, common::entities::app_errors::CoreError};

/// Local barcode detection on the uploaded image, no network involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct RxingBarcodeDecoder;

fn decode_barcodes(image: &[u8]) -> Result<Vec<String>, CoreError> {
    let luma = image::load_from_memory(image)
        .map_err(|e| {
            tracing::warn!("Failed to decode uploaded image: {}", e);
            CoreError::NoBarcodeFound
        })?
        .into_luma8();
    let (width, height) = luma.dimensions();

    match rxing::helpers::detect_multiple_in_luma(luma.into_raw(), width, height) {
        Ok(results) => Ok(results
            .iter()
            .map(|result| result.getText().to_string())
            .filter(|text| !text.is_empty())
            .collect()),
        Err(e) => {
            tracing::debug!(error = ?e, "no barcode detected");
            Ok(Vec::new())
        }
    }
}

impl BarcodeDecoder for RxingBarcodeDecoder {
    #[instrument(skip_all, fields(image_size = image.len()))]
    async fn decode(&self, image: Bytes) -> Result<Vec<String>, CoreError> {
        let barcodes = tokio::task::spawn_blocking(move || decode_barcodes(&image))
            .await
            .map_err(|e| {
                tracing::error!("Barcode decoding task failed: {}", e);
                CoreError::InternalServerError
            })??;

        tracing::debug!(count = barcodes.len(), "barcodes decoded");

        Ok(barcodes)
    }
}
