use std::str::FromStr;

use axum::extract::Multipart;
use bytes::Bytes;
use ecoscan_core::domain::acquisition::entities::ScanType;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Multipart form accepted by the scan endpoints.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanUploadForm {
    /// `barcode` or `ocr`
    #[schema(example = "barcode")]
    pub scan_type: String,
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(Debug)]
pub struct ScanUpload {
    pub scan_type: ScanType,
    pub image: Bytes,
}

impl ScanUpload {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut scan_type: Option<String> = None;
        let mut image: Option<Bytes> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
        {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "scanType" => {
                    let value = field.text().await.map_err(|e| {
                        ApiError::BadRequest(format!("Failed to read scanType: {}", e))
                    })?;
                    scan_type = Some(value);
                }
                "file" => {
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;

                    if data.len() > MAX_IMAGE_SIZE {
                        return Err(ApiError::BadRequest(format!(
                            "Image too large. Max size is {} bytes",
                            MAX_IMAGE_SIZE
                        )));
                    }

                    image = Some(data);
                }
                _ => {}
            }
        }

        let scan_type =
            scan_type.ok_or_else(|| ApiError::BadRequest("Missing scanType field".to_string()))?;
        let scan_type = ScanType::from_str(&scan_type).map_err(ApiError::from)?;

        let image = image
            .filter(|data| !data.is_empty())
            .ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

        Ok(Self { scan_type, image })
    }
}
