use std::future::Future;

use bytes::Bytes;

use crate::domain::{acquisition::entities::Product, common::entities::app_errors::CoreError};

/// Barcode detection over an uploaded image
#[cfg_attr(test, mockall::automock)]
pub trait BarcodeDecoder: Send + Sync {
    /// Decoded barcode values in detection order, empty when none is found.
    fn decode(&self, image: Bytes) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

/// Text extraction from a label photograph
#[cfg_attr(test, mockall::automock)]
pub trait OcrClient: Send + Sync {
    /// Raw recognized text. An image without readable text yields an empty string.
    fn extract_text(&self, image: Bytes)
    -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Product database lookup by barcode value
#[cfg_attr(test, mockall::automock)]
pub trait ProductCatalog: Send + Sync {
    fn find_by_barcode(
        &self,
        barcode: String,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;
}
