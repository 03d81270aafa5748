use std::future::Future;

use bytes::Bytes;
use tracing::{info, instrument, warn};

use crate::domain::{
    acquisition::{
        entities::{AcquisitionResult, ScanType},
        ports::{BarcodeDecoder, OcrClient, ProductCatalog},
    },
    analysis::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{IngredientList, ports::IngredientSegmenter},
};

/// Service trait for turning an uploaded image into an ingredient list
pub trait AcquisitionService: Send + Sync {
    fn acquire(
        &self,
        scan_type: ScanType,
        image: Bytes,
    ) -> impl Future<Output = Result<AcquisitionResult, CoreError>> + Send;
}

impl<BD, OCR, PC, SG, LLM> AcquisitionService for Service<BD, OCR, PC, SG, LLM>
where
    BD: BarcodeDecoder,
    OCR: OcrClient,
    PC: ProductCatalog,
    SG: IngredientSegmenter,
    LLM: LLMClient,
{
    #[instrument(skip(self, image), fields(scan_type = %scan_type, image_size = image.len()))]
    async fn acquire(
        &self,
        scan_type: ScanType,
        image: Bytes,
    ) -> Result<AcquisitionResult, CoreError> {
        match scan_type {
            ScanType::Barcode => self.acquire_from_barcode(image).await,
            ScanType::Ocr => self.acquire_from_ocr(image).await,
        }
    }
}

impl<BD, OCR, PC, SG, LLM> Service<BD, OCR, PC, SG, LLM>
where
    BD: BarcodeDecoder,
    OCR: OcrClient,
    PC: ProductCatalog,
    SG: IngredientSegmenter,
    LLM: LLMClient,
{
    async fn acquire_from_barcode(&self, image: Bytes) -> Result<AcquisitionResult, CoreError> {
        // First detected barcode wins, there is no disambiguation between several.
        let barcode = self
            .barcode_decoder
            .decode(image)
            .await?
            .into_iter()
            .next()
            .ok_or(CoreError::NoBarcodeFound)?;

        let product = self
            .product_catalog
            .find_by_barcode(barcode.clone())
            .await?
            .ok_or_else(|| {
                warn!(barcode = %barcode, "product not found in database");
                CoreError::ProductNotFound
            })?;

        let ingredients = IngredientList::from_delimited(&product.ingredients_text);
        if ingredients.is_empty() {
            warn!(barcode = %barcode, "product has no ingredient text");
            return Err(CoreError::NoIngredientsExtracted);
        }

        info!(
            barcode = %barcode,
            ingredient_count = ingredients.len(),
            "resolved ingredients from barcode"
        );

        Ok(AcquisitionResult::Barcode {
            barcode,
            product_name: product.name,
            ingredients,
        })
    }

    async fn acquire_from_ocr(&self, image: Bytes) -> Result<AcquisitionResult, CoreError> {
        let raw_text = self.ocr_client.extract_text(image).await?;

        let ingredients = self.segmenter.segment(&raw_text);
        if ingredients.is_empty() {
            warn!(
                text_length = raw_text.len(),
                "could not find an ingredients block in OCR text"
            );
            return Err(CoreError::NoIngredientsExtracted);
        }

        info!(
            ingredient_count = ingredients.len(),
            "extracted ingredients from image"
        );

        Ok(AcquisitionResult::Ocr { ingredients })
    }
}
