use crate::domain::{
    acquisition::ports::{BarcodeDecoder, OcrClient, ProductCatalog},
    analysis::ports::LLMClient,
    ingredient::ports::IngredientSegmenter,
};

/// Owns every collaborator needed for one acquisition + analysis cycle.
///
/// Holds no per-request state: one instance is built at process start and
/// shared by all concurrent requests.
pub struct Service<BD, OCR, PC, SG, LLM>
where
    BD: BarcodeDecoder,
    OCR: OcrClient,
    PC: ProductCatalog,
    SG: IngredientSegmenter,
    LLM: LLMClient,
{
    pub(crate) barcode_decoder: BD,
    pub(crate) ocr_client: OCR,
    pub(crate) product_catalog: PC,
    pub(crate) segmenter: SG,
    pub(crate) llm_client: LLM,
    pub(crate) max_analysis_attempts: u32,
}

impl<BD, OCR, PC, SG, LLM> Service<BD, OCR, PC, SG, LLM>
where
    BD: BarcodeDecoder,
    OCR: OcrClient,
    PC: ProductCatalog,
    SG: IngredientSegmenter,
    LLM: LLMClient,
{
    pub fn new(
        barcode_decoder: BD,
        ocr_client: OCR,
        product_catalog: PC,
        segmenter: SG,
        llm_client: LLM,
        max_analysis_attempts: u32,
    ) -> Self {
        Self {
            barcode_decoder,
            ocr_client,
            product_catalog,
            segmenter,
            llm_client,
            max_analysis_attempts: max_analysis_attempts.max(1),
        }
    }
}
