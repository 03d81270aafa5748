use crate::{
    domain::common::{EcoscanConfig, entities::app_errors::CoreError, services::Service},
    domain::ingredient::segmentation::KeywordWindowSegmenter,
    infrastructure::{
        barcode::RxingBarcodeDecoder, llm::GeminiLLMClient, ocr::OcrSpaceClient,
        product::OpenFoodFactsClient,
    },
};

pub type EcoscanService = Service<
    RxingBarcodeDecoder,
    OcrSpaceClient,
    OpenFoodFactsClient,
    KeywordWindowSegmenter,
    GeminiLLMClient,
>;

pub fn create_service(config: EcoscanConfig) -> Result<EcoscanService, CoreError> {
    let max_attempts = config.llm.max_attempts;

    let ocr_client = OcrSpaceClient::new(config.ocr)?;
    let product_catalog = OpenFoodFactsClient::new(config.product_database)?;
    let llm_client = GeminiLLMClient::new(config.llm)?;

    tracing::info!(max_attempts, "ecoscan service initialized");

    Ok(Service::new(
        RxingBarcodeDecoder,
        ocr_client,
        product_catalog,
        KeywordWindowSegmenter,
        llm_client,
        max_attempts,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration_builds_a_service() {
        let service = create_service(EcoscanConfig::default()).unwrap();

        assert_eq!(service.max_analysis_attempts, 2);
    }

    #[test]
    fn test_invalid_product_database_url_is_rejected() {
        let mut config = EcoscanConfig::default();
        config.product_database.base_url = "not a url".to_string();

        assert!(matches!(
            create_service(config),
            Err(CoreError::InternalServerError)
        ));
    }
}
