use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    domain::{
        acquisition::{entities::Product, ports::ProductCatalog},
        common::{ProductDatabaseConfig, entities::app_errors::CoreError},
    },
    infrastructure::http::{build_http_client, map_request_error},
};

#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    base_url: Url,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct OpenFoodFactsResponse {
    #[serde(default)]
    status: i64,
    product: Option<OpenFoodFactsProduct>,
}

#[derive(Debug, Deserialize)]
struct OpenFoodFactsProduct {
    product_name_en: Option<String>,
    product_name: Option<String>,
    ingredients_text_en: Option<String>,
    ingredients_text: Option<String>,
}

impl OpenFoodFactsClient {
    pub fn new(config: ProductDatabaseConfig) -> Result<Self, CoreError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            tracing::error!("Invalid product database URL {}: {}", config.base_url, e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            base_url,
            client: build_http_client(config.timeout)?,
        })
    }

    fn product_url(&self, barcode: &str) -> Result<Url, CoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CoreError::InternalServerError)?
            .pop_if_empty()
            .extend(["api", "v0", "product", &format!("{}.json", barcode)]);

        Ok(url)
    }
}

fn first_non_empty(candidates: [Option<String>; 2]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

fn into_product(response: OpenFoodFactsResponse) -> Option<Product> {
    if response.status != 1 {
        return None;
    }

    let product = response.product?;

    Some(Product {
        name: first_non_empty([product.product_name_en, product.product_name])
            .unwrap_or_else(|| "N/A".to_string()),
        ingredients_text: first_non_empty([product.ingredients_text_en, product.ingredients_text])
            .unwrap_or_default(),
    })
}

impl ProductCatalog for OpenFoodFactsClient {
    #[instrument(skip(self))]
    async fn find_by_barcode(&self, barcode: String) -> Result<Option<Product>, CoreError> {
        let url = self.product_url(&barcode)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_request_error("Product database", e))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "product lookup returned non-success status");
            return Ok(None);
        }

        let body: OpenFoodFactsResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse product database response: {}", e);
            CoreError::ExternalServiceUnavailable(
                "Failed to parse product database response".to_string(),
            )
        })?;

        Ok(into_product(body))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bytes::Bytes;
    use serde_json::json;

    use super::*;
    use crate::{
        domain::{
            acquisition::{
                entities::ScanType,
                ports::{BarcodeDecoder, MockOcrClient},
                services::AcquisitionService,
            },
            analysis::ports::MockLLMClient,
            common::services::Service,
            ingredient::segmentation::KeywordWindowSegmenter,
        },
        infrastructure::http::test_server::{never_respond, respond_with},
    };

    struct SingleBarcode;

    impl BarcodeDecoder for SingleBarcode {
        async fn decode(&self, _image: Bytes) -> Result<Vec<String>, CoreError> {
            Ok(vec!["012345".to_string()])
        }
    }

    fn client_for(base_url: String, timeout: Duration) -> OpenFoodFactsClient {
        OpenFoodFactsClient::new(ProductDatabaseConfig { base_url, timeout }).unwrap()
    }

    fn parse(value: serde_json::Value) -> OpenFoodFactsResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_found_product_maps_english_fields() {
        let product = into_product(parse(json!({
            "code": "012345",
            "status": 1,
            "status_verbose": "product found",
            "product": {
                "product_name_en": "Test Bar",
                "product_name": "Barre test",
                "ingredients_text_en": "oats,sugar,salt",
                "ingredients_text": "avoine,sucre,sel"
            }
        })));

        assert_eq!(
            product,
            Some(Product {
                name: "Test Bar".to_string(),
                ingredients_text: "oats,sugar,salt".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_english_fields_fall_back() {
        let product = into_product(parse(json!({
            "status": 1,
            "product": { "product_name_en": "", "ingredients_text": "water, salt" }
        })))
        .unwrap();

        assert_eq!(product.name, "N/A");
        assert_eq!(product.ingredients_text, "water, salt");
    }

    #[test]
    fn test_status_zero_is_not_found() {
        let product = into_product(parse(json!({
            "code": "000000",
            "status": 0,
            "status_verbose": "product not found"
        })));

        assert_eq!(product, None);
    }

    #[test]
    fn test_product_url_is_built_from_base() {
        let client = OpenFoodFactsClient::new(ProductDatabaseConfig {
            base_url: "https://world.openfoodfacts.org/".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap();

        assert_eq!(
            client.product_url("012345").unwrap().as_str(),
            "https://world.openfoodfacts.org/api/v0/product/012345.json"
        );
        assert_eq!(
            client.product_url("a/b").unwrap().as_str(),
            "https://world.openfoodfacts.org/api/v0/product/a%2Fb.json"
        );
    }

    #[tokio::test]
    async fn test_not_found_status_is_no_product() {
        let client = client_for(respond_with("404 Not Found").await, Duration::from_secs(5));

        assert_eq!(client.find_by_barcode("012345".to_string()).await, Ok(None));
    }

    #[tokio::test]
    async fn test_server_error_status_is_no_product() {
        let client = client_for(
            respond_with("500 Internal Server Error").await,
            Duration::from_secs(5),
        );

        assert_eq!(client.find_by_barcode("012345".to_string()).await, Ok(None));
    }

    #[tokio::test]
    async fn test_missing_product_surfaces_as_product_not_found() {
        let client = client_for(respond_with("404 Not Found").await, Duration::from_secs(5));
        let service = Service::new(
            SingleBarcode,
            MockOcrClient::new(),
            client,
            KeywordWindowSegmenter,
            MockLLMClient::new(),
            1,
        );

        let result = service
            .acquire(ScanType::Barcode, Bytes::from_static(b"image"))
            .await;

        assert_eq!(result, Err(CoreError::ProductNotFound));
    }

    #[tokio::test]
    async fn test_timeout_is_retryable_unavailability() {
        let client = client_for(never_respond().await, Duration::from_millis(50));

        let error = client
            .find_by_barcode("012345".to_string())
            .await
            .unwrap_err();

        assert_eq!(
            error,
            CoreError::ExternalServiceUnavailable("Product database request timed out".to_string())
        );
        assert!(error.is_retryable());
    }
}
