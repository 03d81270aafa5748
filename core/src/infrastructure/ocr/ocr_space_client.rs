use bytes::Bytes;
use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    domain::{
        acquisition::ports::OcrClient,
        common::{OcrConfig, entities::app_errors::CoreError},
    },
    infrastructure::http::{build_http_client, map_request_error},
};

/// OCR.space parse/image API
#[derive(Debug, Clone)]
pub struct OcrSpaceClient {
    api_key: String,
    endpoint: String,
    language: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OcrSpaceResponse {
    #[serde(default)]
    parsed_results: Option<Vec<ParsedResult>>,
    /// Either a string or an array of strings depending on the failure.
    #[serde(default)]
    error_message: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ParsedResult {
    #[serde(default)]
    parsed_text: Option<String>,
}

impl OcrSpaceClient {
    pub fn new(config: OcrConfig) -> Result<Self, CoreError> {
        Ok(Self {
            api_key: config.api_key,
            endpoint: config.endpoint,
            language: config.language,
            client: build_http_client(config.timeout)?,
        })
    }

    fn build_form(&self, image: Bytes) -> Result<Form, CoreError> {
        let file = Part::bytes(image.to_vec())
            .file_name("image.jpg")
            .mime_str("image/jpeg")
            .map_err(|e| {
                tracing::error!("Failed to build OCR upload part: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Form::new()
            .text("apikey", self.api_key.clone())
            .text("language", self.language.clone())
            .text("detectOrientation", "true")
            .part("file", file))
    }
}

/// Text of the first parsed page, empty when the service recognized nothing.
fn recognized_text(response: OcrSpaceResponse) -> String {
    let text = response
        .parsed_results
        .and_then(|results| results.into_iter().next())
        .and_then(|result| result.parsed_text)
        .filter(|text| !text.trim().is_empty());

    match text {
        Some(text) => text,
        None => {
            let reason = match response.error_message {
                Some(serde_json::Value::String(message)) => message,
                Some(serde_json::Value::Array(messages)) => messages
                    .iter()
                    .filter_map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
                _ => "No text found".to_string(),
            };
            tracing::warn!(reason = %reason, "OCR service returned no text");
            String::new()
        }
    }
}

impl OcrClient for OcrSpaceClient {
    #[instrument(skip_all, fields(image_size = image.len(), language = %self.language))]
    async fn extract_text(&self, image: Bytes) -> Result<String, CoreError> {
        let form = self.build_form(image)?;

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| map_request_error("OCR", e))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("OCR API error: {}", status);
            return Err(CoreError::ExternalServiceUnavailable(format!(
                "OCR API returned error: {}",
                status
            )));
        }

        let ocr_response: OcrSpaceResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OCR response: {}", e);
            CoreError::ExternalServiceUnavailable("Failed to parse OCR response".to_string())
        })?;

        let text = recognized_text(ocr_response);
        tracing::debug!(text_length = text.len(), "OCR text received");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::infrastructure::http::test_server::{never_respond, respond_with};

    fn client_for(endpoint: String, timeout: Duration) -> OcrSpaceClient {
        OcrSpaceClient::new(OcrConfig {
            api_key: "test-key".to_string(),
            endpoint,
            language: "eng".to_string(),
            timeout,
        })
        .unwrap()
    }

    fn parse(value: serde_json::Value) -> OcrSpaceResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_first_parsed_text_is_used() {
        let response = parse(json!({
            "ParsedResults": [
                { "ParsedText": "INGREDIENTS: OATS, SUGAR\r\n", "FileParseExitCode": 1 },
                { "ParsedText": "page two" }
            ],
            "OCRExitCode": 1,
            "IsErroredOnProcessing": false
        }));

        assert_eq!(recognized_text(response), "INGREDIENTS: OATS, SUGAR\r\n");
    }

    #[test]
    fn test_error_payload_yields_empty_text() {
        let response = parse(json!({
            "ParsedResults": null,
            "OCRExitCode": 99,
            "IsErroredOnProcessing": true,
            "ErrorMessage": ["Unable to recognize the file type", "E216"]
        }));

        assert_eq!(recognized_text(response), "");
    }

    #[test]
    fn test_blank_text_yields_empty_text() {
        let response = parse(json!({
            "ParsedResults": [{ "ParsedText": "  \r\n" }],
            "ErrorMessage": "No text found"
        }));

        assert_eq!(recognized_text(response), "");
    }

    #[tokio::test]
    async fn test_error_status_is_unavailability() {
        let client = client_for(
            respond_with("500 Internal Server Error").await,
            Duration::from_secs(5),
        );

        let result = client.extract_text(Bytes::from_static(b"\xff\xd8\xff")).await;

        assert_eq!(
            result,
            Err(CoreError::ExternalServiceUnavailable(
                "OCR API returned error: 500 Internal Server Error".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_timeout_is_retryable_unavailability() {
        let client = client_for(never_respond().await, Duration::from_millis(50));

        let error = client
            .extract_text(Bytes::from_static(b"\xff\xd8\xff"))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            CoreError::ExternalServiceUnavailable("OCR request timed out".to_string())
        );
        assert!(error.is_retryable());
    }
}
