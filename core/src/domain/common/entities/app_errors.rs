use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid scan type '{0}', must be 'barcode' or 'ocr'")]
    InvalidScanType(String),

    #[error("No barcode found in image")]
    NoBarcodeFound,

    #[error("Product not found in database")]
    ProductNotFound,

    #[error("Could not extract ingredients from image")]
    NoIngredientsExtracted,

    #[error("Ingredient list is empty")]
    EmptyIngredientList,

    #[error("Malformed analysis response: {0}")]
    MalformedAnalysisResponse(String),

    #[error(
        "Incomplete analysis: {} ingredient(s) missing, {} unexpected",
        missing.len(),
        unexpected.len()
    )]
    IncompleteAnalysis {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("External service unavailable: {0}")]
    ExternalServiceUnavailable(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Failures worth a second attempt against the same collaborator.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CoreError::MalformedAnalysisResponse(_) | CoreError::ExternalServiceUnavailable(_)
        )
    }
}
