use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeIngredientsRequest {
    /// Where the list came from, e.g. `barcode_lookup` or `image_ocr_space`.
    #[schema(example = "barcode_lookup")]
    pub source: Option<String>,
    #[schema(example = "Test Bar")]
    pub product_name: Option<String>,
    #[schema(example = "012345")]
    pub barcode: Option<String>,
    #[validate(length(
        min = 1,
        max = 500,
        message = "ingredients must contain between 1 and 500 entries"
    ))]
    pub ingredients: Vec<String>,
}
