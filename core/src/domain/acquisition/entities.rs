use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, ingredient::IngredientList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanType {
    Barcode,
    Ocr,
}

impl FromStr for ScanType {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "barcode" => Ok(ScanType::Barcode),
            "ocr" => Ok(ScanType::Ocr),
            other => Err(CoreError::InvalidScanType(other.to_string())),
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanType::Barcode => f.write_str("barcode"),
            ScanType::Ocr => f.write_str("ocr"),
        }
    }
}

/// Common ingredient-list shape produced by both sourcing strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "source")]
pub enum AcquisitionResult {
    #[serde(rename = "barcode_lookup", rename_all = "camelCase")]
    Barcode {
        barcode: String,
        product_name: String,
        ingredients: IngredientList,
    },
    #[serde(rename = "image_ocr_space")]
    Ocr { ingredients: IngredientList },
}

impl AcquisitionResult {
    pub fn ingredients(&self) -> &IngredientList {
        match self {
            AcquisitionResult::Barcode { ingredients, .. } => ingredients,
            AcquisitionResult::Ocr { ingredients } => ingredients,
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            AcquisitionResult::Barcode { .. } => "barcode_lookup",
            AcquisitionResult::Ocr { .. } => "image_ocr_space",
        }
    }
}

/// Product record as returned by the product database, before cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub ingredients_text: String,
}
