use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ordinal sustainability rating, A (excellent) through E (very poor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum EcoGrade {
    A,
    B,
    C,
    D,
    E,
}

impl EcoGrade {
    pub const ALL: [EcoGrade; 5] = [EcoGrade::A, EcoGrade::B, EcoGrade::C, EcoGrade::D, EcoGrade::E];

    pub fn as_str(&self) -> &'static str {
        match self {
            EcoGrade::A => "A",
            EcoGrade::B => "B",
            EcoGrade::C => "C",
            EcoGrade::D => "D",
            EcoGrade::E => "E",
        }
    }

    /// Grades that qualify an ingredient for the harmful list on ecological grounds.
    pub fn is_eco_harmful(&self) -> bool {
        matches!(self, EcoGrade::C | EcoGrade::D | EcoGrade::E)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IngredientAnalysis {
    pub ingredient: String,
    pub eco_grade: EcoGrade,
    pub eco_reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HarmfulIngredient {
    pub ingredient: String,
    pub reason: String,
    pub alternative: String,
    pub alternative_reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SustainabilityReport {
    pub ingredient_analysis: Vec<IngredientAnalysis>,
    pub harmful_ingredients: Vec<HarmfulIngredient>,
    pub overall_eco_grade: EcoGrade,
    pub overall_eco_reasoning: String,
    pub overall_summary: String,
}
