use std::collections::HashMap;

use tracing::{error, warn};

use crate::domain::{
    analysis::entities::SustainabilityReport, common::entities::app_errors::CoreError,
    ingredient::IngredientList,
};

/// Strict typed parse of a generator response.
///
/// Any deviation from the report shape (invalid JSON, missing or unknown
/// field, grade outside A..E) is rejected. The raw text is logged on failure
/// and never carried in the returned error.
pub fn parse_report(raw_response: &str) -> Result<SustainabilityReport, CoreError> {
    serde_json::from_str(raw_response.trim()).map_err(|e| {
        error!(
            error = %e,
            raw_response = %raw_response,
            "Failed to parse LLM analysis response"
        );
        CoreError::MalformedAnalysisResponse(e.to_string())
    })
}

/// Checks that the report has one entry per input ingredient.
///
/// Names are compared as multisets: an ingredient listed twice in the input
/// needs two entries. `missing` and `unexpected` hold each offending name once.
pub fn ensure_complete(
    report: &SustainabilityReport,
    ingredients: &IngredientList,
) -> Result<(), CoreError> {
    let mut expected: HashMap<&str, usize> = HashMap::new();
    for ingredient in ingredients.iter() {
        *expected.entry(ingredient.as_str()).or_default() += 1;
    }

    let mut analysed: HashMap<&str, usize> = HashMap::new();
    for analysis in &report.ingredient_analysis {
        *analysed.entry(analysis.ingredient.as_str()).or_default() += 1;
    }

    let mut missing: Vec<String> = Vec::new();
    for ingredient in ingredients.iter() {
        if occurrences(&analysed, ingredient) < occurrences(&expected, ingredient)
            && !missing.contains(ingredient)
        {
            missing.push(ingredient.clone());
        }
    }

    let mut unexpected: Vec<String> = Vec::new();
    for analysis in &report.ingredient_analysis {
        let name = analysis.ingredient.as_str();
        if occurrences(&analysed, name) > occurrences(&expected, name)
            && !unexpected.iter().any(|u| u == name)
        {
            unexpected.push(analysis.ingredient.clone());
        }
    }

    if missing.is_empty() && unexpected.is_empty() {
        return Ok(());
    }

    warn!(
        missing = ?missing,
        unexpected = ?unexpected,
        "LLM analysis does not cover the ingredient list"
    );

    Err(CoreError::IncompleteAnalysis {
        missing,
        unexpected,
    })
}

fn occurrences(counts: &HashMap<&str, usize>, name: &str) -> usize {
    counts.get(name).copied().unwrap_or(0)
}
