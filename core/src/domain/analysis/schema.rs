use serde_json::json;

use crate::domain::analysis::entities::EcoGrade;

/// Returns the JSON schema for sustainability report LLM responses
pub fn get_sustainability_report_schema() -> serde_json::Value {
    let grades: Vec<&str> = EcoGrade::ALL.iter().map(EcoGrade::as_str).collect();

    json!({
        "type": "object",
        "properties": {
            "ingredientAnalysis": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "ingredient": { "type": "string" },
                        "ecoGrade": { "type": "string", "enum": grades },
                        "ecoReasoning": { "type": "string" }
                    },
                    "required": ["ingredient", "ecoGrade", "ecoReasoning"]
                }
            },
            "harmfulIngredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "ingredient": { "type": "string" },
                        "reason": { "type": "string" },
                        "alternative": { "type": "string" },
                        "alternativeReasoning": { "type": "string" }
                    },
                    "required": ["ingredient", "reason", "alternative", "alternativeReasoning"]
                }
            },
            "overallEcoGrade": { "type": "string", "enum": grades },
            "overallEcoReasoning": { "type": "string" },
            "overallSummary": { "type": "string" }
        },
        "required": [
            "ingredientAnalysis", "harmfulIngredients", "overallEcoGrade",
            "overallEcoReasoning", "overallSummary"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_every_report_field() {
        let schema = get_sustainability_report_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(
            required,
            [
                "ingredientAnalysis",
                "harmfulIngredients",
                "overallEcoGrade",
                "overallEcoReasoning",
                "overallSummary"
            ]
        );
    }

    #[test]
    fn test_schema_grade_enums() {
        let schema = get_sustainability_report_schema();
        let expected = json!(["A", "B", "C", "D", "E"]);

        assert_eq!(schema["properties"]["overallEcoGrade"]["enum"], expected);
        assert_eq!(
            schema["properties"]["ingredientAnalysis"]["items"]["properties"]["ecoGrade"]["enum"],
            expected
        );
    }
}
