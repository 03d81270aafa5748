use crate::domain::ingredient::IngredientList;

const ROLE: &str = "You are an expert food safety and sustainability analyst. \
Analyze the provided list of ingredients from a food product.";

const OUTPUT_RULES: &str = "Your response MUST be a single, valid JSON object and nothing else. \
Do not include any text, explanations, or markdown formatting such as ```json before or after the JSON object.";

const GRADING_SCALE: &str = "\
Sustainability grading scale:
- A (Excellent): very low environmental impact, highly sustainable, often organic, local or renewable, minimal processing.
- B (Good): low impact, common ingredients generally produced sustainably, or easily recyclable.
- C (Moderate): moderate impact, common ingredients with varying production impacts, or some processing involved.
- D (Poor): high impact, problematic ingredients such as unsustainable farming or high water and energy use, non-recyclable components, significant processing.
- E (Very Poor): extremely high impact, major environmental concerns such as deforestation, heavy pollution or endangered sources, severe processing or highly artificial.";

const OUTPUT_SCHEMA: &str = "\
JSON structure requirements:
- \"ingredientAnalysis\": an array with one object FOR EVERY INGREDIENT of the input list, in input order, each with:
  - \"ingredient\": the exact name of the ingredient as written in the input list
  - \"ecoGrade\": one of \"A\", \"B\", \"C\", \"D\", \"E\" according to the grading scale
  - \"ecoReasoning\": a brief, factual explanation of this grade focused on environmental impact
- \"harmfulIngredients\": an array of objects, one for each ingredient that is a known health or safety risk to humans \
(preservatives, artificial additives, excess sugar) OR has an ecoGrade of \"C\", \"D\" or \"E\". \
Repeat an ingredient here even if it also appears in \"ingredientAnalysis\"; do not skip ingredients that are only ecologically harmful. Each object has:
  - \"ingredient\": the name of the ingredient
  - \"reason\": a brief, factual explanation of why it is potentially harmful
  - \"alternative\": a specific healthier or more sustainable alternative ingredient
  - \"alternativeReasoning\": a brief, factual explanation of why the alternative is better
  Use an empty array [] when no harmful ingredients are found.
- \"overallEcoGrade\": the product's overall grade, one of \"A\", \"B\", \"C\", \"D\", \"E\", based on the combined impact of all ingredients
- \"overallEcoReasoning\": a brief explanation of the main factors behind overallEcoGrade
- \"overallSummary\": a one-sentence summary of the product's health and sustainability profile";

/// Builds the analysis instruction for `ingredients`.
///
/// Output depends only on the ingredient list, so identical inputs produce
/// byte-identical prompts.
pub fn build_analysis_prompt(ingredients: &IngredientList) -> String {
    let serialized = serde_json::Value::from(ingredients.as_slice().to_vec());

    format!(
        "{ROLE}\n\n{OUTPUT_RULES}\n\n{GRADING_SCALE}\n\n{OUTPUT_SCHEMA}\n\n\
         Here is the list of ingredients to analyze: {serialized}"
    )
}
