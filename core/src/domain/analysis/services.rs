use std::future::Future;

use tracing::{info, instrument, warn};

use crate::domain::{
    acquisition::ports::{BarcodeDecoder, OcrClient, ProductCatalog},
    analysis::{
        entities::SustainabilityReport,
        ports::LLMClient,
        prompt::build_analysis_prompt,
        schema::get_sustainability_report_schema,
        validation::{ensure_complete, parse_report},
    },
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{IngredientList, ports::IngredientSegmenter},
};

/// Service trait for producing a sustainability report from an ingredient list
pub trait AnalysisService: Send + Sync {
    fn analyze(
        &self,
        ingredients: IngredientList,
    ) -> impl Future<Output = Result<SustainabilityReport, CoreError>> + Send;
}

impl<BD, OCR, PC, SG, LLM> AnalysisService for Service<BD, OCR, PC, SG, LLM>
where
    BD: BarcodeDecoder,
    OCR: OcrClient,
    PC: ProductCatalog,
    SG: IngredientSegmenter,
    LLM: LLMClient,
{
    #[instrument(skip(self, ingredients), fields(ingredient_count = ingredients.len()))]
    async fn analyze(
        &self,
        ingredients: IngredientList,
    ) -> Result<SustainabilityReport, CoreError> {
        if ingredients.is_empty() {
            return Err(CoreError::EmptyIngredientList);
        }

        let prompt = build_analysis_prompt(&ingredients);
        let response_schema = get_sustainability_report_schema();

        let mut attempt = 1;
        loop {
            let outcome = self
                .llm_client
                .generate_with_text(prompt.clone(), response_schema.clone())
                .await
                .and_then(|raw_response| parse_report(&raw_response))
                .and_then(|report| ensure_complete(&report, &ingredients).map(|_| report));

            match outcome {
                Ok(report) => {
                    info!(
                        attempt,
                        overall_eco_grade = report.overall_eco_grade.as_str(),
                        harmful_count = report.harmful_ingredients.len(),
                        eco_harmful_count = report
                            .ingredient_analysis
                            .iter()
                            .filter(|analysis| analysis.eco_grade.is_eco_harmful())
                            .count(),
                        "analysis completed"
                    );
                    return Ok(report);
                }
                Err(e) if e.is_retryable() && attempt < self.max_analysis_attempts => {
                    warn!(attempt, error = %e, "analysis attempt failed, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
