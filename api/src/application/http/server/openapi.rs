use crate::application::http::{
    analysis::handlers::analyze_ingredients::__path_analyze_ingredients,
    health::__path_health,
    scan::handlers::{
        scan_and_analyze::__path_scan_and_analyze, scan_product::__path_scan_product,
    },
};
use utoipa::OpenApi;

use super::config::__path_get_config;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EcoScan API",
        description = "Ingredient extraction and sustainability analysis for packaged food"
    ),
    paths(
        scan_product,
        scan_and_analyze,
        analyze_ingredients,
        health,
        get_config
    )
)]
pub struct ApiDoc;
