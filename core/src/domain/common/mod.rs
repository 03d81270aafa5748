use std::time::Duration;

pub mod entities;
pub mod services;

#[derive(Clone, Debug, Default)]
pub struct EcoscanConfig {
    pub ocr: OcrConfig,
    pub product_database: ProductDatabaseConfig,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct OcrConfig {
    pub api_key: String,
    pub endpoint: String,
    pub language: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct ProductDatabaseConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub temperature: f32,
    pub timeout: Duration,
    /// Total generation attempts per analysis, including the first one.
    pub max_attempts: u32,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: "https://api.ocr.space/parse/image".to_string(),
            language: "eng".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Default for ProductDatabaseConfig {
    fn default() -> Self {
        Self {
            base_url: "https://world.openfoodfacts.org".to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_model: "gemini-1.5-flash".to_string(),
            temperature: 0.1,
            timeout: Duration::from_secs(60),
            max_attempts: 2,
        }
    }
}
