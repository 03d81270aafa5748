use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use ecoscan_core::domain::common::{
    EcoscanConfig, LLMConfig, OcrConfig, ProductDatabaseConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "ecoscan-api", version, about = "EcoScan API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub ocr: OcrArgs,

    #[command(flatten)]
    pub product_database: ProductDatabaseArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct OcrArgs {
    #[arg(long = "ocr-api-key", env = "OCR_API_KEY", default_value = "")]
    pub api_key: String,

    #[arg(
        long = "ocr-endpoint",
        env = "OCR_ENDPOINT",
        default_value = "https://api.ocr.space/parse/image"
    )]
    pub endpoint: String,

    #[arg(long = "ocr-language", env = "OCR_LANGUAGE", default_value = "eng")]
    pub language: String,

    #[arg(id = "ocr_timeout_secs", long = "ocr-timeout-secs", env = "OCR_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ProductDatabaseArgs {
    #[arg(
        long = "product-database-url",
        env = "PRODUCT_DATABASE_URL",
        default_value = "https://world.openfoodfacts.org"
    )]
    pub base_url: String,

    #[arg(
        id = "product_database_timeout_secs",
        long = "product-database-timeout-secs",
        env = "PRODUCT_DATABASE_TIMEOUT_SECS",
        default_value_t = 15
    )]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LLMArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "")]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    #[arg(long = "llm-temperature", env = "LLM_TEMPERATURE", default_value_t = 0.1)]
    pub temperature: f32,

    #[arg(id = "llm_timeout_secs", long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    /// Generation attempts per analysis, the first one included.
    #[arg(long = "llm-max-attempts", env = "LLM_MAX_ATTEMPTS", default_value_t = 2)]
    pub max_attempts: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for EcoscanConfig {
    fn from(args: Args) -> Self {
        EcoscanConfig {
            ocr: OcrConfig {
                api_key: args.ocr.api_key,
                endpoint: args.ocr.endpoint,
                language: args.ocr.language,
                timeout: Duration::from_secs(args.ocr.timeout_secs),
            },
            product_database: ProductDatabaseConfig {
                base_url: args.product_database.base_url,
                timeout: Duration::from_secs(args.product_database.timeout_secs),
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                temperature: args.llm.temperature,
                timeout: Duration::from_secs(args.llm.timeout_secs),
                max_attempts: args.llm.max_attempts,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_onto_core_config() {
        let args = Args::parse_from([
            "ecoscan-api",
            "--gemini-api-key",
            "secret",
            "--llm-max-attempts",
            "3",
            "--ocr-timeout-secs",
            "5",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(args.server.allowed_origins, vec!["http://a.test", "http://b.test"]);

        let config = EcoscanConfig::from(args);
        assert_eq!(config.llm.gemini_api_key, "secret");
        assert_eq!(config.llm.max_attempts, 3);
        assert_eq!(config.llm.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.ocr.timeout, Duration::from_secs(5));
        assert_eq!(config.ocr.language, "eng");
        assert_eq!(
            config.product_database.base_url,
            "https://world.openfoodfacts.org"
        );
    }
}
