use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Intervalo da checagem periódica de expiração do token (ms)
    pub session_check_interval_ms: u32,
    /// Itens por página padrão nas listagens
    pub default_page_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:5000".to_string(),
            backend_url_production: "https://api.clinicaexames.com.br".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            session_check_interval_ms: 60_000,
            default_page_limit: 10,
        }
    }
}

impl AppConfig {
    /// Carrega a configuração a partir de variáveis de ambiente em tempo de compilação
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:5000").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.clinicaexames.com.br").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            session_check_interval_ms: option_env!("SESSION_CHECK_INTERVAL_MS")
                .unwrap_or("60000").parse().unwrap_or(60_000),
            default_page_limit: option_env!("DEFAULT_PAGE_LIMIT")
                .unwrap_or("10").parse().unwrap_or(10),
        }
    }

    /// Obtém a URL do backend conforme o ambiente atual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuração global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
