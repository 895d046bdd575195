use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_base_url: String,
    pub catalog_languages: String,
    pub catalog_timeout_seconds: u64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            catalog_base_url: env::var("CATALOG_BASE_URL")
                .unwrap_or_else(|_| "https://gutendex.com".to_string()),
            catalog_languages: env::var("CATALOG_LANGUAGES").unwrap_or_else(|_| "es".to_string()),
            catalog_timeout_seconds: env::var("CATALOG_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("Invalid CATALOG_TIMEOUT_SECONDS"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
