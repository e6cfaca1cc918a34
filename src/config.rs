use figment::{Figment, providers::Env};
use serde::Deserialize;

/// Runtime configuration, extracted from the process environment once at
/// startup. `SECRET_KEY` and `SECRET_PASS` are required; the rest fall back
/// to defaults suitable for local use.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    pub secret_key: String,
    pub secret_pass: String,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

impl Config {
    pub fn from_env() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Env::raw().only(&["DATABASE_URL", "SECRET_KEY", "SECRET_PASS", "LOGLEVEL"]))
            .extract()
    }
}

fn default_database_url() -> String {
    "sqlite:cafes.db".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}
