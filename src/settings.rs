use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub input_path: String,
    pub output_path: String,
    pub page_title: String,
    pub debug: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Load from environment variables with APP_ prefix
            .add_source(Environment::with_prefix("APP"))
            .set_default("input_path", "data/classes.csv")?
            .set_default("output_path", "public/index.html")?
            .set_default("page_title", "Studio Schedule")?
            .set_default("debug", false)?
            .build()?;

        config.try_deserialize()
    }
}
