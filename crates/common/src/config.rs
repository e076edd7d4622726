use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub analyzer: AnalyzerConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    pub fn load() -> crate::Result<Self> {
        Self::load_from_path(".")
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(
                File::with_name(
                    path.as_ref()
                        .join("config/default")
                        .to_string_lossy()
                        .as_ref(),
                )
                .required(false),
            )
            .add_source(
                File::with_name(
                    path.as_ref()
                        .join("config/local")
                        .to_string_lossy()
                        .as_ref(),
                )
                .required(false),
            )
            .add_source(Environment::default().separator("__"))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub bind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Artificial latency added before an analysis is returned.
    #[serde(default = "AnalyzerConfig::default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

impl AnalyzerConfig {
    const fn default_simulated_delay_ms() -> u64 {
        800
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "ObservabilityConfig::default_metrics_path")]
    pub metrics_path: String,
}

impl ObservabilityConfig {
    fn default_metrics_path() -> String {
        "/metrics".to_string()
    }
}
