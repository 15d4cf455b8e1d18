use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::services::DiscoveryPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // HTTP server config
    pub http_host: String,
    pub http_port: u16,

    // Static catalog
    pub catalog_path: String,

    // Discovery policy
    pub proximity_radius_km: f64,
    pub section_limit: usize,
    pub new_restaurant_max_months: i32,

    // Observability
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .set_default("http_host", "0.0.0.0")?
            .set_default("http_port", 3000)?
            .set_default("catalog_path", "data/restaurants.json")?
            .set_default("proximity_radius_km", 1.5)?
            .set_default("section_limit", 10)?
            .set_default("new_restaurant_max_months", 4)?
            .set_default("log_format", "text")?
            .add_source(config::Environment::default().separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow!("HTTP port must be greater than 0"));
        }

        if self.catalog_path.trim().is_empty() {
            return Err(anyhow!("Catalog path is required"));
        }

        if !self.proximity_radius_km.is_finite() || self.proximity_radius_km <= 0.0 {
            return Err(anyhow!(
                "Proximity radius must be a positive number of kilometres, got {}",
                self.proximity_radius_km
            ));
        }

        if self.section_limit == 0 {
            return Err(anyhow!("Section limit must be greater than 0"));
        }

        Ok(())
    }

    pub fn policy(&self) -> DiscoveryPolicy {
        DiscoveryPolicy {
            radius_km: self.proximity_radius_km,
            section_limit: self.section_limit,
            new_max_months: self.new_restaurant_max_months,
        }
    }
}
