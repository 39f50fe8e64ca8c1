use std::path::Path;

use failure::bail;
use log::info;
use serde_derive::{Deserialize, Serialize};

use crate::errors::*;
use crate::utils::load_optional_json;

pub const ENGINE_CONFIG_FILE: &str = "engine_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Half width of the uniform noise added to the base confidence of a prediction
    pub confidence_noise: f32,
    /// Inclusive range, in milliseconds, of the reported processing time
    pub processing_time_ms: (u32, u32),
    pub evaluation_seed: u64,
    pub training_step_delay_ms: u64,
    pub model_version: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            confidence_noise: 0.05,
            processing_time_ms: (50, 150),
            evaluation_seed: 42,
            training_step_delay_ms: 500,
            model_version: "v1.0.0".to_string(),
        }
    }
}

impl EngineConfig {
    /// Loads `engine_config.json` from an engine directory, falling back to the default
    /// configuration when the file is absent.
    pub fn from_path<P: AsRef<Path>>(engine_dir: P) -> Result<Self> {
        let config_path = engine_dir.as_ref().join(ENGINE_CONFIG_FILE);
        let config = match load_optional_json::<EngineConfig, _>(&config_path)? {
            Some(config) => {
                info!("Engine configuration loaded from {:?}", config_path);
                config
            }
            None => EngineConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.confidence_noise) {
            bail!(SnipsNluPlaygroundError::InvalidConfiguration(format!(
                "confidence_noise must be in [0, 1], found {}",
                self.confidence_noise
            )));
        }
        let (min_time, max_time) = self.processing_time_ms;
        if min_time > max_time {
            bail!(SnipsNluPlaygroundError::InvalidConfiguration(format!(
                "processing_time_ms range is empty: [{}, {}]",
                min_time, max_time
            )));
        }
        Ok(())
    }

    pub fn without_delays(mut self) -> Self {
        self.training_step_delay_ms = 0;
        self
    }
}
