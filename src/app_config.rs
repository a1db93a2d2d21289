use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    controller: Controller,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("GESTURE").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: usize,
    #[serde(with = "humantime_serde")]
    tick_interval: Duration,
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

#[derive(Debug, Deserialize)]
pub struct Controller {
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Controller {
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    event_buffer_size: 8,
                    tick_interval: Duration::from_millis(250),
                },
                controller: Controller {
                    timeout: Duration::from_secs(3),
                },
            },
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.controller.timeout = timeout;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
