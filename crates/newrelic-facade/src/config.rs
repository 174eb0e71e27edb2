// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::error::Error;
use crate::native;
use std::env;

/// The agent accepts up to three `;`-separated application names.
const MAX_APP_NAMES: usize = 3;

/// Facade configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default application name used when a transaction is started without one
    pub app_name: Option<String>,
    /// Whether the real agent may be used at all
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: None,
            enabled: true,
        }
    }
}

impl Config {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, Error> {
        // an exported but empty name is the same as no name
        let app_name = env::var("NEW_RELIC_APP_NAME")
            .ok()
            .filter(|val| !val.trim().is_empty());
        let enabled = env::var("NEW_RELIC_ENABLED")
            .map(|val| !matches!(val.trim().to_lowercase().as_str(), "false" | "0"))
            .unwrap_or(true);

        let config = Self { app_name, enabled };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if let Some(app_name) = &self.app_name {
            let names: Vec<&str> = app_name.split(';').collect();
            if names.iter().any(|name| name.trim().is_empty()) {
                return Err(Error::InvalidConfig(format!(
                    "NEW_RELIC_APP_NAME contains a blank application name: '{app_name}'"
                )));
            }
            if names.len() > MAX_APP_NAMES {
                return Err(Error::InvalidConfig(format!(
                    "NEW_RELIC_APP_NAME accepts at most {MAX_APP_NAMES} application names, got {}",
                    names.len()
                )));
            }
        }

        Ok(())
    }

    /// True when the agent is enabled and loaded in this process.
    pub fn agent_available(&self) -> bool {
        self.enabled && native::is_loaded()
    }
}
