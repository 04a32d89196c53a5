//! Application settings.
//!
//! The settings ship as a YAML document compiled into the binary. Any field
//! missing from the document takes its default, so a partial file is valid.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};
use crate::theme::Mode;

const EMBEDDED_CONFIG: &str = include_str!("../config/app.yaml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix every route is mounted under
    pub base_path: String,
    /// Mode name; unknown names resolve to the simple theme
    pub default_mode: String,
    pub currency_symbol: String,
    /// Canonical category order for grouping
    pub categories: Vec<String>,
    pub groups: Vec<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_path: "/lifeplan".to_string(),
            default_mode: Mode::Simple.name().to_string(),
            currency_symbol: "¥".to_string(),
            categories: ["Housing", "Food", "Utilities", "Insurance", "Leisure"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            groups: ["Fixed", "Variable"].iter().map(|s| s.to_string()).collect(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_yaml(source: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(source)
            .map_err(|e| DomainError::InvalidConfig(e.to_string()))?;
        Ok(config.normalized())
    }

    /// The settings bundled with the build
    pub fn embedded() -> Result<Self> {
        Self::from_yaml(EMBEDDED_CONFIG)
    }

    pub fn mode(&self) -> Mode {
        Mode::from_name(&self.default_mode)
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Trim list entries, drop blanks and repeats, and make the base path
    /// start with `/` without a trailing one
    fn normalized(mut self) -> Self {
        self.categories = dedup_trimmed(self.categories);
        self.groups = dedup_trimmed(self.groups);

        let trimmed = self.base_path.trim().trim_matches('/');
        self.base_path = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", trimmed)
        };
        self
    }
}

fn dedup_trimmed(values: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim().to_string();
        if !value.is_empty() && !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}
