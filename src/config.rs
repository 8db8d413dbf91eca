// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, Result};
use crate::models::Person;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Splitledger", "splitledger"));

pub const CONFIG_FILE: &str = "configuration.json";
pub const CONFIG_ENV: &str = "SPLITLEDGER_CONFIG";

/// Party names, currency labels and database location, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub person_a: String,
    pub person_b: String,
    pub currency_long: String,
    pub currency_short: String,
    /// Path stem of the SQLite file; `.db` is appended.
    pub database_name: String,
}

impl Default for Config {
    fn default() -> Self {
        let database_name = data_dir()
            .map(|d| d.join("transactions").to_string_lossy().into_owned())
            .unwrap_or_else(|| "transactions".to_string());
        Self {
            person_a: "Person A".to_string(),
            person_b: "Person B".to_string(),
            currency_long: "dollars".to_string(),
            currency_short: "$".to_string(),
            database_name,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            LedgerError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
            .map_err(|e| LedgerError::Config(format!("{} in {}", e, path.display())))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| LedgerError::Config(e.to_string()))
    }

    /// Resolves the config from an explicit path, the environment, or the
    /// platform config dir, falling back to defaults only for the latter.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(p) = explicit {
            return Self::load(p);
        }
        if let Ok(p) = std::env::var(CONFIG_ENV) {
            if !p.is_empty() {
                return Self::load(Path::new(&p));
            }
        }
        match default_config_path() {
            Some(p) if p.exists() => Self::load(&p),
            _ => {
                log::debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.db", self.database_name))
    }

    pub fn name_of(&self, person: Person) -> &str {
        match person {
            Person::A => &self.person_a,
            Person::B => &self.person_b,
        }
    }

    pub fn fmt_amount(&self, amount: impl std::fmt::Display) -> String {
        format!("{}{}", self.currency_short, amount)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP.0, APP.1, APP.2)
}

fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|p| p.data_dir().to_path_buf())
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|p| p.config_dir().join(CONFIG_FILE))
}
