// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::{fmt, path::Path, path::PathBuf, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tracing::level_filters::LevelFilter;

use crate::address::{Address, Network, WellKnown};
use crate::utils::io::read_toml_file;

/// Level filter that reads and writes as its name, case insensitive.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct LogLevelFilter(pub LevelFilter);

impl Serialize for LogLevelFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string().to_uppercase())
    }
}

impl fmt::Display for LogLevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_string().to_lowercase())
    }
}

impl<'de> Deserialize<'de> for LogLevelFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LevelFilterVisitor;

        impl de::Visitor<'_> for LevelFilterVisitor {
            type Value = LogLevelFilter;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("log level filter")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                LevelFilter::from_str(s)
                    .map(LogLevelFilter)
                    .map_err(|_| E::unknown_variant(s, &LOG_LEVEL_NAMES))
            }
        }

        deserializer.deserialize_str(LevelFilterVisitor)
    }
}

static LOG_LEVEL_NAMES: [&str; 6] = ["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"];

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct LogValue {
    pub module: String,
    pub level: LogLevelFilter,
}

impl LogValue {
    pub fn new(module: &str, level: LevelFilter) -> Self {
        Self {
            module: module.to_string(),
            level: LogLevelFilter(level),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(default)]
pub struct LogConfig {
    /// Per-module level directives, applied after the `info` default.
    pub filters: Vec<LogValue>,
    /// Directory for hourly rolling log files. Console only when unset.
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    pub fn to_filter_string(&self) -> String {
        std::iter::once("info".to_string())
            .chain(
                self.filters
                    .iter()
                    .map(|f| format!("{}={}", f.module, f.level)),
            )
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filters: vec![
                LogValue::new("filcore::interpreter", LevelFilter::INFO),
                LogValue::new("filcore::state_tree", LevelFilter::WARN),
            ],
            log_dir: None,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
#[serde(default)]
pub struct NetworkConfig {
    /// Network the node's own addresses live on.
    pub default: Network,
}

impl NetworkConfig {
    /// Address of a well-known actor on the configured network.
    pub fn well_known(&self, actor: WellKnown) -> Address {
        actor.address(self.default)
    }

    /// ID address on the configured network.
    pub fn id_address(&self, id: u64) -> Address {
        Address::new_id(self.default, id)
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        read_toml_file(path)
    }
}
