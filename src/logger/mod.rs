// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, Registry, prelude::*};

use crate::config::LogConfig;

const LOG_FILE_NAME: &str = "filcore.log";

/// Installs the global subscriber: a console layer, plus an hourly rolling
/// file layer when `log_dir` is set. `RUST_LOG` takes precedence over the
/// configured filters.
pub fn setup_logger(config: &LogConfig) -> anyhow::Result<()> {
    let mut layers: Vec<Box<dyn tracing_subscriber::layer::Layer<Registry> + Send + Sync>> =
        // console logger
        vec![Box::new(
            tracing_subscriber::fmt::Layer::new()
                .with_filter(get_env_filter(config_filter(config)?)),
        )];

    // file logger
    if let Some(log_dir) = &config.log_dir {
        let file_appender = tracing_appender::rolling::hourly(log_dir, LOG_FILE_NAME);
        layers.push(Box::new(
            tracing_subscriber::fmt::Layer::new()
                .with_ansi(false)
                .with_writer(file_appender)
                .with_filter(get_env_filter(config_filter(config)?)),
        ));
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("failed to install the global tracing subscriber")
}

// Log warnings to stderr
pub fn setup_minimal_logger() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_filter(get_env_filter(EnvFilter::new("warn"))),
        )
        .try_init()
        .context("failed to install the global tracing subscriber")
}

fn config_filter(config: &LogConfig) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(config.to_filter_string()).context("invalid log filters")
}

/// Returns an [`EnvFilter`] according to the `RUST_LOG` environment variable,
/// or `def` when it is unset.
fn get_env_filter(def: EnvFilter) -> EnvFilter {
    use std::env::{
        self,
        VarError::{NotPresent, NotUnicode},
    };
    match env::var(EnvFilter::DEFAULT_ENV) {
        Ok(s) => EnvFilter::new(s),
        Err(NotPresent) => def,
        Err(NotUnicode(_)) => EnvFilter::default(),
    }
}
