use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;
use summarizer_core::{config as core_config, SummarizerConfig};

pub const DEFAULT_CONFIG_PATH: &str = "summarizer.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub step_unit_ms: u64,
    pub mailbox_capacity: usize,
    pub update_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            step_unit_ms: core_config::DEFAULT_STEP_UNIT.as_millis() as u64,
            mailbox_capacity: core_config::DEFAULT_MAILBOX_CAPACITY,
            update_capacity: core_config::DEFAULT_UPDATE_CAPACITY,
        }
    }
}

impl Settings {
    pub fn summarizer_config(&self) -> SummarizerConfig {
        SummarizerConfig {
            step_unit: Duration::from_millis(self.step_unit_ms),
            mailbox_capacity: self.mailbox_capacity,
            update_capacity: self.update_capacity,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    step_unit_ms: Option<u64>,
    mailbox_capacity: Option<usize>,
    update_capacity: Option<usize>,
}

/// Defaults, then the TOML file if it exists, then environment overrides.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        apply_file(&mut settings, &raw)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.step_unit_ms {
        settings.step_unit_ms = v;
    }
    if let Some(v) = file_cfg.mailbox_capacity {
        settings.mailbox_capacity = v;
    }
    if let Some(v) = file_cfg.update_capacity {
        settings.update_capacity = v;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("SUMMARIZER_STEP_UNIT_MS").and_then(|v| v.parse().ok()) {
        settings.step_unit_ms = v;
    }
    if let Some(v) = lookup("APP__STEP_UNIT_MS").and_then(|v| v.parse().ok()) {
        settings.step_unit_ms = v;
    }
    if let Some(v) = lookup("APP__MAILBOX_CAPACITY").and_then(|v| v.parse().ok()) {
        settings.mailbox_capacity = v;
    }
    if let Some(v) = lookup("APP__UPDATE_CAPACITY").and_then(|v| v.parse().ok()) {
        settings.update_capacity = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
