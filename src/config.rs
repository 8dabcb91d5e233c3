//! Configuration primitives for the onboarding wizard.
//!
//! Stored in a machine-readable TOML file located at:
//!   `$REPQR_ONBOARDING_HOME/config.toml` when the variable is set
//!   `<OS config dir>/RepQR/config.toml` otherwise
//!
//! Every field has a serde default so a partial (or missing) file yields the
//! stock wizard timings.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

/// Standard file name of the wizard config.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the config directory.
pub const HOME_ENV_VAR: &str = "REPQR_ONBOARDING_HOME";

/// Root configuration for one wizard install.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WizardSettings {
    /// Delays used by the simulated async sequences.
    #[serde(default)]
    pub timings: TimingSettings,
    /// Progress indicator knobs.
    #[serde(default)]
    pub progress: ProgressSettings,
}

/// Millisecond offsets for staged messages and transient feedback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingSettings {
    /// Offset of the second reveal message.
    #[serde(default = "default_reveal_stage_ms")]
    pub reveal_stage_ms: u64,
    /// Total length of the reveal loader.
    #[serde(default = "default_reveal_total_ms")]
    pub reveal_total_ms: u64,
    /// Gap between consecutive AI build messages.
    #[serde(default = "default_ai_stage_interval_ms")]
    pub ai_stage_interval_ms: u64,
    /// Delay before generated fields are committed.
    #[serde(default = "default_ai_build_total_ms")]
    pub ai_build_total_ms: u64,
    /// How long the "Copied" label stays up.
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
    /// Fade applied after each phase change.
    #[serde(default = "default_phase_fade_ms")]
    pub phase_fade_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            reveal_stage_ms: default_reveal_stage_ms(),
            reveal_total_ms: default_reveal_total_ms(),
            ai_stage_interval_ms: default_ai_stage_interval_ms(),
            ai_build_total_ms: default_ai_build_total_ms(),
            copy_feedback_ms: default_copy_feedback_ms(),
            phase_fade_ms: default_phase_fade_ms(),
        }
    }
}

impl TimingSettings {
    /// Offset of the second reveal message, never past the reveal end.
    pub fn reveal_stage(&self) -> Duration {
        Duration::from_millis(self.reveal_stage_ms.min(self.reveal_total_ms))
    }

    pub fn reveal_total(&self) -> Duration {
        Duration::from_millis(self.reveal_total_ms)
    }

    /// Offset of the AI build message at `index`, never past the commit.
    pub fn ai_stage_offset(&self, index: usize) -> Duration {
        let offset = self
            .ai_stage_interval_ms
            .saturating_mul(index as u64)
            .min(self.ai_build_total_ms);
        Duration::from_millis(offset)
    }

    pub fn ai_build_total(&self) -> Duration {
        Duration::from_millis(self.ai_build_total_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn phase_fade(&self) -> Duration {
        Duration::from_millis(self.phase_fade_ms)
    }
}

const fn default_reveal_stage_ms() -> u64 {
    1_000
}

const fn default_reveal_total_ms() -> u64 {
    2_000
}

const fn default_ai_stage_interval_ms() -> u64 {
    650
}

const fn default_ai_build_total_ms() -> u64 {
    2_600
}

const fn default_copy_feedback_ms() -> u64 {
    1_200
}

const fn default_phase_fade_ms() -> u64 {
    220
}

/// Progress bar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressSettings {
    /// Lowest value the progress bar displays, whatever the real completion.
    #[serde(default = "default_display_floor_percent")]
    pub display_floor_percent: u8,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            display_floor_percent: default_display_floor_percent(),
        }
    }
}

const fn default_display_floor_percent() -> u8 {
    35
}

/// Returns the directory holding the wizard config.
///
/// Order of precedence:
/// 1. `REPQR_ONBOARDING_HOME` environment variable.
/// 2. OS-specific config directory via `directories::BaseDirs`.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(path) = env::var(HOME_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS config directory")?;
    Ok(base_dirs.config_dir().join("RepQR"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from the default location or returns defaults.
pub fn load_or_default() -> Result<WizardSettings> {
    let path = config_file_path()?;
    if path.exists() {
        load_from(&path)
    } else {
        Ok(WizardSettings::default())
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<WizardSettings> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let settings: WizardSettings = toml::from_str(&data)
        .with_context(|| format!("Failed to parse config file {:?}", path))?;
    Ok(settings)
}

/// Persists the configuration to an explicit path.
pub fn save_to<P: AsRef<Path>>(path: P, settings: &WizardSettings) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating config directory {:?}", parent))?;
    }
    let data = toml::to_string_pretty(settings)?;
    fs::write(path, data).with_context(|| format!("Failed writing config file {:?}", path))?;
    Ok(())
}
