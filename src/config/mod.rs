//! Configuration management module
//!
//! Handles loading, saving, and validation of animation timings, wizard
//! defaults, terminal settings and logging preferences.

use crate::anim::{StepTiming, TypewriterTiming};
use crate::util::units::duration_str;
use crate::{MinerError, Result, APP_NAME, CONFIG_FILE, LOG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level demo configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Timings for every animated effect
    pub animation: AnimationConfig,
    /// Wizard defaults
    pub wizard: WizardConfig,
    /// Terminal loop settings
    pub ui: UiConfig,
    /// Log output settings
    pub logging: LoggingConfig,
}

/// Animation timings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Delay between typed characters
    #[serde(with = "duration_str")]
    pub typewriter: Duration,
    /// Delay between deleted characters
    #[serde(with = "duration_str")]
    pub delete: Duration,
    /// Hold time once a string is fully typed
    #[serde(with = "duration_str")]
    pub pause: Duration,
    /// Spinner frame interval
    #[serde(with = "duration_str")]
    pub spinner: Duration,
    /// Ripple step interval
    #[serde(with = "duration_str")]
    pub ripple: Duration,
    /// Extra resting positions at the end of each ripple pass
    pub ripple_rest: usize,
    /// Border glow color interval
    #[serde(with = "duration_str")]
    pub glow: Duration,
    /// Fade-in step interval
    #[serde(with = "duration_str")]
    pub fade: Duration,
    /// Number of fade-in steps until fully opaque
    pub fade_steps: u8,
    /// Shortest simulated analysis step
    #[serde(with = "duration_str")]
    pub step_min: Duration,
    /// Longest simulated analysis step
    #[serde(with = "duration_str")]
    pub step_max: Duration,
    /// Delay between the last step and showing the resume
    #[serde(with = "duration_str")]
    pub finish: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            typewriter: Duration::from_millis(80),
            delete: Duration::from_millis(45),
            pause: Duration::from_millis(700),
            spinner: Duration::from_millis(80),
            ripple: Duration::from_millis(60),
            ripple_rest: 6,
            glow: Duration::from_millis(400),
            fade: Duration::from_millis(50),
            fade_steps: 12,
            step_min: Duration::from_millis(600),
            step_max: Duration::from_millis(1000),
            finish: Duration::from_millis(500),
        }
    }
}

impl AnimationConfig {
    /// Typewriter delays
    pub fn typewriter_timing(&self) -> TypewriterTiming {
        TypewriterTiming {
            type_interval: self.typewriter,
            delete_interval: self.delete,
            pause: self.pause,
        }
    }

    /// Analysis step delays
    pub fn step_timing(&self) -> StepTiming {
        StepTiming {
            min: self.step_min,
            max: self.step_max,
            finish: self.finish,
        }
    }
}

/// Analysis mode offered on the consent screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Metadata is sent to a hosted model for richer results
    Cloud,
    /// Pattern-based analysis on this machine only
    #[default]
    Offline,
}

impl AnalysisMode {
    /// Whether this mode enables enhanced (cloud) analysis
    pub fn is_enhanced(&self) -> bool {
        matches!(self, AnalysisMode::Cloud)
    }

    /// The other mode
    pub fn toggled(&self) -> Self {
        match self {
            AnalysisMode::Cloud => AnalysisMode::Offline,
            AnalysisMode::Offline => AnalysisMode::Cloud,
        }
    }

    /// Get a human-readable description of the mode
    pub fn description(&self) -> &'static str {
        match self {
            AnalysisMode::Cloud => "Cloud Analysis",
            AnalysisMode::Offline => "Offline",
        }
    }
}

/// Wizard defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Mode preselected on the consent screen
    pub default_mode: AnalysisMode,
    /// Accepted archive extensions, without the dot
    pub archive_extensions: Vec<String>,
    /// Path prefilled in the file picker
    pub initial_path: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            default_mode: AnalysisMode::Offline,
            archive_extensions: vec!["zip".to_string()],
            initial_path: "/Users/demo/projects/capstone-project.zip".to_string(),
        }
    }
}

/// Terminal loop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Longest wait for input before redrawing
    #[serde(with = "duration_str")]
    pub frame_rate: Duration,
    /// Minimum usable terminal width
    pub min_width: u16,
    /// Minimum usable terminal height
    pub min_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_rate: Duration::from_millis(16),
            min_width: 80,
            min_height: 24,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Log file; relative names resolve inside the data directory
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: PathBuf::from(LOG_FILE),
        }
    }
}

impl DemoConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        let anim = &self.animation;
        let intervals = [
            ("typewriter", anim.typewriter),
            ("delete", anim.delete),
            ("pause", anim.pause),
            ("spinner", anim.spinner),
            ("ripple", anim.ripple),
            ("glow", anim.glow),
            ("fade", anim.fade),
            ("step_min", anim.step_min),
            ("step_max", anim.step_max),
            ("finish", anim.finish),
            ("frame_rate", self.ui.frame_rate),
        ];
        for (name, interval) in intervals {
            if interval.is_zero() {
                return Err(MinerError::Config(format!(
                    "{} interval must be greater than 0",
                    name
                )));
            }
        }

        if anim.step_min > anim.step_max {
            return Err(MinerError::Config(format!(
                "step_min ({}) must not exceed step_max ({})",
                crate::util::format_duration(anim.step_min),
                crate::util::format_duration(anim.step_max)
            )));
        }

        if anim.fade_steps == 0 {
            return Err(MinerError::Config(
                "fade_steps must be greater than 0".to_string(),
            ));
        }

        if self.wizard.archive_extensions.is_empty() {
            return Err(MinerError::Config(
                "At least one archive extension is required".to_string(),
            ));
        }
        for ext in &self.wizard.archive_extensions {
            if ext.trim().is_empty() || ext.contains('.') || ext.contains(char::is_whitespace) {
                return Err(MinerError::Config(format!(
                    "Invalid archive extension '{}': use a bare name such as 'zip'",
                    ext
                )));
            }
        }

        if tracing_subscriber::EnvFilter::try_new(&self.logging.level).is_err() {
            return Err(MinerError::Config(format!(
                "Invalid log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            MinerError::Config(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            MinerError::Config(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                MinerError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            MinerError::Config(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/artifact-miner/artifact-miner.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            MinerError::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Resolve the log file location
    /// Relative paths land in $DATA_HOME/artifact-miner/
    pub fn log_file_path(&self) -> Result<PathBuf> {
        if self.logging.file.is_absolute() {
            return Ok(self.logging.file.clone());
        }

        let data_dir = dirs::data_dir().ok_or_else(|| {
            MinerError::Config("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join(&self.logging.file))
    }
}
