//! Global appointments configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::appointment::Filter;
use crate::error::{AppointmentError, AppointmentResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/appointments";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Configuration at ~/.config/appointments/config.toml
///
/// Any key can be overridden from the environment with an `APPOINTMENTS_`
/// prefix, e.g. `APPOINTMENTS_DATA_DIR`.
#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub default_filter: Filter,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_dir: default_data_dir(),
            default_filter: Filter::All,
        }
    }
}

impl Settings {
    pub fn config_path() -> AppointmentResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AppointmentError::Config("Could not determine config directory".into()))?
            .join("appointments");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default config path. Never fails: problems with the
    /// config file are logged and the defaults are used instead.
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_at(&path),
            Err(e) => {
                warn!(error = %e, "using default settings");
                Self::default()
            }
        }
    }

    /// Load from `path`, writing a commented-out default file there first if
    /// none exists. An unwritable or unreadable config falls back to defaults.
    pub fn load_at(path: &Path) -> Self {
        if !path.exists()
            && let Err(e) = Self::create_default_config(path)
        {
            warn!(error = %e, "could not write default config");
        }

        Self::load_from(path).unwrap_or_else(|e| {
            warn!(error = %e, path = %path.display(), "using default settings");
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> AppointmentResult<Self> {
        debug!(path = %path.display(), "loading settings");

        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("APPOINTMENTS"))
            .build()
            .map_err(|e| AppointmentError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AppointmentError::Config(e.to_string()))
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> AppointmentResult<()> {
        let contents = format!(
            "\
# appointments configuration

# Where appointments are stored:
# data_dir = \"{}\"

# Filter used by `appt list` when --filter is not given
# (all, pending, completed, missed):
# default_filter = \"all\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppointmentError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AppointmentError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
