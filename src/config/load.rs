use std::{env, path::PathBuf};

use snafu::ResultExt;
use tracing::debug;

use super::schema::Settings;
use crate::error::{InvalidSettingsSnafu, LoadConfigSnafu, ParseConfigSnafu, Result};

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `MEDIA_CATALOG__`),
/// then an optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            debug!(path = %path.display(), "reading catalog config");
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MEDIA_CATALOG")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("display.fields"),
        );

        let cfg = builder.build().context(LoadConfigSnafu)?;
        let settings: Settings = cfg.try_deserialize().context(LoadConfigSnafu)?;
        Ok(settings)
    }

    /// Parse settings from an in-memory TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context(ParseConfigSnafu)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<()> {
        let display = &self.display;
        if display.fields.is_empty() {
            return InvalidSettingsSnafu {
                message: "display.fields must name at least one field",
            }
            .fail();
        }
        if display.max_depth == Some(0) && !display.include_root {
            return InvalidSettingsSnafu {
                message: "display.max_depth = 0 with include_root = false yields no rows",
            }
            .fail();
        }
        Ok(())
    }
}

/// Resolve the config path from `MEDIA_CATALOG_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MEDIA_CATALOG_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/media-catalog/config.toml`
/// or `~/.config/media-catalog/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("media-catalog").join("config.toml"))
}
