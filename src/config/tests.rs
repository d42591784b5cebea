use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use crate::error::Error;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Environment overrides for one test, undone on drop.
///
/// Holds the process-wide env lock for its whole lifetime.
struct ScopedEnv {
    saved: Vec<(&'static str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    fn new() -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        Self {
            saved: Vec::new(),
            _lock: lock,
        }
    }

    /// Set `key` to `val`, or unset it when `val` is `None`.
    fn with(mut self, key: &'static str, val: Option<&str>) -> Self {
        self.saved.push((key, std::env::var_os(key)));
        unsafe {
            match val {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
        self
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, old) in self.saved.drain(..).rev() {
            unsafe {
                match old {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

#[test]
fn resolve_config_path_prefers_explicit_path() {
    let _env = ScopedEnv::new().with(
        "MEDIA_CATALOG_CONFIG_PATH",
        Some("/tmp/media-catalog-test.toml"),
    );
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/media-catalog-test.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _env = ScopedEnv::new()
        .with("XDG_CONFIG_HOME", Some("/tmp/xdg-config-home"))
        .with("HOME", Some("/tmp/home-should-not-win"));

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("media-catalog")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _env = ScopedEnv::new()
        .with("XDG_CONFIG_HOME", None)
        .with("HOME", Some("/tmp/home-dir"));

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("media-catalog")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file_with_aliases() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[display]
fields = ["studio", "title", "length"]
separator = " • "
max_depth = 2
include_root = false
"#,
    )
    .unwrap();

    let _env = ScopedEnv::new()
        .with("MEDIA_CATALOG_CONFIG_PATH", cfg_path.to_str())
        .with("MEDIA_CATALOG__DISPLAY__SEPARATOR", None);

    let s = Settings::load().unwrap();
    assert_eq!(
        s.display.fields,
        vec![DisplayField::Studio, DisplayField::Title, DisplayField::Duration]
    );
    assert_eq!(s.display.separator, " • ");
    assert_eq!(s.display.max_depth, Some(2));
    assert!(!s.display.include_root);
    s.validate().unwrap();
}

#[test]
fn settings_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("absent.toml");
    let _env = ScopedEnv::new()
        .with("MEDIA_CATALOG_CONFIG_PATH", cfg_path.to_str())
        .with("MEDIA_CATALOG__DISPLAY__SEPARATOR", None);

    let s = Settings::load().unwrap();
    assert_eq!(s.display.fields, vec![DisplayField::Title, DisplayField::Subtitle]);
    assert_eq!(s.display.separator, " - ");
    assert_eq!(s.display.max_depth, None);
    assert!(s.display.include_root);
}

#[test]
fn settings_env_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[display]
separator = " - "
"#,
    )
    .unwrap();

    let _env = ScopedEnv::new()
        .with("MEDIA_CATALOG_CONFIG_PATH", cfg_path.to_str())
        .with("MEDIA_CATALOG__DISPLAY__SEPARATOR", Some("::"));

    let s = Settings::load().unwrap();
    assert_eq!(s.display.separator, "::");
}

#[test]
fn from_toml_str_parses_and_rejects_unknown_fields() {
    let s = Settings::from_toml_str(
        r#"
[display]
fields = ["title", "url"]
"#,
    )
    .unwrap();
    assert_eq!(s.display.fields, vec![DisplayField::Title, DisplayField::Url]);
    assert_eq!(s.display.separator, " - ");

    let err = Settings::from_toml_str(
        r#"
[display]
fields = ["rating"]
"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::ParseConfig { .. }));
}

#[test]
fn validate_rejects_empty_fields_and_rowless_settings() {
    let mut s = Settings::default();
    s.validate().unwrap();

    s.display.fields.clear();
    assert!(matches!(s.validate(), Err(Error::InvalidSettings { .. })));

    let mut s = Settings::default();
    s.display.max_depth = Some(0);
    s.display.include_root = false;
    assert!(matches!(s.validate(), Err(Error::InvalidSettings { .. })));

    s.display.include_root = true;
    s.validate().unwrap();
}
