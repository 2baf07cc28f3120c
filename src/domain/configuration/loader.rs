//! Showroom configuration loading.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::{AppError, ShowroomConfig};

pub const CONFIG_FILE: &str = "showroom.toml";
pub const API_URL_ENV: &str = "SHOWROOM_API_URL";

/// Load configuration.
///
/// An explicit path must exist. Without one, `showroom.toml` in `dir` is used
/// when present and defaults otherwise. `SHOWROOM_API_URL` overrides the base
/// URL from either source.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ShowroomConfig, AppError> {
    let mut config = match explicit {
        Some(path) => read_config_file(path)?.ok_or_else(|| {
            AppError::config_error(format!("Config file not found: {}", path.display()))
        })?,
        None => read_config_file(&default_config_path(dir))?.unwrap_or_default(),
    };

    if let Some(url) = api_url_from_env()? {
        config.api.base_url = url;
    }

    config.validate()?;
    Ok(config)
}

pub fn default_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<ShowroomConfig, AppError> {
    let config: ShowroomConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<Option<ShowroomConfig>, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config_content(&content).map(Some),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn api_url_from_env() -> Result<Option<Url>, AppError> {
    match std::env::var(API_URL_ENV) {
        Ok(raw) if !raw.trim().is_empty() => parse_api_url(&raw).map(Some),
        _ => Ok(None),
    }
}

pub fn parse_api_url(raw: &str) -> Result<Url, AppError> {
    Url::parse(raw.trim())
        .map_err(|e| AppError::InvalidConfig(format!("Invalid API URL '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    struct EnvGuard {
        previous: Option<String>,
    }

    impl EnvGuard {
        fn set(value: Option<&str>) -> Self {
            let previous = std::env::var(API_URL_ENV).ok();
            unsafe {
                match value {
                    Some(v) => std::env::set_var(API_URL_ENV, v),
                    None => std::env::remove_var(API_URL_ENV),
                }
            }
            Self { previous }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            unsafe {
                match &self.previous {
                    Some(v) => std::env::set_var(API_URL_ENV, v),
                    None => std::env::remove_var(API_URL_ENV),
                }
            }
        }
    }

    #[test]
    fn parse_config_content_reads_sections() {
        let config = parse_config_content(
            r#"
[api]
base_url = "https://cars.example/api/"
timeout_secs = 5

[filter]
max_price = 60000
"#,
        )
        .unwrap();

        assert_eq!(config.api.base_url.as_str(), "https://cars.example/api/");
        assert_eq!(config.api.timeout_secs, Some(5));
        assert_eq!(config.filter.min_price, 0.0);
        assert_eq!(config.filter.max_price, 60000.0);
    }

    #[test]
    fn parse_config_content_rejects_unknown_fields() {
        let err = parse_config_content("[api]\nretries = 3\n").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }

    #[test]
    #[serial]
    fn missing_default_file_yields_defaults() {
        let _env = EnvGuard::set(None);
        let dir = TempDir::new().unwrap();

        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config.api.base_url.as_str(), "http://localhost:8080/");
    }

    #[test]
    #[serial]
    fn missing_explicit_file_is_an_error() {
        let _env = EnvGuard::set(None);
        let dir = TempDir::new().unwrap();

        let err = load_config(Some(&dir.path().join("nope.toml")), dir.path()).unwrap_err();
        assert!(matches!(err, AppError::Configuration(msg) if msg.contains("nope.toml")));
    }

    #[test]
    #[serial]
    fn default_file_in_dir_is_picked_up() {
        let _env = EnvGuard::set(None);
        let dir = TempDir::new().unwrap();
        fs::write(default_config_path(dir.path()), "[api]\nbase_url = \"http://10.0.0.2:9000\"\n")
            .unwrap();

        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config.api.base_url.as_str(), "http://10.0.0.2:9000/");
    }

    #[test]
    #[serial]
    fn env_overrides_file_base_url() {
        let _env = EnvGuard::set(Some("http://override.example:1234"));
        let dir = TempDir::new().unwrap();
        fs::write(default_config_path(dir.path()), "[api]\nbase_url = \"http://10.0.0.2:9000\"\n")
            .unwrap();

        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config.api.base_url.as_str(), "http://override.example:1234/");
    }

    #[test]
    #[serial]
    fn malformed_env_url_is_rejected() {
        let _env = EnvGuard::set(Some("not a url"));
        let dir = TempDir::new().unwrap();

        let err = load_config(None, dir.path()).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(msg) if msg.contains("not a url")));
    }
}
