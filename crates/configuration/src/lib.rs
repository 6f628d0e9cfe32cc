use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod connection;
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use connection::{resolve_database_url, ConnectionParams, DEFAULT_MYSQL_PORT, MYSQL_SCHEME_PREFIX};
pub use settings::{Settings, SettingsOverrides, DEFAULT_BACKUP_PATH, DEFAULT_TITLE};

/// Prefix for environment variables that override settings,
/// e.g. `APP_VERSIONS_BACKUP_PATH`.
pub const ENV_PREFIX: &str = "APP_VERSIONS";

/// Loads the application settings.
///
/// Sources are layered lowest to highest: built-in defaults, the optional
/// `config.toml` (or the file named in `overrides`), `APP_VERSIONS_*`
/// environment variables, and finally explicit command-line overrides.
pub fn load_settings(overrides: &SettingsOverrides) -> Result<Settings, ConfigError> {
    let file_source = match &overrides.config {
        Some(path) => config::File::from(path.as_path()).required(true),
        None => config::File::with_name("config.toml").required(false),
    };

    let builder = config::Config::builder()
        .set_default("backup_path", DEFAULT_BACKUP_PATH)?
        .set_default("title", DEFAULT_TITLE)?
        .add_source(file_source)
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .set_override_option(
            "backup_path",
            overrides.output.as_ref().map(|p| p.display().to_string()),
        )?
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    tracing::debug!(backup_path = %settings.backup_path.display(), "Settings loaded.");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn file_values_replace_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.toml");
        fs::write(&file, "backup_path = \"/tmp/versions.txt\"\ntitle = \"snapshot\"\n").unwrap();

        let settings = load_settings(&SettingsOverrides {
            config: Some(file),
            output: None,
        })
        .unwrap();

        assert_eq!(settings.backup_path, PathBuf::from("/tmp/versions.txt"));
        assert_eq!(settings.title, "snapshot");
    }

    #[test]
    fn output_override_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.toml");
        fs::write(&file, "backup_path = \"/tmp/from-file.txt\"\n").unwrap();

        let settings = load_settings(&SettingsOverrides {
            config: Some(file),
            output: Some(PathBuf::from("/tmp/from-cli.txt")),
        })
        .unwrap();

        assert_eq!(settings.backup_path, PathBuf::from("/tmp/from-cli.txt"));
        assert_eq!(settings.title, DEFAULT_TITLE);
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_settings(&SettingsOverrides {
            config: Some(dir.path().join("absent.toml")),
            output: None,
        });
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn empty_backup_path_fails_validation() {
        let result = load_settings(&SettingsOverrides {
            config: None,
            output: Some(PathBuf::new()),
        });
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
