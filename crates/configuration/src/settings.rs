use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// Where the backup is written when nothing else is configured.
pub const DEFAULT_BACKUP_PATH: &str = "/home/ubuntu/app_versions_backup.txt";

/// Title line printed between the opening banners.
pub const DEFAULT_TITLE: &str = "app_versions 테이블 원본 데이터 (테스트 전)";

/// The root configuration structure for the backup run.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// The backup file. It is overwritten on every run.
    pub backup_path: PathBuf,
    /// The report title.
    pub title: String,
}

impl Settings {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.backup_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "backup_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backup_path: PathBuf::from(DEFAULT_BACKUP_PATH),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Values supplied on the command line that take precedence over every
/// other settings source.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct SettingsOverrides {
    /// Read settings from this TOML file instead of `./config.toml`.
    #[cfg_attr(feature = "clap", arg(long, value_name = "FILE"))]
    pub config: Option<PathBuf>,

    /// Write the backup to this path instead of the configured one.
    #[cfg_attr(feature = "clap", arg(long, short, value_name = "PATH"))]
    pub output: Option<PathBuf>,
}
