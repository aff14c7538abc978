use std::env;
use std::fmt;
use std::path::PathBuf;

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub parish: ParishConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let data_dir = env::var("APP_DATA_DIR").unwrap_or_else(|_| "./parish-data".to_string());
        if data_dir.trim().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }

        let parish_name = env::var("APP_PARISH")
            .unwrap_or_else(|_| "Parroquia San Isidro Labrador".to_string());
        if parish_name.trim().is_empty() {
            return Err(ConfigError::EmptyParishName);
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            storage: StorageConfig {
                data_dir: PathBuf::from(data_dir),
            },
            parish: ParishConfig { name: parish_name },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings controlling where partitions are persisted.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

/// The parish whose partitions the process operates on.
#[derive(Debug, Clone)]
pub struct ParishConfig {
    pub name: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyDataDir,
    EmptyParishName,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyDataDir => write!(f, "APP_DATA_DIR must not be blank"),
            ConfigError::EmptyParishName => write!(f, "APP_PARISH must not be blank"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_DATA_DIR");
        env::remove_var("APP_PARISH");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.storage.data_dir, PathBuf::from("./parish-data"));
        assert_eq!(config.parish.name, "Parroquia San Isidro Labrador");
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn load_honors_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_DATA_DIR", "/tmp/ledger-data");
        env::set_var("APP_PARISH", "Parroquia Santa Cecilia");
        env::set_var("APP_LOG_LEVEL", "debug");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/ledger-data"));
        assert_eq!(config.parish.name, "Parroquia Santa Cecilia");
        assert_eq!(config.telemetry.log_level, "debug");
        reset_env();
    }

    #[test]
    fn blank_parish_is_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PARISH", "   ");
        match AppConfig::load() {
            Err(ConfigError::EmptyParishName) => {}
            other => panic!("expected blank parish rejection, got {other:?}"),
        }
        reset_env();
    }
}
