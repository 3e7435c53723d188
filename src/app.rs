use adw::Application;
use directories::BaseDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::navigation::CHAT_LIST;
use crate::session::SessionContext;
use crate::view_model::SendMode;

/// Read-only start-up settings. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub current_user_id: String,
    pub send_mode: SendMode,
    pub start_route: String,
    pub log_level: String,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            current_user_id: SessionContext::DEFAULT_USER_ID.to_string(),
            send_mode: SendMode::default(),
            start_route: CHAT_LIST.to_string(),
            log_level: "info".to_string(),
            window_width: 420,
            window_height: 760,
        }
    }
}

impl AppSettings {
    pub fn path() -> Result<PathBuf, ConfigError> {
        let base = BaseDirs::new().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.config_dir().join("finralink.toml"))
    }

    /// Loads the user's settings file, falling back to defaults when it is
    /// missing or unreadable.
    pub fn load() -> Self {
        let path = match Self::path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("{e}; using default settings");
                return Self::default();
            }
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&text)?)
    }

    pub fn session(&self) -> SessionContext {
        SessionContext::new(self.current_user_id.clone())
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

pub fn build_ui(app: &Application, settings: &AppSettings) {
    crate::ui::style::install();
    crate::ui::main_window::show_main_window(app, settings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_yields_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"").unwrap();
        let settings = AppSettings::load_from(file.path()).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.session(), SessionContext::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "current_user_id = \"me\"").unwrap();
        writeln!(file, "send_mode = \"append_local\"").unwrap();
        writeln!(file, "start_route = \"chat_details/Anna\"").unwrap();
        let settings = AppSettings::load_from(file.path()).unwrap();
        assert_eq!(settings.session().current_user_id, "me");
        assert_eq!(settings.send_mode, SendMode::AppendLocal);
        assert_eq!(settings.start_route, "chat_details/Anna");
        assert_eq!(settings.window_width, 420);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "send_mode = \"carrier_pigeon\"").unwrap();
        let err = AppSettings::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppSettings::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn log_level_falls_back_to_info() {
        let mut settings = AppSettings::default();
        settings.log_level = "debug".into();
        assert_eq!(settings.log_filter(), log::LevelFilter::Debug);
        settings.log_level = "loud".into();
        assert_eq!(settings.log_filter(), log::LevelFilter::Info);
    }
}
