use std::path::PathBuf;

use crate::theme::Theme;

/// Application id used for eframe's own storage directory.
pub const APP_ID: &str = "eframe_playground";

/// Storage key holding the serialized files and theme.
pub const DEFAULT_STORAGE_KEY: &str = "amazingEditorData";

/// Startup settings, resolved once when the app is created.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaygroundConfig {
    pub storage_key: String,
    /// Where native builds keep the saved state and `preview.html`.
    pub data_dir: PathBuf,
    /// Where native downloads are written.
    pub downloads_dir: PathBuf,
    /// Theme used until a saved one is restored.
    pub default_theme: Theme,
    /// Auto-run setting used until eframe has stored UI preferences.
    pub auto_run: bool,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            downloads_dir: data_dir.join("downloads"),
            data_dir,
            default_theme: Theme::Dark,
            auto_run: true,
        }
    }
}

impl PlaygroundConfig {
    /// Defaults overridden by `PLAYGROUND_STORAGE_KEY`, `PLAYGROUND_DATA_DIR`,
    /// `PLAYGROUND_DOWNLOADS_DIR` and `PLAYGROUND_AUTO_RUN`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(key) = lookup("PLAYGROUND_STORAGE_KEY") {
            config.storage_key = key;
        }
        if let Some(dir) = lookup("PLAYGROUND_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
            config.downloads_dir = config.data_dir.join("downloads");
        }
        if let Some(dir) = lookup("PLAYGROUND_DOWNLOADS_DIR") {
            config.downloads_dir = PathBuf::from(dir);
        }
        if let Some(flag) = lookup("PLAYGROUND_AUTO_RUN") {
            match parse_flag(&flag) {
                Some(auto_run) => config.auto_run = auto_run,
                None => log::warn!("Ignoring PLAYGROUND_AUTO_RUN={:?}", flag),
            }
        }
        config
    }

    pub fn preview_path(&self) -> PathBuf {
        self.data_dir.join("preview.html")
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_data_dir() -> PathBuf {
    eframe::storage_dir(APP_ID).unwrap_or_else(|| PathBuf::from(".").join(APP_ID))
}

#[cfg(target_arch = "wasm32")]
fn default_data_dir() -> PathBuf {
    PathBuf::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_overrides() {
        let config = PlaygroundConfig::from_lookup(|name| match name {
            "PLAYGROUND_STORAGE_KEY" => Some("other".to_owned()),
            "PLAYGROUND_DATA_DIR" => Some("/tmp/pg".to_owned()),
            _ => None,
        });
        assert_eq!(config.storage_key, "other");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/pg"));
        assert_eq!(config.downloads_dir, PathBuf::from("/tmp/pg/downloads"));
        assert_eq!(config.preview_path(), PathBuf::from("/tmp/pg/preview.html"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = PlaygroundConfig::from_lookup(|_| Some("  ".to_owned()));
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert!(config.auto_run);
    }

    #[test]
    fn test_auto_run_flag() {
        let off = PlaygroundConfig::from_lookup(|name| {
            (name == "PLAYGROUND_AUTO_RUN").then(|| "Off".to_owned())
        });
        assert!(!off.auto_run);

        let garbage = PlaygroundConfig::from_lookup(|name| {
            (name == "PLAYGROUND_AUTO_RUN").then(|| "sometimes".to_owned())
        });
        assert!(garbage.auto_run);
    }
}
