/// Application configuration: load, save, merge, and sanitize.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::theme::{builtin_dark, builtin_default, builtin_sepia, EditorTheme};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Theme name, or "System" to follow the OS preference.
    pub current_theme: String,
    pub font_size: f32,
    /// Hint shown in an empty editor.
    pub placeholder_text: String,
    /// Whether to periodically save the document to the local store.
    pub auto_save_enabled: bool,
    /// Interval in seconds between auto-saves (minimum 5).
    pub auto_save_interval_secs: u64,
    /// Extension pre-filled in the export dialog ("txt" or "html").
    pub default_export_extension: String,
    /// Whether to remember the last folder used in open/save dialogs.
    pub remember_last_folder: bool,
    /// Last folder used in an open/save dialog (persisted across sessions).
    pub last_used_folder: String,
    /// Whether to reveal exported files in the system file manager.
    pub reveal_after_export: bool,
    pub themes: Vec<EditorTheme>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            current_theme: "System".to_string(),
            font_size: 16.0,
            placeholder_text: "Start typing your document...".to_string(),
            auto_save_enabled: true,
            auto_save_interval_secs: 30,
            default_export_extension: "txt".to_string(),
            remember_last_folder: true,
            last_used_folder: String::new(),
            reveal_after_export: false,
            themes: vec![builtin_default(), builtin_dark(), builtin_sepia()],
        }
    }
}

impl AppConfig {
    /// Returns the config file path: exe directory + `rich-pad.json`.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join("rich-pad.json")))
            .unwrap_or_else(|| PathBuf::from("rich-pad.json"))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (missing file, parse error, etc.).
    pub fn load_or_create(path: &std::path::Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        config.with_builtins_merged();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Return defaults on error (don't overwrite broken file)
            let mut config = Self::default();
            config.sanitize();
            config
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Ensures the built-in themes are always present.
    /// User-defined themes with matching names take priority over built-ins.
    pub fn with_builtins_merged(&mut self) {
        for (idx, builtin) in [builtin_default(), builtin_dark(), builtin_sepia()]
            .into_iter()
            .enumerate()
        {
            if !self.themes.iter().any(|t| t.name == builtin.name) {
                let insert_at = idx.min(self.themes.len());
                self.themes.insert(insert_at, builtin);
            }
        }
    }

    /// Finds a theme by name.
    pub fn find_theme(&self, name: &str) -> Option<&EditorTheme> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// Returns all theme names.
    pub fn theme_names(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    /// Returns the effective starting directory for file dialogs.
    ///
    /// Resolution order:
    /// 1. `last_used_folder` (if `remember_last_folder` is true and the path exists)
    /// 2. User's home directory
    pub fn resolve_work_folder(&self) -> Option<PathBuf> {
        if self.remember_last_folder && !self.last_used_folder.is_empty() {
            let p = PathBuf::from(&self.last_used_folder);
            if p.is_dir() {
                return Some(p);
            }
        }
        dirs::home_dir()
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        self.font_size = self.font_size.clamp(6.0, 72.0);
        self.auto_save_interval_secs = self.auto_save_interval_secs.max(5);

        if !matches!(self.default_export_extension.as_str(), "txt" | "html") {
            self.default_export_extension = "txt".to_string();
        }

        let theme_names: Vec<String> = self.themes.iter().map(|t| t.name.clone()).collect();
        if self.current_theme != "System" && !theme_names.contains(&self.current_theme) {
            self.current_theme = "System".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.current_theme, "System");
        assert!((config.font_size - 16.0).abs() < f32::EPSILON);
        assert_eq!(config.placeholder_text, "Start typing your document...");
        assert!(config.auto_save_enabled);
        assert_eq!(config.auto_save_interval_secs, 30);
        assert_eq!(config.default_export_extension, "txt");
        assert_eq!(config.themes.len(), 3);
    }

    #[test]
    fn test_sanitize_clamps_font_size() {
        let mut config = AppConfig::default();
        config.font_size = 2.0;
        config.sanitize();
        assert!((config.font_size - 6.0).abs() < f32::EPSILON);

        config.font_size = 100.0;
        config.sanitize();
        assert!((config.font_size - 72.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sanitize_clamps_auto_save_interval() {
        let mut config = AppConfig::default();
        config.auto_save_interval_secs = 1;
        config.sanitize();
        assert_eq!(config.auto_save_interval_secs, 5);
    }

    #[test]
    fn test_sanitize_resets_unknown_theme() {
        let mut config = AppConfig::default();
        config.current_theme = "NonExistent".to_string();
        config.sanitize();
        assert_eq!(config.current_theme, "System");
    }

    #[test]
    fn test_sanitize_allows_builtin_theme_names() {
        let mut config = AppConfig::default();
        config.current_theme = "Sepia".to_string();
        config.sanitize();
        assert_eq!(config.current_theme, "Sepia");
    }

    #[test]
    fn test_sanitize_resets_bad_export_extension() {
        let mut config = AppConfig::default();
        config.default_export_extension = "pdf".to_string();
        config.sanitize();
        assert_eq!(config.default_export_extension, "txt");
    }

    #[test]
    fn test_with_builtins_merged_adds_missing() {
        let mut config = AppConfig::default();
        config.themes = vec![builtin_sepia()];
        config.with_builtins_merged();
        assert!(config.find_theme("Default").is_some());
        assert!(config.find_theme("Dark").is_some());
        assert!(config.find_theme("Sepia").is_some());
    }

    #[test]
    fn test_with_builtins_merged_preserves_custom() {
        let mut custom_dark = builtin_dark();
        custom_dark.background = crate::HexColor::rgb(10, 0, 0);

        let mut config = AppConfig::default();
        config.themes = vec![custom_dark.clone()];
        config.with_builtins_merged();

        let dark = config.find_theme("Dark").unwrap();
        assert_eq!(dark.background, crate::HexColor::rgb(10, 0, 0));
    }

    #[test]
    fn test_theme_names() {
        let config = AppConfig::default();
        assert_eq!(config.theme_names(), vec!["Default", "Dark", "Sepia"]);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.current_theme, config.current_theme);
        assert_eq!(parsed.placeholder_text, config.placeholder_text);
        assert_eq!(parsed.themes.len(), config.themes.len());
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        // Simulates loading a config file from an older version.
        let json = r#"{"current_theme": "Dark"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.auto_save_enabled);
        assert_eq!(parsed.auto_save_interval_secs, 30);
        assert_eq!(parsed.default_export_extension, "txt");
    }
}
