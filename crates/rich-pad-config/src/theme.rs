/// Theme definitions and built-in presets.
use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// A complete editor theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorTheme {
    pub name: String,
    pub dark_mode: bool,
    /// Window and panel background.
    pub background: HexColor,
    /// Editing area background.
    pub surface: HexColor,
    pub text: HexColor,
    pub border: HexColor,
    pub accent: HexColor,
}

/// Built-in light theme.
pub fn builtin_default() -> EditorTheme {
    EditorTheme {
        name: "Default".to_string(),
        dark_mode: false,
        background: HexColor::rgb(245, 245, 245),
        surface: HexColor::rgb(255, 255, 255),
        text: HexColor::rgb(0, 0, 0),
        border: HexColor::rgb(229, 229, 229),
        accent: HexColor::rgb(59, 130, 246),
    }
}

/// Built-in dark theme.
pub fn builtin_dark() -> EditorTheme {
    EditorTheme {
        name: "Dark".to_string(),
        dark_mode: true,
        background: HexColor::rgb(26, 26, 26),
        surface: HexColor::rgb(34, 34, 34),
        text: HexColor::rgb(255, 255, 255),
        border: HexColor::rgb(51, 51, 51),
        accent: HexColor::rgb(80, 160, 240),
    }
}

/// Built-in sepia reading theme.
pub fn builtin_sepia() -> EditorTheme {
    EditorTheme {
        name: "Sepia".to_string(),
        dark_mode: false,
        background: HexColor::rgb(244, 241, 234),
        surface: HexColor::rgb(250, 248, 242),
        text: HexColor::rgb(92, 75, 55),
        border: HexColor::rgb(212, 197, 169),
        accent: HexColor::rgb(160, 120, 60),
    }
}

/// All built-in themes, in presentation order.
pub fn builtin_themes() -> Vec<EditorTheme> {
    vec![builtin_default(), builtin_dark(), builtin_sepia()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let names: Vec<String> = builtin_themes().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Default", "Dark", "Sepia"]);
    }

    #[test]
    fn test_only_dark_is_dark_mode() {
        assert!(!builtin_default().dark_mode);
        assert!(builtin_dark().dark_mode);
        assert!(!builtin_sepia().dark_mode);
    }

    #[test]
    fn test_serde_round_trip() {
        let theme = builtin_sepia();
        let json = serde_json::to_string(&theme).unwrap();
        let parsed: EditorTheme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, theme);
    }
}
