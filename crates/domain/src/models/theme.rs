//! Operator theme palettes.

use serde::Serialize;

/// Color palette served to a branded client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub operator: String,
    pub primary_color: String,
    pub accent_color: String,
    pub error_color: String,
    pub background_color: String,
    pub text_color: String,
    pub border_color: String,
    pub shadow_color: String,
}

impl Theme {
    /// Light palette used by most operators.
    pub fn default_palette(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            primary_color: "#2C5282".to_string(),
            accent_color: "#50C878".to_string(),
            error_color: "#FF6B6B".to_string(),
            background_color: "#F5F5F5".to_string(),
            text_color: "#1A202C".to_string(),
            border_color: "#E2E8F0".to_string(),
            shadow_color: "#000000".to_string(),
        }
    }

    /// Dark palette.
    pub fn dark_palette(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            primary_color: "#4299E1".to_string(),
            accent_color: "#68D391".to_string(),
            error_color: "#FC8181".to_string(),
            background_color: "#1A202C".to_string(),
            text_color: "#F7FAFC".to_string(),
            border_color: "#4A5568".to_string(),
            shadow_color: "#000000".to_string(),
        }
    }

    /// Resolves the palette for a mobile operator. Operator matching is
    /// case-insensitive; unknown operators get the default palette with
    /// their name echoed back unchanged.
    pub fn for_operator(operator: &str) -> Self {
        match operator.to_lowercase().as_str() {
            "play" => Self::default_palette("Play"),
            "plus" => Self::default_palette("Plus"),
            "orange" => Self::dark_palette("Orange"),
            "t-mobile" => Self::default_palette("T-Mobile"),
            _ => Self::default_palette(operator),
        }
    }
}
