//! Branding configuration for the hosting presentation layer.
//!
//! Pure data: an app name, a logo asset path, and named color tokens. The
//! value is constructed once at startup via `Theme::default()` and passed by
//! reference wherever it is consumed; nothing in this crate interprets the
//! token values. Serialized field names stay camelCase to match what the
//! presentation layer expects.

use serde::{Deserialize, Serialize};

/// Branding and color configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Display name of the hosting application.
    pub app_name: String,

    /// Path to the logo asset, relative to the application bundle.
    pub logo_path: String,

    /// Color tokens consumed by the presentation layer.
    pub colors: ColorPalette,
}

/// Named color tokens. Values are CSS color strings (hex or rgba).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    /// Brand blue.
    pub primary: String,
    /// Lighter blue for hover states.
    pub primary_light: String,
    /// Darker blue for accents.
    pub accent: String,
    pub success: String,
    pub success_dark: String,
    pub danger: String,
    /// Light neutral background.
    pub dark_bg: String,
    /// White panel background.
    pub panel_bg: String,
    /// Gray body text.
    pub muted_text: String,
    // Inspector toggle specific tokens.
    pub gradient_start: String,
    pub shadow_color: String,
    pub shadow_color_hover: String,
    pub shadow_color_active: String,
    pub border_white: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            app_name: "AI Code Generator".to_string(),
            logo_path: "assets/images/logo-small.png".to_string(),
            colors: ColorPalette::default(),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        ColorPalette {
            primary: "#0057B8".to_string(),
            primary_light: "#2A6FC3".to_string(),
            accent: "#003E7E".to_string(),
            success: "#1E8E3E".to_string(),
            success_dark: "#167C2E".to_string(),
            danger: "#DC3545".to_string(),
            dark_bg: "#fffefeff".to_string(),
            panel_bg: "#ffffffff".to_string(),
            muted_text: "#6B7280".to_string(),
            gradient_start: "#0077D6".to_string(),
            shadow_color: "rgba(3,37,76,0.06)".to_string(),
            shadow_color_hover: "rgba(3,37,76,0.10)".to_string(),
            shadow_color_active: "rgba(2,55,120,0.12)".to_string(),
            border_white: "rgba(11,37,64,0.06)".to_string(),
        }
    }
}
