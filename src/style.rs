//! Region styling: fill colour, hover opacity and link target
//!
//! Defaults match the command line defaults. A style can also be loaded from
//! a small TOML file:
//!
//! ```toml
//! fill_color = "#ff8800"
//! fill_opacity = 0.5
//! link_target = "_blank"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::Img2SvgError;

const DEFAULT_FILL_COLOR: &str = "#CCCCCC";
const DEFAULT_FILL_OPACITY: f64 = 0.3;
const DEFAULT_LINK_TARGET: &str = "new_window";

/// Appearance of the clickable regions
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Fill colour of each region rectangle
    pub fill_color: String,
    /// Fill opacity applied while the pointer hovers a region
    pub fill_opacity: f64,
    /// Browsing context the links open in
    pub link_target: String,
}

/// TOML structure for deserializing styles; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlStyle {
    fill_color: Option<String>,
    fill_opacity: Option<f64>,
    link_target: Option<String>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill_color: DEFAULT_FILL_COLOR.to_string(),
            fill_opacity: DEFAULT_FILL_OPACITY,
            link_target: DEFAULT_LINK_TARGET.to_string(),
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the region fill colour
    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = color.into();
        self
    }

    /// Set the hover fill opacity
    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity;
        self
    }

    /// Set the link target (e.g. `_blank`)
    pub fn with_link_target(mut self, target: impl Into<String>) -> Self {
        self.link_target = target.into();
        self
    }

    /// Load a style from a TOML file, starting from the defaults
    pub fn from_file(path: &Path) -> Result<Self, Img2SvgError> {
        let content = std::fs::read_to_string(path).map_err(|e| Img2SvgError::Style {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|message| Img2SvgError::Style {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse a style from TOML text
    pub fn from_toml(content: &str) -> Result<Self, String> {
        let parsed: TomlStyle = toml::from_str(content).map_err(|e| e.message().to_string())?;
        let mut style = Self::default();
        if let Some(color) = parsed.fill_color {
            style.fill_color = color;
        }
        if let Some(opacity) = parsed.fill_opacity {
            style.fill_opacity = opacity;
        }
        if let Some(target) = parsed.link_target {
            style.link_target = target;
        }
        style.check()?;
        Ok(style)
    }

    /// Reject values a renderer cannot use
    pub fn check(&self) -> Result<(), String> {
        if !self.fill_opacity.is_finite() || !(0.0..=1.0).contains(&self.fill_opacity) {
            return Err(format!(
                "fill_opacity must be within 0.0..=1.0, got {}",
                self.fill_opacity
            ));
        }
        if self.fill_color.trim().is_empty() {
            return Err("fill_color must not be empty".to_string());
        }
        Ok(())
    }
}
