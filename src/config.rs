//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The content of the
//! page is fixed in [`crate::content`]; configuration only covers presentation
//! and timing knobs.
//!
//! ## Config File Location
//!
//! Place `config.toml` in the site directory next to `assets/`:
//!
//! ```text
//! site/
//! ├── config.toml              # Overrides stock defaults
//! └── assets/
//!     └── hero-children.png    # Copied to dist/assets/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Little Junior DPS | Pre School & Day Care"
//! hero_image = "assets/hero-children.png"
//! map_embed_url = "https://www.google.com/maps/embed?..."
//!
//! [behavior]
//! scroll_threshold = 20     # px of scroll before the navbar turns solid
//! reveal_margin = 100       # px a section must be inside the viewport to reveal
//! submit_delay_ms = 1500    # simulated form submission latency
//! toast_duration_ms = 4000  # how long notifications stay on screen
//!
//! [colors]
//! primary = "#f97316"
//! secondary = "#0ea5e9"
//! accent = "#22c55e"
//! background = "#fffbf5"
//! text = "#1f2937"
//! muted = "#6b7280"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document-level settings.
    pub site: SiteSection,
    /// Interaction timings and thresholds.
    pub behavior: BehaviorConfig,
    /// Brand palette.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("site.title must not be empty".into()));
        }
        if !is_asset_path(&self.site.hero_image) {
            return Err(ConfigError::Validation(format!(
                "site.hero_image must be a file under assets/, got {:?}",
                self.site.hero_image
            )));
        }
        if !self.site.map_embed_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "site.map_embed_url must be an https:// URL".into(),
            ));
        }
        if self.behavior.submit_delay_ms > 60_000 {
            return Err(ConfigError::Validation(
                "behavior.submit_delay_ms must be at most 60000".into(),
            ));
        }
        if self.behavior.toast_duration_ms == 0 {
            return Err(ConfigError::Validation(
                "behavior.toast_duration_ms must be non-zero".into(),
            ));
        }
        for (name, value) in self.colors.entries() {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "colors.{name} must be a hex color like #a1b2c3, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Only `assets/` is copied into the output, so the hero image must live there.
fn is_asset_path(path: &str) -> bool {
    let mut components = Path::new(path).components();
    components.next() == Some(Component::Normal(OsStr::new("assets")))
        && components.next().is_some()
        && components.all(|c| matches!(c, Component::Normal(_)))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// `<title>` of the page.
    pub title: String,
    /// Hero image path, relative to the site directory and under `assets/`.
    pub hero_image: String,
    /// Embedded map shown beside the contact form.
    pub map_embed_url: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Little Junior DPS | Pre School & Day Care".to_string(),
            hero_image: "assets/hero-children.png".to_string(),
            map_embed_url: DEFAULT_MAP_EMBED_URL.to_string(),
        }
    }
}

const DEFAULT_MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3502.1234567890123!2d77.31234567890123!3d28.57890123456789!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMjjCsDM0JzQzLjIiTiA3N8KwMTgnNDQuNCJF!5e0!3m2!1sen!2sin!4v1234567890123!5m2!1sen!2sin";

/// Interaction timings and thresholds shared by the Rust interaction model
/// and the generated page script.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Vertical scroll offset (px) the navbar must exceed to switch style.
    pub scroll_threshold: u32,
    /// How far (px) a section must be inside the viewport before it reveals.
    pub reveal_margin: u32,
    /// Latency of the simulated lead submission.
    pub submit_delay_ms: u64,
    /// Lifetime of a toast notification.
    pub toast_duration_ms: u64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 20,
            reveal_margin: 100,
            submit_delay_ms: 1500,
            toast_duration_ms: 4000,
        }
    }
}

impl BehaviorConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Brand palette, emitted as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    /// Secondary copy, captions, placeholders.
    pub muted: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#f97316".to_string(),
            secondary: "#0ea5e9".to_string(),
            accent: "#22c55e".to_string(),
            background: "#fffbf5".to_string(),
            text: "#1f2937".to_string(),
            muted: "#6b7280".to_string(),
        }
    }
}

impl ColorConfig {
    fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("text", &self.text),
            ("muted", &self.muted),
        ]
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given site directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(root)?;
    if overlay.is_some() {
        log::debug!("loaded {}", root.join("config.toml").display());
    }
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Little Junior DPS site configuration
# =====================================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Document
# ---------------------------------------------------------------------------
[site]
# Browser tab title.
title = "Little Junior DPS | Pre School & Day Care"

# Hero image, a file under assets/. The whole assets/ directory is
# copied next to index.html.
hero_image = "assets/hero-children.png"

# Map shown in the contact section (must be https).
map_embed_url = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3502.1234567890123!2d77.31234567890123!3d28.57890123456789!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMjjCsDM0JzQzLjIiTiA3N8KwMTgnNDQuNCJF!5e0!3m2!1sen!2sin!4v1234567890123!5m2!1sen!2sin"

# ---------------------------------------------------------------------------
# Behavior
# ---------------------------------------------------------------------------
[behavior]
# Pixels of vertical scroll before the navbar switches to its solid style.
scroll_threshold = 20

# Pixels a section must be inside the viewport before its entrance animation runs.
reveal_margin = 100

# Simulated latency of the admission and contact form submissions (ms, max 60000).
submit_delay_ms = 1500

# How long success and failure notifications stay visible (ms).
toast_duration_ms = 4000

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
primary = "#f97316"
secondary = "#0ea5e9"
accent = "#22c55e"
background = "#fffbf5"
text = "#1f2937"
muted = "#6b7280"    # captions, placeholders, secondary copy
"##
}

/// Generate CSS custom properties from the palette.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-secondary: {secondary};
    --color-accent: {accent};
    --color-bg: {background};
    --color-text: {text};
    --color-muted: {muted};
}}"#,
        primary = colors.primary,
        secondary = colors.secondary,
        accent = colors.accent,
        background = colors.background,
        text = colors.text,
        muted = colors.muted,
    )
}
