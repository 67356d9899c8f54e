//! Share configuration schema, defaults, and persistence.
//!
//! The host persists one opaque blob per site. This module defines the shape
//! that blob normalizes into ([`ShareConfig`]) and the file-backed storage used
//! by the CLI. The blob itself is never trusted: every read goes through
//! [`crate::normalize::normalize`] and every save through
//! [`crate::normalize::sanitize`].
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! icon_size = 32            # Icon edge in pixels (10-300)
//! placement = "bottom"      # top | bottom | both
//! order = ["pinterest", "facebook", "x", "pocket", "email", "native"]
//! facebook_app_id = ""      # Digits only; empty = basic sharer
//! x_handle = ""             # Attribution handle, without "@"
//!
//! [buttons]
//! pinterest = false
//! facebook = true
//! x = true
//! pocket = false
//! email = true
//! native = true
//! ```
//!
//! Both TOML and JSON files are accepted; the format follows the extension.
//! Unlike a site config, unknown keys are dropped rather than rejected:
//! corrupted share settings must never stop a page from rendering.

use crate::channel::{self, Channel};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub const MIN_ICON_SIZE: u32 = 10;
pub const MAX_ICON_SIZE: u32 = 300;
pub const DEFAULT_ICON_SIZE: u32 = 32;

/// Where the share bar goes relative to the content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Top,
    #[default]
    Bottom,
    Both,
}

impl Placement {
    /// Options in the order a settings form lists them.
    pub const OPTIONS: [Placement; 3] = [Placement::Bottom, Placement::Top, Placement::Both];

    /// Exact match on one of the three literals.
    pub fn parse(value: &str) -> Option<Placement> {
        match value {
            "top" => Some(Placement::Top),
            "bottom" => Some(Placement::Bottom),
            "both" => Some(Placement::Both),
            _ => None,
        }
    }

    /// Like [`Placement::parse`], but anything unrecognized becomes `Bottom`.
    pub fn parse_or_default(value: &str) -> Placement {
        Placement::parse(value).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
            Placement::Both => "both",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
            Placement::Both => "top & bottom",
        }
    }

    pub fn shows_top(self) -> bool {
        matches!(self, Placement::Top | Placement::Both)
    }

    pub fn shows_bottom(self) -> bool {
        matches!(self, Placement::Bottom | Placement::Both)
    }
}

/// On/off switch per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buttons {
    pub pinterest: bool,
    pub facebook: bool,
    pub x: bool,
    pub pocket: bool,
    pub email: bool,
    pub native: bool,
}

impl Buttons {
    /// Every channel switched off.
    pub fn none() -> Self {
        Self {
            pinterest: false,
            facebook: false,
            x: false,
            pocket: false,
            email: false,
            native: false,
        }
    }

    pub fn is_enabled(&self, channel: Channel) -> bool {
        match channel {
            Channel::Pinterest => self.pinterest,
            Channel::Facebook => self.facebook,
            Channel::X => self.x,
            Channel::Pocket => self.pocket,
            Channel::Email => self.email,
            Channel::Native => self.native,
        }
    }

    pub fn set(&mut self, channel: Channel, enabled: bool) {
        let slot = match channel {
            Channel::Pinterest => &mut self.pinterest,
            Channel::Facebook => &mut self.facebook,
            Channel::X => &mut self.x,
            Channel::Pocket => &mut self.pocket,
            Channel::Email => &mut self.email,
            Channel::Native => &mut self.native,
        };
        *slot = enabled;
    }

    pub fn enabled_count(&self) -> usize {
        Channel::ALL.iter().filter(|c| self.is_enabled(**c)).count()
    }
}

impl Default for Buttons {
    fn default() -> Self {
        Self {
            pinterest: false,
            facebook: true,
            x: true,
            pocket: false,
            email: true,
            native: true,
        }
    }
}

/// A fully validated share configuration.
///
/// Values of this type only come out of the normalizer (or `Default`), so every
/// field already satisfies its invariant: `icon_size` is within
/// [`MIN_ICON_SIZE`]..=[`MAX_ICON_SIZE`], `facebook_app_id` holds only digits,
/// `x_handle` only `[a-z0-9_]`.
///
/// `order` may still name unknown keys or repeat keys; the resolver in
/// [`crate::order`] skips those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareConfig {
    pub icon_size: u32,
    pub placement: Placement,
    /// Mirrors `placement`; kept for settings UIs that read flags.
    pub display_top: bool,
    /// Mirrors `placement`; kept for settings UIs that read flags.
    pub display_bottom: bool,
    pub order: Vec<String>,
    pub facebook_app_id: String,
    pub x_handle: String,
    // Last so the TOML writer emits it as a trailing table.
    pub buttons: Buttons,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            icon_size: DEFAULT_ICON_SIZE,
            placement: Placement::Bottom,
            display_top: false,
            display_bottom: true,
            order: channel::default_order(),
            facebook_app_id: String::new(),
            x_handle: String::new(),
            buttons: Buttons::default(),
        }
    }
}

impl ShareConfig {
    /// The client-side native share script is only needed when that button is on.
    pub fn needs_native_script(&self) -> bool {
        self.buttons.native
    }

    /// `order` joined the way the settings form's hidden input carries it.
    pub fn order_field_value(&self) -> String {
        self.order.join(",")
    }

    /// Serialize to the untyped form the normalizer consumes.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

// =============================================================================
// Storage
// =============================================================================

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Read a raw, not yet normalized config blob.
///
/// Returns `Ok(None)` if the file does not exist. TOML documents are converted
/// to the same untyped representation as JSON ones.
pub fn load_raw_config(path: &Path) -> Result<Option<serde_json::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value = if is_json(path) {
        serde_json::from_str(&content)?
    } else {
        let table: toml::Value = toml::from_str(&content)?;
        serde_json::to_value(table)?
    };
    Ok(Some(value))
}

/// Load and normalize a config file. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<ShareConfig, ConfigError> {
    let raw = load_raw_config(path)?;
    Ok(crate::normalize::normalize(raw.as_ref()))
}

/// Persist a sanitized config, as TOML or JSON by extension.
pub fn save_config(path: &Path, config: &ShareConfig) -> Result<(), ConfigError> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)?
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::info!("Wrote share config to {}", path.display());
    Ok(())
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Share Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Invalid values never cause an error: each one falls back to its default
# so a broken config can't break page rendering.

# Edge length of each share icon, in pixels. Clamped to 10-300.
icon_size = 32

# Where the share bar is inserted: "top", "bottom" or "both".
placement = "bottom"

# Display order. Unknown keys are ignored; channels left out are appended
# in the order shown here.
order = ["pinterest", "facebook", "x", "pocket", "email", "native"]

# Facebook App ID (digits only). With an ID, the share dialog is used;
# without one, links fall back to the basic sharer.
facebook_app_id = ""

# X handle credited with "via @handle". Leading "@" is optional.
x_handle = ""

# ---------------------------------------------------------------------------
# Enabled channels
# ---------------------------------------------------------------------------
[buttons]
pinterest = false
facebook = true
x = true
pocket = false
email = true
native = true
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = ShareConfig::default();
        assert_eq!(config.icon_size, 32);
        assert_eq!(config.placement, Placement::Bottom);
        assert!(!config.display_top);
        assert!(config.display_bottom);
        assert_eq!(config.facebook_app_id, "");
        assert_eq!(config.x_handle, "");
        assert_eq!(config.order, channel::default_order());
    }

    #[test]
    fn default_buttons() {
        let buttons = Buttons::default();
        assert!(!buttons.pinterest);
        assert!(buttons.facebook);
        assert!(buttons.x);
        assert!(!buttons.pocket);
        assert!(buttons.email);
        assert!(buttons.native);
        assert_eq!(buttons.enabled_count(), 4);
    }

    #[test]
    fn buttons_set_and_query() {
        let mut buttons = Buttons::none();
        assert_eq!(buttons.enabled_count(), 0);
        buttons.set(Channel::Pocket, true);
        assert!(buttons.is_enabled(Channel::Pocket));
        assert_eq!(buttons.enabled_count(), 1);
    }

    #[test]
    fn placement_parse_exact_literals_only() {
        assert_eq!(Placement::parse("top"), Some(Placement::Top));
        assert_eq!(Placement::parse("bottom"), Some(Placement::Bottom));
        assert_eq!(Placement::parse("both"), Some(Placement::Both));
        assert_eq!(Placement::parse("TOP"), None);
        assert_eq!(Placement::parse(" top"), None);
        assert_eq!(Placement::parse_or_default("sideways"), Placement::Bottom);
    }

    #[test]
    fn placement_display_flags() {
        assert!(Placement::Top.shows_top() && !Placement::Top.shows_bottom());
        assert!(!Placement::Bottom.shows_top() && Placement::Bottom.shows_bottom());
        assert!(Placement::Both.shows_top() && Placement::Both.shows_bottom());
    }

    #[test]
    fn order_field_value_is_comma_separated() {
        let config = ShareConfig::default();
        assert_eq!(
            config.order_field_value(),
            "pinterest,facebook,x,pocket,email,native"
        );
    }

    #[test]
    fn native_script_follows_native_button() {
        let mut config = ShareConfig::default();
        assert!(config.needs_native_script());
        config.buttons.native = false;
        assert!(!config.needs_native_script());
    }

    #[test]
    fn to_value_uses_snake_case_fields() {
        let value = ShareConfig::default().to_value();
        assert_eq!(value["icon_size"], 32);
        assert_eq!(value["placement"], "bottom");
        assert_eq!(value["buttons"]["facebook"], true);
    }

    // =========================================================================
    // Storage
    // =========================================================================

    #[test]
    fn load_raw_config_returns_none_when_missing() {
        let tmp = TempDir::new().unwrap();
        let result = load_raw_config(&tmp.path().join("share.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn load_raw_config_reads_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("share.toml");
        fs::write(&path, "icon_size = 48\n[buttons]\npocket = true\n").unwrap();

        let raw = load_raw_config(&path).unwrap().unwrap();
        assert_eq!(raw["icon_size"], 48);
        assert_eq!(raw["buttons"]["pocket"], true);
    }

    #[test]
    fn load_raw_config_reads_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("share.json");
        fs::write(&path, r#"{"placement": "both"}"#).unwrap();

        let raw = load_raw_config(&path).unwrap().unwrap();
        assert_eq!(raw["placement"], "both");
    }

    #[test]
    fn load_raw_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("share.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();

        assert!(matches!(load_raw_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_defaults_when_missing() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config, ShareConfig::default());
    }

    #[test]
    fn load_config_normalizes_out_of_range_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("share.toml");
        fs::write(&path, "icon_size = 9000\nplacement = \"left\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.icon_size, MAX_ICON_SIZE);
        assert_eq!(config.placement, Placement::Bottom);
    }

    #[test]
    fn save_then_load_toml_preserves_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/share.toml");
        let mut config = ShareConfig::default();
        config.icon_size = 64;
        config.placement = Placement::Both;
        config.display_top = true;
        config.x_handle = "mysite".to_string();
        config.buttons.pocket = true;

        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn save_then_load_json_preserves_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("share.json");
        let mut config = ShareConfig::default();
        config.facebook_app_id = "555".to_string();
        config.order = vec!["email".to_string(), "x".to_string()];

        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let _: toml::Value =
            toml::from_str(stock_config_toml()).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_normalizes_to_defaults() {
        let table: toml::Value = toml::from_str(stock_config_toml()).unwrap();
        let raw = serde_json::to_value(table).unwrap();
        assert_eq!(
            crate::normalize::normalize(Some(&raw)),
            ShareConfig::default()
        );
    }
}
