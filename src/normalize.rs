//! Config normalization: untyped blob in, valid [`ShareConfig`] out.
//!
//! There are two entry points, one per direction:
//!
//! - [`normalize`] is the **read path**. It runs on every render against
//!   whatever the host has stored. Missing fields take their defaults and
//!   malformed ones fall back field by field.
//! - [`sanitize`] is the **write path**. It runs once per settings save on
//!   raw form input. It follows HTML form semantics: a missing checkbox means
//!   "off", and the display flags are recomputed from `placement`.
//!
//! Neither function can fail. Every degradation is logged at `debug` level
//! and nothing is surfaced to the caller.
//!
//! Field names are snake_case (`icon_size`); camelCase aliases (`iconSize`)
//! are accepted on input.

use crate::channel::{self, Channel};
use crate::config::{
    Buttons, DEFAULT_ICON_SIZE, MAX_ICON_SIZE, MIN_ICON_SIZE, Placement, ShareConfig,
};
use serde_json::{Map, Value};

const ICON_SIZE: (&str, &str) = ("icon_size", "iconSize");
const PLACEMENT: (&str, &str) = ("placement", "placement");
const DISPLAY_TOP: (&str, &str) = ("display_top", "displayTop");
const DISPLAY_BOTTOM: (&str, &str) = ("display_bottom", "displayBottom");
const BUTTONS: (&str, &str) = ("buttons", "buttons");
const ORDER: (&str, &str) = ("order", "order");
const FACEBOOK_APP_ID: (&str, &str) = ("facebook_app_id", "facebookAppId");
const X_HANDLE: (&str, &str) = ("x_handle", "xHandle");

/// Normalize a persisted blob. `None` (nothing stored) yields the defaults.
pub fn normalize(raw: Option<&Value>) -> ShareConfig {
    let Some(map) = raw.and_then(Value::as_object) else {
        if raw.is_some_and(|v| !v.is_null()) {
            tracing::debug!("stored share config is not a mapping; using defaults");
        }
        return ShareConfig::default();
    };
    let defaults = ShareConfig::default();

    let icon_size = field(map, ICON_SIZE)
        .map(clamp_icon_size)
        .unwrap_or(defaults.icon_size);

    let placement = match field(map, PLACEMENT) {
        None => defaults.placement,
        Some(value) => value.as_str().and_then(Placement::parse).unwrap_or_else(|| {
            tracing::debug!(?value, "invalid placement; using bottom");
            Placement::Bottom
        }),
    };

    let display_top = field(map, DISPLAY_TOP)
        .map(is_truthy)
        .unwrap_or(defaults.display_top);
    let display_bottom = field(map, DISPLAY_BOTTOM)
        .map(is_truthy)
        .unwrap_or(defaults.display_bottom);

    let buttons = match field(map, BUTTONS).and_then(Value::as_object) {
        Some(entries) if !entries.is_empty() => buttons_from(entries),
        _ => defaults.buttons,
    };

    ShareConfig {
        icon_size,
        placement,
        display_top,
        display_bottom,
        order: coerce_order(field(map, ORDER)),
        facebook_app_id: field(map, FACEBOOK_APP_ID)
            .map(|v| sanitize_facebook_app_id(&to_text(v)))
            .unwrap_or_default(),
        x_handle: field(map, X_HANDLE)
            .map(|v| sanitize_x_handle(&to_text(v)))
            .unwrap_or_default(),
        buttons,
    }
}

/// Sanitize a settings submission into the value that gets persisted.
///
/// A non-mapping input yields the full defaults. Otherwise absent checkboxes
/// mean disabled, and `display_top`/`display_bottom` are derived from the
/// resolved placement regardless of what was submitted.
pub fn sanitize(input: &Value) -> ShareConfig {
    let Some(map) = input.as_object() else {
        tracing::debug!("settings submission is not a mapping; using defaults");
        return ShareConfig::default();
    };

    let icon_size = field(map, ICON_SIZE)
        .map(clamp_icon_size)
        .unwrap_or(DEFAULT_ICON_SIZE);

    let placement = match field(map, PLACEMENT) {
        None => Placement::default(),
        Some(value) => {
            let text = to_text(value);
            Placement::parse(text.trim()).unwrap_or_else(|| {
                tracing::debug!(placement = %text, "invalid placement; using bottom");
                Placement::Bottom
            })
        }
    };

    let buttons = field(map, BUTTONS)
        .and_then(Value::as_object)
        .map(buttons_from)
        .unwrap_or_else(Buttons::none);

    ShareConfig {
        icon_size,
        placement,
        display_top: placement.shows_top(),
        display_bottom: placement.shows_bottom(),
        order: coerce_order(field(map, ORDER)),
        facebook_app_id: field(map, FACEBOOK_APP_ID)
            .map(|v| sanitize_facebook_app_id(&to_text(v)))
            .unwrap_or_default(),
        x_handle: field(map, X_HANDLE)
            .map(|v| sanitize_x_handle(&to_text(v)))
            .unwrap_or_default(),
        buttons,
    }
}

// =============================================================================
// Field validators
// =============================================================================

/// Coerce to a non-negative integer, then clamp to the icon size range.
///
/// Integers are used as-is, floats are truncated, strings contribute their
/// leading digits (`"42px"` is 42) and anything else counts as 0. Negative
/// values count as 0, so every input below the minimum clamps to it.
pub fn clamp_icon_size(value: &Value) -> u32 {
    let raw = coerce_non_negative(value);
    let clamped = raw.clamp(u64::from(MIN_ICON_SIZE), u64::from(MAX_ICON_SIZE));
    if clamped != raw {
        tracing::debug!(raw, clamped, "icon_size out of range");
    }
    // Clamped to MAX_ICON_SIZE, always fits.
    u32::try_from(clamped).unwrap_or(MAX_ICON_SIZE)
}

/// Keep only ASCII digits.
pub fn sanitize_facebook_app_id(app_id: &str) -> String {
    app_id.chars().filter(char::is_ascii_digit).collect()
}

/// Drop one leading `@`, keep `[A-Za-z0-9_]`, lowercase.
pub fn sanitize_x_handle(handle: &str) -> String {
    let handle = handle.strip_prefix('@').unwrap_or(handle);
    handle
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn buttons_from(entries: &Map<String, Value>) -> Buttons {
    let mut buttons = Buttons::none();
    for channel in Channel::ALL {
        let enabled = entries.get(channel.key()).is_some_and(is_truthy);
        buttons.set(channel, enabled);
    }
    for key in entries.keys().filter(|k| Channel::from_key(k).is_none()) {
        tracing::debug!(key = %key, "dropping unknown button");
    }
    buttons
}

/// A sequence of strings, or the comma-separated form a settings form posts.
/// Anything else falls back to registry order. Unknown keys survive here and
/// are skipped at resolve time.
fn coerce_order(value: Option<&Value>) -> Vec<String> {
    match value {
        None => channel::default_order(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .unwrap_or_else(|| {
                tracing::debug!("order contains non-string entries; using registry order");
                channel::default_order()
            }),
        Some(Value::String(csv)) => csv
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .collect(),
        Some(other) => {
            tracing::debug!(value = ?other, "order is not a list; using registry order");
            channel::default_order()
        }
    }
}

// =============================================================================
// Untyped value helpers
// =============================================================================

/// Look up a field under its snake_case name, then its camelCase alias.
/// JSON `null` counts as absent.
fn field<'a>(map: &'a Map<String, Value>, (snake, camel): (&str, &str)) -> Option<&'a Value> {
    map.get(snake)
        .or_else(|| map.get(camel))
        .filter(|value| !value.is_null())
}

/// Loose truthiness, matching what an HTML form or hand-edited file may carry.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

/// Scalar to string; compound values become empty.
fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "1".to_string(),
        _ => String::new(),
    }
}

fn coerce_non_negative(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => leading_integer(s.trim()),
        Value::Bool(b) => u64::from(*b),
        _ => 0,
    }
}

/// `"42px"` is 42, `"-5"` is 0, `"abc"` is 0. Overlong digit runs saturate.
fn leading_integer(s: &str) -> u64 {
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}
