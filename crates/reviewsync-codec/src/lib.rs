// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings codec: the single boundary between the canonical
//! [`WidgetSettings`] model and the compact short-key form persisted in
//! the 255-character `settings` column.
//!
//! Compression maps every key through a fixed dictionary, encodes
//! booleans as 0/1, and serializes without whitespace. If the result
//! still exceeds the ceiling, an essential-only fallback (`theme`,
//! `maxReviews`, `accentColor`) is written instead; if even that is too
//! large the save fails with [`ReviewSyncError::SettingsTooLarge`].
//!
//! Decompression never fails: unparseable input degrades to the default
//! settings, and 0/1 re-expansion applies only to the documented boolean
//! fields so numeric fields that happen to equal 0 or 1 are untouched.

use serde_json::Value;
use tracing::warn;

use reviewsync_core::{ReviewSyncError, WidgetSettings};

/// Hard ceiling on the serialized settings column.
pub const SETTINGS_MAX_LEN: usize = 255;

/// Fixed short-key dictionary covering every canonical settings field.
///
/// Keys absent from this table are shortened to their first three
/// characters on compression and passed through unchanged on
/// decompression.
const SHORT_KEYS: &[(&str, &str)] = &[
    ("theme", "t"),
    ("maxReviews", "mr"),
    ("minRating", "mnr"),
    ("showBusinessInfo", "sbi"),
    ("showDates", "sd"),
    ("accentColor", "ac"),
    ("borderStyle", "bs"),
    ("borderWidth", "bw"),
    ("paddingTop", "pt"),
    ("paddingRight", "pr"),
    ("paddingBottom", "pb"),
    ("paddingLeft", "pl"),
    ("fontFamily", "ff"),
    ("fontSize", "fs"),
    ("fontWeight", "fw"),
    ("lineHeight", "lh"),
    ("backgroundGradient", "bg"),
    ("gradientFrom", "gf"),
    ("gradientTo", "gt"),
    ("columns", "co"),
    ("aspectRatio", "ar"),
    ("alignment", "al"),
    ("animation", "an"),
];

/// Fields whose 0/1 storage encoding is re-expanded to booleans. An
/// explicit allow-list, not a universal int-to-bool coercion.
const BOOLEAN_FIELDS: &[&str] = &["showBusinessInfo", "showDates", "backgroundGradient"];

fn short_key(full: &str) -> String {
    SHORT_KEYS
        .iter()
        .find(|(long, _)| *long == full)
        .map(|(_, short)| (*short).to_string())
        .unwrap_or_else(|| full.chars().take(3).collect())
}

fn full_key(short: &str) -> String {
    SHORT_KEYS
        .iter()
        .find(|(_, s)| *s == short)
        .map(|(long, _)| (*long).to_string())
        .unwrap_or_else(|| short.to_string())
}

fn encode_value(value: Value) -> Value {
    match value {
        Value::Bool(b) => Value::from(if b { 1 } else { 0 }),
        other => other,
    }
}

/// Compress settings into the short-key storage form.
///
/// The returned string never exceeds [`SETTINGS_MAX_LEN`] characters.
pub fn compress(settings: &WidgetSettings) -> Result<String, ReviewSyncError> {
    let mut compressed = serde_json::Map::new();
    for (key, value) in settings.to_map() {
        compressed.insert(short_key(&key), encode_value(value));
    }

    // serde_json Maps serialize compactly with no whitespace.
    let result = Value::Object(compressed).to_string();
    if result.len() <= SETTINGS_MAX_LEN {
        return Ok(result);
    }

    warn!(
        len = result.len(),
        "compressed settings exceed the storage ceiling, falling back to essential fields"
    );
    let mut essential = serde_json::Map::new();
    essential.insert("t".to_string(), Value::from(settings.theme.to_string()));
    essential.insert("mr".to_string(), Value::from(settings.max_reviews));
    essential.insert(
        "ac".to_string(),
        Value::from(settings.accent_color.clone()),
    );
    let fallback = Value::Object(essential).to_string();
    if fallback.len() <= SETTINGS_MAX_LEN {
        Ok(fallback)
    } else {
        Err(ReviewSyncError::SettingsTooLarge {
            len: fallback.len(),
            max: SETTINGS_MAX_LEN,
        })
    }
}

/// Decompress a stored settings string into the canonical model.
///
/// Never fails: parse errors degrade to the defaults (logged, not
/// thrown), and missing fields take their documented defaults.
pub fn decompress(compressed: &str) -> WidgetSettings {
    let parsed: Value = match serde_json::from_str(compressed) {
        Ok(v) => v,
        Err(err) => {
            warn!(error = %err, "stored settings failed to parse, using defaults");
            return WidgetSettings::default();
        }
    };
    let Value::Object(map) = parsed else {
        warn!("stored settings are not a JSON object, using defaults");
        return WidgetSettings::default();
    };

    let mut expanded = serde_json::Map::new();
    for (key, value) in map {
        let full = full_key(&key);
        let value = match (&value, BOOLEAN_FIELDS.contains(&full.as_str())) {
            (Value::Number(n), true) if n.as_i64() == Some(0) => Value::Bool(false),
            (Value::Number(n), true) if n.as_i64() == Some(1) => Value::Bool(true),
            _ => value,
        };
        expanded.insert(full, value);
    }

    WidgetSettings::from_partial(Value::Object(expanded))
}
