// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The canonical widget configuration model.
//!
//! Every field has a documented default, so a partial settings object
//! merged over defaults always yields a complete, renderable
//! configuration. Unknown keys pass through unchanged in the flattened
//! `extra` map for forward compatibility with newer builder versions.

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};
use tracing::warn;

/// Font families the customizer offers. Anything outside this list is
/// normalized back to the default.
pub const FONT_FAMILIES: &[&str] = &[
    "Inter",
    "Arial",
    "Helvetica",
    "Georgia",
    "Times New Roman",
    "Roboto",
    "Open Sans",
    "system-ui",
];

/// Implements lossy string deserialization for a unit enum: unrecognized
/// values fall back to the enum's default variant instead of failing the
/// whole settings parse. Stored widgets written by a newer builder must
/// still render.
macro_rules! lossy_string_enum {
    ($name:ident) => {
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(s.parse().unwrap_or_default())
            }
        }
    };
}

/// Layout variant governing how reviews are arranged.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Grouped block with a business header; grid sub-layout when `columns > 1`.
    #[default]
    Card,
    /// Compact rows.
    List,
    /// Centered, quote-style cells with truncated bodies.
    Minimal,
    /// Uniform cells sized by `columns`.
    Grid,
    /// Horizontally scrollable fixed-width cells.
    Carousel,
}

lossy_string_enum!(Theme);

/// Border line style for the widget container.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BorderStyle {
    None,
    #[default]
    Solid,
    Dashed,
    Dotted,
}

lossy_string_enum!(BorderStyle);

/// Fixed width:height ratio applied to the container.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AspectRatio {
    /// Unconstrained.
    #[default]
    Auto,
    /// 1:1
    Square,
    /// 16:9
    Wide,
    /// 3:4
    Tall,
}

lossy_string_enum!(AspectRatio);

impl AspectRatio {
    /// The width:height ratio, or `None` for unconstrained.
    pub fn ratio(self) -> Option<(u8, u8)> {
        match self {
            AspectRatio::Auto => None,
            AspectRatio::Square => Some((1, 1)),
            AspectRatio::Wide => Some((16, 9)),
            AspectRatio::Tall => Some((3, 4)),
        }
    }
}

/// Text alignment inside the container.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

lossy_string_enum!(Alignment);

/// Hover/entrance animation intensity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Animation {
    None,
    #[default]
    Subtle,
    Smooth,
    Dynamic,
}

lossy_string_enum!(Animation);

/// The complete widget configuration.
///
/// Serde names match the wire/embed JSON shape (camelCase). Missing keys
/// take the documented defaults; unknown keys land in `extra` and are
/// re-emitted on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSettings {
    #[serde(default)]
    pub theme: Theme,

    /// Upper bound on reviews shown, after rating filtering.
    #[serde(default = "default_max_reviews")]
    pub max_reviews: u32,

    /// Inclusive lower filter bound, 1-5.
    #[serde(default = "default_min_rating")]
    pub min_rating: u8,

    #[serde(default = "default_true")]
    pub show_business_info: bool,

    #[serde(default = "default_true")]
    pub show_dates: bool,

    /// Hex color string.
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    #[serde(default)]
    pub border_style: BorderStyle,

    /// Border width in px.
    #[serde(default = "default_border_width")]
    pub border_width: u32,

    #[serde(default = "default_padding")]
    pub padding_top: u32,
    #[serde(default = "default_padding")]
    pub padding_right: u32,
    #[serde(default = "default_padding")]
    pub padding_bottom: u32,
    #[serde(default = "default_padding")]
    pub padding_left: u32,

    /// Must be one of [`FONT_FAMILIES`]; normalized otherwise.
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size in px.
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// 100-900 in steps of 100.
    #[serde(default = "default_font_weight")]
    pub font_weight: u16,

    #[serde(default = "default_line_height")]
    pub line_height: f64,

    #[serde(default)]
    pub background_gradient: bool,

    /// Gradient start color; only applied when `background_gradient` is set.
    #[serde(default = "default_gradient_from")]
    pub gradient_from: String,

    /// Gradient end color; only applied when `background_gradient` is set.
    #[serde(default = "default_gradient_to")]
    pub gradient_to: String,

    /// Column count for grid sub-layouts, 1-4.
    #[serde(default = "default_columns")]
    pub columns: u8,

    #[serde(default)]
    pub aspect_ratio: AspectRatio,

    #[serde(default)]
    pub alignment: Alignment,

    #[serde(default)]
    pub animation: Animation,

    /// Unknown keys, passed through unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_max_reviews() -> u32 {
    3
}

fn default_min_rating() -> u8 {
    1
}

fn default_true() -> bool {
    true
}

fn default_accent_color() -> String {
    "#1a73e8".to_string()
}

fn default_border_width() -> u32 {
    1
}

fn default_padding() -> u32 {
    16
}

fn default_font_family() -> String {
    "Inter".to_string()
}

fn default_font_size() -> u32 {
    14
}

fn default_font_weight() -> u16 {
    400
}

fn default_line_height() -> f64 {
    1.5
}

fn default_gradient_from() -> String {
    "#ffffff".to_string()
}

fn default_gradient_to() -> String {
    "#f8fafc".to_string()
}

fn default_columns() -> u8 {
    1
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            max_reviews: default_max_reviews(),
            min_rating: default_min_rating(),
            show_business_info: default_true(),
            show_dates: default_true(),
            accent_color: default_accent_color(),
            border_style: BorderStyle::default(),
            border_width: default_border_width(),
            padding_top: default_padding(),
            padding_right: default_padding(),
            padding_bottom: default_padding(),
            padding_left: default_padding(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_weight: default_font_weight(),
            line_height: default_line_height(),
            background_gradient: false,
            gradient_from: default_gradient_from(),
            gradient_to: default_gradient_to(),
            columns: default_columns(),
            aspect_ratio: AspectRatio::default(),
            alignment: Alignment::default(),
            animation: Animation::default(),
            extra: serde_json::Map::new(),
        }
    }
}

impl WidgetSettings {
    /// Merge a partial settings object over the defaults.
    ///
    /// Missing keys take their documented defaults; unknown keys pass
    /// through into `extra`. Input that cannot be decoded at all degrades
    /// to the full defaults rather than failing -- stored settings must
    /// always reconstruct into something renderable.
    pub fn from_partial(value: serde_json::Value) -> Self {
        let mut settings: WidgetSettings =
            serde_json::from_value(value).unwrap_or_else(|err| {
                warn!(error = %err, "undecodable settings object, using defaults");
                WidgetSettings::default()
            });
        settings.normalize();
        settings
    }

    /// Clamp numeric fields to their documented domains and pin the font
    /// family to the allow-list. Idempotent.
    pub fn normalize(&mut self) {
        self.max_reviews = self.max_reviews.max(1);
        self.min_rating = self.min_rating.clamp(1, 5);
        self.columns = self.columns.clamp(1, 4);
        self.font_size = self.font_size.max(1);
        // Round to the nearest weight step before clamping to 100-900.
        self.font_weight = (self.font_weight.saturating_add(50) / 100 * 100).clamp(100, 900);
        if !self.line_height.is_finite() || self.line_height <= 0.0 {
            self.line_height = default_line_height();
        }
        if !FONT_FAMILIES.contains(&self.font_family.as_str()) {
            self.font_family = default_font_family();
        }
    }

    /// The canonical settings as a JSON object map (camelCase keys).
    pub fn to_map(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            // A struct with named fields always serializes to an object.
            _ => serde_json::Map::new(),
        }
    }
}
