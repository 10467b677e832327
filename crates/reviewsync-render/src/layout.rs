// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The renderable layout tree produced by [`crate::render`].

use serde::Serialize;

use reviewsync_core::{Alignment, Animation, BorderStyle};

/// The complete rendered widget: container style, optional business
/// header, layout variant, and the ordered review cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetLayout {
    pub container: ContainerStyle,
    pub header: Option<BusinessHeader>,
    pub variant: LayoutVariant,
    pub cells: Vec<ReviewCell>,
    pub attribution: String,
}

/// Business header block, shown per `showBusinessInfo`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessHeader {
    pub name: String,
    pub rating: f64,
    pub total_reviews: i64,
}

/// One rendered review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewCell {
    pub author_name: String,
    /// Star rating, 1-5.
    pub rating: i64,
    /// Publication timestamp, present per `showDates`.
    pub date: Option<String>,
    /// Review body; for the minimal theme this is always present and
    /// truncated.
    pub body: Option<String>,
}

/// Arrangement of the review cells, dispatched on the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum LayoutVariant {
    Card { columns: u8 },
    List,
    Minimal,
    Grid { columns: u8 },
    Carousel { cell_width: u32 },
}

/// Style descriptor derived from spacing, border, typography, and
/// background settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerStyle {
    pub padding: Padding,
    pub font_family: String,
    pub font_size: u32,
    pub font_weight: u16,
    pub line_height: f64,
    pub text_align: Alignment,
    pub accent_color: String,
    pub border: Option<Border>,
    pub background: Option<Gradient>,
    /// width:height, or `None` for unconstrained.
    pub aspect_ratio: Option<(u8, u8)>,
    pub animation: Animation,
}

/// Padding in px, clockwise from top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

/// Container border, absent when the style is `none`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Border {
    pub width: u32,
    pub style: BorderStyle,
    pub color: String,
}

/// Two-stop background gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    pub from: String,
    pub to: String,
}
