// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure theme renderer: maps `(business, reviews, settings)` to a
//! [`WidgetLayout`] tree with no side effects and no I/O.
//!
//! The same inputs always produce the same output tree, so callers can
//! diff or snapshot layouts. Review order is the caller's; the renderer
//! filters and truncates but never re-sorts.

pub mod layout;

pub use layout::{
    Border, BusinessHeader, ContainerStyle, Gradient, LayoutVariant, Padding, ReviewCell,
    WidgetLayout,
};

use reviewsync_core::{BorderStyle, Business, Review, Theme, WidgetSettings};

/// Body length ceiling for the minimal theme's quote cells.
const MINIMAL_BODY_LIMIT: usize = 100;

/// Stock quote shown by the minimal theme when a review has no text.
const MINIMAL_BODY_FALLBACK: &str = "Great experience!";

/// Fixed cell width in px for the carousel theme.
const CAROUSEL_CELL_WIDTH: u32 = 256;

/// Attribution footer present on every layout.
const ATTRIBUTION: &str = "Powered by ReviewSync";

/// Render a widget layout from a business, its reviews, and settings.
///
/// Reviews are filtered to `rating >= min_rating`, then truncated to the
/// first `max_reviews`, preserving the caller-supplied order.
pub fn render(business: &Business, reviews: &[Review], settings: &WidgetSettings) -> WidgetLayout {
    let cells: Vec<ReviewCell> = reviews
        .iter()
        .filter(|r| r.rating >= i64::from(settings.min_rating))
        .take(settings.max_reviews as usize)
        .map(|r| review_cell(r, settings))
        .collect();

    let header = settings.show_business_info.then(|| BusinessHeader {
        name: business.name.clone(),
        rating: business.rating,
        total_reviews: business.total_reviews,
    });

    WidgetLayout {
        container: container_style(settings),
        header,
        variant: layout_variant(settings),
        cells,
        attribution: ATTRIBUTION.to_string(),
    }
}

fn layout_variant(settings: &WidgetSettings) -> LayoutVariant {
    match settings.theme {
        Theme::Card => LayoutVariant::Card {
            columns: settings.columns,
        },
        Theme::List => LayoutVariant::List,
        Theme::Minimal => LayoutVariant::Minimal,
        Theme::Grid => LayoutVariant::Grid {
            columns: settings.columns,
        },
        Theme::Carousel => LayoutVariant::Carousel {
            cell_width: CAROUSEL_CELL_WIDTH,
        },
    }
}

fn review_cell(review: &Review, settings: &WidgetSettings) -> ReviewCell {
    let body = match settings.theme {
        Theme::Minimal => Some(minimal_body(review.text.as_deref())),
        _ => review.text.clone(),
    };
    ReviewCell {
        author_name: review.author_name.clone(),
        rating: review.rating,
        date: settings.show_dates.then(|| review.published_at.clone()),
        body,
    }
}

/// Quote body for the minimal theme: truncated at [`MINIMAL_BODY_LIMIT`]
/// characters with an ellipsis, or the stock fallback when absent.
fn minimal_body(text: Option<&str>) -> String {
    match text {
        Some(t) if t.chars().count() > MINIMAL_BODY_LIMIT => {
            let truncated: String = t.chars().take(MINIMAL_BODY_LIMIT).collect();
            format!("{truncated}...")
        }
        Some(t) => t.to_string(),
        None => MINIMAL_BODY_FALLBACK.to_string(),
    }
}

fn container_style(settings: &WidgetSettings) -> ContainerStyle {
    let border = (settings.border_style != BorderStyle::None).then(|| Border {
        width: settings.border_width,
        style: settings.border_style,
        // Accent color at low alpha, matching the customizer preview.
        color: format!("{}20", settings.accent_color),
    });

    let background = settings.background_gradient.then(|| Gradient {
        from: settings.gradient_from.clone(),
        to: settings.gradient_to.clone(),
    });

    ContainerStyle {
        padding: Padding {
            top: settings.padding_top,
            right: settings.padding_right,
            bottom: settings.padding_bottom,
            left: settings.padding_left,
        },
        font_family: settings.font_family.clone(),
        font_size: settings.font_size,
        font_weight: settings.font_weight,
        line_height: settings.line_height,
        text_align: settings.alignment,
        accent_color: settings.accent_color.clone(),
        border,
        background,
        aspect_ratio: settings.aspect_ratio.ratio(),
        animation: settings.animation,
    }
}
