// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixture builders for domain entities.

use reviewsync_core::{Business, Review};

/// A plausible business with a known id.
pub fn sample_business(id: i64) -> Business {
    Business {
        id,
        name: "Blue Bottle Coffee".to_string(),
        place_id: format!("ChIJplace{id}"),
        address: "300 Webster St, Oakland, CA".to_string(),
        rating: 4.6,
        total_reviews: 182,
        last_fetched: "2026-08-01T12:00:00Z".to_string(),
    }
}

/// Reviews for a business with the given star ratings, newest first.
pub fn sample_reviews(business_id: i64, ratings: &[i64]) -> Vec<Review> {
    ratings
        .iter()
        .enumerate()
        .map(|(i, &rating)| Review {
            id: i as i64 + 1,
            business_id,
            author_name: format!("Reviewer {}", i + 1),
            author_photo_url: None,
            rating,
            text: Some(format!("Visit number {} was memorable.", i + 1)),
            published_at: format!("2026-07-{:02}T09:00:00Z", 28 - i),
        })
        .collect()
}
