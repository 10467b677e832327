// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Review read and sync operations.

use rusqlite::params;

use reviewsync_core::{Review, ReviewSyncError};

use crate::database::Database;

fn row_to_review(row: &rusqlite::Row<'_>) -> Result<Review, rusqlite::Error> {
    Ok(Review {
        id: row.get(0)?,
        business_id: row.get(1)?,
        author_name: row.get(2)?,
        author_photo_url: row.get(3)?,
        rating: row.get(4)?,
        text: row.get(5)?,
        published_at: row.get(6)?,
    })
}

/// Insert a synced review.
pub async fn insert_review(db: &Database, review: &Review) -> Result<i64, ReviewSyncError> {
    let review = review.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO reviews (business_id, author_name, author_photo_url, rating, text, published_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    review.business_id,
                    review.author_name,
                    review.author_photo_url,
                    review.rating,
                    review.text,
                    review.published_at,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// The reviews for one business, newest first.
pub async fn reviews_for_business(
    db: &Database,
    business_id: i64,
) -> Result<Vec<Review>, ReviewSyncError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, business_id, author_name, author_photo_url, rating, text, published_at
                 FROM reviews WHERE business_id = ?1 ORDER BY published_at DESC, id DESC",
            )?;
            let rows = stmt.query_map(params![business_id], row_to_review)?;
            let mut reviews = Vec::new();
            for row in rows {
                reviews.push(row?);
            }
            Ok(reviews)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
