// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Business read and sync operations.
//!
//! Businesses are written by the review sync path and read by the widget
//! toolchain; widgets never mutate them.

use rusqlite::params;

use reviewsync_core::{Business, ReviewSyncError};

use crate::database::Database;

fn row_to_business(row: &rusqlite::Row<'_>) -> Result<Business, rusqlite::Error> {
    Ok(Business {
        id: row.get(0)?,
        name: row.get(1)?,
        place_id: row.get(2)?,
        address: row.get(3)?,
        rating: row.get(4)?,
        total_reviews: row.get(5)?,
        last_fetched: row.get(6)?,
    })
}

/// Insert or refresh a business row from an upstream sync.
pub async fn upsert_business(db: &Database, business: &Business) -> Result<(), ReviewSyncError> {
    let business = business.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO businesses (id, name, place_id, address, rating, total_reviews, last_fetched)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT(id) DO UPDATE SET
                     name = excluded.name,
                     place_id = excluded.place_id,
                     address = excluded.address,
                     rating = excluded.rating,
                     total_reviews = excluded.total_reviews,
                     last_fetched = excluded.last_fetched",
                params![
                    business.id,
                    business.name,
                    business.place_id,
                    business.address,
                    business.rating,
                    business.total_reviews,
                    business.last_fetched,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get a business by id.
pub async fn get_business(db: &Database, id: i64) -> Result<Option<Business>, ReviewSyncError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, place_id, address, rating, total_reviews, last_fetched
                 FROM businesses WHERE id = ?1",
            )?;
            let result = stmt.query_row(params![id], row_to_business);
            match result {
                Ok(business) => Ok(Some(business)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List all businesses, alphabetically.
pub async fn list_businesses(db: &Database) -> Result<Vec<Business>, ReviewSyncError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, place_id, address, rating, total_reviews, last_fetched
                 FROM businesses ORDER BY name ASC, id ASC",
            )?;
            let rows = stmt.query_map([], row_to_business)?;
            let mut businesses = Vec::new();
            for row in rows {
                businesses.push(row?);
            }
            Ok(businesses)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
