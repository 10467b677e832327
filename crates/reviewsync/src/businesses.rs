// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Business subcommand implementations.
//!
//! `business add` and `business add-review` exist to seed the local
//! database by hand; in production the sync path fills these tables.

use clap::Subcommand;
use tracing::info;

use reviewsync_core::{Business, BusinessReader, Review, ReviewSyncError};
use reviewsync_storage::queries::{businesses, reviews};
use reviewsync_storage::SqliteStore;

use crate::widgets::print_json;

/// Business inspection and seeding subcommands.
#[derive(Subcommand, Debug)]
pub enum BusinessCommands {
    /// List synced businesses.
    List,
    /// Insert or refresh a business row.
    Add {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        /// Upstream place identifier.
        #[arg(long)]
        place_id: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value_t = 0.0)]
        rating: f64,
        #[arg(long, default_value_t = 0)]
        total_reviews: i64,
    },
    /// Insert a review for a business.
    AddReview {
        #[arg(long)]
        business: i64,
        #[arg(long)]
        author: String,
        /// Star rating, 1-5.
        #[arg(long)]
        rating: i64,
        #[arg(long)]
        text: Option<String>,
        /// RFC 3339 publication time; defaults to now.
        #[arg(long)]
        published_at: Option<String>,
    },
}

pub async fn run(command: BusinessCommands, store: &SqliteStore) -> Result<(), ReviewSyncError> {
    match command {
        BusinessCommands::List => {
            let all = store.list_businesses().await?;
            print_json(&all);
            Ok(())
        }
        BusinessCommands::Add {
            id,
            name,
            place_id,
            address,
            rating,
            total_reviews,
        } => {
            let business = Business {
                id,
                name,
                place_id,
                address,
                rating,
                total_reviews,
                last_fetched: chrono::Utc::now().to_rfc3339(),
            };
            businesses::upsert_business(store.database(), &business).await?;
            info!(id, "business upserted");
            print_json(&business);
            Ok(())
        }
        BusinessCommands::AddReview {
            business,
            author,
            rating,
            text,
            published_at,
        } => {
            let review = Review {
                id: 0, // assigned by the database
                business_id: business,
                author_name: author,
                author_photo_url: None,
                rating,
                text,
                published_at: published_at.unwrap_or_else(|| chrono::Utc::now().to_rfc3339()),
            };
            let id = reviews::insert_review(store.database(), &review).await?;
            info!(id, business_id = business, "review inserted");
            println!("inserted review {id}");
            Ok(())
        }
    }
}
