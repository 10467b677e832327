// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Widget subcommand implementations.

use serde::Serialize;
use tracing::info;

use reviewsync_core::{
    BusinessReader, ReviewReader, ReviewSyncError, Theme, WidgetSettings, WidgetUpdate,
};
use reviewsync_storage::SqliteStore;
use reviewsync_widgets::WidgetService;

pub(crate) fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("reviewsync: failed to serialize output: {e}"),
    }
}

fn parse_theme(theme: &str) -> Result<Theme, ReviewSyncError> {
    theme.parse().map_err(|_| {
        ReviewSyncError::Validation(format!(
            "unknown theme `{theme}`; valid themes: card, list, minimal, grid, carousel"
        ))
    })
}

fn parse_settings(settings: &str) -> Result<WidgetSettings, ReviewSyncError> {
    let value: serde_json::Value = serde_json::from_str(settings)
        .map_err(|e| ReviewSyncError::Validation(format!("settings is not valid JSON: {e}")))?;
    Ok(WidgetSettings::from_partial(value))
}

pub async fn run_list(
    service: &WidgetService,
    business: Option<i64>,
) -> Result<(), ReviewSyncError> {
    let widgets = match business {
        Some(business_id) => service.list_for_business(business_id).await?,
        None => service.list().await?,
    };
    print_json(&widgets);
    Ok(())
}

pub async fn run_show(service: &WidgetService, id: i64) -> Result<(), ReviewSyncError> {
    let widget = service
        .get(id)
        .await?
        .ok_or(ReviewSyncError::NotFound { id })?;
    print_json(&widget);
    Ok(())
}

pub async fn run_create(
    service: &WidgetService,
    business_id: i64,
    theme: Option<&str>,
    settings: Option<&str>,
) -> Result<(), ReviewSyncError> {
    let mut parsed = match settings {
        Some(settings) => parse_settings(settings)?,
        None => WidgetSettings::default(),
    };
    if let Some(theme) = theme {
        parsed.theme = parse_theme(theme)?;
    }

    let widget = service.create(business_id, parsed).await?;
    info!(id = widget.id, business_id, "widget created");
    print_json(&widget);
    Ok(())
}

pub async fn run_update(
    service: &WidgetService,
    id: i64,
    business: Option<i64>,
    theme: Option<&str>,
    settings: Option<&str>,
) -> Result<(), ReviewSyncError> {
    let update = WidgetUpdate {
        business_id: business,
        theme: theme.map(parse_theme).transpose()?,
        settings: settings.map(parse_settings).transpose()?,
    };

    let widget = service.update(id, update).await?;
    info!(id, "widget updated");
    print_json(&widget);
    Ok(())
}

pub async fn run_delete(service: &WidgetService, id: i64) -> Result<(), ReviewSyncError> {
    service.delete(id).await?;
    info!(id, "widget deleted");
    println!("deleted widget {id}");
    Ok(())
}

pub async fn run_preview(
    service: &WidgetService,
    store: &SqliteStore,
    id: i64,
) -> Result<(), ReviewSyncError> {
    let widget = service
        .get(id)
        .await?
        .ok_or(ReviewSyncError::NotFound { id })?;
    let business = store
        .get_business(widget.business_id)
        .await?
        .ok_or_else(|| {
            ReviewSyncError::Validation(format!("unknown business: {}", widget.business_id))
        })?;
    let reviews = store.reviews_for_business(widget.business_id).await?;

    let layout = reviewsync_render::render(&business, &reviews, &widget.settings);
    print_json(&layout);
    Ok(())
}

pub async fn run_embed(service: &WidgetService, id: i64) -> Result<(), ReviewSyncError> {
    let widget = service
        .get(id)
        .await?
        .ok_or(ReviewSyncError::NotFound { id })?;
    println!("{}", widget.embed_code);
    Ok(())
}
