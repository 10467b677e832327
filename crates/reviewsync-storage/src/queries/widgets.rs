// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Widget row CRUD operations.

use rusqlite::params;

use reviewsync_core::{NewWidgetRow, ReviewSyncError, WidgetRecord};

use crate::database::Database;

fn row_to_record(row: &rusqlite::Row<'_>) -> Result<WidgetRecord, rusqlite::Error> {
    let theme: String = row.get(2)?;
    Ok(WidgetRecord {
        id: row.get(0)?,
        business_id: row.get(1)?,
        // Unknown themes degrade to the default rather than poisoning reads.
        theme: theme.parse().unwrap_or_default(),
        settings: row.get(3)?,
        embed_code: row.get(4)?,
    })
}

/// Insert a new widget row and return it with its assigned id.
pub async fn insert_widget(
    db: &Database,
    row: &NewWidgetRow,
) -> Result<WidgetRecord, ReviewSyncError> {
    let row = row.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO widgets (business_id, theme, settings, embed_code)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    row.business_id,
                    row.theme.to_string(),
                    row.settings,
                    row.embed_code,
                ],
            )?;
            Ok(WidgetRecord {
                id: conn.last_insert_rowid(),
                business_id: row.business_id,
                theme: row.theme,
                settings: row.settings,
                embed_code: row.embed_code,
            })
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get a widget row by id.
pub async fn get_widget(db: &Database, id: i64) -> Result<Option<WidgetRecord>, ReviewSyncError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, business_id, theme, settings, embed_code
                 FROM widgets WHERE id = ?1",
            )?;
            let result = stmt.query_row(params![id], row_to_record);
            match result {
                Ok(record) => Ok(Some(record)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List all widget rows, newest first.
pub async fn list_widgets(db: &Database) -> Result<Vec<WidgetRecord>, ReviewSyncError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, business_id, theme, settings, embed_code
                 FROM widgets ORDER BY created_at DESC, id DESC",
            )?;
            let rows = stmt.query_map([], row_to_record)?;
            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok(records)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List the widget rows owned by one business, newest first.
pub async fn list_widgets_for_business(
    db: &Database,
    business_id: i64,
) -> Result<Vec<WidgetRecord>, ReviewSyncError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, business_id, theme, settings, embed_code
                 FROM widgets WHERE business_id = ?1 ORDER BY created_at DESC, id DESC",
            )?;
            let rows = stmt.query_map(params![business_id], row_to_record)?;
            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok(records)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Overwrite a widget row. Returns false when the id does not exist.
pub async fn update_widget(db: &Database, record: &WidgetRecord) -> Result<bool, ReviewSyncError> {
    let record = record.clone();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE widgets SET business_id = ?1, theme = ?2, settings = ?3, embed_code = ?4
                 WHERE id = ?5",
                params![
                    record.business_id,
                    record.theme.to_string(),
                    record.settings,
                    record.embed_code,
                    record.id,
                ],
            )?;
            Ok(changed > 0)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Delete a widget row. Returns false when the id does not exist.
pub async fn delete_widget(db: &Database, id: i64) -> Result<bool, ReviewSyncError> {
    db.connection()
        .call(move |conn| {
            let deleted = conn.execute("DELETE FROM widgets WHERE id = ?1", params![id])?;
            Ok(deleted > 0)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::businesses::upsert_business;
    use reviewsync_core::Theme;
    use reviewsync_test_utils::sample_business;
    use tempfile::tempdir;

    async fn widget_db() -> (tempfile::TempDir, Database) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("widgets.db");
        let db = Database::open(path.to_str().unwrap()).await.unwrap();
        upsert_business(&db, &sample_business(1)).await.unwrap();
        (dir, db)
    }

    fn new_row(theme: Theme) -> NewWidgetRow {
        NewWidgetRow {
            business_id: 1,
            theme,
            settings: r#"{"t":"card","mr":3}"#.to_string(),
            embed_code: "<!-- ReviewSync Widget -->".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let (_dir, db) = widget_db().await;
        let a = insert_widget(&db, &new_row(Theme::Card)).await.unwrap();
        let b = insert_widget(&db, &new_row(Theme::List)).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn get_round_trips_the_row() {
        let (_dir, db) = widget_db().await;
        let inserted = insert_widget(&db, &new_row(Theme::Minimal)).await.unwrap();
        let fetched = get_widget(&db, inserted.id).await.unwrap().unwrap();
        assert_eq!(fetched, inserted);
        assert!(get_widget(&db, inserted.id + 100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_newest_first_and_filterable_by_business() {
        let (_dir, db) = widget_db().await;
        upsert_business(&db, &sample_business(2)).await.unwrap();

        let first = insert_widget(&db, &new_row(Theme::Card)).await.unwrap();
        let mut other = new_row(Theme::Grid);
        other.business_id = 2;
        let second = insert_widget(&db, &other).await.unwrap();

        let all = list_widgets(&db).await.unwrap();
        assert_eq!(
            all.iter().map(|w| w.id).collect::<Vec<_>>(),
            vec![second.id, first.id]
        );

        let mine = list_widgets_for_business(&db, 1).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, first.id);
    }

    #[tokio::test]
    async fn update_reports_missing_rows() {
        let (_dir, db) = widget_db().await;
        let mut record = insert_widget(&db, &new_row(Theme::Card)).await.unwrap();
        record.theme = Theme::Carousel;
        record.embed_code = "<!-- updated -->".to_string();

        assert!(update_widget(&db, &record).await.unwrap());
        let fetched = get_widget(&db, record.id).await.unwrap().unwrap();
        assert_eq!(fetched.theme, Theme::Carousel);
        assert_eq!(fetched.embed_code, "<!-- updated -->");

        record.id += 500;
        assert!(!update_widget(&db, &record).await.unwrap());
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let (_dir, db) = widget_db().await;
        let record = insert_widget(&db, &new_row(Theme::Card)).await.unwrap();
        assert!(delete_widget(&db, record.id).await.unwrap());
        assert!(!delete_widget(&db, record.id).await.unwrap());
    }

    #[tokio::test]
    async fn oversized_settings_hit_the_schema_backstop() {
        let (_dir, db) = widget_db().await;
        let mut row = new_row(Theme::Card);
        row.settings = "x".repeat(256);
        assert!(insert_widget(&db, &row).await.is_err());
    }

    #[tokio::test]
    async fn unknown_stored_theme_degrades_to_default() {
        let (_dir, db) = widget_db().await;
        let record = insert_widget(&db, &new_row(Theme::Card)).await.unwrap();
        db.connection()
            .call(move |conn| {
                conn.execute(
                    "UPDATE widgets SET theme = 'holographic' WHERE id = ?1",
                    params![record.id],
                )?;
                Ok::<_, rusqlite::Error>(())
            })
            .await
            .unwrap();

        let fetched = get_widget(&db, record.id).await.unwrap().unwrap();
        assert_eq!(fetched.theme, Theme::Card);
    }
}
