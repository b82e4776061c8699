//! SQLite-backed turn repository.
//!
//! One append-only table ordered by timestamp (rowid breaks ties within
//! a millisecond). SQLite serializes writes, which is what keeps two
//! turns for the same session from interleaving.

use async_trait::async_trait;
use chrono::Utc;
use samaritan_conversation::{HistoryEntry, StoreError, TurnRole, TurnStore};
use samaritan_core::{SessionKey, TriageStage, TurnId};
use sqlx::{FromRow, SqlitePool};

/// Row type for history queries.
#[derive(FromRow)]
struct HistoryRow {
    sender: String,
    message: String,
}

/// Row type for status queries.
#[derive(FromRow)]
struct StatusRow {
    triage_status: String,
}

/// Repository for conversation turns.
pub struct TurnRepository {
    pool: SqlitePool,
}

impl TurnRepository {
    /// Creates a new repository.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TurnStore for TurnRepository {
    async fn append(
        &self,
        session: &SessionKey,
        role: TurnRole,
        text: &str,
        status: TriageStage,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO conversation_turns (id, session_id, sender, message, triage_status, timestamp)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(TurnId::new().to_string())
        .bind(session.as_str())
        .bind(role.as_str())
        .bind(text)
        .bind(status.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::WriteFailed {
            reason: e.to_string(),
        })?;
        Ok(())
    }

    async fn history(&self, session: &SessionKey) -> Result<Vec<HistoryEntry>, StoreError> {
        let rows: Vec<HistoryRow> = sqlx::query_as(
            r#"
            SELECT sender, message
            FROM conversation_turns
            WHERE session_id = ?
            ORDER BY timestamp ASC, rowid ASC
            "#,
        )
        .bind(session.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::ReadFailed {
            reason: e.to_string(),
        })?;

        Ok(rows
            .into_iter()
            .map(|row| HistoryEntry::new(row.sender, row.message))
            .collect())
    }

    async fn latest_status(&self, session: &SessionKey) -> Result<TriageStage, StoreError> {
        let row: Option<StatusRow> = sqlx::query_as(
            r#"
            SELECT triage_status
            FROM conversation_turns
            WHERE session_id = ?
            ORDER BY timestamp DESC, rowid DESC
            LIMIT 1
            "#,
        )
        .bind(session.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::ReadFailed {
            reason: e.to_string(),
        })?;

        match row {
            None => Ok(TriageStage::default()),
            Some(row) => Ok(row.triage_status.parse().unwrap_or_else(|e| {
                tracing::warn!(session = %session, error = %e, "unknown status tag, assuming intake");
                TriageStage::default()
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MIGRATOR;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        // A single connection keeps every query on the same in-memory
        // database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("connect");
        MIGRATOR.run(&pool).await.expect("migrate");
        pool
    }

    #[tokio::test]
    async fn unknown_session_reads_back_empty() {
        let repo = TurnRepository::new(memory_pool().await);
        let session = SessionKey::new("nobody");

        assert!(repo.history(&session).await.expect("history").is_empty());
        assert_eq!(
            repo.latest_status(&session).await.expect("status"),
            TriageStage::Intake
        );
    }

    #[tokio::test]
    async fn appended_pairs_read_back_in_order() {
        let repo = TurnRepository::new(memory_pool().await);
        let session = SessionKey::new("s1");

        for i in 0..4 {
            repo.append(
                &session,
                TurnRole::User,
                &format!("user {i}"),
                TriageStage::Intake,
            )
            .await
            .expect("append user");
            repo.append(
                &session,
                TurnRole::Assistant,
                &format!("assistant {i}"),
                TriageStage::Intake,
            )
            .await
            .expect("append assistant");
        }

        let history = repo.history(&session).await.expect("history");
        assert_eq!(history.len(), 8);
        assert_eq!(history[0], HistoryEntry::new("user", "user 0"));
        assert_eq!(history[7], HistoryEntry::new("assistant", "assistant 3"));
    }

    #[tokio::test]
    async fn latest_status_is_most_recent_tag() {
        let repo = TurnRepository::new(memory_pool().await);
        let session = SessionKey::new("s1");

        repo.append(&session, TurnRole::User, "fever", TriageStage::Intake)
            .await
            .expect("append");
        repo.append(
            &session,
            TurnRole::Assistant,
            "Please tell me your city or area",
            TriageStage::AwaitingLocation,
        )
        .await
        .expect("append");

        assert_eq!(
            repo.latest_status(&session).await.expect("status"),
            TriageStage::AwaitingLocation
        );
    }

    #[tokio::test]
    async fn sessions_do_not_bleed_into_each_other() {
        let repo = TurnRepository::new(memory_pool().await);

        repo.append(
            &SessionKey::new("a"),
            TurnRole::User,
            "hello",
            TriageStage::Intake,
        )
        .await
        .expect("append");

        assert!(
            repo.history(&SessionKey::new("b"))
                .await
                .expect("history")
                .is_empty()
        );
    }

    #[tokio::test]
    async fn legacy_status_tag_degrades_to_intake() {
        let pool = memory_pool().await;

        sqlx::query(
            r#"
            INSERT INTO conversation_turns (id, session_id, sender, message, triage_status, timestamp)
            VALUES ('turn_legacy', 's1', 'ai', 'old row', 'INTAKE_START', ?)
            "#,
        )
        .bind(Utc::now())
        .execute(&pool)
        .await
        .expect("insert");

        let repo = TurnRepository::new(pool);
        let session = SessionKey::new("s1");

        assert_eq!(
            repo.latest_status(&session).await.expect("status"),
            TriageStage::Intake
        );
        // The legacy sender label reads back unchanged; normalization is
        // the assembler's job.
        let history = repo.history(&session).await.expect("history");
        assert_eq!(history[0].sender, "ai");
    }

    #[tokio::test]
    async fn file_backed_store_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("turns.db").display()
        );
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("connect");
        MIGRATOR.run(&pool).await.expect("migrate");

        let repo = TurnRepository::new(pool);
        let session = SessionKey::new("s1");
        repo.append(&session, TurnRole::User, "hello", TriageStage::Intake)
            .await
            .expect("append");

        let history = repo.history(&session).await.expect("history");
        assert_eq!(history, vec![HistoryEntry::new("user", "hello")]);
    }
}
