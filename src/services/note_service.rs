//! Note storage with the ownership gate applied to every operation.
//!
//! Every per-note statement carries `WHERE id = $1 AND user_id = $2`, so a
//! note that exists but belongs to someone else is indistinguishable from
//! one that does not exist: both come back as `NotFound`. Each operation is
//! a single statement; no multi-statement transactions are needed.

use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;
use thiserror::Error;

use crate::database::models::Note;

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Note not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Client-supplied note fields, shared by create and update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl NoteDraft {
    /// Title and content are required on both create and update.
    fn validated(&self) -> Result<(&str, &str), NoteError> {
        let title = self
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty());
        let content = self
            .content
            .as_deref()
            .filter(|c| !c.trim().is_empty());

        match (title, content) {
            (Some(title), Some(content)) => Ok((title, content)),
            _ => Err(NoteError::Validation(
                "Title and content are required".to_string(),
            )),
        }
    }
}

const NOTE_COLUMNS: &str =
    "id, user_id, title, content, category, priority, due_date, created_at, updated_at";

pub struct NoteService {
    pool: PgPool,
}

impl NoteService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All notes owned by the caller, newest-created-first.
    pub async fn list(&self, user_id: i64) -> Result<Vec<Note>, NoteError> {
        let notes = sqlx::query_as::<_, Note>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    pub async fn get(&self, user_id: i64, note_id: i64) -> Result<Note, NoteError> {
        sqlx::query_as::<_, Note>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1 AND user_id = $2"
        ))
        .bind(note_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(NoteError::NotFound)
    }

    /// Insert a new note owned by the caller. Timestamps are set by the
    /// store at insert.
    pub async fn create(&self, user_id: i64, draft: &NoteDraft) -> Result<Note, NoteError> {
        let (title, content) = draft.validated()?;

        let note = sqlx::query_as::<_, Note>(&format!(
            "INSERT INTO notes (title, content, category, priority, due_date, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(title)
        .bind(content)
        .bind(&draft.category)
        .bind(&draft.priority)
        .bind(draft.due_date)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    /// Replace the content fields of an owned note and refresh updated_at.
    /// created_at is left untouched.
    pub async fn update(
        &self,
        user_id: i64,
        note_id: i64,
        draft: &NoteDraft,
    ) -> Result<Note, NoteError> {
        let (title, content) = draft.validated()?;

        sqlx::query_as::<_, Note>(&format!(
            "UPDATE notes \
             SET title = $1, content = $2, category = $3, priority = $4, due_date = $5, \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = $6 AND user_id = $7 \
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(title)
        .bind(content)
        .bind(&draft.category)
        .bind(&draft.priority)
        .bind(draft.due_date)
        .bind(note_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(NoteError::NotFound)
    }

    /// Hard delete. No tombstone is kept.
    pub async fn delete(&self, user_id: i64, note_id: i64) -> Result<(), NoteError> {
        let deleted: Option<i64> =
            sqlx::query_scalar("DELETE FROM notes WHERE id = $1 AND user_id = $2 RETURNING id")
                .bind(note_id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        deleted.map(|_| ()).ok_or(NoteError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: Option<&str>, content: Option<&str>) -> NoteDraft {
        NoteDraft {
            title: title.map(String::from),
            content: content.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn draft_with_title_and_content_is_valid() {
        let d = draft(Some("T"), Some("C"));
        assert_eq!(d.validated().unwrap(), ("T", "C"));
    }

    #[test]
    fn missing_title_is_rejected() {
        assert!(draft(None, Some("C")).validated().is_err());
    }

    #[test]
    fn missing_content_is_rejected() {
        assert!(draft(Some("T"), None).validated().is_err());
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert!(draft(Some(""), Some("C")).validated().is_err());
        assert!(draft(Some("T"), Some("   ")).validated().is_err());
    }

    #[test]
    fn optional_fields_default_to_none() {
        let d: NoteDraft = serde_json::from_str(r#"{"title":"T","content":"C"}"#).unwrap();
        assert!(d.category.is_none());
        assert!(d.priority.is_none());
        assert!(d.due_date.is_none());
    }

    #[test]
    fn due_date_parses_from_iso_string() {
        let d: NoteDraft =
            serde_json::from_str(r#"{"title":"T","content":"C","due_date":"2026-09-01"}"#).unwrap();
        assert_eq!(
            d.due_date,
            Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        );
    }
}
