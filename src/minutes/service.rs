use crate::contacts;
use crate::meetings;
use crate::minutes::repository;
use crate::minutes::types::{MinutesDetailResponse, MinutesListItem};
use crate::shared::models::{MeetingMinutes, NewMeetingMinutes};
use crate::shared::state::AppState;
use crate::shared::utils::DbPool;
use crate::storage::MinutesStorage;
use axum::http::StatusCode;
use diesel::Connection;
use log::warn;
use std::sync::Arc;
use uuid::Uuid;

/// Category prefix for minutes artifacts inside the flat-file store.
pub const MEETING_ARTIFACT_PREFIX: &str = "Meet/meeting-";

#[derive(Debug, Clone)]
pub enum MinutesError {
    Database(String),
    NotFound(String),
    Forbidden(String),
}

impl std::fmt::Display for MinutesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Database(e) => write!(f, "Database error: {e}"),
            Self::NotFound(e) => write!(f, "Not found: {e}"),
            Self::Forbidden(e) => write!(f, "Forbidden: {e}"),
        }
    }
}

impl std::error::Error for MinutesError {}

impl MinutesError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl From<diesel::result::Error> for MinutesError {
    fn from(e: diesel::result::Error) -> Self {
        Self::Database(e.to_string())
    }
}

impl From<diesel::r2d2::PoolError> for MinutesError {
    fn from(e: diesel::r2d2::PoolError) -> Self {
        Self::Database(e.to_string())
    }
}

/// Orchestrates the dual-store protocol: the relational record is the
/// operation of record, the flat-file artifact is a best-effort mirror
/// whose faults never surface to the caller.
pub struct MinutesService {
    pool: DbPool,
    storage: Arc<dyn MinutesStorage>,
}

impl MinutesService {
    pub fn new(pool: DbPool, storage: Arc<dyn MinutesStorage>) -> Self {
        Self { pool, storage }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.conn.clone(), state.storage.clone())
    }

    /// End-of-recording save. Resolves and authorizes the meeting before any
    /// mutation, resolves the optional business card, writes the artifact
    /// mirror (best effort), then inserts the record transactionally.
    pub async fn save_minutes(
        &self,
        user_id: Uuid,
        meeting_id: Uuid,
        bizcard_id: Option<Uuid>,
        summary_text: Option<String>,
        minutes_text: String,
    ) -> Result<MeetingMinutes, MinutesError> {
        let pool = self.pool.clone();
        let storage = self.storage.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;

            let meeting = meetings::get_meeting(&mut conn, meeting_id)?.ok_or_else(|| {
                MinutesError::NotFound(format!("meeting not found: {meeting_id}"))
            })?;
            if meeting.user_id != user_id {
                return Err(MinutesError::Forbidden(format!(
                    "no access to meeting {meeting_id}"
                )));
            }

            if let Some(card_id) = bizcard_id {
                contacts::find_business_card(&mut conn, card_id)?.ok_or_else(|| {
                    MinutesError::NotFound(format!("business card not found: {card_id}"))
                })?;
            }

            // Mirror write happens before the authoritative insert and never
            // aborts it. A crash in between can orphan one artifact.
            let file_name = write_artifact(
                storage.as_ref(),
                &meeting.title,
                summary_text.as_deref(),
                &minutes_text,
            );

            let record = conn.transaction(|conn| {
                repository::insert(
                    conn,
                    &NewMeetingMinutes {
                        meeting_id,
                        bizcard_id,
                        summary_text,
                        minutes_text,
                        file_name,
                    },
                )
            })?;

            Ok(record)
        })
        .await
        .map_err(|e| MinutesError::Database(e.to_string()))?
    }

    /// All minutes owned by `user_id`, newest first (store-level ordering).
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<MinutesListItem>, MinutesError> {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let rows = repository::find_all_by_owner(&mut conn, user_id)?;
            Ok(rows.into_iter().map(MinutesListItem::from_row).collect())
        })
        .await
        .map_err(|e| MinutesError::Database(e.to_string()))?
    }

    pub async fn detail_by_meeting(
        &self,
        user_id: Uuid,
        meeting_id: Uuid,
    ) -> Result<MinutesDetailResponse, MinutesError> {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let row = repository::find_by_owner_and_meeting(&mut conn, user_id, meeting_id)?
                .ok_or_else(|| {
                    MinutesError::NotFound(format!("no minutes for meeting {meeting_id}"))
                })?;
            Ok(MinutesDetailResponse::from_row(row))
        })
        .await
        .map_err(|e| MinutesError::Database(e.to_string()))?
    }

    /// Minutes linked to a business card owned by `user_id`. Ownership of
    /// the card gates this read; the fetch itself has no store-level ORDER
    /// BY, so the sort is applied here.
    pub async fn list_by_bizcard(
        &self,
        user_id: Uuid,
        bizcard_id: Uuid,
    ) -> Result<Vec<MinutesListItem>, MinutesError> {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;

            let card = contacts::find_business_card(&mut conn, bizcard_id)?.ok_or_else(|| {
                MinutesError::NotFound(format!("business card not found: {bizcard_id}"))
            })?;
            if card.user_id != user_id {
                return Err(MinutesError::Forbidden(format!(
                    "no access to business card {bizcard_id}"
                )));
            }

            let rows = repository::find_all_by_bizcard(&mut conn, bizcard_id)?;
            let mut items: Vec<MinutesListItem> =
                rows.into_iter().map(MinutesListItem::from_row).collect();
            sort_newest_first(&mut items);
            Ok(items)
        })
        .await
        .map_err(|e| MinutesError::Database(e.to_string()))?
    }

    /// Authorized lookup, best-effort artifact cleanup, then the relational
    /// delete as the operation of record.
    pub async fn delete_by_meeting(
        &self,
        user_id: Uuid,
        meeting_id: Uuid,
    ) -> Result<(), MinutesError> {
        let pool = self.pool.clone();
        let storage = self.storage.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;

            let (record, _meeting) =
                repository::find_by_owner_and_meeting(&mut conn, user_id, meeting_id)?
                    .ok_or_else(|| {
                        MinutesError::NotFound(format!(
                            "no minutes to delete for meeting {meeting_id}"
                        ))
                    })?;

            // A missing or stuck file must never block the row delete.
            if let Some(name) = record.file_name.as_deref().filter(|n| !n.is_empty()) {
                if let Err(e) = storage.delete(name) {
                    warn!("failed to delete minutes artifact {name}: {e}");
                }
            }

            conn.transaction(|conn| repository::delete(conn, record.id))?;
            Ok(())
        })
        .await
        .map_err(|e| MinutesError::Database(e.to_string()))?
    }
}

/// Compose and write the flat-file copy. Returns the generated artifact
/// name, or None when there is nothing to write or the store failed; a
/// store fault must never abort the relational save.
fn write_artifact(
    storage: &dyn MinutesStorage,
    meeting_title: &str,
    summary_text: Option<&str>,
    minutes_text: &str,
) -> Option<String> {
    if minutes_text.is_empty() {
        return None;
    }
    let body = compose_minutes_body(meeting_title, summary_text, minutes_text);
    match storage.save(MEETING_ARTIFACT_PREFIX, &body) {
        Ok(name) => Some(name),
        Err(e) => {
            warn!("failed to write minutes artifact: {e}");
            None
        }
    }
}

fn compose_minutes_body(
    meeting_title: &str,
    summary_text: Option<&str>,
    minutes_text: &str,
) -> String {
    format!(
        "[Meeting] {}\n\n▶ Summary\n{}\n\n▶ Full Transcript\n{}\n",
        meeting_title,
        summary_text.unwrap_or(""),
        minutes_text
    )
}

/// Newest first; records without a timestamp sort last.
fn sort_newest_first(items: &mut [MinutesListItem]) {
    items.sort_by(|a, b| match (&a.created_at, &b.created_at) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io;

    struct FailingStorage;

    impl MinutesStorage for FailingStorage {
        fn write(&self, _name: &str, _content: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk unavailable"))
        }
        fn read(&self, _name: &str) -> io::Result<String> {
            Ok(String::new())
        }
        fn delete(&self, _name: &str) -> io::Result<()> {
            Ok(())
        }
    }

    struct UntouchableStorage;

    impl MinutesStorage for UntouchableStorage {
        fn write(&self, _name: &str, _content: &str) -> io::Result<()> {
            panic!("store must not be touched");
        }
        fn read(&self, _name: &str) -> io::Result<String> {
            panic!("store must not be touched");
        }
        fn delete(&self, _name: &str) -> io::Result<()> {
            panic!("store must not be touched");
        }
    }

    fn item(created_at: Option<chrono::DateTime<Utc>>) -> MinutesListItem {
        MinutesListItem {
            minutes_id: Uuid::new_v4(),
            meeting_id: Uuid::new_v4(),
            meeting_title: "m".to_string(),
            bizcard_id: None,
            summary_text: None,
            file_name: None,
            created_at,
        }
    }

    #[test]
    fn artifact_body_keeps_section_layout() {
        let body = compose_minutes_body("Standup", Some("short summary"), "full text");
        assert_eq!(
            body,
            "[Meeting] Standup\n\n▶ Summary\nshort summary\n\n▶ Full Transcript\nfull text\n"
        );
    }

    #[test]
    fn artifact_body_without_summary_has_empty_section() {
        let body = compose_minutes_body("Standup", None, "full text");
        assert_eq!(
            body,
            "[Meeting] Standup\n\n▶ Summary\n\n\n▶ Full Transcript\nfull text\n"
        );
    }

    #[test]
    fn empty_transcript_skips_the_artifact_write() {
        let name = write_artifact(&UntouchableStorage, "Standup", Some("s"), "");
        assert_eq!(name, None);
    }

    #[test]
    fn storage_failure_is_swallowed() {
        let name = write_artifact(&FailingStorage, "Standup", None, "full text");
        assert_eq!(name, None);
    }

    #[test]
    fn sort_puts_missing_timestamps_last() {
        let t1 = Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2026, 8, 2, 10, 0, 0).unwrap();
        let mut items = vec![item(Some(t1)), item(None), item(Some(t2))];

        sort_newest_first(&mut items);

        assert_eq!(items[0].created_at, Some(t2));
        assert_eq!(items[1].created_at, Some(t1));
        assert_eq!(items[2].created_at, None);
    }

    #[test]
    fn error_status_mapping() {
        assert_eq!(
            MinutesError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            MinutesError::Forbidden("x".into()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            MinutesError::Database("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
