use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schema::{business_cards, meeting_minutes, meetings};

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Identifiable, Selectable)]
#[diesel(table_name = meetings)]
pub struct Meeting {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Identifiable, Selectable)]
#[diesel(table_name = business_cards)]
pub struct BusinessCard {
    pub id: Uuid,
    pub user_id: Uuid,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Authoritative relational record for one meeting's minutes. Ownership is
/// transitive through `meeting_id`; the row stores no user reference of its
/// own. `file_name` points at the flat-file mirror and is present only when
/// that write succeeded.
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Identifiable, Selectable)]
#[diesel(table_name = meeting_minutes)]
pub struct MeetingMinutes {
    pub id: Uuid,
    pub meeting_id: Uuid,
    pub bizcard_id: Option<Uuid>,
    pub summary_text: Option<String>,
    pub minutes_text: String,
    pub file_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert payload; id and timestamps are assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = meeting_minutes)]
pub struct NewMeetingMinutes {
    pub meeting_id: Uuid,
    pub bizcard_id: Option<Uuid>,
    pub summary_text: Option<String>,
    pub minutes_text: String,
    pub file_name: Option<String>,
}
