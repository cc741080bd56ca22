use crate::shared::models::{Meeting, MeetingMinutes};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Listing projection: metadata only, no transcript body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinutesListItem {
    pub minutes_id: Uuid,
    pub meeting_id: Uuid,
    pub meeting_title: String,
    pub bizcard_id: Option<Uuid>,
    pub summary_text: Option<String>,
    pub file_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl MinutesListItem {
    pub fn from_row((minutes, meeting): (MeetingMinutes, Meeting)) -> Self {
        Self {
            minutes_id: minutes.id,
            meeting_id: minutes.meeting_id,
            meeting_title: meeting.title,
            bizcard_id: minutes.bizcard_id,
            summary_text: minutes.summary_text,
            file_name: minutes.file_name,
            created_at: minutes.created_at,
        }
    }
}

/// Full detail. Text always comes from the relational copy, never from the
/// artifact, so a missing file cannot fabricate or hide content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinutesDetailResponse {
    pub minutes_id: Uuid,
    pub meeting_id: Uuid,
    pub meeting_title: String,
    pub bizcard_id: Option<Uuid>,
    pub summary_text: Option<String>,
    pub minutes_text: String,
    pub file_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl MinutesDetailResponse {
    pub fn from_row((minutes, meeting): (MeetingMinutes, Meeting)) -> Self {
        Self {
            minutes_id: minutes.id,
            meeting_id: minutes.meeting_id,
            meeting_title: meeting.title,
            bizcard_id: minutes.bizcard_id,
            summary_text: minutes.summary_text,
            minutes_text: minutes.minutes_text,
            file_name: minutes.file_name,
            created_at: minutes.created_at,
            updated_at: minutes.updated_at,
        }
    }
}

/// End-of-recording ingestion payload. `minutes_text` is mandatory but may
/// be an empty string, in which case no artifact is written.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveMinutesRequest {
    pub meeting_id: Uuid,
    pub bizcard_id: Option<Uuid>,
    pub summary_text: Option<String>,
    pub minutes_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteMinutesResponse {
    pub success: bool,
    pub meeting_id: Uuid,
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> (MeetingMinutes, Meeting) {
        let now = Utc::now();
        let meeting = Meeting {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Weekly sync".to_string(),
            created_at: now,
            updated_at: now,
        };
        let minutes = MeetingMinutes {
            id: Uuid::new_v4(),
            meeting_id: meeting.id,
            bizcard_id: None,
            summary_text: Some("short".to_string()),
            minutes_text: "full transcript".to_string(),
            file_name: Some("Meet/meeting-20260823T101500.txt".to_string()),
            created_at: Some(now),
            updated_at: Some(now),
        };
        (minutes, meeting)
    }

    #[test]
    fn detail_projects_meeting_title_and_both_texts() {
        let (minutes, meeting) = sample_row();
        let detail = MinutesDetailResponse::from_row((minutes.clone(), meeting.clone()));

        assert_eq!(detail.minutes_id, minutes.id);
        assert_eq!(detail.meeting_id, meeting.id);
        assert_eq!(detail.meeting_title, "Weekly sync");
        assert_eq!(detail.summary_text.as_deref(), Some("short"));
        assert_eq!(detail.minutes_text, "full transcript");
        assert_eq!(detail.file_name, minutes.file_name);
    }

    #[test]
    fn list_item_carries_no_transcript() {
        let (minutes, meeting) = sample_row();
        let item = MinutesListItem::from_row((minutes.clone(), meeting));

        assert_eq!(item.minutes_id, minutes.id);
        assert_eq!(item.created_at, minutes.created_at);
        let body = serde_json::to_value(&item).unwrap();
        assert!(body.get("minutes_text").is_none());
    }
}
