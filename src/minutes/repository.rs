//! Relational queries for minutes records. Ownership filtering always joins
//! through the meeting; a bare meeting id is never trusted on its own.

use crate::shared::models::{Meeting, MeetingMinutes, NewMeetingMinutes};
use crate::shared::schema::{meeting_minutes, meetings};
use diesel::prelude::*;
use uuid::Uuid;

pub fn insert(conn: &mut PgConnection, record: &NewMeetingMinutes) -> QueryResult<MeetingMinutes> {
    diesel::insert_into(meeting_minutes::table)
        .values(record)
        .returning(MeetingMinutes::as_returning())
        .get_result(conn)
}

pub fn delete(conn: &mut PgConnection, minutes_id: Uuid) -> QueryResult<usize> {
    diesel::delete(meeting_minutes::table.filter(meeting_minutes::id.eq(minutes_id)))
        .execute(conn)
}

/// At most one record per meeting; the unique index enforces it.
pub fn find_by_meeting(
    conn: &mut PgConnection,
    meeting_id: Uuid,
) -> QueryResult<Option<MeetingMinutes>> {
    meeting_minutes::table
        .filter(meeting_minutes::meeting_id.eq(meeting_id))
        .select(MeetingMinutes::as_select())
        .first(conn)
        .optional()
}

/// Unordered at this layer; the service applies its own sort.
pub fn find_all_by_bizcard(
    conn: &mut PgConnection,
    bizcard_id: Uuid,
) -> QueryResult<Vec<(MeetingMinutes, Meeting)>> {
    meeting_minutes::table
        .inner_join(meetings::table)
        .filter(meeting_minutes::bizcard_id.eq(bizcard_id))
        .select((MeetingMinutes::as_select(), Meeting::as_select()))
        .load(conn)
}

/// All minutes owned (via the meeting) by `user_id`, newest first.
pub fn find_all_by_owner(
    conn: &mut PgConnection,
    user_id: Uuid,
) -> QueryResult<Vec<(MeetingMinutes, Meeting)>> {
    meeting_minutes::table
        .inner_join(meetings::table)
        .filter(meetings::user_id.eq(user_id))
        .order(meeting_minutes::created_at.desc().nulls_last())
        .select((MeetingMinutes::as_select(), Meeting::as_select()))
        .load(conn)
}

/// Ownership filter and meeting scope in one query, so authorization needs
/// no separate round trip.
pub fn find_by_owner_and_meeting(
    conn: &mut PgConnection,
    user_id: Uuid,
    meeting_id: Uuid,
) -> QueryResult<Option<(MeetingMinutes, Meeting)>> {
    meeting_minutes::table
        .inner_join(meetings::table)
        .filter(meetings::user_id.eq(user_id))
        .filter(meeting_minutes::meeting_id.eq(meeting_id))
        .select((MeetingMinutes::as_select(), Meeting::as_select()))
        .first(conn)
        .optional()
}
