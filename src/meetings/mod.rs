//! Meeting collaborator. The meeting aggregate has its own lifecycle
//! elsewhere; the minutes core only consumes its identity, title, and
//! owning user.

use crate::shared::models::Meeting;
use crate::shared::schema::meetings;
use diesel::prelude::*;
use uuid::Uuid;

pub fn get_meeting(conn: &mut PgConnection, id: Uuid) -> QueryResult<Option<Meeting>> {
    meetings::table
        .filter(meetings::id.eq(id))
        .select(Meeting::as_select())
        .first(conn)
        .optional()
}
