//! Business-card collaborator. Minutes only consume the card's identity and
//! owning user when linking or listing.

use crate::shared::models::BusinessCard;
use crate::shared::schema::business_cards;
use diesel::prelude::*;
use uuid::Uuid;

pub fn find_business_card(
    conn: &mut PgConnection,
    id: Uuid,
) -> QueryResult<Option<BusinessCard>> {
    business_cards::table
        .filter(business_cards::id.eq(id))
        .select(BusinessCard::as_select())
        .first(conn)
        .optional()
}
