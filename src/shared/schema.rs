diesel::table! {
    meetings (id) {
        id -> Uuid,
        user_id -> Uuid,
        title -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    business_cards (id) {
        id -> Uuid,
        user_id -> Uuid,
        display_name -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    meeting_minutes (id) {
        id -> Uuid,
        meeting_id -> Uuid,
        bizcard_id -> Nullable<Uuid>,
        summary_text -> Nullable<Text>,
        minutes_text -> Text,
        #[max_length = 255]
        file_name -> Nullable<Varchar>,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::joinable!(meeting_minutes -> meetings (meeting_id));
diesel::joinable!(meeting_minutes -> business_cards (bizcard_id));

diesel::allow_tables_to_appear_in_same_query!(business_cards, meeting_minutes, meetings);
