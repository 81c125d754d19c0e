diesel::table! {
    entry (id) {
        id -> Integer,
        name -> Text,
        address1 -> Text,
        address2 -> Text,
        city -> Text,
        state -> Text,
        country -> Text,
        postal_code -> Text,
        email -> Text,
        updated_at -> Timestamp,
        created_at -> Timestamp,
    }
}
