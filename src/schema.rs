// Keep in sync with the bootstrap DDL in db::init.

diesel::table! {
    users (id) {
        id -> Int4,
        #[max_length = 100]
        name -> Varchar,
        #[max_length = 255]
        email -> Varchar,
        password -> Text,
        profile_pic -> Nullable<Text>,
        #[max_length = 3]
        currency -> Varchar,
        created_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    transactions (id) {
        id -> Uuid,
        user_id -> Int4,
        amount -> Numeric,
        #[max_length = 10]
        transaction_type -> Varchar,
        #[max_length = 100]
        category -> Varchar,
        date -> Timestamptz,
        description -> Text,
        created_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    khata_contacts (id) {
        id -> Uuid,
        user_id -> Int4,
        #[max_length = 100]
        name -> Varchar,
        #[max_length = 20]
        phone -> Varchar,
        notes -> Text,
        created_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    khata_entries (id) {
        id -> Uuid,
        user_id -> Int4,
        contact_id -> Uuid,
        amount -> Numeric,
        #[max_length = 10]
        entry_type -> Varchar,
        description -> Text,
        date -> Timestamptz,
        created_at -> Nullable<Timestamptz>,
    }
}

diesel::joinable!(transactions -> users (user_id));
diesel::joinable!(khata_contacts -> users (user_id));
diesel::joinable!(khata_entries -> khata_contacts (contact_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    transactions,
    khata_contacts,
    khata_entries,
);
