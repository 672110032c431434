//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly. `diesel print-schema` against a
//! migrated database regenerates them.

diesel::table! {
    /// Identity store.
    users (id) {
        /// External user identifier (positive).
        id -> Int8,
        first_name -> Varchar,
        last_name -> Varchar,
        birthday -> Date,
    }
}

diesel::table! {
    /// Entry store. `user_id` is not a foreign key.
    calorie_entries (id) {
        /// Internal identifier, never exposed.
        id -> Uuid,
        /// Insertion sequence; orders same-day entries.
        seq -> Int8,
        user_id -> Int8,
        year -> Int4,
        month -> Int4,
        day -> Int4,
        description -> Text,
        /// One of `breakfast`, `lunch`, `dinner`, `other`.
        category -> Varchar,
        amount -> Float8,
    }
}
