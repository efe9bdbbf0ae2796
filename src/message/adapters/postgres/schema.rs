//! Diesel schema for message persistence.

diesel::table! {
    /// Message records, including logically deleted ones.
    messages (id) {
        /// Message identifier.
        id -> Uuid,
        /// Trimmed message content.
        #[max_length = 1000]
        content -> Varchar,
        /// Trimmed author name.
        author -> Text,
        /// Lifecycle status token.
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
        /// Latest publication timestamp.
        published_at -> Nullable<Timestamptz>,
        /// Logical deletion timestamp.
        deleted_at -> Nullable<Timestamptz>,
    }
}
