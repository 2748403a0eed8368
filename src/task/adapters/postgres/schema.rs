//! Diesel schema for task and collection persistence.

diesel::table! {
    /// Named groupings of tasks.
    collections (id) {
        /// Collection identifier.
        id -> Uuid,
        /// Collection name.
        #[max_length = 100]
        name -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 100]
        title -> Varchar,
        /// Task description text.
        #[max_length = 500]
        description -> Varchar,
        /// Priority in `0..=10`.
        priority -> Int2,
        /// Task status.
        #[max_length = 20]
        status -> Varchar,
        /// Owning collection, if any.
        collection_id -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(tasks -> collections (collection_id));
diesel::allow_tables_to_appear_in_same_query!(collections, tasks);
