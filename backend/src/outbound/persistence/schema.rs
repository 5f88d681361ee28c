//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `backend/migrations`.
//! Regenerate with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Stocked medicines.
    ///
    /// `barcode` carries the `medicines_barcode_key` unique constraint.
    medicines (id) {
        id -> Uuid,
        name -> Varchar,
        barcode -> Varchar,
        /// Unit price; unscaled NUMERIC.
        price -> Numeric,
        quantity -> Int4,
        category -> Nullable<Varchar>,
        manufacturer -> Nullable<Varchar>,
        expiry_date -> Date,
        prescription_required -> Bool,
        /// Insertion timestamp; orders list results.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Medicine categories.
    categories (id) {
        id -> Uuid,
        name -> Varchar,
        slug -> Varchar,
        /// `active` or `inactive`.
        status -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(medicines, categories);
