//! SQL DDL for initializing the cafe catalog.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `name` UNIQUE (creates an index implicitly)
/// - Booleans stored as INTEGER 0/1
/// - `google_rate` and `price_range` nullable
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS cafes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    map_url TEXT NOT NULL,
    address TEXT NOT NULL,
    website TEXT NOT NULL,
    has_alcohol INTEGER NOT NULL,
    has_lunch INTEGER NOT NULL,
    google_rate TEXT NULL,
    price_range TEXT NULL
);
"#;
