use eyre::Result;
use tracing::info;

use crate::DbPool;

// Foreign keys spell out the deletion policy of every reference:
// RESTRICT protects the referenced row, CASCADE removes dependents.
const TABLES: &[(&str, &str)] = &[
    (
        "languages",
        r#"
        CREATE TABLE IF NOT EXISTS languages (
            id BLOB PRIMARY KEY NOT NULL,
            code TEXT NOT NULL,
            name_en TEXT NOT NULL,
            name_self TEXT NOT NULL
        );
        "#,
    ),
    (
        "conferences",
        r#"
        CREATE TABLE IF NOT EXISTS conferences (
            id BLOB PRIMARY KEY NOT NULL,
            shortname TEXT NOT NULL,
            name TEXT NOT NULL,
            image_url TEXT NOT NULL DEFAULT '',
            start TEXT NULL,
            "end" TEXT NULL,
            fahrplan_version TEXT NOT NULL DEFAULT ''
        );
        "#,
    ),
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BLOB PRIMARY KEY NOT NULL,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );
        "#,
    ),
    (
        "rooms",
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            id BLOB PRIMARY KEY NOT NULL,
            conference_id BLOB NOT NULL REFERENCES conferences(id) ON DELETE RESTRICT,
            name TEXT NOT NULL
        );
        "#,
    ),
    (
        "talks",
        r#"
        CREATE TABLE IF NOT EXISTS talks (
            id BLOB PRIMARY KEY NOT NULL,
            conference_id BLOB NOT NULL REFERENCES conferences(id) ON DELETE RESTRICT,
            fahrplan_id TEXT NOT NULL,
            fahrplan_guid TEXT NOT NULL,
            title TEXT NOT NULL DEFAULT '',
            subtitle TEXT NOT NULL DEFAULT '',
            abstract TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            logo_url TEXT NOT NULL DEFAULT '',
            talk_type TEXT NOT NULL DEFAULT '',
            speakers TEXT NOT NULL DEFAULT '',
            language_id BLOB NOT NULL REFERENCES languages(id) ON DELETE RESTRICT,
            room_id BLOB NOT NULL REFERENCES rooms(id) ON DELETE RESTRICT,
            start TEXT NOT NULL,
            "end" TEXT NOT NULL,
            UNIQUE (conference_id, fahrplan_id)
        );
        "#,
    ),
    (
        "translations",
        r#"
        CREATE TABLE IF NOT EXISTS translations (
            id BLOB PRIMARY KEY NOT NULL,
            talk_id BLOB NOT NULL REFERENCES talks(id) ON DELETE CASCADE,
            language_id BLOB NOT NULL REFERENCES languages(id) ON DELETE RESTRICT,
            author_id BLOB NULL REFERENCES users(id) ON DELETE SET NULL,
            title TEXT NOT NULL DEFAULT '',
            subtitle TEXT NOT NULL DEFAULT '',
            abstract TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            UNIQUE (talk_id, language_id)
        );
        "#,
    ),
    (
        "translators",
        r#"
        CREATE TABLE IF NOT EXISTS translators (
            id BLOB PRIMARY KEY NOT NULL,
            user_id BLOB NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
            confirmed BOOLEAN NOT NULL,
            bio TEXT NOT NULL DEFAULT '',
            contact_info TEXT NOT NULL DEFAULT '',
            secret_token TEXT NOT NULL,
            CONSTRAINT secret_token_length CHECK (length(secret_token) = 64)
        );
        "#,
    ),
    (
        "translator_speaks",
        r#"
        CREATE TABLE IF NOT EXISTS translator_speaks (
            id BLOB PRIMARY KEY NOT NULL,
            user_id BLOB NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            language_id BLOB NOT NULL REFERENCES languages(id) ON DELETE RESTRICT
        );
        "#,
    ),
    (
        "booths",
        r#"
        CREATE TABLE IF NOT EXISTS booths (
            id BLOB PRIMARY KEY NOT NULL,
            room_id BLOB NOT NULL REFERENCES rooms(id) ON DELETE RESTRICT,
            name TEXT NOT NULL,
            location TEXT NOT NULL,
            dect TEXT NOT NULL DEFAULT '',
            desired_occupancy INTEGER NOT NULL CHECK (desired_occupancy >= 0),
            maximum_occupancy INTEGER NOT NULL CHECK (maximum_occupancy >= 0)
        );
        "#,
    ),
    (
        "shifts",
        r#"
        CREATE TABLE IF NOT EXISTS shifts (
            id BLOB PRIMARY KEY NOT NULL,
            booth_id BLOB NOT NULL REFERENCES booths(id) ON DELETE RESTRICT,
            talk_id BLOB NOT NULL REFERENCES talks(id) ON DELETE CASCADE,
            language_id BLOB NULL REFERENCES languages(id) ON DELETE RESTRICT
        );
        "#,
    ),
    (
        "shift_assignments",
        r#"
        CREATE TABLE IF NOT EXISTS shift_assignments (
            id BLOB PRIMARY KEY NOT NULL,
            shift_id BLOB NOT NULL REFERENCES shifts(id) ON DELETE CASCADE,
            user_id BLOB NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            waitlisted BOOLEAN NOT NULL DEFAULT 1,
            freeloaded BOOLEAN NOT NULL DEFAULT 0,
            comment TEXT NOT NULL DEFAULT ''
        );
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_rooms_conference_id ON rooms(conference_id);",
    "CREATE INDEX IF NOT EXISTS idx_talks_language_id ON talks(language_id);",
    "CREATE INDEX IF NOT EXISTS idx_talks_room_id ON talks(room_id);",
    "CREATE INDEX IF NOT EXISTS idx_talks_start ON talks(start);",
    "CREATE INDEX IF NOT EXISTS idx_translations_language_id ON translations(language_id);",
    "CREATE INDEX IF NOT EXISTS idx_translations_author_id ON translations(author_id);",
    "CREATE INDEX IF NOT EXISTS idx_translator_speaks_user_id ON translator_speaks(user_id);",
    "CREATE INDEX IF NOT EXISTS idx_translator_speaks_language_id ON translator_speaks(language_id);",
    "CREATE INDEX IF NOT EXISTS idx_booths_room_id ON booths(room_id);",
    "CREATE INDEX IF NOT EXISTS idx_shifts_booth_id ON shifts(booth_id);",
    "CREATE INDEX IF NOT EXISTS idx_shifts_talk_id ON shifts(talk_id);",
    "CREATE INDEX IF NOT EXISTS idx_shifts_language_id ON shifts(language_id);",
    "CREATE INDEX IF NOT EXISTS idx_shift_assignments_shift_id ON shift_assignments(shift_id);",
    "CREATE INDEX IF NOT EXISTS idx_shift_assignments_user_id ON shift_assignments(user_id);",
];

pub async fn initialize_database(pool: &DbPool) -> Result<()> {
    info!("Initializing database schema...");

    for (table, ddl) in TABLES {
        tracing::debug!("Creating table {}", table);
        sqlx::query(ddl).execute(pool).await?;
    }

    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
