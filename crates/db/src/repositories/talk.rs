use c3lingo_core::errors::LingoResult;
use c3lingo_core::models::talk::{CreateTalkRequest, Talk};
use c3lingo_core::registry::EntityKind;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::error::{map_read_error, map_write_error};
use crate::models::DbTalk;
use crate::repositories::{delete_row, not_found};
use crate::DbPool;

const TALK_COLUMNS: &str = r#"id, conference_id, fahrplan_id, fahrplan_guid, title, subtitle,
    abstract, description, logo_url, talk_type, speakers, language_id, room_id, start, "end""#;

/// Fails with a uniqueness violation when the conference already has a talk
/// with the same Fahrplan id.
pub async fn create_talk(pool: &DbPool, request: &CreateTalkRequest) -> LingoResult<Talk> {
    request.validate()?;
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating talk: id={}, conference_id={}, fahrplan_id={}",
        id, request.conference_id, request.fahrplan_id
    );

    let sql = format!(
        r#"
        INSERT INTO talks ({TALK_COLUMNS})
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING {TALK_COLUMNS}
        "#
    );
    let talk = sqlx::query_as::<_, DbTalk>(&sql)
        .bind(id)
        .bind(request.conference_id)
        .bind(&request.fahrplan_id)
        .bind(&request.fahrplan_guid)
        .bind(&request.text.title)
        .bind(&request.text.subtitle)
        .bind(&request.text.abstract_text)
        .bind(&request.text.description)
        .bind(&request.logo_url)
        .bind(&request.talk_type)
        .bind(&request.speakers)
        .bind(request.language_id)
        .bind(request.room_id)
        .bind(request.start)
        .bind(request.end)
        .fetch_one(pool)
        .await
        .map_err(map_write_error)?;

    Ok(talk.into())
}

pub async fn get_talk_by_id(pool: &DbPool, id: Uuid) -> LingoResult<Option<Talk>> {
    let sql = format!("SELECT {TALK_COLUMNS} FROM talks WHERE id = $1");
    let talk = sqlx::query_as::<_, DbTalk>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(map_read_error)?;

    Ok(talk.map(Talk::from))
}

pub async fn find_talk_by_fahrplan_id(
    pool: &DbPool,
    conference_id: Uuid,
    fahrplan_id: &str,
) -> LingoResult<Option<Talk>> {
    let sql = format!(
        "SELECT {TALK_COLUMNS} FROM talks WHERE conference_id = $1 AND fahrplan_id = $2"
    );
    let talk = sqlx::query_as::<_, DbTalk>(&sql)
        .bind(conference_id)
        .bind(fahrplan_id)
        .fetch_optional(pool)
        .await
        .map_err(map_read_error)?;

    Ok(talk.map(Talk::from))
}

pub async fn list_talks(executor: impl SqliteExecutor<'_>) -> LingoResult<Vec<Talk>> {
    let sql = format!("SELECT {TALK_COLUMNS} FROM talks ORDER BY start ASC, title ASC");
    let talks = sqlx::query_as::<_, DbTalk>(&sql)
        .fetch_all(executor)
        .await
        .map_err(map_read_error)?;

    Ok(talks.into_iter().map(Talk::from).collect())
}

/// Talks of a conference in schedule order.
pub async fn find_talks_for_conference(pool: &DbPool, conference_id: Uuid) -> LingoResult<Vec<Talk>> {
    let sql = format!(
        "SELECT {TALK_COLUMNS} FROM talks WHERE conference_id = $1 ORDER BY start ASC, title ASC"
    );
    let talks = sqlx::query_as::<_, DbTalk>(&sql)
        .bind(conference_id)
        .fetch_all(pool)
        .await
        .map_err(map_read_error)?;

    Ok(talks.into_iter().map(Talk::from).collect())
}

pub async fn find_talks_in_room(pool: &DbPool, room_id: Uuid) -> LingoResult<Vec<Talk>> {
    let sql = format!(
        "SELECT {TALK_COLUMNS} FROM talks WHERE room_id = $1 ORDER BY start ASC, title ASC"
    );
    let talks = sqlx::query_as::<_, DbTalk>(&sql)
        .bind(room_id)
        .fetch_all(pool)
        .await
        .map_err(map_read_error)?;

    Ok(talks.into_iter().map(Talk::from).collect())
}

pub async fn update_talk(pool: &DbPool, talk: &Talk) -> LingoResult<Talk> {
    talk.validate()?;

    let sql = format!(
        r#"
        UPDATE talks
        SET conference_id = $2, fahrplan_id = $3, fahrplan_guid = $4, title = $5,
            subtitle = $6, abstract = $7, description = $8, logo_url = $9,
            talk_type = $10, speakers = $11, language_id = $12, room_id = $13,
            start = $14, "end" = $15
        WHERE id = $1
        RETURNING {TALK_COLUMNS}
        "#
    );
    let updated = sqlx::query_as::<_, DbTalk>(&sql)
        .bind(talk.id)
        .bind(talk.conference_id)
        .bind(&talk.fahrplan_id)
        .bind(&talk.fahrplan_guid)
        .bind(&talk.text.title)
        .bind(&talk.text.subtitle)
        .bind(&talk.text.abstract_text)
        .bind(&talk.text.description)
        .bind(&talk.logo_url)
        .bind(&talk.talk_type)
        .bind(&talk.speakers)
        .bind(talk.language_id)
        .bind(talk.room_id)
        .bind(talk.start)
        .bind(talk.end)
        .fetch_optional(pool)
        .await
        .map_err(map_write_error)?
        .ok_or_else(|| not_found(EntityKind::Talk, talk.id))?;

    Ok(updated.into())
}

/// Also deletes the translations and shifts of the talk.
pub async fn delete_talk(pool: &DbPool, id: Uuid) -> LingoResult<()> {
    delete_row(pool, EntityKind::Talk, id).await
}
