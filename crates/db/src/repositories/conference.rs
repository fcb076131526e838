use c3lingo_core::errors::LingoResult;
use c3lingo_core::models::conference::{Conference, CreateConferenceRequest};
use c3lingo_core::registry::EntityKind;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::error::{map_read_error, map_write_error};
use crate::models::DbConference;
use crate::repositories::{delete_row, not_found};
use crate::DbPool;

pub async fn create_conference(
    pool: &DbPool,
    request: &CreateConferenceRequest,
) -> LingoResult<Conference> {
    request.validate()?;
    let id = Uuid::new_v4();

    tracing::debug!("Creating conference: id={}, shortname={}", id, request.shortname);

    let conference = sqlx::query_as::<_, DbConference>(
        r#"
        INSERT INTO conferences (id, shortname, name, image_url, start, "end", fahrplan_version)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, shortname, name, image_url, start, "end", fahrplan_version
        "#,
    )
    .bind(id)
    .bind(&request.shortname)
    .bind(&request.name)
    .bind(&request.image_url)
    .bind(request.start)
    .bind(request.end)
    .bind(&request.fahrplan_version)
    .fetch_one(pool)
    .await
    .map_err(map_write_error)?;

    Ok(conference.into())
}

pub async fn get_conference_by_id(pool: &DbPool, id: Uuid) -> LingoResult<Option<Conference>> {
    let conference = sqlx::query_as::<_, DbConference>(
        r#"
        SELECT id, shortname, name, image_url, start, "end", fahrplan_version
        FROM conferences
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_read_error)?;

    Ok(conference.map(Conference::from))
}

pub async fn list_conferences(executor: impl SqliteExecutor<'_>) -> LingoResult<Vec<Conference>> {
    let conferences = sqlx::query_as::<_, DbConference>(
        r#"
        SELECT id, shortname, name, image_url, start, "end", fahrplan_version
        FROM conferences
        ORDER BY shortname ASC
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(map_read_error)?;

    Ok(conferences.into_iter().map(Conference::from).collect())
}

pub async fn update_conference(pool: &DbPool, conference: &Conference) -> LingoResult<Conference> {
    conference.validate()?;

    let updated = sqlx::query_as::<_, DbConference>(
        r#"
        UPDATE conferences
        SET shortname = $2, name = $3, image_url = $4, start = $5, "end" = $6,
            fahrplan_version = $7
        WHERE id = $1
        RETURNING id, shortname, name, image_url, start, "end", fahrplan_version
        "#,
    )
    .bind(conference.id)
    .bind(&conference.shortname)
    .bind(&conference.name)
    .bind(&conference.image_url)
    .bind(conference.start)
    .bind(conference.end)
    .bind(&conference.fahrplan_version)
    .fetch_optional(pool)
    .await
    .map_err(map_write_error)?
    .ok_or_else(|| not_found(EntityKind::Conference, conference.id))?;

    Ok(updated.into())
}

/// Records the Fahrplan version of the latest import.
pub async fn set_fahrplan_version(
    pool: &DbPool,
    id: Uuid,
    fahrplan_version: &str,
) -> LingoResult<Conference> {
    tracing::debug!("Setting fahrplan version of conference {} to {}", id, fahrplan_version);

    let updated = sqlx::query_as::<_, DbConference>(
        r#"
        UPDATE conferences
        SET fahrplan_version = $2
        WHERE id = $1
        RETURNING id, shortname, name, image_url, start, "end", fahrplan_version
        "#,
    )
    .bind(id)
    .bind(fahrplan_version)
    .fetch_optional(pool)
    .await
    .map_err(map_write_error)?
    .ok_or_else(|| not_found(EntityKind::Conference, id))?;

    Ok(updated.into())
}

/// Fails while rooms or talks still belong to the conference.
pub async fn delete_conference(pool: &DbPool, id: Uuid) -> LingoResult<()> {
    delete_row(pool, EntityKind::Conference, id).await
}
