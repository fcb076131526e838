use c3lingo_core::errors::LingoResult;
use c3lingo_core::models::booth::{Booth, CreateBoothRequest};
use c3lingo_core::registry::EntityKind;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::error::{map_read_error, map_write_error};
use crate::models::DbBooth;
use crate::repositories::{delete_row, not_found};
use crate::DbPool;

pub async fn create_booth(pool: &DbPool, request: &CreateBoothRequest) -> LingoResult<Booth> {
    request.validate()?;
    let id = Uuid::new_v4();

    tracing::debug!("Creating booth: id={}, room_id={}, name={}", id, request.room_id, request.name);

    let booth = sqlx::query_as::<_, DbBooth>(
        r#"
        INSERT INTO booths (id, room_id, name, location, dect, desired_occupancy, maximum_occupancy)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, room_id, name, location, dect, desired_occupancy, maximum_occupancy
        "#,
    )
    .bind(id)
    .bind(request.room_id)
    .bind(&request.name)
    .bind(&request.location)
    .bind(&request.dect)
    .bind(request.desired_occupancy)
    .bind(request.maximum_occupancy)
    .fetch_one(pool)
    .await
    .map_err(map_write_error)?;

    Ok(booth.into())
}

pub async fn get_booth_by_id(pool: &DbPool, id: Uuid) -> LingoResult<Option<Booth>> {
    let booth = sqlx::query_as::<_, DbBooth>(
        r#"
        SELECT id, room_id, name, location, dect, desired_occupancy, maximum_occupancy
        FROM booths
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_read_error)?;

    Ok(booth.map(Booth::from))
}

pub async fn list_booths(executor: impl SqliteExecutor<'_>) -> LingoResult<Vec<Booth>> {
    let booths = sqlx::query_as::<_, DbBooth>(
        r#"
        SELECT id, room_id, name, location, dect, desired_occupancy, maximum_occupancy
        FROM booths
        ORDER BY name ASC
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(map_read_error)?;

    Ok(booths.into_iter().map(Booth::from).collect())
}

pub async fn find_booths_for_room(pool: &DbPool, room_id: Uuid) -> LingoResult<Vec<Booth>> {
    let booths = sqlx::query_as::<_, DbBooth>(
        r#"
        SELECT id, room_id, name, location, dect, desired_occupancy, maximum_occupancy
        FROM booths
        WHERE room_id = $1
        ORDER BY name ASC
        "#,
    )
    .bind(room_id)
    .fetch_all(pool)
    .await
    .map_err(map_read_error)?;

    Ok(booths.into_iter().map(Booth::from).collect())
}

pub async fn update_booth(pool: &DbPool, booth: &Booth) -> LingoResult<Booth> {
    booth.validate()?;

    let updated = sqlx::query_as::<_, DbBooth>(
        r#"
        UPDATE booths
        SET room_id = $2, name = $3, location = $4, dect = $5,
            desired_occupancy = $6, maximum_occupancy = $7
        WHERE id = $1
        RETURNING id, room_id, name, location, dect, desired_occupancy, maximum_occupancy
        "#,
    )
    .bind(booth.id)
    .bind(booth.room_id)
    .bind(&booth.name)
    .bind(&booth.location)
    .bind(&booth.dect)
    .bind(booth.desired_occupancy)
    .bind(booth.maximum_occupancy)
    .fetch_optional(pool)
    .await
    .map_err(map_write_error)?
    .ok_or_else(|| not_found(EntityKind::Booth, booth.id))?;

    Ok(updated.into())
}

/// Fails while shifts are planned in the booth.
pub async fn delete_booth(pool: &DbPool, id: Uuid) -> LingoResult<()> {
    delete_row(pool, EntityKind::Booth, id).await
}
