use c3lingo_core::errors::LingoResult;
use c3lingo_core::models::conference::{CreateRoomRequest, Room};
use c3lingo_core::registry::EntityKind;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::error::{map_read_error, map_write_error};
use crate::models::DbRoom;
use crate::repositories::{delete_row, not_found};
use crate::DbPool;

pub async fn create_room(pool: &DbPool, request: &CreateRoomRequest) -> LingoResult<Room> {
    request.validate()?;
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating room: id={}, conference_id={}, name={}",
        id, request.conference_id, request.name
    );

    let room = sqlx::query_as::<_, DbRoom>(
        r#"
        INSERT INTO rooms (id, conference_id, name)
        VALUES ($1, $2, $3)
        RETURNING id, conference_id, name
        "#,
    )
    .bind(id)
    .bind(request.conference_id)
    .bind(&request.name)
    .fetch_one(pool)
    .await
    .map_err(map_write_error)?;

    Ok(room.into())
}

pub async fn get_room_by_id(pool: &DbPool, id: Uuid) -> LingoResult<Option<Room>> {
    let room = sqlx::query_as::<_, DbRoom>(
        r#"
        SELECT id, conference_id, name
        FROM rooms
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_read_error)?;

    Ok(room.map(Room::from))
}

pub async fn list_rooms(executor: impl SqliteExecutor<'_>) -> LingoResult<Vec<Room>> {
    let rooms = sqlx::query_as::<_, DbRoom>(
        r#"
        SELECT id, conference_id, name
        FROM rooms
        ORDER BY name ASC
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(map_read_error)?;

    Ok(rooms.into_iter().map(Room::from).collect())
}

pub async fn find_rooms_for_conference(pool: &DbPool, conference_id: Uuid) -> LingoResult<Vec<Room>> {
    let rooms = sqlx::query_as::<_, DbRoom>(
        r#"
        SELECT id, conference_id, name
        FROM rooms
        WHERE conference_id = $1
        ORDER BY name ASC
        "#,
    )
    .bind(conference_id)
    .fetch_all(pool)
    .await
    .map_err(map_read_error)?;

    Ok(rooms.into_iter().map(Room::from).collect())
}

pub async fn update_room(pool: &DbPool, room: &Room) -> LingoResult<Room> {
    room.validate()?;

    let updated = sqlx::query_as::<_, DbRoom>(
        r#"
        UPDATE rooms
        SET conference_id = $2, name = $3
        WHERE id = $1
        RETURNING id, conference_id, name
        "#,
    )
    .bind(room.id)
    .bind(room.conference_id)
    .bind(&room.name)
    .fetch_optional(pool)
    .await
    .map_err(map_write_error)?
    .ok_or_else(|| not_found(EntityKind::Room, room.id))?;

    Ok(updated.into())
}

/// Fails while talks or booths are located in the room.
pub async fn delete_room(pool: &DbPool, id: Uuid) -> LingoResult<()> {
    delete_row(pool, EntityKind::Room, id).await
}
