use c3lingo_core::errors::LingoResult;
use c3lingo_core::models::user::{CreateUserRequest, User};
use c3lingo_core::registry::EntityKind;
use chrono::Utc;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::error::{map_read_error, map_write_error};
use crate::models::DbUser;
use crate::repositories::{delete_row, not_found};
use crate::DbPool;

pub async fn create_user(pool: &DbPool, request: &CreateUserRequest) -> LingoResult<User> {
    request.validate()?;
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating user: id={}, username={}", id, request.username);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, username, email, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, username, email, created_at
        "#,
    )
    .bind(id)
    .bind(&request.username)
    .bind(&request.email)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(map_write_error)?;

    Ok(user.into())
}

pub async fn get_user_by_id(pool: &DbPool, id: Uuid) -> LingoResult<Option<User>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, email, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_read_error)?;

    Ok(user.map(User::from))
}

pub async fn get_user_by_username(pool: &DbPool, username: &str) -> LingoResult<Option<User>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, email, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
    .map_err(map_read_error)?;

    Ok(user.map(User::from))
}

pub async fn list_users(executor: impl SqliteExecutor<'_>) -> LingoResult<Vec<User>> {
    let users = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, email, created_at
        FROM users
        ORDER BY username ASC
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(map_read_error)?;

    Ok(users.into_iter().map(User::from).collect())
}

pub async fn update_user(pool: &DbPool, user: &User) -> LingoResult<User> {
    user.validate()?;

    let updated = sqlx::query_as::<_, DbUser>(
        r#"
        UPDATE users
        SET username = $2, email = $3
        WHERE id = $1
        RETURNING id, username, email, created_at
        "#,
    )
    .bind(user.id)
    .bind(&user.username)
    .bind(&user.email)
    .fetch_optional(pool)
    .await
    .map_err(map_write_error)?
    .ok_or_else(|| not_found(EntityKind::User, user.id))?;

    Ok(updated.into())
}

/// Removes the translator profile, spoken languages and shift assignments
/// of the user. Translations they authored stay, without an author.
pub async fn delete_user(pool: &DbPool, id: Uuid) -> LingoResult<()> {
    delete_row(pool, EntityKind::User, id).await
}
