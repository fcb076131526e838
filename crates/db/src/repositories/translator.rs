use c3lingo_core::errors::LingoResult;
use c3lingo_core::models::translator::{generate_secret_token, CreateTranslatorRequest, Translator};
use c3lingo_core::registry::EntityKind;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::error::{map_read_error, map_write_error};
use crate::models::DbTranslator;
use crate::repositories::{delete_row, not_found};
use crate::DbPool;

/// Creates the translator profile of a user with a fresh secret token.
///
/// Fails with a uniqueness violation if the user already has one.
pub async fn create_translator(
    pool: &DbPool,
    request: &CreateTranslatorRequest,
) -> LingoResult<Translator> {
    let id = Uuid::new_v4();
    let secret_token = generate_secret_token();

    tracing::debug!(
        "Creating translator: id={}, user_id={}, confirmed={}",
        id, request.user_id, request.confirmed
    );

    let translator = sqlx::query_as::<_, DbTranslator>(
        r#"
        INSERT INTO translators (id, user_id, confirmed, bio, contact_info, secret_token)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, confirmed, bio, contact_info, secret_token
        "#,
    )
    .bind(id)
    .bind(request.user_id)
    .bind(request.confirmed)
    .bind(&request.bio)
    .bind(&request.contact_info)
    .bind(&secret_token)
    .fetch_one(pool)
    .await
    .map_err(map_write_error)?;

    Ok(translator.into())
}

pub async fn get_translator_by_id(pool: &DbPool, id: Uuid) -> LingoResult<Option<Translator>> {
    let translator = sqlx::query_as::<_, DbTranslator>(
        r#"
        SELECT id, user_id, confirmed, bio, contact_info, secret_token
        FROM translators
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_read_error)?;

    Ok(translator.map(Translator::from))
}

pub async fn get_translator_by_user(pool: &DbPool, user_id: Uuid) -> LingoResult<Option<Translator>> {
    let translator = sqlx::query_as::<_, DbTranslator>(
        r#"
        SELECT id, user_id, confirmed, bio, contact_info, secret_token
        FROM translators
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(map_read_error)?;

    Ok(translator.map(Translator::from))
}

/// Looks up the translator a calendar feed token belongs to.
pub async fn get_translator_by_secret_token(
    pool: &DbPool,
    secret_token: &str,
) -> LingoResult<Option<Translator>> {
    let translator = sqlx::query_as::<_, DbTranslator>(
        r#"
        SELECT id, user_id, confirmed, bio, contact_info, secret_token
        FROM translators
        WHERE secret_token = $1
        "#,
    )
    .bind(secret_token)
    .fetch_optional(pool)
    .await
    .map_err(map_read_error)?;

    Ok(translator.map(Translator::from))
}

pub async fn list_translators(executor: impl SqliteExecutor<'_>) -> LingoResult<Vec<Translator>> {
    let translators = sqlx::query_as::<_, DbTranslator>(
        r#"
        SELECT t.id, t.user_id, t.confirmed, t.bio, t.contact_info, t.secret_token
        FROM translators t
        JOIN users u ON u.id = t.user_id
        ORDER BY u.username ASC
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(map_read_error)?;

    Ok(translators.into_iter().map(Translator::from).collect())
}

/// Writes the profile fields. The user and the secret token never change.
pub async fn update_translator(pool: &DbPool, translator: &Translator) -> LingoResult<Translator> {
    let updated = sqlx::query_as::<_, DbTranslator>(
        r#"
        UPDATE translators
        SET confirmed = $2, bio = $3, contact_info = $4
        WHERE id = $1
        RETURNING id, user_id, confirmed, bio, contact_info, secret_token
        "#,
    )
    .bind(translator.id)
    .bind(translator.confirmed)
    .bind(&translator.bio)
    .bind(&translator.contact_info)
    .fetch_optional(pool)
    .await
    .map_err(map_write_error)?
    .ok_or_else(|| not_found(EntityKind::Translator, translator.id))?;

    Ok(updated.into())
}

pub async fn delete_translator(pool: &DbPool, id: Uuid) -> LingoResult<()> {
    delete_row(pool, EntityKind::Translator, id).await
}
