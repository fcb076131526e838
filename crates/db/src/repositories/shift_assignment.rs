use c3lingo_core::errors::LingoResult;
use c3lingo_core::models::shift::{CreateShiftAssignmentRequest, ShiftAssignment};
use c3lingo_core::registry::EntityKind;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::error::{map_read_error, map_write_error};
use crate::models::DbShiftAssignment;
use crate::repositories::{delete_row, not_found};
use crate::DbPool;

pub async fn create_shift_assignment(
    pool: &DbPool,
    request: &CreateShiftAssignmentRequest,
) -> LingoResult<ShiftAssignment> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating shift assignment: id={}, shift_id={}, user_id={}, waitlisted={}",
        id, request.shift_id, request.user_id, request.waitlisted
    );

    let assignment = sqlx::query_as::<_, DbShiftAssignment>(
        r#"
        INSERT INTO shift_assignments (id, shift_id, user_id, waitlisted, freeloaded, comment)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, shift_id, user_id, waitlisted, freeloaded, comment
        "#,
    )
    .bind(id)
    .bind(request.shift_id)
    .bind(request.user_id)
    .bind(request.waitlisted)
    .bind(request.freeloaded)
    .bind(&request.comment)
    .fetch_one(pool)
    .await
    .map_err(map_write_error)?;

    Ok(assignment.into())
}

pub async fn get_shift_assignment_by_id(
    pool: &DbPool,
    id: Uuid,
) -> LingoResult<Option<ShiftAssignment>> {
    let assignment = sqlx::query_as::<_, DbShiftAssignment>(
        r#"
        SELECT id, shift_id, user_id, waitlisted, freeloaded, comment
        FROM shift_assignments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_read_error)?;

    Ok(assignment.map(ShiftAssignment::from))
}

pub async fn list_shift_assignments(
    executor: impl SqliteExecutor<'_>,
) -> LingoResult<Vec<ShiftAssignment>> {
    let assignments = sqlx::query_as::<_, DbShiftAssignment>(
        r#"
        SELECT id, shift_id, user_id, waitlisted, freeloaded, comment
        FROM shift_assignments
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(map_read_error)?;

    Ok(assignments.into_iter().map(ShiftAssignment::from).collect())
}

pub async fn find_assignments_for_shift(
    pool: &DbPool,
    shift_id: Uuid,
) -> LingoResult<Vec<ShiftAssignment>> {
    let assignments = sqlx::query_as::<_, DbShiftAssignment>(
        r#"
        SELECT id, shift_id, user_id, waitlisted, freeloaded, comment
        FROM shift_assignments
        WHERE shift_id = $1
        "#,
    )
    .bind(shift_id)
    .fetch_all(pool)
    .await
    .map_err(map_read_error)?;

    Ok(assignments.into_iter().map(ShiftAssignment::from).collect())
}

/// Assignments of a user, in talk start order.
pub async fn find_assignments_for_user(
    pool: &DbPool,
    user_id: Uuid,
) -> LingoResult<Vec<ShiftAssignment>> {
    let assignments = sqlx::query_as::<_, DbShiftAssignment>(
        r#"
        SELECT a.id, a.shift_id, a.user_id, a.waitlisted, a.freeloaded, a.comment
        FROM shift_assignments a
        JOIN shifts s ON s.id = a.shift_id
        JOIN talks t ON t.id = s.talk_id
        WHERE a.user_id = $1
        ORDER BY t.start ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(map_read_error)?;

    Ok(assignments.into_iter().map(ShiftAssignment::from).collect())
}

pub async fn update_shift_assignment(
    pool: &DbPool,
    assignment: &ShiftAssignment,
) -> LingoResult<ShiftAssignment> {
    let updated = sqlx::query_as::<_, DbShiftAssignment>(
        r#"
        UPDATE shift_assignments
        SET shift_id = $2, user_id = $3, waitlisted = $4, freeloaded = $5, comment = $6
        WHERE id = $1
        RETURNING id, shift_id, user_id, waitlisted, freeloaded, comment
        "#,
    )
    .bind(assignment.id)
    .bind(assignment.shift_id)
    .bind(assignment.user_id)
    .bind(assignment.waitlisted)
    .bind(assignment.freeloaded)
    .bind(&assignment.comment)
    .fetch_optional(pool)
    .await
    .map_err(map_write_error)?
    .ok_or_else(|| not_found(EntityKind::ShiftAssignment, assignment.id))?;

    Ok(updated.into())
}

pub async fn delete_shift_assignment(pool: &DbPool, id: Uuid) -> LingoResult<()> {
    delete_row(pool, EntityKind::ShiftAssignment, id).await
}
