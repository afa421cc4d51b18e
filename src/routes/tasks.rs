use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{NewTask, Task, TaskUpdate},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

const TASK_NOT_FOUND: &str = "Task not found";

/// Lists every task, newest first.
///
/// The list is shared: all authenticated callers see the same tasks.
///
/// ## Responses:
/// - `200 OK`: JSON array of `Task` ordered by descending id.
/// - `401 Unauthorized` / `403 Forbidden`: invalid or missing token.
/// - `500 Internal Server Error`: database failure.
#[get("")]
pub async fn list_tasks(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = sqlx::query_as::<_, Task>("SELECT id, title, done FROM tasks ORDER BY id DESC")
        .fetch_all(&**pool)
        .await
        .map_err(|e| AppError::internal("Failed to fetch tasks", e))?;

    log::debug!("Listed {} tasks for {}", tasks.len(), user.0.username);
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a task with the trimmed title and `done = false`.
///
/// ## Request Body:
/// - `title`: required, must not be blank.
///
/// ## Responses:
/// - `201 Created`: the new `Task`, including its store-assigned id.
/// - `400 Bad Request`: missing or blank title.
/// - `401 Unauthorized` / `403 Forbidden`: invalid or missing token.
/// - `500 Internal Server Error`: database failure.
#[post("")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    task_data: web::Json<NewTask>,
) -> Result<impl Responder, AppError> {
    task_data
        .validate()
        .map_err(|_| AppError::ValidationError("Title is required".into()))?;

    let task = sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (title, done) VALUES ($1, FALSE) RETURNING id, title, done",
    )
    .bind(task_data.trimmed_title())
    .fetch_one(&**pool)
    .await
    .map_err(|e| AppError::internal("Failed to create task", e))?;

    log::info!("Task {} created by {}", task.id, user.0.username);
    Ok(HttpResponse::Created().json(task))
}

/// Applies a partial update to a task.
///
/// Only the fields present in the body are written; at least one is required.
///
/// ## Path Parameters:
/// - `id`: integer id of the task.
///
/// ## Request Body:
/// - `title` (optional): new title, must not be blank.
/// - `done` (optional): new completion flag.
///
/// ## Responses:
/// - `200 OK`: `{"ok": true}`.
/// - `400 Bad Request`: empty body, blank title or non-integer id.
/// - `401 Unauthorized` / `403 Forbidden`: invalid or missing token.
/// - `404 Not Found`: no task has this id.
/// - `500 Internal Server Error`: database failure.
#[put("/{id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    task_id: web::Path<i32>,
    task_data: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    let task_id = task_id.into_inner();
    let update = task_data.into_inner();

    if update.is_empty() {
        return Err(AppError::ValidationError("Nothing to update".into()));
    }
    update
        .validate()
        .map_err(|_| AppError::ValidationError("Title cannot be empty".into()))?;

    let mut assignments: Vec<String> = Vec::new();
    let mut param_count = 1;

    if update.title.is_some() {
        assignments.push(format!("title = ${}", param_count));
        param_count += 1;
    }
    if update.done.is_some() {
        assignments.push(format!("done = ${}", param_count));
        param_count += 1;
    }

    let sql = format!(
        "UPDATE tasks SET {} WHERE id = ${}",
        assignments.join(", "),
        param_count
    );

    let mut query = sqlx::query(&sql);
    if let Some(title) = &update.title {
        query = query.bind(title.trim().to_string());
    }
    if let Some(done) = update.done {
        query = query.bind(done);
    }

    let result = query
        .bind(task_id)
        .execute(&**pool)
        .await
        .map_err(|e| AppError::internal("Failed to update task", e))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(TASK_NOT_FOUND.into()));
    }

    log::info!("Task {} updated by {}", task_id, user.0.username);
    Ok(HttpResponse::Ok().json(json!({ "ok": true })))
}

/// Deletes a task.
///
/// ## Responses:
/// - `204 No Content`: the task was removed.
/// - `400 Bad Request`: non-integer id.
/// - `401 Unauthorized` / `403 Forbidden`: invalid or missing token.
/// - `404 Not Found`: no task has this id.
/// - `500 Internal Server Error`: database failure.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let task_id = task_id.into_inner();

    let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(task_id)
        .execute(&**pool)
        .await
        .map_err(|e| AppError::internal("Failed to delete task", e))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(TASK_NOT_FOUND.into()));
    }

    log::info!("Task {} deleted by {}", task_id, user.0.username);
    Ok(HttpResponse::NoContent().finish())
}
