// src/task.rs

use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::app_state::AppState;
use crate::error::TaskError;
use crate::repository::TaskRepository;
use crate::validation::{is_valid_date, is_valid_status};

/// A task as stored and as serialized on the wire. The JSON field names are
/// kept in Portuguese for compatibility with existing clients.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Task {
    pub id: i32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    pub status: String,
    #[serde(rename = "data_vencimento")]
    pub due_date: Option<String>,
}

/// Client-supplied fields of a task, validated by the handlers before they
/// reach the repository.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub due_date: Option<String>,
}

/// Request payload for creating a task, and for updating one (PUT is a full
/// replacement, so both routes take the same shape). Required fields are
/// checked by hand so a missing `titulo` gets the same error as an empty one.
#[derive(Debug, Deserialize)]
pub struct TaskPayload {
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "data_vencimento")]
    pub due_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    pub status: Option<String>,
}

/// Check the required-field rule and the two field validators, in the order
/// the client should see them reported.
fn validate_payload(payload: &TaskPayload) -> Result<NewTask, HttpResponse> {
    let title = payload.title.clone().unwrap_or_default();
    let status = payload.status.clone().unwrap_or_default();

    if title.is_empty() || status.is_empty() {
        return Err(HttpResponse::BadRequest().json(json!({
            "error": "title and status are required"
        })));
    }
    if !is_valid_status(&status) {
        return Err(HttpResponse::BadRequest().json(json!({
            "error": "invalid status"
        })));
    }
    if !is_valid_date(payload.due_date.as_deref().unwrap_or("")) {
        return Err(HttpResponse::BadRequest().json(json!({
            "error": "invalid due date"
        })));
    }

    Ok(NewTask {
        title,
        description: payload.description.clone(),
        status,
        due_date: payload.due_date.clone(),
    })
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "error": "Internal server error" }))
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Task not found" }))
}

/// GET / — liveness greeting
pub async fn home() -> impl Responder {
    HttpResponse::Ok().body("Welcome to the Task API!")
}

/// CREATE a new task
pub async fn create_task(
    data: web::Data<AppState>,
    payload: web::Json<TaskPayload>,
) -> impl Responder {
    let task = match validate_payload(&payload) {
        Ok(task) => task,
        Err(resp) => return resp,
    };

    match data.repo.create(task).await {
        Ok(created) => {
            info!("Task created: {}", created.id);
            HttpResponse::Created().json(created)
        }
        Err(e) => {
            error!("Error creating task: {}", e);
            internal_error()
        }
    }
}

/// LIST tasks, optionally filtered by status. An unrecognized filter value is
/// ignored rather than rejected, so the full list comes back.
pub async fn list_tasks(
    data: web::Data<AppState>,
    query: web::Query<ListTasksQuery>,
) -> impl Responder {
    let filter = query.status.as_deref().filter(|s| is_valid_status(s));

    match data.repo.list(filter).await {
        Ok(tasks) => HttpResponse::Ok().json(tasks),
        Err(e) => {
            error!("Error listing tasks: {}", e);
            internal_error()
        }
    }
}

/// GET a single task
pub async fn get_task(data: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let id = path.into_inner();

    match data.repo.get(id).await {
        Ok(Some(task)) => HttpResponse::Ok().json(task),
        Ok(None) => not_found(),
        Err(e) => {
            error!("Error fetching task {}: {}", id, e);
            internal_error()
        }
    }
}

/// UPDATE an existing task. Full replacement: every field is resupplied and
/// absent optional fields become null.
pub async fn update_task(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    payload: web::Json<TaskPayload>,
) -> impl Responder {
    let id = path.into_inner();
    let task = match validate_payload(&payload) {
        Ok(task) => task,
        Err(resp) => return resp,
    };

    match data.repo.update(id, task).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(TaskError::NotFound) => not_found(),
        Err(e) => {
            error!("Error updating task {}: {}", id, e);
            internal_error()
        }
    }
}

/// DELETE a task
pub async fn delete_task(data: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let id = path.into_inner();

    match data.repo.delete(id).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Task deleted successfully" })),
        Err(TaskError::NotFound) => not_found(),
        Err(e) => {
            error!("Error deleting task {}: {}", id, e);
            internal_error()
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home)).service(
        web::scope("/tasks")
            .route("", web::post().to(create_task))
            .route("", web::get().to(list_tasks))
            .route("/{id}", web::get().to(get_task))
            .route("/{id}", web::put().to(update_task))
            .route("/{id}", web::delete().to(delete_task)),
    );
}
