//! Request handlers for the `/students` resource.
//!
//! Each handler validates its path and body before touching the store, then
//! runs exactly one store call on the blocking pool.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_store::{StoreResult, StudentStore};
use roster_types::{CreatedResponse, MessageResponse, StudentId, StudentPayload, StudentRecord};
use tracing::info;

use crate::error::{ApiError, ApiResult, Operation};
use crate::AppState;

async fn with_store<T, F>(store: &StudentStore, op: Operation, f: F) -> ApiResult<T>
where
    F: FnOnce(&StudentStore) -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let store = store.clone();
    tokio::task::spawn_blocking(move || f(&store))
        .await
        .map_err(|e| ApiError::Store {
            op,
            message: e.to_string(),
        })?
        .map_err(|e| ApiError::from_store(op, e))
}

/// `POST /students`
pub async fn create_student(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let fields = StudentPayload::from_json(&body)?;

    let to_insert = fields.clone();
    let id = with_store(&state.store, Operation::Create, move |store| {
        store.insert(&to_insert)
    })
    .await?;

    info!("Student {} added", id);
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Student successfully added!".to_string(),
            id,
            student: fields,
        }),
    ))
}

/// `GET /students`
pub async fn list_students(State(state): State<AppState>) -> ApiResult<Json<Vec<StudentRecord>>> {
    let students = with_store(&state.store, Operation::List, |store| store.select_all()).await?;
    Ok(Json(students))
}

/// `PUT /students/{id}`
pub async fn update_student(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<MessageResponse>> {
    let id: StudentId = raw_id.parse()?;
    let fields = StudentPayload::from_json(&body)?;

    let changed = with_store(&state.store, Operation::Update, move |store| {
        store.update(id, &fields)
    })
    .await?;
    if changed == 0 {
        return Err(ApiError::NotFound(id));
    }

    info!("Student {} updated", id);
    Ok(Json(MessageResponse::new("Student successfully updated!")))
}

/// `DELETE /students/{id}`
pub async fn delete_student(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id: StudentId = raw_id.parse()?;

    let removed =
        with_store(&state.store, Operation::Delete, move |store| store.delete(id)).await?;
    if removed == 0 {
        return Err(ApiError::NotFound(id));
    }

    info!("Student {} deleted", id);
    Ok(Json(MessageResponse::new("Student deleted successfully")))
}
