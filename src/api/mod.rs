use axum::Json;
use axum::extract::{Path, Query};
use axum::routing::post;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;
use tracing::info;

use crate::db::repository;
use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

#[derive(Deserialize)]
struct UserParams {
    user_id: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/classes", get(list_classes).post(create_class))
        .route(
            "/classes/{id}",
            get(get_class).put(update_class).delete(delete_class),
        )
        .route("/classes/join", post(join_class))
        .route("/classes/{id}/students", get(list_students))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn list_classes(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
) -> Result<Json<Vec<ClassSummary>>, AppError> {
    let classes = repository::fetch_class_summaries(&state.db, &params.user_id).await?;
    Ok(Json(classes))
}

async fn create_class(
    State(state): State<AppState>,
    Json(req): Json<NewClassRequest>,
) -> Result<Json<ClassWithWeeks>, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    if req.duration < 1 {
        return Err(AppError::BadRequest(
            "Duration must be at least one week".to_string(),
        ));
    }

    let class = repository::insert_class(&state.db, &req).await?;
    repository::replace_week_plans(&state.db, &class.id, &req.weeks).await?;
    // The save path re-mints week row ids, so read back what was stored.
    let weeks = repository::fetch_week_plans(&state.db, &class.id).await?;

    info!("created class {} with {} weeks", class.id, weeks.len());
    Ok(Json(ClassWithWeeks { class, weeks }))
}

async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserParams>,
) -> Result<Json<ClassWithWeeks>, AppError> {
    let class = repository::find_class_by_id(&state.db, &id)
        .await?
        .ok_or(AppError::NotFound)?;

    if class.user_id != params.user_id {
        let enrolled = repository::find_enrollment(&state.db, &id, &params.user_id).await?;
        if enrolled.is_none() {
            return Err(AppError::Forbidden(
                "You do not have access to this class".to_string(),
            ));
        }
    }

    let weeks = repository::fetch_week_plans(&state.db, &id).await?;
    Ok(Json(ClassWithWeeks { class, weeks }))
}

async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateClassRequest>,
) -> Result<Json<ClassWithWeeks>, AppError> {
    let class = repository::find_class_by_id(&state.db, &id)
        .await?
        .ok_or(AppError::NotFound)?;

    if class.user_id != req.user_id {
        return Err(AppError::Forbidden(
            "Only the class owner can edit it".to_string(),
        ));
    }
    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    if req.duration < 1 {
        return Err(AppError::BadRequest(
            "Duration must be at least one week".to_string(),
        ));
    }

    repository::update_class(&state.db, &id, &req).await?;
    repository::replace_week_plans(&state.db, &id, &req.weeks).await?;

    let class = repository::find_class_by_id(&state.db, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    let weeks = repository::fetch_week_plans(&state.db, &id).await?;
    Ok(Json(ClassWithWeeks { class, weeks }))
}

async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserParams>,
) -> Result<StatusCode, AppError> {
    let class = repository::find_class_by_id(&state.db, &id)
        .await?
        .ok_or(AppError::NotFound)?;

    if class.user_id != params.user_id {
        return Err(AppError::Forbidden(
            "Only the class owner can delete it".to_string(),
        ));
    }

    repository::delete_class(&state.db, &id).await?;
    info!("deleted class {}", id);
    Ok(StatusCode::NO_CONTENT)
}

async fn join_class(
    State(state): State<AppState>,
    Json(req): Json<JoinClassRequest>,
) -> Result<Json<Enrollment>, AppError> {
    if req.class_code.trim().is_empty() {
        return Err(AppError::BadRequest("Class code is required".to_string()));
    }

    let class = repository::find_class_by_id(&state.db, &req.class_code)
        .await?
        .ok_or(AppError::NotFound)?;

    if repository::find_enrollment(&state.db, &class.id, &req.user_id)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(
            "You are already enrolled in this class".to_string(),
        ));
    }

    let enrollment =
        repository::insert_enrollment(&state.db, &class.id, &req.user_id, "student").await?;
    info!("user {} joined class {}", req.user_id, class.id);
    Ok(Json(enrollment))
}

async fn list_students(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserParams>,
) -> Result<Json<Vec<EnrolledStudent>>, AppError> {
    let class = repository::find_class_by_id(&state.db, &id)
        .await?
        .ok_or(AppError::NotFound)?;

    // The roster is visible to the class creator and to teacher-role
    // enrollees, nobody else.
    let is_creator = class.user_id == params.user_id;
    let is_teacher = repository::find_enrollment(&state.db, &id, &params.user_id)
        .await?
        .map(|e| e.role == "teacher")
        .unwrap_or(false);

    if !is_creator && !is_teacher {
        return Err(AppError::Forbidden(
            "Only teachers can view enrolled students".to_string(),
        ));
    }

    let students = repository::fetch_students(&state.db, &id).await?;
    Ok(Json(students))
}
