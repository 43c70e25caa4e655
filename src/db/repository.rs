use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use tracing::error;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{
    Class, ClassSummary, EnrolledStudent, Enrollment, NewClassRequest, Topic,
    UpdateClassRequest, WeekPlan,
};
use crate::planner::ids;

// Memorable codes have a small keyspace, so the primary key can collide; a
// handful of re-mints covers it.
const ID_MINT_ATTEMPTS: usize = 5;

pub async fn insert_class(db: &SqlitePool, req: &NewClassRequest) -> Result<Class, AppError> {
    let now = Utc::now().to_rfc3339();

    for _ in 0..ID_MINT_ATTEMPTS {
        let id = ids::memorable_id();
        let result = sqlx::query(
            r#"
            INSERT INTO classes
                (id, title, description, objectives, duration, target_audience,
                user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&req.title)
        .bind(&req.description)
        .bind(&req.objectives)
        .bind(req.duration)
        .bind(&req.target_audience)
        .bind(&req.user_id)
        .bind(&now)
        .bind(&now)
        .execute(db)
        .await;

        match result {
            Ok(_) => {
                return Ok(Class {
                    id,
                    title: req.title.clone(),
                    description: req.description.clone(),
                    objectives: req.objectives.clone(),
                    duration: req.duration,
                    target_audience: req.target_audience.clone(),
                    user_id: req.user_id.clone(),
                    created_at: now.clone(),
                    updated_at: now.clone(),
                });
            }
            Err(e) if is_unique_violation(&e) => continue,
            Err(e) => return Err(e.into()),
        }
    }

    error!("exhausted join-code attempts inserting class");
    Err(AppError::InternalServerError)
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|d| d.is_unique_violation())
        .unwrap_or(false)
}

pub async fn find_class_by_id(db: &SqlitePool, id: &str) -> Result<Option<Class>, AppError> {
    let class = sqlx::query_as::<_, Class>(
        "SELECT id, title, description, objectives, duration, target_audience, user_id, created_at, updated_at FROM classes WHERE id = ?"
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(class)
}

pub async fn fetch_class_summaries(
    db: &SqlitePool,
    user_id: &str,
) -> Result<Vec<ClassSummary>, AppError> {
    let classes = sqlx::query_as::<_, ClassSummary>(
        "SELECT id, title FROM classes WHERE user_id = ? ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(classes)
}

pub async fn update_class(
    db: &SqlitePool,
    id: &str,
    req: &UpdateClassRequest,
) -> Result<bool, AppError> {
    let now = Utc::now().to_rfc3339();
    let rows = sqlx::query(
        r#"
        UPDATE classes
        SET title = ?, description = ?, objectives = ?, duration = ?,
            target_audience = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.objectives)
    .bind(req.duration)
    .bind(&req.target_audience)
    .bind(&now)
    .bind(id)
    .execute(db)
    .await?
    .rows_affected();
    Ok(rows > 0)
}

pub async fn delete_class(db: &SqlitePool, id: &str) -> Result<bool, AppError> {
    // Children go first; SQLite only honors the schema's cascades when the
    // foreign_keys pragma is on, so don't depend on it.
    let mut tx = db.begin().await?;
    sqlx::query("DELETE FROM week_plans WHERE class_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM enrollments WHERE class_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    let rows = sqlx::query("DELETE FROM classes WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    tx.commit().await?;
    Ok(rows > 0)
}

/// Replaces a class's entire week set in one transaction. Row ids are always
/// minted fresh; session-scoped editor ids never reach storage.
pub async fn replace_week_plans(
    db: &SqlitePool,
    class_id: &str,
    weeks: &[WeekPlan],
) -> Result<(), AppError> {
    let now = Utc::now().to_rfc3339();
    let mut tx = db.begin().await?;

    sqlx::query("DELETE FROM week_plans WHERE class_id = ?")
        .bind(class_id)
        .execute(&mut *tx)
        .await?;

    for week in weeks {
        let topics = serialize_topics(&week.topics)?;
        sqlx::query(
            r#"
            INSERT INTO week_plans
                (id, class_id, week_number, title, topics, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(class_id)
        .bind(week.week_number as i64)
        .bind(&week.title)
        .bind(&topics)
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

#[derive(Debug, FromRow)]
struct WeekPlanRow {
    id: String,
    week_number: i64,
    title: String,
    topics: String,
}

pub async fn fetch_week_plans(db: &SqlitePool, class_id: &str) -> Result<Vec<WeekPlan>, AppError> {
    let rows = sqlx::query_as::<_, WeekPlanRow>(
        "SELECT id, week_number, title, topics FROM week_plans WHERE class_id = ? ORDER BY week_number",
    )
    .bind(class_id)
    .fetch_all(db)
    .await?;

    rows.into_iter()
        .map(|row| {
            Ok(WeekPlan {
                id: row.id,
                week_number: row.week_number as u32,
                title: row.title,
                topics: deserialize_topics(&row.topics)?,
            })
        })
        .collect()
}

fn serialize_topics(topics: &[Topic]) -> Result<String, AppError> {
    serde_json::to_string(topics).map_err(|e| {
        error!("failed to serialize topics: {}", e);
        AppError::InternalServerError
    })
}

fn deserialize_topics(raw: &str) -> Result<Vec<Topic>, AppError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| {
        error!("failed to parse stored topics: {}", e);
        AppError::InternalServerError
    })
}

pub async fn insert_enrollment(
    db: &SqlitePool,
    class_id: &str,
    user_id: &str,
    role: &str,
) -> Result<Enrollment, AppError> {
    let now = Utc::now().to_rfc3339();
    sqlx::query(
        "INSERT INTO enrollments (class_id, user_id, role, joined_at) VALUES (?, ?, ?, ?)",
    )
    .bind(class_id)
    .bind(user_id)
    .bind(role)
    .bind(&now)
    .execute(db)
    .await?;

    Ok(Enrollment {
        class_id: class_id.to_string(),
        user_id: user_id.to_string(),
        role: role.to_string(),
        joined_at: now,
    })
}

pub async fn find_enrollment(
    db: &SqlitePool,
    class_id: &str,
    user_id: &str,
) -> Result<Option<Enrollment>, AppError> {
    let enrollment = sqlx::query_as::<_, Enrollment>(
        "SELECT class_id, user_id, role, joined_at FROM enrollments WHERE class_id = ? AND user_id = ?"
    )
    .bind(class_id)
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(enrollment)
}

pub async fn fetch_students(
    db: &SqlitePool,
    class_id: &str,
) -> Result<Vec<EnrolledStudent>, AppError> {
    let students = sqlx::query_as::<_, EnrolledStudent>(
        "SELECT user_id, joined_at FROM enrollments WHERE class_id = ? AND role = 'student' ORDER BY joined_at"
    )
    .bind(class_id)
    .fetch_all(db)
    .await?;
    Ok(students)
}
