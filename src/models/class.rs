use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::WeekPlan;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: String,
    pub title: String,
    pub description: String,
    pub objectives: String,
    pub duration: i64,
    pub target_audience: String,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClassRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub objectives: String,
    pub duration: i64,
    #[serde(default)]
    pub target_audience: String,
    pub user_id: String,
    #[serde(default)]
    pub weeks: Vec<WeekPlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub objectives: String,
    pub duration: i64,
    #[serde(default)]
    pub target_audience: String,
    pub user_id: String,
    pub weeks: Vec<WeekPlan>,
}

/// What the class list endpoint returns per class.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClassSummary {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassWithWeeks {
    #[serde(flatten)]
    pub class: Class,
    pub weeks: Vec<WeekPlan>,
}
