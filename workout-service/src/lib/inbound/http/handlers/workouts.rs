use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::name::DisplayName;
use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::models::CreateWorkoutCommand;
use crate::domain::workout::models::Workout;
use crate::domain::workout::models::WorkoutId;
use crate::domain::workout::ports::WorkoutServicePort;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::extract::ApiPath;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_workout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<CreateWorkoutRequest>,
) -> Result<(StatusCode, Json<WorkoutData>), ApiError> {
    state
        .workout_service
        .create_workout(user.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref workout| (StatusCode::CREATED, Json(workout.into())))
}

/// Served at both `/workouts` and `/workouts/workouts`.
pub async fn list_workouts(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<WorkoutData>>, ApiError> {
    state
        .workout_service
        .list_workouts(user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|workouts| Json(workouts.iter().map(WorkoutData::from).collect()))
}

pub async fn get_workout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiPath(workout_id): ApiPath<i64>,
) -> Result<Json<WorkoutData>, ApiError> {
    state
        .workout_service
        .get_workout(user.user_id, WorkoutId(workout_id))
        .await
        .map_err(ApiError::from)
        .map(|ref workout| Json(workout.into()))
}

pub async fn delete_workout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiPath(workout_id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .workout_service
        .delete_workout(user.user_id, WorkoutId(workout_id))
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateWorkoutRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl CreateWorkoutRequest {
    fn try_into_command(self) -> Result<CreateWorkoutCommand, WorkoutError> {
        Ok(CreateWorkoutCommand {
            name: DisplayName::new(self.name)?,
            description: self.description,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutData {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<&Workout> for WorkoutData {
    fn from(workout: &Workout) -> Self {
        Self {
            id: workout.id.0,
            user_id: workout.user_id.0,
            name: workout.name.as_str().to_string(),
            description: workout.description.clone(),
        }
    }
}
