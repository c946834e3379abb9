use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::workouts::WorkoutData;
use super::ApiError;
use crate::domain::name::DisplayName;
use crate::domain::routine::errors::RoutineError;
use crate::domain::routine::models::CreateRoutineCommand;
use crate::domain::routine::models::Routine;
use crate::domain::routine::models::RoutineId;
use crate::domain::routine::ports::RoutineServicePort;
use crate::domain::workout::models::WorkoutId;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::extract::ApiPath;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_routine(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<CreateRoutineRequest>,
) -> Result<(StatusCode, Json<RoutineData>), ApiError> {
    state
        .routine_service
        .create_routine(user.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref routine| (StatusCode::CREATED, Json(routine.into())))
}

pub async fn list_routines(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<RoutineData>>, ApiError> {
    state
        .routine_service
        .list_routines(user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|routines| Json(routines.iter().map(RoutineData::from).collect()))
}

pub async fn delete_routine(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiPath(routine_id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .routine_service
        .delete_routine(user.user_id, RoutineId(routine_id))
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateRoutineRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    workouts: Vec<i64>,
}

impl CreateRoutineRequest {
    fn try_into_command(self) -> Result<CreateRoutineCommand, RoutineError> {
        Ok(CreateRoutineCommand {
            name: DisplayName::new(self.name)?,
            description: self.description,
            workout_ids: self.workouts.into_iter().map(WorkoutId).collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutineData {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub workouts: Vec<WorkoutData>,
}

impl From<&Routine> for RoutineData {
    fn from(routine: &Routine) -> Self {
        Self {
            id: routine.id.0,
            user_id: routine.user_id.0,
            name: routine.name.as_str().to_string(),
            description: routine.description.clone(),
            workouts: routine.workouts.iter().map(WorkoutData::from).collect(),
        }
    }
}
