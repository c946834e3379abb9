use async_trait::async_trait;

use crate::domain::user::models::UserId;
use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::models::CreateWorkoutCommand;
use crate::domain::workout::models::NewWorkout;
use crate::domain::workout::models::Workout;
use crate::domain::workout::models::WorkoutId;

/// Port for workout domain service operations.
///
/// Every operation is scoped to `owner`, the identity resolved for the request.
#[async_trait]
pub trait WorkoutServicePort: Send + Sync + 'static {
    async fn create_workout(
        &self,
        owner: UserId,
        command: CreateWorkoutCommand,
    ) -> Result<Workout, WorkoutError>;

    /// # Errors
    /// * `NotFound` - No such workout for `owner`
    async fn get_workout(&self, owner: UserId, id: WorkoutId) -> Result<Workout, WorkoutError>;

    async fn list_workouts(&self, owner: UserId) -> Result<Vec<Workout>, WorkoutError>;

    /// # Errors
    /// * `NotFound` - No such workout for `owner`
    async fn delete_workout(&self, owner: UserId, id: WorkoutId) -> Result<(), WorkoutError>;
}

/// Persistence operations for workouts.
#[async_trait]
pub trait WorkoutRepository: Send + Sync + 'static {
    async fn create(&self, workout: NewWorkout) -> Result<Workout, WorkoutError>;

    async fn find_by_id(&self, id: WorkoutId) -> Result<Option<Workout>, WorkoutError>;

    /// Workouts of `user_id`, ordered by id.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Workout>, WorkoutError>;

    /// Subset of `ids` that exist and belong to `user_id` (missing IDs are skipped without error).
    async fn find_by_ids_for_user(
        &self,
        user_id: UserId,
        ids: &[WorkoutId],
    ) -> Result<Vec<Workout>, WorkoutError>;

    /// # Errors
    /// * `NotFound` - Workout does not exist
    async fn delete(&self, id: WorkoutId) -> Result<(), WorkoutError>;
}
