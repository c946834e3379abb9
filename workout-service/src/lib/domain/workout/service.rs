use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::UserId;
use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::models::CreateWorkoutCommand;
use crate::domain::workout::models::NewWorkout;
use crate::domain::workout::models::Workout;
use crate::domain::workout::models::WorkoutId;
use crate::domain::workout::ports::WorkoutRepository;
use crate::domain::workout::ports::WorkoutServicePort;

/// Domain service implementation for workout operations.
pub struct WorkoutService<WR>
where
    WR: WorkoutRepository,
{
    repository: Arc<WR>,
}

impl<WR> WorkoutService<WR>
where
    WR: WorkoutRepository,
{
    pub fn new(repository: Arc<WR>) -> Self {
        Self { repository }
    }

    async fn find_owned(&self, owner: UserId, id: WorkoutId) -> Result<Workout, WorkoutError> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(|workout| workout.user_id == owner)
            .ok_or(WorkoutError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<WR> WorkoutServicePort for WorkoutService<WR>
where
    WR: WorkoutRepository,
{
    async fn create_workout(
        &self,
        owner: UserId,
        command: CreateWorkoutCommand,
    ) -> Result<Workout, WorkoutError> {
        let workout = self
            .repository
            .create(NewWorkout {
                user_id: owner,
                name: command.name,
                description: command.description,
            })
            .await?;

        tracing::debug!(workout_id = %workout.id, user_id = %owner, "Workout created");

        Ok(workout)
    }

    async fn get_workout(&self, owner: UserId, id: WorkoutId) -> Result<Workout, WorkoutError> {
        self.find_owned(owner, id).await
    }

    async fn list_workouts(&self, owner: UserId) -> Result<Vec<Workout>, WorkoutError> {
        self.repository.list_by_user(owner).await
    }

    async fn delete_workout(&self, owner: UserId, id: WorkoutId) -> Result<(), WorkoutError> {
        let workout = self.find_owned(owner, id).await?;
        self.repository.delete(workout.id).await
    }
}
