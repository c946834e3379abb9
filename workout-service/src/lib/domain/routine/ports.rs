use async_trait::async_trait;

use crate::domain::routine::errors::RoutineError;
use crate::domain::routine::models::CreateRoutineCommand;
use crate::domain::routine::models::NewRoutine;
use crate::domain::routine::models::Routine;
use crate::domain::routine::models::RoutineId;
use crate::domain::user::models::UserId;

/// Port for routine domain service operations, scoped to the calling user.
#[async_trait]
pub trait RoutineServicePort: Send + Sync + 'static {
    /// Create a routine linking the given workouts.
    ///
    /// Workout ids that do not exist or belong to someone else are skipped.
    async fn create_routine(
        &self,
        owner: UserId,
        command: CreateRoutineCommand,
    ) -> Result<Routine, RoutineError>;

    /// Routines of `owner`, each with its workouts.
    async fn list_routines(&self, owner: UserId) -> Result<Vec<Routine>, RoutineError>;

    /// # Errors
    /// * `NotFound` - No such routine for `owner`
    async fn delete_routine(&self, owner: UserId, id: RoutineId) -> Result<(), RoutineError>;
}

/// Persistence operations for routines and their workout links.
#[async_trait]
pub trait RoutineRepository: Send + Sync + 'static {
    /// Insert the routine and its workout links atomically.
    async fn create(&self, routine: NewRoutine) -> Result<Routine, RoutineError>;

    async fn find_by_id(&self, id: RoutineId) -> Result<Option<Routine>, RoutineError>;

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Routine>, RoutineError>;

    /// Remove the routine and its links; linked workouts are kept.
    ///
    /// # Errors
    /// * `NotFound` - Routine does not exist
    async fn delete(&self, id: RoutineId) -> Result<(), RoutineError>;
}
