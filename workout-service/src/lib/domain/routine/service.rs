use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::routine::errors::RoutineError;
use crate::domain::routine::models::CreateRoutineCommand;
use crate::domain::routine::models::NewRoutine;
use crate::domain::routine::models::Routine;
use crate::domain::routine::models::RoutineId;
use crate::domain::routine::ports::RoutineRepository;
use crate::domain::routine::ports::RoutineServicePort;
use crate::domain::user::models::UserId;
use crate::domain::workout::models::WorkoutId;
use crate::domain::workout::ports::WorkoutRepository;

/// Domain service implementation for routine operations.
pub struct RoutineService<RR, WR>
where
    RR: RoutineRepository,
    WR: WorkoutRepository,
{
    routines: Arc<RR>,
    workouts: Arc<WR>,
}

impl<RR, WR> RoutineService<RR, WR>
where
    RR: RoutineRepository,
    WR: WorkoutRepository,
{
    pub fn new(routines: Arc<RR>, workouts: Arc<WR>) -> Self {
        Self { routines, workouts }
    }
}

#[async_trait]
impl<RR, WR> RoutineServicePort for RoutineService<RR, WR>
where
    RR: RoutineRepository,
    WR: WorkoutRepository,
{
    async fn create_routine(
        &self,
        owner: UserId,
        command: CreateRoutineCommand,
    ) -> Result<Routine, RoutineError> {
        let requested: Vec<WorkoutId> = command
            .workout_ids
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let workout_ids: Vec<WorkoutId> = self
            .workouts
            .find_by_ids_for_user(owner, &requested)
            .await?
            .into_iter()
            .map(|workout| workout.id)
            .collect();

        if workout_ids.len() < requested.len() {
            tracing::debug!(
                user_id = %owner,
                requested = requested.len(),
                linked = workout_ids.len(),
                "Skipping unknown workouts in routine"
            );
        }

        let routine = self
            .routines
            .create(NewRoutine {
                user_id: owner,
                name: command.name,
                description: command.description,
                workout_ids,
            })
            .await?;

        tracing::debug!(routine_id = %routine.id, user_id = %owner, "Routine created");

        Ok(routine)
    }

    async fn list_routines(&self, owner: UserId) -> Result<Vec<Routine>, RoutineError> {
        self.routines.list_by_user(owner).await
    }

    async fn delete_routine(&self, owner: UserId, id: RoutineId) -> Result<(), RoutineError> {
        let routine = self
            .routines
            .find_by_id(id)
            .await?
            .filter(|routine| routine.user_id == owner)
            .ok_or(RoutineError::NotFound(id.to_string()))?;

        self.routines.delete(routine.id).await
    }
}
