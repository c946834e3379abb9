use std::fmt;

use crate::domain::name::DisplayName;
use crate::domain::user::models::UserId;
use crate::domain::workout::models::Workout;
use crate::domain::workout::models::WorkoutId;

/// Routine aggregate: a named, ordered-by-id group of the owner's workouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    pub id: RoutineId,
    pub user_id: UserId,
    pub name: DisplayName,
    pub description: Option<String>,
    pub workouts: Vec<Workout>,
}

/// Routine unique identifier type, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutineId(pub i64);

impl fmt::Display for RoutineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a routine for the calling user
#[derive(Debug)]
pub struct CreateRoutineCommand {
    pub name: DisplayName,
    pub description: Option<String>,
    pub workout_ids: Vec<WorkoutId>,
}

/// Routine to insert; `workout_ids` are already verified to belong to `user_id`.
#[derive(Debug, Clone)]
pub struct NewRoutine {
    pub user_id: UserId,
    pub name: DisplayName,
    pub description: Option<String>,
    pub workout_ids: Vec<WorkoutId>,
}
