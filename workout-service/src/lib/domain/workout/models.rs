use std::fmt;

use crate::domain::name::DisplayName;
use crate::domain::user::models::UserId;

/// Workout entity, owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: WorkoutId,
    pub user_id: UserId,
    pub name: DisplayName,
    pub description: Option<String>,
}

/// Workout unique identifier type, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkoutId(pub i64);

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a workout for the calling user
#[derive(Debug)]
pub struct CreateWorkoutCommand {
    pub name: DisplayName,
    pub description: Option<String>,
}

/// Workout to insert; the store assigns `id`.
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub user_id: UserId,
    pub name: DisplayName,
    pub description: Option<String>,
}
