use thiserror::Error;

use crate::domain::name::NameError;
use crate::domain::workout::errors::WorkoutError;

/// Top-level error for routine operations
#[derive(Debug, Clone, Error)]
pub enum RoutineError {
    #[error("Invalid routine name: {0}")]
    InvalidName(#[from] NameError),

    /// Also returned for routines owned by another user.
    #[error("Routine not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<WorkoutError> for RoutineError {
    fn from(err: WorkoutError) -> Self {
        match err {
            WorkoutError::InvalidName(e) => RoutineError::InvalidName(e),
            WorkoutError::NotFound(id) => RoutineError::DatabaseError(format!(
                "Workout {} vanished while linking routine",
                id
            )),
            WorkoutError::DatabaseError(msg) => RoutineError::DatabaseError(msg),
        }
    }
}
