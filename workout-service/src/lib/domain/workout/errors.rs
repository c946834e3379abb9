use thiserror::Error;

use crate::domain::name::NameError;

/// Top-level error for workout operations
#[derive(Debug, Clone, Error)]
pub enum WorkoutError {
    #[error("Invalid workout name: {0}")]
    InvalidName(#[from] NameError),

    /// Also returned for workouts owned by another user.
    #[error("Workout not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
