pub mod routine;
pub mod user;
pub mod workout;

pub use routine::PostgresRoutineRepository;
pub use user::PostgresUserRepository;
pub use workout::PostgresWorkoutRepository;
