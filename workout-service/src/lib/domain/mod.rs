pub mod name;
pub mod routine;
pub mod user;
pub mod workout;
