pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::routine;
pub use domain::user;
pub use domain::workout;
pub use outbound::repositories;
