//! Workout records and sensor-package dispatch.

pub mod types;

pub use types::{Running, SportsWalking, Swimming, Workout, WorkoutError};
