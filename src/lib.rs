//! Fittrack - Fitness-Tracking Statistics
//!
//! Computes distance, mean speed and calories burned for running, sports
//! walking and swimming workouts from raw sensor packages, and formats a
//! one-line human-readable summary per workout.

pub mod metrics;
pub mod report;
pub mod workouts;

// Re-export commonly used types
pub use report::ReportLine;
pub use workouts::types::{Running, SportsWalking, Swimming, Workout, WorkoutError};
