//! Workout record types and sensor-package dispatch.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A running workout record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Running {
    /// Number of steps taken
    pub action_count: u32,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

/// A sports walking workout record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    /// Number of steps taken
    pub action_count: u32,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
    /// Athlete height in centimeters
    pub height_cm: f64,
}

/// A swimming workout record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    /// Number of strokes taken
    pub action_count: u32,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
    /// Pool length in meters
    pub pool_length_m: f64,
    /// Number of pool lengths swum
    pub pool_lap_count: u32,
}

/// A workout of one of the three supported kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    /// Build a workout from a raw sensor package.
    ///
    /// `code` selects the workout kind ("RUN", "WLK" or "SWM") and `data`
    /// carries the record fields in constructor order. Values are taken
    /// as-is; only the code and the package length are checked.
    pub fn from_package(code: &str, data: &[f64]) -> Result<Self, WorkoutError> {
        match code {
            "RUN" => match *data {
                [action, duration, weight] => Ok(Workout::Running(Running {
                    action_count: action as u32,
                    duration_hours: duration,
                    weight_kg: weight,
                })),
                _ => Err(WorkoutError::bad_package(code, 3, data.len())),
            },
            "WLK" => match *data {
                [action, duration, weight, height] => {
                    Ok(Workout::SportsWalking(SportsWalking {
                        action_count: action as u32,
                        duration_hours: duration,
                        weight_kg: weight,
                        height_cm: height,
                    }))
                }
                _ => Err(WorkoutError::bad_package(code, 4, data.len())),
            },
            "SWM" => match *data {
                [action, duration, weight, length, laps] => {
                    Ok(Workout::Swimming(Swimming {
                        action_count: action as u32,
                        duration_hours: duration,
                        weight_kg: weight,
                        pool_length_m: length,
                        pool_lap_count: laps as u32,
                    }))
                }
                _ => Err(WorkoutError::bad_package(code, 5, data.len())),
            },
            other => Err(WorkoutError::UnknownWorkoutType(other.to_string())),
        }
    }

    /// Display name of the workout kind.
    pub fn label(&self) -> &'static str {
        match self {
            Workout::Running(_) => "Running",
            Workout::SportsWalking(_) => "SportsWalking",
            Workout::Swimming(_) => "Swimming",
        }
    }

    /// Workout duration in hours.
    pub fn duration_hours(&self) -> f64 {
        match self {
            Workout::Running(r) => r.duration_hours,
            Workout::SportsWalking(w) => w.duration_hours,
            Workout::Swimming(s) => s.duration_hours,
        }
    }
}

/// Errors related to sensor-package dispatch.
#[derive(Debug, Error)]
pub enum WorkoutError {
    /// Workout code is not one of "SWM", "RUN", "WLK"
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    /// Package length does not match the variant's constructor
    #[error("Package for {code} expects {expected} values, got {got}")]
    BadPackageLength {
        code: String,
        expected: usize,
        got: usize,
    },
}

impl WorkoutError {
    fn bad_package(code: &str, expected: usize, got: usize) -> Self {
        WorkoutError::BadPackageLength {
            code: code.to_string(),
            expected,
            got,
        }
    }
}
