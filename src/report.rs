//! Workout summary formatting.

use std::fmt;

use serde::Serialize;

use crate::workouts::types::Workout;

/// A computed workout summary ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    /// Workout kind name
    pub workout_label: String,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories burned in kcal
    pub calories_kcal: f64,
}

impl ReportLine {
    /// Evaluate a workout's statistics into a display record.
    pub fn from_workout(workout: &Workout) -> Self {
        Self {
            workout_label: workout.label().to_string(),
            duration_hours: workout.duration_hours(),
            distance_km: workout.distance_km(),
            mean_speed_kmh: workout.mean_speed_kmh(),
            calories_kcal: workout.spent_calories(),
        }
    }
}

impl fmt::Display for ReportLine {
    /// Render the fixed summary template, numeric fields at three decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.workout_label,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}
