//! Distance, mean speed and calorie formulas per workout kind.
//!
//! Each workout kind owns its empirical coefficients. Running and sports
//! walking share the step-based distance formula; swimming counts strokes
//! and takes its mean speed from pool length and lap count instead.

use crate::workouts::types::{Running, SportsWalking, Swimming, Workout};

/// Assumed step length for land-based workouts, in meters.
pub const STEP_LENGTH_M: f64 = 0.65;

/// Assumed stroke length for swimming, in meters.
pub const STROKE_LENGTH_M: f64 = 1.38;

/// Meters per kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes per hour.
pub const MIN_PER_HOUR: f64 = 60.0;

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 1.79;

    /// Distance covered, in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.action_count as f64 * STEP_LENGTH_M / M_IN_KM
    }

    /// Mean speed over the workout, in km/h.
    pub fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours
    }

    /// Calories burned, in kcal.
    pub fn spent_calories(&self) -> f64 {
        (Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed_kmh() + Self::CALORIES_SPEED_SHIFT)
            * self.weight_kg
            / M_IN_KM
            * self.duration_hours
            * MIN_PER_HOUR
    }
}

impl SportsWalking {
    const CALORIES_WEIGHT_FACTOR: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_FACTOR: f64 = 0.029;
    const KMH_TO_MS: f64 = 0.278;
    const CM_PER_M: f64 = 100.0;

    /// Distance covered, in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.action_count as f64 * STEP_LENGTH_M / M_IN_KM
    }

    /// Mean speed over the workout, in km/h.
    pub fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours
    }

    /// Calories burned, in kcal.
    pub fn spent_calories(&self) -> f64 {
        let height_m = self.height_cm / Self::CM_PER_M;
        let mean_speed_ms = self.mean_speed_kmh() * Self::KMH_TO_MS;

        (Self::CALORIES_WEIGHT_FACTOR * self.weight_kg
            + mean_speed_ms.powi(2) / height_m * Self::CALORIES_SPEED_HEIGHT_FACTOR
                * self.weight_kg)
            * self.duration_hours
            * MIN_PER_HOUR
    }
}

impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    /// Distance covered by strokes, in kilometers.
    ///
    /// Not used for mean speed, which is taken from the pool instead.
    pub fn distance_km(&self) -> f64 {
        self.action_count as f64 * STROKE_LENGTH_M / M_IN_KM
    }

    /// Mean speed from pool length and lap count, in km/h.
    pub fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lap_count as f64 / M_IN_KM / self.duration_hours
    }

    /// Calories burned, in kcal.
    pub fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_hours
    }
}

impl Workout {
    /// Distance covered, in kilometers.
    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(r) => r.distance_km(),
            Workout::SportsWalking(w) => w.distance_km(),
            Workout::Swimming(s) => s.distance_km(),
        }
    }

    /// Mean speed over the workout, in km/h.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(r) => r.mean_speed_kmh(),
            Workout::SportsWalking(w) => w.mean_speed_kmh(),
            Workout::Swimming(s) => s.mean_speed_kmh(),
        }
    }

    /// Calories burned, in kcal.
    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(r) => r.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(s) => s.spent_calories(),
        }
    }
}
