//! Metrics module for workout statistics calculations.

pub mod calculator;

pub use calculator::{MIN_PER_HOUR, M_IN_KM, STEP_LENGTH_M, STROKE_LENGTH_M};
