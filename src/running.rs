//! Running workouts
//!
//! Distance and speed come straight from the step count; only the calorie
//! estimate is running-specific.

use serde::{Deserialize, Serialize};

use crate::models::WorkoutKind;
use crate::workout::{Workout, WorkoutReadings, M_IN_KM, STEP_LENGTH_M};

/// Multiplier applied to mean speed
const CALORIE_SPEED_MULTIPLIER: f64 = 18.0;
/// Offset subtracted from the scaled speed
const CALORIE_SPEED_SHIFT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    readings: WorkoutReadings,
}

impl Running {
    pub fn new(readings: WorkoutReadings) -> Self {
        Self { readings }
    }
}

impl Workout for Running {
    const ACTION_LENGTH_M: f64 = STEP_LENGTH_M;

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn readings(&self) -> &WorkoutReadings {
        &self.readings
    }

    fn calories_kcal(&self) -> f64 {
        (CALORIE_SPEED_MULTIPLIER * self.mean_speed_kmh() - CALORIE_SPEED_SHIFT)
            * self.readings.weight_kg()
            / M_IN_KM
            * self.readings.duration_minutes()
    }
}
