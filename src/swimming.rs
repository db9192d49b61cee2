//! Swimming workouts
//!
//! Distance is still derived from the stroke count, but mean speed comes from
//! the pool geometry: pool length times completed laps.

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;
use crate::models::WorkoutKind;
use crate::workout::{require_positive, Workout, WorkoutReadings, M_IN_KM, STROKE_LENGTH_M};

/// Offset added to mean speed
const CALORIE_SPEED_SHIFT: f64 = 1.1;
/// Multiplier applied to the shifted speed
const CALORIE_SPEED_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSwimming")]
pub struct Swimming {
    readings: WorkoutReadings,
    pool_length_m: f64,
    lap_count: u64,
}

#[derive(Deserialize)]
struct RawSwimming {
    readings: WorkoutReadings,
    pool_length_m: f64,
    lap_count: u64,
}

impl TryFrom<RawSwimming> for Swimming {
    type Error = DispatchError;

    fn try_from(raw: RawSwimming) -> Result<Self, Self::Error> {
        Swimming::new(raw.readings, raw.pool_length_m, raw.lap_count)
    }
}

impl Swimming {
    pub fn new(
        readings: WorkoutReadings,
        pool_length_m: f64,
        lap_count: u64,
    ) -> Result<Self, DispatchError> {
        Ok(Self {
            readings,
            pool_length_m: require_positive("pool_length_m", pool_length_m)?,
            lap_count,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn lap_count(&self) -> u64 {
        self.lap_count
    }

    /// Distance swum according to the pool, in kilometers
    pub fn pool_distance_km(&self) -> f64 {
        self.pool_length_m * self.lap_count as f64 / M_IN_KM
    }
}

impl Workout for Swimming {
    const ACTION_LENGTH_M: f64 = STROKE_LENGTH_M;

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn readings(&self) -> &WorkoutReadings {
        &self.readings
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_distance_km() / self.readings.duration_hours()
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIE_SPEED_SHIFT)
            * CALORIE_SPEED_MULTIPLIER
            * self.readings.weight_kg()
    }
}
