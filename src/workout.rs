//! Shared workout behaviour
//!
//! Every workout kind stores the same three sensor readings and derives
//! distance and mean speed the same way; only the calorie formula (and, for
//! swimming, the speed formula) differs per kind.

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;
use crate::models::{Summary, WorkoutKind};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Step length for running and race walking, in meters
pub const STEP_LENGTH_M: f64 = 0.65;

/// Stroke length for swimming, in meters
pub const STROKE_LENGTH_M: f64 = 1.38;

/// Readings common to every workout kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReadings")]
pub struct WorkoutReadings {
    action_count: u64,
    duration_hours: f64,
    weight_kg: f64,
}

/// Unvalidated form of [`WorkoutReadings`] as it appears in serialized data
#[derive(Deserialize)]
struct RawReadings {
    action_count: u64,
    duration_hours: f64,
    weight_kg: f64,
}

impl TryFrom<RawReadings> for WorkoutReadings {
    type Error = DispatchError;

    fn try_from(raw: RawReadings) -> Result<Self, Self::Error> {
        WorkoutReadings::new(raw.action_count, raw.duration_hours, raw.weight_kg)
    }
}

impl WorkoutReadings {
    /// Duration and weight must be finite and strictly positive.
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Result<Self, DispatchError> {
        Ok(Self {
            action_count,
            duration_hours: require_positive("duration_hours", duration_hours)?,
            weight_kg: require_positive("weight_kg", weight_kg)?,
        })
    }

    /// Steps or strokes counted by the sensor
    pub fn action_count(&self) -> u64 {
        self.action_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_hours * MIN_IN_H
    }
}

/// Calculation capability shared by all workout kinds
pub trait Workout {
    /// Distance covered by one step or stroke, in meters
    const ACTION_LENGTH_M: f64;

    fn kind(&self) -> WorkoutKind;

    fn readings(&self) -> &WorkoutReadings;

    /// Distance in kilometers
    fn distance_km(&self) -> f64 {
        self.readings().action_count() as f64 * Self::ACTION_LENGTH_M / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.readings().duration_hours()
    }

    /// Energy spent in kcal
    fn calories_kcal(&self) -> f64;

    /// Compute every reportable quantity into a fresh [`Summary`]
    ///
    /// Readings are only bounded below. Finite but extreme values (weights
    /// near `f64::MAX`, durations near zero) can overflow to infinity.
    fn summarize(&self) -> Summary {
        Summary {
            kind: self.kind(),
            duration_hours: self.readings().duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}

/// Accept only finite values greater than zero
///
/// No upper bound is applied; see [`Workout::summarize`] for how extreme
/// values propagate.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, DispatchError> {
    if !value.is_finite() {
        return Err(DispatchError::InvalidReading {
            field,
            value,
            reason: "must be a finite number",
        });
    }
    if value <= 0.0 {
        return Err(DispatchError::InvalidReading {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

/// Accept only finite, non-negative whole numbers
pub(crate) fn require_count(field: &'static str, value: f64) -> Result<u64, DispatchError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DispatchError::InvalidReading {
            field,
            value,
            reason: "must be a non-negative count",
        });
    }
    if value.fract() != 0.0 || value > u64::MAX as f64 {
        return Err(DispatchError::InvalidReading {
            field,
            value,
            reason: "must be a whole number",
        });
    }
    Ok(value as u64)
}
