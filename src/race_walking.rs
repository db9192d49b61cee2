//! Race walking workouts

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;
use crate::models::WorkoutKind;
use crate::workout::{require_positive, Workout, WorkoutReadings, STEP_LENGTH_M};

/// Weight coefficient of the base term
const CALORIE_WEIGHT_COEFF: f64 = 0.035;
/// Weight coefficient of the speed/height term
const CALORIE_SPEED_HEIGHT_COEFF: f64 = 0.029;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRaceWalking")]
pub struct RaceWalking {
    readings: WorkoutReadings,
    height_cm: f64,
}

#[derive(Deserialize)]
struct RawRaceWalking {
    readings: WorkoutReadings,
    height_cm: f64,
}

impl TryFrom<RawRaceWalking> for RaceWalking {
    type Error = DispatchError;

    fn try_from(raw: RawRaceWalking) -> Result<Self, Self::Error> {
        RaceWalking::new(raw.readings, raw.height_cm)
    }
}

impl RaceWalking {
    /// Height is a divisor in the calorie formula and must be positive.
    pub fn new(readings: WorkoutReadings, height_cm: f64) -> Result<Self, DispatchError> {
        Ok(Self {
            readings,
            height_cm: require_positive("height_cm", height_cm)?,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Workout for RaceWalking {
    const ACTION_LENGTH_M: f64 = STEP_LENGTH_M;

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::RaceWalking
    }

    fn readings(&self) -> &WorkoutReadings {
        &self.readings
    }

    fn calories_kcal(&self) -> f64 {
        let weight = self.readings.weight_kg();
        // Floor division of squared speed by height, kept as-is.
        let speed_height_ratio = self.mean_speed_kmh().powi(2).div_euclid(self.height_cm);

        (CALORIE_WEIGHT_COEFF * weight + speed_height_ratio * CALORIE_SPEED_HEIGHT_COEFF * weight)
            * self.readings.duration_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_one_hour_walk() {
        let walk = RaceWalking::new(WorkoutReadings::new(9000, 1.0, 75.0).unwrap(), 180.0).unwrap();

        assert_close(walk.distance_km(), 5.85);
        assert_close(walk.mean_speed_kmh(), 5.85);
        // 5.85^2 / 180 floors to 0, leaving only the weight term
        assert_close(walk.calories_kcal(), 0.035 * 75.0 * 60.0);
        assert_close(walk.calories_kcal(), 157.5);
    }

    #[test]
    fn test_floor_division_keeps_whole_quotient() {
        // speed = 26 * 0.65 = 16.9 km/h, 16.9^2 = 285.61, floor(285.61 / 100) = 2
        let walk = RaceWalking::new(WorkoutReadings::new(26000, 1.0, 80.0).unwrap(), 100.0).unwrap();

        let expected = (0.035 * 80.0 + 2.0 * 0.029 * 80.0) * 60.0;
        assert_close(walk.calories_kcal(), expected);
    }

    #[test]
    fn test_rejects_zero_height() {
        let readings = WorkoutReadings::new(9000, 1.0, 75.0).unwrap();
        let err = RaceWalking::new(readings, 0.0).unwrap_err();

        assert!(matches!(
            err,
            DispatchError::InvalidReading { field: "height_cm", .. }
        ));
    }

    #[test]
    fn test_deserialize_rejects_zero_height() {
        let json = r#"{"readings": {"action_count": 9000, "duration_hours": 1.0, "weight_kg": 75.0}, "height_cm": 0.0}"#;
        let err = serde_json::from_str::<RaceWalking>(json).unwrap_err();

        assert!(err.to_string().contains("height_cm"));
    }
}
