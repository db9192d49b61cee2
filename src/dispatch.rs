//! Mapping from a sensor package (tag plus readings) to a workout
//!
//! The tag table below is the single place that knows which tags exist, how
//! many readings each expects, and which workout they build.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::DispatchError;
use crate::models::{Summary, WorkoutKind};
use crate::race_walking::RaceWalking;
use crate::running::Running;
use crate::swimming::Swimming;
use crate::workout::{require_count, Workout, WorkoutReadings};

/// Tags understood by the sensor feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutTag {
    #[serde(rename = "SWM")]
    Swimming,
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    RaceWalking,
}

impl WorkoutTag {
    pub const ALL: [WorkoutTag; 3] = [WorkoutTag::Swimming, WorkoutTag::Running, WorkoutTag::RaceWalking];

    pub fn code(&self) -> &'static str {
        match self {
            WorkoutTag::Swimming => "SWM",
            WorkoutTag::Running => "RUN",
            WorkoutTag::RaceWalking => "WLK",
        }
    }

    /// Number of readings a package with this tag must carry
    pub fn arity(&self) -> usize {
        match self {
            // action_count, duration_hours, weight_kg, pool_length_m, lap_count
            WorkoutTag::Swimming => 5,
            // action_count, duration_hours, weight_kg
            WorkoutTag::Running => 3,
            // action_count, duration_hours, weight_kg, height_cm
            WorkoutTag::RaceWalking => 4,
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutTag::Swimming => WorkoutKind::Swimming,
            WorkoutTag::Running => WorkoutKind::Running,
            WorkoutTag::RaceWalking => WorkoutKind::RaceWalking,
        }
    }

    /// Build the workout for this tag; `readings` must already match [`Self::arity`].
    fn build(&self, readings: &[f64]) -> Result<Training, DispatchError> {
        let base = WorkoutReadings::new(
            require_count("action_count", readings[0])?,
            readings[1],
            readings[2],
        )?;

        let training = match self {
            WorkoutTag::Running => Training::Running(Running::new(base)),
            WorkoutTag::RaceWalking => Training::RaceWalking(RaceWalking::new(base, readings[3])?),
            WorkoutTag::Swimming => Training::Swimming(Swimming::new(
                base,
                readings[3],
                require_count("lap_count", readings[4])?,
            )?),
        };
        Ok(training)
    }
}

impl fmt::Display for WorkoutTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutTag {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutTag::ALL
            .into_iter()
            .find(|tag| tag.code() == s)
            .ok_or_else(|| DispatchError::UnknownWorkoutType { tag: s.to_string() })
    }
}

/// A constructed workout of any supported kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Training {
    Running(Running),
    RaceWalking(RaceWalking),
    Swimming(Swimming),
}

impl Training {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Training::Running(w) => w.kind(),
            Training::RaceWalking(w) => w.kind(),
            Training::Swimming(w) => w.kind(),
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Training::Running(w) => w.distance_km(),
            Training::RaceWalking(w) => w.distance_km(),
            Training::Swimming(w) => w.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Training::Running(w) => w.mean_speed_kmh(),
            Training::RaceWalking(w) => w.mean_speed_kmh(),
            Training::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    pub fn calories_kcal(&self) -> f64 {
        match self {
            Training::Running(w) => w.calories_kcal(),
            Training::RaceWalking(w) => w.calories_kcal(),
            Training::Swimming(w) => w.calories_kcal(),
        }
    }

    pub fn summarize(&self) -> Summary {
        match self {
            Training::Running(w) => w.summarize(),
            Training::RaceWalking(w) => w.summarize(),
            Training::Swimming(w) => w.summarize(),
        }
    }
}

/// Turn a tag and its ordered readings into a workout
///
/// Fails with `UnknownWorkoutType` for tags outside SWM/RUN/WLK, with
/// `ArityMismatch` when the reading count is wrong for the tag, and with
/// `InvalidReading` when a value cannot be used in the formulas. Nothing is
/// calculated here; call [`Training::summarize`] for the numbers.
pub fn read_package(tag: &str, readings: &[f64]) -> Result<Training, DispatchError> {
    let workout_tag: WorkoutTag = tag.parse().inspect_err(|_| {
        warn!(tag, "Unknown workout type");
    })?;

    let expected = workout_tag.arity();
    if readings.len() != expected {
        warn!(tag, expected, actual = readings.len(), "Reading count mismatch");
        return Err(DispatchError::ArityMismatch {
            tag: tag.to_string(),
            expected,
            actual: readings.len(),
        });
    }

    let training = workout_tag.build(readings).inspect_err(|err| {
        warn!(tag, error = %err, "Rejected sensor reading");
    })?;

    debug!(tag, kind = %training.kind(), "Package dispatched");
    Ok(training)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_table() {
        for tag in WorkoutTag::ALL {
            assert_eq!(tag.code().parse::<WorkoutTag>().unwrap(), tag);
        }
        assert_eq!(WorkoutTag::Swimming.arity(), 5);
        assert_eq!(WorkoutTag::Running.arity(), 3);
        assert_eq!(WorkoutTag::RaceWalking.arity(), 4);
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert!("run".parse::<WorkoutTag>().is_err());
    }

    #[test]
    fn test_dispatch_builds_matching_variant() {
        let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert!(matches!(swim, Training::Swimming(_)));

        let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert!(matches!(run, Training::Running(_)));

        let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert!(matches!(walk, Training::RaceWalking(_)));
        assert_eq!(walk.kind(), WorkoutKind::RaceWalking);
    }

    #[test]
    fn test_unknown_tag() {
        let err = read_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            DispatchError::UnknownWorkoutType {
                tag: "XYZ".to_string()
            }
        );
    }

    #[test]
    fn test_arity_mismatch() {
        let err = read_package("RUN", &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            DispatchError::ArityMismatch {
                tag: "RUN".to_string(),
                expected: 3,
                actual: 2,
            }
        );

        let err = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]).unwrap_err();
        assert!(matches!(err, DispatchError::ArityMismatch { expected: 4, actual: 5, .. }));
    }

    #[test]
    fn test_invalid_readings() {
        let err = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidReading { field: "duration_hours", .. }));

        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidReading { field: "lap_count", .. }));

        let err = read_package("WLK", &[-1.0, 1.0, 75.0, 180.0]).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidReading { field: "action_count", .. }));
    }

    #[test]
    fn test_training_serializes_with_type_tag() {
        let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let json = serde_json::to_value(run).unwrap();
        assert_eq!(json["type"], "Running");
    }

    #[test]
    fn test_deserialized_training_is_validated() {
        let valid = r#"{"type":"Running","readings":{"action_count":15000,"duration_hours":1.0,"weight_kg":75.0}}"#;
        let training: Training = serde_json::from_str(valid).unwrap();
        assert_eq!(training, read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap());

        let zero_duration = r#"{"type":"Running","readings":{"action_count":15000,"duration_hours":0.0,"weight_kg":75.0}}"#;
        assert!(serde_json::from_str::<Training>(zero_duration).is_err());
    }
}
