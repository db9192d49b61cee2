use serde::{Deserialize, Serialize};
use std::fmt;

/// Workout kinds a summary can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    RaceWalking,
    Swimming,
    /// Unspecialized workout; no calorie formula exists for it
    Generic,
}

impl WorkoutKind {
    /// Label used in rendered summaries
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::RaceWalking => "RaceWalking",
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Generic => "Training",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Computed result for one workout instance
///
/// Built once by [`crate::workout::Workout::summarize`] and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Workout kind the numbers were computed for
    pub kind: WorkoutKind,

    /// Duration in hours
    pub duration_hours: f64,

    /// Distance covered in kilometers
    pub distance_km: f64,

    /// Mean speed in km/h
    pub mean_speed_kmh: f64,

    /// Energy spent in kcal
    pub calories_kcal: f64,
}

impl Summary {
    /// Fixed-format message line for this summary
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.kind, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories_kcal
        )
    }
}
