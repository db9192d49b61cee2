// Library interface for fitcalc
// Integration tests and the CLI both go through these modules

pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod models;
pub mod packages;
pub mod race_walking;
pub mod report;
pub mod running;
pub mod swimming;
pub mod workout;

// Re-export commonly used types for convenience
pub use dispatch::{read_package, Training, WorkoutTag};
pub use error::{DispatchError, FitCalcError, InputError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{Summary, WorkoutKind};
pub use packages::{demo_packages, load_packages, process_packages, Package, PackageOutcome};
pub use race_walking::RaceWalking;
pub use report::OutputFormat;
pub use running::Running;
pub use swimming::Swimming;
pub use workout::{Workout, WorkoutReadings};
