use fitcalc::{read_package, DispatchError, WorkoutTag};
use proptest::prelude::*;

/// Property tests over the whole valid input space of each workout kind

fn assert_summary_sane(readings: &[f64], tag: &str) -> Result<(), TestCaseError> {
    let training = read_package(tag, readings).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let summary = training.summarize();

    prop_assert!(summary.distance_km >= 0.0);
    prop_assert!(summary.mean_speed_kmh >= 0.0);
    prop_assert!(summary.distance_km.is_finite());
    prop_assert!(summary.mean_speed_kmh.is_finite());
    prop_assert!(summary.calories_kcal.is_finite());

    // No hidden state between calls
    prop_assert_eq!(summary, training.summarize());
    Ok(())
}

proptest! {
    #[test]
    fn test_running_properties(
        steps in 0u32..100_000,
        duration in 0.05f64..10.0,
        weight in 20.0f64..200.0,
    ) {
        assert_summary_sane(&[steps as f64, duration, weight], "RUN")?;
    }

    #[test]
    fn test_race_walking_properties(
        steps in 0u32..100_000,
        duration in 0.05f64..10.0,
        weight in 20.0f64..200.0,
        height in 100.0f64..230.0,
    ) {
        assert_summary_sane(&[steps as f64, duration, weight, height], "WLK")?;
    }

    #[test]
    fn test_swimming_properties(
        strokes in 0u32..10_000,
        duration in 0.05f64..10.0,
        weight in 20.0f64..200.0,
        pool in 10.0f64..100.0,
        laps in 0u32..500,
    ) {
        assert_summary_sane(&[strokes as f64, duration, weight, pool, laps as f64], "SWM")?;
    }

    #[test]
    fn test_wrong_arity_always_rejected(
        tag_index in 0usize..3,
        len in 0usize..8,
    ) {
        let tag = WorkoutTag::ALL[tag_index];
        prop_assume!(len != tag.arity());

        let readings = vec![1.0; len];
        let is_arity_mismatch = matches!(
            read_package(tag.code(), &readings),
            Err(DispatchError::ArityMismatch { .. })
        );
        prop_assert!(is_arity_mismatch);
    }

    #[test]
    fn test_unknown_tags_rejected(tag in "[A-Z]{3}") {
        prop_assume!(!["SWM", "RUN", "WLK"].contains(&tag.as_str()));

        let is_unknown = matches!(
            read_package(&tag, &[1.0, 1.0, 1.0]),
            Err(DispatchError::UnknownWorkoutType { .. })
        );
        prop_assert!(is_unknown);
    }
}
