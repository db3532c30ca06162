//! Integration tests for wave length / period derivation and shoaling.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use wave_runup::waves::{
    deep_water_period, deep_water_wavelength, period_from_wavelength, reverse_shoal,
    reverse_shoal_intermediate, wavelength, wavelengths, ShoalingCase, WaterDepthRegime,
};
use wave_runup::{DispersionConfig, RunupError, WaveInputs};

#[test]
fn test_deep_water_round_trip_through_inputs() {
    let periods = vec![6.0, 9.5, 14.0];
    let forward = WaveInputs::new(vec![1.0; 3], vec![0.1; 3])
        .with_period(periods.clone())
        .normalize()
        .unwrap();

    let back = WaveInputs::new(vec![1.0; 3], vec![0.1; 3])
        .with_wavelength(forward.lp().to_vec())
        .normalize()
        .unwrap();

    for (t, t_back) in periods.iter().zip(back.tp()) {
        assert_relative_eq!(*t, *t_back, max_relative = 1e-12);
    }
}

#[test]
fn test_finite_depth_round_trip() {
    let config = DispersionConfig::default().with_tolerance(1e-12);
    for (t, h) in [(6.0, 3.0), (10.0, 15.0), (14.0, 40.0)] {
        let l = wavelength(t, h, &config);
        assert_relative_eq!(period_from_wavelength(l, h), t, max_relative = 1e-8);
    }
}

#[test]
fn test_batch_matches_single() {
    let config = DispersionConfig::default();
    let periods = [8.0, 10.0, 12.0, 14.0];
    let depths = [5.0, 10.0, 15.0, 20.0];
    let batch = wavelengths(&periods, &depths, &config);
    for i in 0..periods.len() {
        assert_eq!(batch[i], wavelength(periods[i], depths[i], &config));
    }
}

#[test]
fn test_depth_broadcasts_over_cases() {
    let state = WaveInputs::new(vec![1.0, 2.0], vec![0.1, 0.1])
        .with_period(vec![10.0, 12.0])
        .with_depth(15.0)
        .normalize()
        .unwrap();
    let config = DispersionConfig::default();
    assert_eq!(state.lp()[0], wavelength(10.0, 15.0, &config));
    assert_eq!(state.lp()[1], wavelength(12.0, 15.0, &config));
    assert!(state.lp()[1] < deep_water_wavelength(12.0));
}

#[test]
fn test_depth_length_mismatch() {
    let err = WaveInputs::new(vec![1.0, 2.0], vec![0.1, 0.1])
        .with_period(vec![10.0, 12.0])
        .with_depth(vec![10.0, 12.0, 14.0])
        .normalize()
        .unwrap_err();
    assert!(matches!(
        err,
        RunupError::InconsistentLength { field: "depth", .. }
    ), "unexpected error: {err}");
}

#[test]
fn test_wavelength_overrides_period() {
    let state = WaveInputs::new(4.0, 0.05)
        .with_period(12.0)
        .with_wavelength(200.0)
        .normalize()
        .unwrap();
    assert_eq!(state.lp()[0], 200.0);
    assert_relative_eq!(state.tp()[0], deep_water_period(200.0));
}

#[test]
fn test_regime_classification() {
    let l0 = 100.0;
    assert_eq!(WaterDepthRegime::classify(1.0, l0), Some(WaterDepthRegime::Shallow));
    assert_eq!(WaterDepthRegime::classify(10.0, l0), Some(WaterDepthRegime::Intermediate));
    assert_eq!(WaterDepthRegime::classify(60.0, l0), Some(WaterDepthRegime::Deep));
    assert_eq!(WaterDepthRegime::classify(f64::NAN, l0), None);
}

#[test]
fn test_reverse_shoal_intermediate_value() {
    let tp = 11.28;
    let l0 = deep_water_wavelength(tp);
    let h0 = reverse_shoal_intermediate(&[10.0], &[l0], &[tp], &[2.0]).unwrap();
    assert_abs_diff_eq!(h0[0], 1.958, epsilon = 0.01);
}

#[test]
fn test_reverse_shoal_rejects_deep_water() {
    let tp = 8.0;
    let l0 = deep_water_wavelength(tp);
    assert_eq!(
        reverse_shoal_intermediate(&[80.0], &[l0], &[tp], &[2.0]).unwrap_err(),
        RunupError::DeepWaterWaves { count: 1 }
    );
}

#[test]
fn test_reverse_shoal_per_regime() {
    let cases = [
        ShoalingCase::new(200.0, 8.0, 2.0),
        ShoalingCase::new(10.0, 11.28, 2.0),
        ShoalingCase::new(0.5, 11.28, 2.0),
    ];
    let h0 = reverse_shoal(&cases);
    assert_eq!(h0[0], 2.0);
    assert_abs_diff_eq!(h0[1], 1.958, epsilon = 0.01);
    assert!(h0[2].is_nan());
}
