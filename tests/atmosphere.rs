use plane_assist::atmosphere::{self, AtmosphereError, AtmosphereState};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn sea_level_matches_standard_values() {
    let atmo = atmosphere::lookup(0.0).expect("sea level");
    assert_eq!(atmo.density(), 1.225);
    assert_eq!(atmo.gravity(), 9.807);

    let props = atmosphere::properties(0.0).expect("sea level props");
    assert_close(props.temperature_k, 288.15, 1e-9);
    assert_close(props.pressure_pa, 101_325.0, 1e-6);
}

#[test]
fn thousand_meters() {
    let atmo = atmosphere::lookup(1000.0).expect("1 km");
    assert_eq!(atmo.density(), 1.112);
    assert_eq!(atmo.gravity(), 9.804);
}

#[test]
fn tropopause_region() {
    let props = atmosphere::properties(11_019.0).expect("tropopause");
    assert_close(props.geopotential_altitude_m, 11_000.0, 1.0);
    assert_close(props.temperature_k, 216.65, 0.01);
    assert_close(props.pressure_pa, 22_632.0, 5.0);
}

#[test]
fn lookup_is_deterministic_and_positive() {
    let mut prev = f64::INFINITY;
    for h in (0..=50_000).step_by(2_500) {
        let a = atmosphere::lookup(h as f64).expect("in range");
        let b = atmosphere::lookup(h as f64).expect("in range");
        assert_eq!(a, b);
        assert!(a.density() > 0.0 && a.gravity() > 0.0, "h={h}");
        assert!(a.density() <= prev, "density must not increase at h={h}");
        prev = a.density();
    }
}

#[test]
fn rounded_to_three_decimals() {
    for h in [-5_000.0, -123.4, 0.0, 777.7, 8_848.0, 20_000.0, 47_350.0, 56_000.0] {
        let a = atmosphere::lookup(h).expect("in range");
        for v in [a.density(), a.gravity()] {
            assert!(v > 0.0, "h={h} v={v}");
            assert_close(v * 1000.0, (v * 1000.0).round(), 1e-6);
        }
    }
}

#[test]
fn below_sea_level_is_denser() {
    let low = atmosphere::lookup(-2_000.0).expect("below sea level");
    assert!(low.density() > 1.225);
    assert!(low.gravity() > 9.807);
}

#[test]
fn out_of_range_altitudes_fail() {
    assert_eq!(
        atmosphere::lookup(90_000.0),
        Err(AtmosphereError::OutOfRange { altitude_m: 90_000.0 })
    );
    assert!(matches!(
        atmosphere::lookup(-6_000.0),
        Err(AtmosphereError::OutOfRange { .. })
    ));
    assert_eq!(atmosphere::lookup(f64::NAN), Err(AtmosphereError::NotFinite));
    assert!(atmosphere::lookup(atmosphere::MIN_ALTITUDE_M).is_ok());
}

#[test]
fn zero_rounded_density_is_rejected() {
    assert!(atmosphere::lookup(56_000.0).is_ok());
    for h in [70_000.0, atmosphere::MAX_ALTITUDE_M] {
        assert_eq!(
            atmosphere::lookup(h),
            Err(AtmosphereError::Degenerate { altitude_m: h })
        );
        // 반올림 전 물성치는 여전히 계산된다
        let props = atmosphere::properties(h).expect("inside layer table");
        assert!(props.density_kg_m3 > 0.0);
    }
}

#[test]
fn state_rejects_non_positive_values() {
    assert!(AtmosphereState::new(1.225, 9.807).is_some());
    assert!(AtmosphereState::new(0.0, 9.807).is_none());
    assert!(AtmosphereState::new(1.225, -1.0).is_none());
    assert!(AtmosphereState::new(f64::NAN, 9.807).is_none());
}
