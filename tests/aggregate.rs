use plane_assist::atmosphere;
use plane_assist::performance::{
    AggregateInput, DomainReason, Formula, FormulaMode, PerformanceCalculator,
};

fn reference_input() -> AggregateInput {
    AggregateInput {
        cl_max: 1.5,
        mass_kg: 500.0,
        velocity_min_m_s: 15.0,
        cd: 0.02,
        capacity_mah: 10_000.0,
        capacity_used_pct: 80.0,
        cruise_current_a: 2.0,
        battery_voltage_v: 12.0,
        payload_w: 50.0,
        true_airspeed_m_s: 20.0,
        wind_speed_m_s: 5.0,
        wind_origin_deg: 180.0,
        course_deg: 45.0,
    }
}

fn sea_level(mode: FormulaMode) -> PerformanceCalculator {
    PerformanceCalculator::new(atmosphere::lookup(0.0).expect("sea level"), mode)
}

#[test]
fn reference_scenario_at_sea_level() {
    let r = sea_level(FormulaMode::Legacy)
        .aggregate(&reference_input())
        .expect("aggregate");
    assert_eq!(r.wing_area, 177.9);
    assert_eq!(r.stall_speed, 1461.62);
    assert_eq!(r.thrust, 490.0);
    assert_eq!(r.flight_time, 77.84);
    assert_eq!(r.aircraft_range, 104.43);
    assert_eq!(r.ground_speed, 22.36);
}

#[test]
fn range_uses_rounded_intermediates() {
    let r = sea_level(FormulaMode::Legacy)
        .aggregate(&reference_input())
        .expect("aggregate");
    let from_rounded = r.flight_time * 60.0 * r.ground_speed / 1000.0;
    assert!((r.aircraft_range - from_rounded).abs() < 0.005);
}

#[test]
fn thrust_is_whole_newtons_in_both_modes() {
    for mode in [FormulaMode::Legacy, FormulaMode::Corrected] {
        let r = sea_level(mode).aggregate(&reference_input()).expect("aggregate");
        assert_eq!(r.thrust, r.thrust.trunc(), "mode={mode:?}");
    }
}

#[test]
fn corrected_mode_gives_plausible_airframe() {
    let r = sea_level(FormulaMode::Corrected)
        .aggregate(&reference_input())
        .expect("aggregate");
    assert_eq!(r.wing_area, 23.72);
    // 교과서 식에서는 날개 면적이 최소 속도로 구해졌으므로 실속 속도도 그 근처
    assert!((r.stall_speed - 15.0).abs() < 0.05, "stall={}", r.stall_speed);
    assert_eq!(r.flight_time, 77.84);
}

#[test]
fn zero_min_velocity_names_aggregate_field() {
    let input = AggregateInput {
        velocity_min_m_s: 0.0,
        ..reference_input()
    };
    let err = sea_level(FormulaMode::Legacy).aggregate(&input).unwrap_err();
    assert_eq!(err.formula(), Formula::WingArea);
    assert_eq!(err.field(), Some("velocity_min"));
    assert_eq!(err.reason(), DomainReason::DivisionByZero);
}

#[test]
fn ground_speed_failure_stops_before_other_formulas() {
    let input = AggregateInput {
        true_airspeed_m_s: 0.0,
        wind_speed_m_s: 0.0,
        wind_origin_deg: -10.0,
        velocity_min_m_s: 0.0,
        ..reference_input()
    };
    let err = sea_level(FormulaMode::Legacy).aggregate(&input).unwrap_err();
    assert_eq!(err.formula(), Formula::Range);
    assert_eq!(err.field(), Some("wind_origin"));
}
