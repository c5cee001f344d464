use plane_assist::atmosphere::{self, AtmosphereState};
use plane_assist::performance::rounding::round2;
use plane_assist::performance::{
    DomainReason, FlightTimeInput, Formula, FormulaMode, PerfError, PerformanceCalculator,
    RangeInput, StallSpeedInput, ThrustInput, WingAreaInput,
};

fn calc_at(altitude_m: f64, mode: FormulaMode) -> (PerformanceCalculator, AtmosphereState) {
    let atmo = atmosphere::lookup(altitude_m).expect("altitude in range");
    (PerformanceCalculator::new(atmo, mode), atmo)
}

fn assert_domain(err: PerfError, formula: Formula, field: Option<&str>, reason: DomainReason) {
    assert_eq!(err.formula(), formula, "{err}");
    assert_eq!(err.field(), field, "{err}");
    assert_eq!(err.reason(), reason, "{err}");
}

#[test]
fn wing_area_at_1000m() {
    let (calc, atmo) = calc_at(1000.0, FormulaMode::Legacy);
    let got = calc
        .wing_area(&WingAreaInput {
            cl_max: 1.5,
            mass_kg: 1500.0,
            velocity_m_s: 50.0,
        })
        .expect("wing area");
    let expected =
        round2((1500.0 * atmo.gravity()) / (0.5 * atmo.density() * (50.0 * 2.0) * 1.5));
    assert_eq!(got, expected);
    assert_eq!(got, 176.33);
}

#[test]
fn stall_speed_at_1000m() {
    let (calc, atmo) = calc_at(1000.0, FormulaMode::Legacy);
    let input = StallSpeedInput {
        cl_max: 1.5,
        mass_kg: 1500.0,
        area_m2: 30.0,
    };
    let got = calc.stall_speed(&input).expect("stall speed");
    let expected = round2((2.0 * (1500.0 * atmo.gravity()) / atmo.density() * 1.5 * 30.0).sqrt());
    assert_eq!(got, expected);
    assert_eq!(calc.stall_speed(&input).expect("repeat"), got);
}

#[test]
fn thrust_at_1000m() {
    let (calc, atmo) = calc_at(1000.0, FormulaMode::Legacy);
    let got = calc
        .thrust_required(&ThrustInput {
            cd: 0.05,
            velocity_m_s: 50.0,
            area_m2: 30.0,
        })
        .expect("thrust");
    assert_eq!(got, round2(0.5 * 0.05 * atmo.density() * 2500.0 * 30.0));
    assert_eq!(got, 2085.0);
}

#[test]
fn flight_time_formula() {
    let (calc, _) = calc_at(0.0, FormulaMode::Legacy);
    let got = calc
        .flight_time(&FlightTimeInput {
            capacity_mah: 5000.0,
            capacity_used_pct: 80.0,
            cruise_current_a: 30.0,
            battery_voltage_v: 11.1,
            payload_w: 50.0,
        })
        .expect("flight time");
    assert_eq!(
        got,
        round2(((5000.0 / 1000.0) * 80.0 * 0.01) / (30.0 + (50.0 / 11.1)) * 60.0)
    );
    assert_eq!(got, 6.96);
}

#[test]
fn legacy_range_uses_degrees_as_radians() {
    let (calc, _) = calc_at(0.0, FormulaMode::Legacy);
    let input = RangeInput {
        flight_time_min: 60.0,
        true_airspeed_m_s: 50.0,
        wind_speed_m_s: 10.0,
        wind_origin_deg: 0.0,
        course_deg: 0.0,
    };
    assert_eq!(calc.range(&input).expect("range"), 144.0);

    let skewed = RangeInput {
        course_deg: 45.0,
        wind_origin_deg: 180.0,
        true_airspeed_m_s: 20.0,
        wind_speed_m_s: 5.0,
        ..input
    };
    let gs = (20.0_f64.powi(2) + 5.0_f64.powi(2)
        - (2.0 * 20.0 * 5.0 * 45.0_f64.cos() - 180.0))
        .sqrt();
    assert_eq!(
        calc.range(&skewed).expect("range"),
        round2(60.0 * 60.0 * gs / 1000.0)
    );
}

#[test]
fn corrected_wind_triangle() {
    let (calc, _) = calc_at(0.0, FormulaMode::Corrected);
    let base = RangeInput {
        flight_time_min: 60.0,
        true_airspeed_m_s: 50.0,
        wind_speed_m_s: 10.0,
        wind_origin_deg: 0.0,
        course_deg: 0.0,
    };
    // 정면 맞바람
    assert_eq!(calc.range(&base).expect("headwind"), 144.0);
    // 정면 뒷바람
    let tail = RangeInput {
        wind_origin_deg: 180.0,
        ..base
    };
    assert_eq!(calc.range(&tail).expect("tailwind"), 216.0);
    // 측풍은 편류각만큼 대지 속도가 줄어든다
    let cross = RangeInput {
        wind_origin_deg: 90.0,
        ..base
    };
    let gs = 50.0 * (0.2_f64).asin().cos();
    assert_eq!(calc.range(&cross).expect("crosswind"), round2(60.0 * 60.0 * gs / 1000.0));
}

#[test]
fn corrected_lift_formulas_use_velocity_squared() {
    let (calc, atmo) = calc_at(0.0, FormulaMode::Corrected);
    let area = calc
        .wing_area(&WingAreaInput {
            cl_max: 1.5,
            mass_kg: 500.0,
            velocity_m_s: 15.0,
        })
        .expect("wing area");
    assert_eq!(
        area,
        round2(2.0 * 500.0 * atmo.gravity() / (atmo.density() * 225.0 * 1.5))
    );

    // 위에서 구한 면적이면 실속 속도는 다시 15 m/s 근처
    let stall = calc
        .stall_speed(&StallSpeedInput {
            cl_max: 1.5,
            mass_kg: 500.0,
            area_m2: area,
        })
        .expect("stall speed");
    assert!((stall - 15.0).abs() < 0.05, "stall={stall}");
}

#[test]
fn zero_velocity_is_a_domain_error() {
    let (calc, _) = calc_at(0.0, FormulaMode::Legacy);
    let err = calc
        .wing_area(&WingAreaInput {
            cl_max: 1.5,
            mass_kg: 500.0,
            velocity_m_s: 0.0,
        })
        .unwrap_err();
    assert_domain(err, Formula::WingArea, Some("velocity"), DomainReason::DivisionByZero);
}

#[test]
fn negative_mass_stall_speed() {
    let (calc, _) = calc_at(0.0, FormulaMode::Legacy);
    let err = calc
        .stall_speed(&StallSpeedInput {
            cl_max: 1.5,
            mass_kg: -500.0,
            area_m2: 30.0,
        })
        .unwrap_err();
    assert_domain(err, Formula::StallSpeed, Some("mass"), DomainReason::NegativeRadicand);
}

#[test]
fn flight_time_division_errors() {
    let (calc, _) = calc_at(0.0, FormulaMode::Legacy);
    let input = FlightTimeInput {
        capacity_mah: 5000.0,
        capacity_used_pct: 80.0,
        cruise_current_a: 30.0,
        battery_voltage_v: 0.0,
        payload_w: 50.0,
    };
    assert_domain(
        calc.flight_time(&input).unwrap_err(),
        Formula::FlightTime,
        Some("battery_voltage"),
        DomainReason::DivisionByZero,
    );
    let idle = FlightTimeInput {
        cruise_current_a: 0.0,
        payload_w: 0.0,
        battery_voltage_v: 11.1,
        ..input
    };
    assert_domain(
        calc.flight_time(&idle).unwrap_err(),
        Formula::FlightTime,
        Some("cruise_current_draw"),
        DomainReason::DivisionByZero,
    );
}

#[test]
fn legacy_range_negative_radicand() {
    let (calc, _) = calc_at(0.0, FormulaMode::Legacy);
    let err = calc
        .range(&RangeInput {
            flight_time_min: 60.0,
            true_airspeed_m_s: 0.0,
            wind_speed_m_s: 0.0,
            wind_origin_deg: -10.0,
            course_deg: 0.0,
        })
        .unwrap_err();
    assert_domain(err, Formula::Range, Some("wind_origin"), DomainReason::NegativeRadicand);
}

#[test]
fn corrected_range_rejects_impossible_wind() {
    let (calc, _) = calc_at(0.0, FormulaMode::Corrected);
    let base = RangeInput {
        flight_time_min: 60.0,
        true_airspeed_m_s: 10.0,
        wind_speed_m_s: 20.0,
        wind_origin_deg: 90.0,
        course_deg: 0.0,
    };
    assert_domain(
        calc.range(&base).unwrap_err(),
        Formula::Range,
        Some("wind_speed"),
        DomainReason::ArgumentOutOfRange,
    );
    let headwind = RangeInput {
        wind_origin_deg: 0.0,
        ..base
    };
    assert_domain(
        calc.range(&headwind).unwrap_err(),
        Formula::Range,
        Some("wind_speed"),
        DomainReason::ArgumentOutOfRange,
    );
    let parked = RangeInput {
        true_airspeed_m_s: 0.0,
        ..base
    };
    assert_domain(
        calc.range(&parked).unwrap_err(),
        Formula::Range,
        Some("true_airspeed"),
        DomainReason::DivisionByZero,
    );
}

#[test]
fn domain_error_message_names_formula_and_field() {
    let (calc, _) = calc_at(0.0, FormulaMode::Legacy);
    let err = calc
        .wing_area(&WingAreaInput {
            cl_max: 0.0,
            mass_kg: 500.0,
            velocity_m_s: 15.0,
        })
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("cl_max"), "{msg}");
}

#[test]
fn underflowing_denominator_names_an_input() {
    let (calc, _) = calc_at(0.0, FormulaMode::Legacy);
    let err = calc
        .wing_area(&WingAreaInput {
            cl_max: 1e-200,
            mass_kg: 500.0,
            velocity_m_s: 1e-200,
        })
        .unwrap_err();
    assert!(err.field().is_some(), "{err}");
    assert_domain(err, Formula::WingArea, Some("velocity"), DomainReason::DivisionByZero);
}

#[test]
fn overflow_names_the_largest_input() {
    let (calc, _) = calc_at(0.0, FormulaMode::Legacy);
    let err = calc
        .stall_speed(&StallSpeedInput {
            cl_max: 1e10,
            mass_kg: 1e300,
            area_m2: 1e10,
        })
        .unwrap_err();
    assert_domain(err, Formula::StallSpeed, Some("mass"), DomainReason::NonFinite);

    let err = calc
        .thrust_required(&ThrustInput {
            cd: 0.05,
            velocity_m_s: 1e200,
            area_m2: 30.0,
        })
        .unwrap_err();
    assert_domain(err, Formula::Thrust, Some("velocity"), DomainReason::NonFinite);

    let err = calc
        .flight_time(&FlightTimeInput {
            capacity_mah: 5000.0,
            capacity_used_pct: 80.0,
            cruise_current_a: 1e-320,
            battery_voltage_v: 11.1,
            payload_w: 0.0,
        })
        .unwrap_err();
    assert_domain(
        err,
        Formula::FlightTime,
        Some("cruise_current_draw"),
        DomainReason::NonFinite,
    );
}
