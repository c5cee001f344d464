//! 수평 정상 비행을 가정한 단일 지점 성능 계산식.
//! 모든 함수는 순수 함수이며 최종 값만 소수점 둘째 자리로 반올림한다.

use super::rounding::round2;
use super::{DomainReason, Formula, FormulaMode, PerfError};
use crate::atmosphere::AtmosphereState;

/// 날개 면적 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingAreaInput {
    /// 최대 양력계수
    pub cl_max: f64,
    /// 기체 질량 [kg]
    pub mass_kg: f64,
    /// 최소 비행 속도 [m/s]
    pub velocity_m_s: f64,
}

/// 실속 속도 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StallSpeedInput {
    pub cl_max: f64,
    pub mass_kg: f64,
    /// 날개 면적 [m²]
    pub area_m2: f64,
}

/// 필요 추력 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustInput {
    /// 항력계수
    pub cd: f64,
    pub velocity_m_s: f64,
    pub area_m2: f64,
}

/// 비행 시간 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightTimeInput {
    /// 배터리 용량 [mAh]
    pub capacity_mah: f64,
    /// 사용할 용량 비율 [%]
    pub capacity_used_pct: f64,
    /// 순항 전류 [A]
    pub cruise_current_a: f64,
    /// 배터리 전압 [V]
    pub battery_voltage_v: f64,
    /// 배터리에 연결된 탑재 장비 소비 전력 [W]
    pub payload_w: f64,
}

/// 항속 거리 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeInput {
    /// 비행 시간 [min]
    pub flight_time_min: f64,
    /// 진대기속도 [m/s]
    pub true_airspeed_m_s: f64,
    /// 풍속 [m/s]
    pub wind_speed_m_s: f64,
    /// 바람이 불어오는 방향, 북에서 시계방향 [°]
    pub wind_origin_deg: f64,
    /// 비행 코스, 북에서 시계방향 [°]
    pub course_deg: f64,
}

/// 날개 면적 [m²]
pub fn wing_area(
    input: &WingAreaInput,
    atmo: &AtmosphereState,
    mode: FormulaMode,
) -> Result<f64, PerfError> {
    wing_area_raw(input, atmo, mode).map(round2)
}

/// 실속 속도 [m/s]
pub fn stall_speed(
    input: &StallSpeedInput,
    atmo: &AtmosphereState,
    mode: FormulaMode,
) -> Result<f64, PerfError> {
    stall_speed_raw(input, atmo, mode).map(round2)
}

/// 필요 추력 [N]. 항력 = 추력 가정.
pub fn thrust_required(input: &ThrustInput, atmo: &AtmosphereState) -> Result<f64, PerfError> {
    thrust_raw(input, atmo).map(round2)
}

/// 비행 시간 [min]. 이착륙 시 증가하는 전류는 반영하지 않는다.
pub fn flight_time(input: &FlightTimeInput) -> Result<f64, PerfError> {
    flight_time_raw(input).map(round2)
}

/// 항속 거리 [km]
pub fn range(input: &RangeInput, mode: FormulaMode) -> Result<f64, PerfError> {
    let gs = ground_speed_raw(input, mode)?;
    range_from(input.flight_time_min, gs).map(round2)
}

/// 대지 속도 [m/s], 소수점 둘째 자리 반올림.
pub fn ground_speed(input: &RangeInput, mode: FormulaMode) -> Result<f64, PerfError> {
    ground_speed_raw(input, mode).map(round2)
}

pub(crate) fn wing_area_raw(
    input: &WingAreaInput,
    atmo: &AtmosphereState,
    mode: FormulaMode,
) -> Result<f64, PerfError> {
    let WingAreaInput {
        cl_max,
        mass_kg,
        velocity_m_s,
    } = *input;
    let weight = mass_kg * atmo.gravity();
    let denominator = match mode {
        FormulaMode::Legacy => 0.5 * atmo.density() * (velocity_m_s * 2.0) * cl_max,
        FormulaMode::Corrected => 0.5 * atmo.density() * velocity_m_s.powi(2) * cl_max,
    };
    if denominator == 0.0 {
        let field = smallest(&[("velocity", velocity_m_s), ("cl_max", cl_max)]);
        return Err(PerfError::domain(
            Formula::WingArea,
            field,
            DomainReason::DivisionByZero,
        ));
    }
    let blame = if weight.is_finite() {
        smallest(&[("velocity", velocity_m_s), ("cl_max", cl_max)])
    } else {
        Some("mass")
    };
    finite(Formula::WingArea, blame, weight / denominator)
}

pub(crate) fn stall_speed_raw(
    input: &StallSpeedInput,
    atmo: &AtmosphereState,
    mode: FormulaMode,
) -> Result<f64, PerfError> {
    let StallSpeedInput {
        cl_max,
        mass_kg,
        area_m2,
    } = *input;
    let weight = mass_kg * atmo.gravity();
    let radicand = match mode {
        // ((2*m*g)/ρ) * cl_max * S 의 순서를 그대로 유지
        FormulaMode::Legacy => 2.0 * weight / atmo.density() * cl_max * area_m2,
        FormulaMode::Corrected => {
            let denominator = atmo.density() * area_m2 * cl_max;
            if denominator == 0.0 {
                let field = smallest(&[("area", area_m2), ("cl_max", cl_max)]);
                return Err(PerfError::domain(
                    Formula::StallSpeed,
                    field,
                    DomainReason::DivisionByZero,
                ));
            }
            2.0 * weight / denominator
        }
    };
    if radicand < 0.0 {
        let field = first_negative(&[("mass", mass_kg), ("cl_max", cl_max), ("area", area_m2)]);
        return Err(PerfError::domain(
            Formula::StallSpeed,
            field,
            DomainReason::NegativeRadicand,
        ));
    }
    let blame = match mode {
        FormulaMode::Legacy => largest(&[("mass", mass_kg), ("cl_max", cl_max), ("area", area_m2)]),
        FormulaMode::Corrected => smallest(&[("area", area_m2), ("cl_max", cl_max)]),
    };
    finite(Formula::StallSpeed, blame, radicand.sqrt())
}

pub(crate) fn thrust_raw(input: &ThrustInput, atmo: &AtmosphereState) -> Result<f64, PerfError> {
    let thrust = 0.5 * input.cd * atmo.density() * input.velocity_m_s.powi(2) * input.area_m2;
    let blame = largest(&[
        ("cd", input.cd),
        ("velocity", input.velocity_m_s),
        ("area", input.area_m2),
    ]);
    finite(Formula::Thrust, blame, thrust)
}

pub(crate) fn flight_time_raw(input: &FlightTimeInput) -> Result<f64, PerfError> {
    if input.battery_voltage_v == 0.0 {
        return Err(PerfError::domain(
            Formula::FlightTime,
            Some("battery_voltage"),
            DomainReason::DivisionByZero,
        ));
    }
    let usable_ah = (input.capacity_mah / 1000.0) * input.capacity_used_pct * 0.01;
    let total_current_a = input.cruise_current_a + (input.payload_w / input.battery_voltage_v);
    if total_current_a == 0.0 {
        return Err(PerfError::domain(
            Formula::FlightTime,
            Some("cruise_current_draw"),
            DomainReason::DivisionByZero,
        ));
    }
    let blame = if usable_ah.is_finite() {
        "cruise_current_draw"
    } else {
        "capacity"
    };
    finite(
        Formula::FlightTime,
        Some(blame),
        usable_ah / total_current_a * 60.0,
    )
}

pub(crate) fn ground_speed_raw(input: &RangeInput, mode: FormulaMode) -> Result<f64, PerfError> {
    match mode {
        FormulaMode::Legacy => legacy_ground_speed(input),
        FormulaMode::Corrected => wind_triangle_ground_speed(input),
    }
}

/// 비행 시간[min]과 대지 속도[m/s]로 항속 거리[km]를 구한다.
pub(crate) fn range_from(flight_time_min: f64, ground_speed_m_s: f64) -> Result<f64, PerfError> {
    let blame = if flight_time_min.abs() >= ground_speed_m_s.abs() {
        "flight_time"
    } else {
        "true_airspeed"
    };
    finite(
        Formula::Range,
        Some(blame),
        flight_time_min * 60.0 * ground_speed_m_s / 1000.0,
    )
}

fn legacy_ground_speed(input: &RangeInput) -> Result<f64, PerfError> {
    let wind_corr_angle = 0.0;
    let tas = input.true_airspeed_m_s;
    let ws = input.wind_speed_m_s;
    // 도 단위 코스를 라디안으로 변환하지 않고 그대로 cos에 넣는다
    let radicand = tas.powi(2) + ws.powi(2)
        - (2.0 * tas * ws * input.course_deg.cos() - input.wind_origin_deg + wind_corr_angle);
    if radicand < 0.0 {
        // tas² + ws² - 2·tas·ws·cos ≥ 0 이므로 음수는 풍향 항에서만 생긴다
        return Err(PerfError::domain(
            Formula::Range,
            Some("wind_origin"),
            DomainReason::NegativeRadicand,
        ));
    }
    let blame = largest(&[
        ("true_airspeed", tas),
        ("wind_speed", ws),
        ("wind_origin", input.wind_origin_deg),
    ]);
    finite(Formula::Range, blame, radicand.sqrt())
}

fn wind_triangle_ground_speed(input: &RangeInput) -> Result<f64, PerfError> {
    let tas = input.true_airspeed_m_s;
    let ws = input.wind_speed_m_s;
    if tas == 0.0 {
        return Err(PerfError::domain(
            Formula::Range,
            Some("true_airspeed"),
            DomainReason::DivisionByZero,
        ));
    }
    let wind_angle = (input.wind_origin_deg - input.course_deg).to_radians();
    let crosswind_ratio = ws * wind_angle.sin() / tas;
    if crosswind_ratio.abs() > 1.0 {
        return Err(PerfError::domain(
            Formula::Range,
            Some("wind_speed"),
            DomainReason::ArgumentOutOfRange,
        ));
    }
    let wca = crosswind_ratio.asin();
    let gs = tas * wca.cos() - ws * wind_angle.cos();
    if gs < 0.0 {
        // 맞바람이 진대기속도보다 강해 코스를 유지할 수 없음
        return Err(PerfError::domain(
            Formula::Range,
            Some("wind_speed"),
            DomainReason::ArgumentOutOfRange,
        ));
    }
    finite(
        Formula::Range,
        largest(&[("true_airspeed", tas), ("wind_speed", ws)]),
        gs,
    )
}

/// 유한하지 않은 결과는 `field`를 원인으로 지목해 오류로 돌려준다.
fn finite(formula: Formula, field: Option<&'static str>, value: f64) -> Result<f64, PerfError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PerfError::domain(formula, field, DomainReason::NonFinite))
    }
}

/// 절댓값이 가장 작은 입력. 0으로 나누기나 언더플로의 원인으로 본다.
fn smallest(fields: &[(&'static str, f64)]) -> Option<&'static str> {
    fields
        .iter()
        .min_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
        .map(|(k, _)| *k)
}

/// 절댓값이 가장 큰 입력. 오버플로의 원인으로 본다.
fn largest(fields: &[(&'static str, f64)]) -> Option<&'static str> {
    fields
        .iter()
        .max_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
        .map(|(k, _)| *k)
}

fn first_negative(fields: &[(&'static str, f64)]) -> Option<&'static str> {
    fields.iter().find(|(_, v)| *v < 0.0).map(|(k, _)| *k)
}
