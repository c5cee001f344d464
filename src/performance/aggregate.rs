//! 날개 면적부터 항속 거리까지 한 번에 계산하는 일괄 계산.

use super::formulas::{
    flight_time_raw, ground_speed_raw, range_from, stall_speed_raw, thrust_raw, wing_area_raw,
    FlightTimeInput, RangeInput, StallSpeedInput, ThrustInput, WingAreaInput,
};
use super::rounding::{round2, round_to};
use super::{FormulaMode, PerfError};
use crate::atmosphere::AtmosphereState;

/// 일괄 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateInput {
    pub cl_max: f64,
    pub mass_kg: f64,
    /// 최소 비행 속도 [m/s]. 날개 면적과 추력 계산에 함께 쓴다.
    pub velocity_min_m_s: f64,
    pub cd: f64,
    pub capacity_mah: f64,
    pub capacity_used_pct: f64,
    pub cruise_current_a: f64,
    pub battery_voltage_v: f64,
    pub payload_w: f64,
    pub true_airspeed_m_s: f64,
    pub wind_speed_m_s: f64,
    pub wind_origin_deg: f64,
    pub course_deg: f64,
}

/// 일괄 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateResult {
    /// [m²]
    pub wing_area: f64,
    /// [m/s]
    pub stall_speed: f64,
    /// [N], 정수로 반올림
    pub thrust: f64,
    /// [min]
    pub flight_time: f64,
    /// [km]
    pub aircraft_range: f64,
    /// [m/s]
    pub ground_speed: f64,
}

/// 일괄 계산을 수행한다.
///
/// 실속 속도는 반올림된 날개 면적을, 추력은 같은 날개 면적과 최소 속도를 사용한다.
/// 항속 거리는 반올림된 비행 시간과 대지 속도로 구한다.
pub fn aggregate(
    input: &AggregateInput,
    atmo: &AtmosphereState,
    mode: FormulaMode,
) -> Result<AggregateResult, PerfError> {
    let ground_speed = round2(ground_speed_raw(
        &RangeInput {
            flight_time_min: 0.0,
            true_airspeed_m_s: input.true_airspeed_m_s,
            wind_speed_m_s: input.wind_speed_m_s,
            wind_origin_deg: input.wind_origin_deg,
            course_deg: input.course_deg,
        },
        mode,
    )?);

    let wing_area = round2(wing_area_raw(
        &WingAreaInput {
            cl_max: input.cl_max,
            mass_kg: input.mass_kg,
            velocity_m_s: input.velocity_min_m_s,
        },
        atmo,
        mode,
    )
    .map_err(|e| rename_field(e, "velocity", "velocity_min"))?);

    let stall_speed = round2(stall_speed_raw(
        &StallSpeedInput {
            cl_max: input.cl_max,
            mass_kg: input.mass_kg,
            area_m2: wing_area,
        },
        atmo,
        mode,
    )?);

    let thrust = round_to(
        thrust_raw(
            &ThrustInput {
                cd: input.cd,
                velocity_m_s: input.velocity_min_m_s,
                area_m2: wing_area,
            },
            atmo,
        )
        .map_err(|e| rename_field(e, "velocity", "velocity_min"))?,
        0,
    );

    let flight_time = round2(flight_time_raw(&FlightTimeInput {
        capacity_mah: input.capacity_mah,
        capacity_used_pct: input.capacity_used_pct,
        cruise_current_a: input.cruise_current_a,
        battery_voltage_v: input.battery_voltage_v,
        payload_w: input.payload_w,
    })?);

    let aircraft_range = round2(range_from(flight_time, ground_speed)?);

    Ok(AggregateResult {
        wing_area,
        stall_speed,
        thrust,
        flight_time,
        aircraft_range,
        ground_speed,
    })
}

/// 개별 계산식의 입력 이름을 일괄 계산 입력 이름으로 바꾼다.
fn rename_field(err: PerfError, from: &str, to: &'static str) -> PerfError {
    match err {
        PerfError::Domain {
            formula,
            field: Some(name),
            reason,
        } if name == from => PerfError::domain(formula, Some(to), reason),
        other => other,
    }
}
