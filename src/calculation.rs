//! 이름 붙은 입력 맵으로 계산을 호출하는 계층.
//! 대화형 UI와 내보내기는 이 계층을 통해 코어 계산식을 사용한다.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::field::Field;
use crate::performance::{
    AggregateInput, AggregateResult, FlightTimeInput, PerfError, PerformanceCalculator,
    RangeInput, StallSpeedInput, ThrustInput, WingAreaInput,
};

/// 계산 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationKind {
    WingArea,
    StallSpeed,
    Thrust,
    FlightTime,
    Range,
    Aggregate,
}

impl CalculationKind {
    pub const ALL: [CalculationKind; 6] = [
        CalculationKind::WingArea,
        CalculationKind::StallSpeed,
        CalculationKind::Thrust,
        CalculationKind::FlightTime,
        CalculationKind::Range,
        CalculationKind::Aggregate,
    ];

    /// 필요한 입력 항목(프롬프트 순서).
    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            CalculationKind::WingArea => &[Field::ClMax, Field::Mass, Field::Velocity],
            CalculationKind::StallSpeed => &[Field::ClMax, Field::Mass, Field::Area],
            CalculationKind::Thrust => &[Field::Cd, Field::Velocity, Field::Area],
            CalculationKind::FlightTime => &[
                Field::Capacity,
                Field::CapacityUsed,
                Field::CruiseCurrentDraw,
                Field::BatteryVoltage,
                Field::WattagePayload,
            ],
            CalculationKind::Range => &[
                Field::FlightTime,
                Field::TrueAirspeed,
                Field::WindSpeed,
                Field::WindOrigin,
                Field::Course,
            ],
            CalculationKind::Aggregate => &[
                Field::ClMax,
                Field::Mass,
                Field::VelocityMin,
                Field::Cd,
                Field::Capacity,
                Field::CapacityUsed,
                Field::CruiseCurrentDraw,
                Field::BatteryVoltage,
                Field::WattageP,
                Field::TrueAirspeed,
                Field::WindSpeed,
                Field::WindOrigin,
                Field::Course,
            ],
        }
    }

    /// 결과 항목.
    pub fn result_fields(&self) -> &'static [Field] {
        match self {
            CalculationKind::WingArea => &[Field::WingArea],
            CalculationKind::StallSpeed => &[Field::StallSpeed],
            CalculationKind::Thrust => &[Field::Thrust],
            CalculationKind::FlightTime => &[Field::FlightTime],
            CalculationKind::Range => &[Field::AircraftRange],
            CalculationKind::Aggregate => &[
                Field::WingArea,
                Field::StallSpeed,
                Field::Thrust,
                Field::FlightTime,
                Field::AircraftRange,
                Field::GroundSpeed,
            ],
        }
    }

    /// 계산 종류에 맞는 입력 프롬프트 키. 날개 면적의 속도는 최소 속도를 묻는다.
    pub fn prompt_key(&self, field: Field) -> &'static str {
        match (self, field) {
            (CalculationKind::WingArea, Field::Velocity) => crate::i18n::keys::PROMPT_VELOCITY_MIN,
            _ => field.prompt_key(),
        }
    }
}

/// 입력 검증 오류. 계산식에 도달하기 전에 걸러진다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("필수 입력 '{0}' 누락")]
    Missing(&'static str),
    #[error("입력 '{0}'은(는) 유한한 숫자여야 합니다")]
    NotNumeric(&'static str),
}

/// 맵 기반 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("입력 오류: {0}")]
    Input(#[from] InputError),
    #[error("계산 오류: {0}")]
    Domain(#[from] PerfError),
}

/// 문자열 키 → 값 입력 맵.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculationInput {
    values: BTreeMap<String, f64>,
}

impl CalculationInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> &mut Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn set(&mut self, field: Field, value: f64) -> &mut Self {
        self.insert(field.key(), value)
    }

    pub fn raw(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// 항목 값을 가져온다. 없거나 유한하지 않으면 오류.
    pub fn get(&self, field: Field) -> Result<f64, InputError> {
        match self.values.get(field.key()) {
            None => Err(InputError::Missing(field.key())),
            Some(v) if !v.is_finite() => Err(InputError::NotNumeric(field.key())),
            Some(v) => Ok(*v),
        }
    }

    /// 계산 종류가 요구하는 모든 항목이 있는지 확인한다.
    pub fn validate(&self, kind: CalculationKind) -> Result<(), InputError> {
        for field in kind.required_fields() {
            self.get(*field)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for CalculationInput {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// 결과 맵. 항목 순서(Field 정의 순)로 순회한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculationResult {
    values: BTreeMap<Field, f64>,
}

impl CalculationResult {
    pub fn get(&self, field: Field) -> Option<f64> {
        self.values.get(&field).copied()
    }

    pub fn by_key(&self, key: &str) -> Option<f64> {
        Field::from_key(key).and_then(|f| self.get(f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn single(field: Field, value: f64) -> Self {
        let mut values = BTreeMap::new();
        values.insert(field, value);
        Self { values }
    }
}

impl From<AggregateResult> for CalculationResult {
    fn from(r: AggregateResult) -> Self {
        let values = [
            (Field::WingArea, r.wing_area),
            (Field::StallSpeed, r.stall_speed),
            (Field::Thrust, r.thrust),
            (Field::FlightTime, r.flight_time),
            (Field::AircraftRange, r.aircraft_range),
            (Field::GroundSpeed, r.ground_speed),
        ]
        .into_iter()
        .collect();
        Self { values }
    }
}

impl PerformanceCalculator {
    /// 입력 맵을 검증한 뒤 해당 계산식을 실행한다.
    pub fn calculate(
        &self,
        kind: CalculationKind,
        input: &CalculationInput,
    ) -> Result<CalculationResult, CalcError> {
        input.validate(kind)?;
        debug!(?kind, mode = ?self.mode(), "계산 실행");
        let result = match kind {
            CalculationKind::WingArea => CalculationResult::single(
                Field::WingArea,
                self.wing_area(&WingAreaInput {
                    cl_max: input.get(Field::ClMax)?,
                    mass_kg: input.get(Field::Mass)?,
                    velocity_m_s: input.get(Field::Velocity)?,
                })?,
            ),
            CalculationKind::StallSpeed => CalculationResult::single(
                Field::StallSpeed,
                self.stall_speed(&StallSpeedInput {
                    cl_max: input.get(Field::ClMax)?,
                    mass_kg: input.get(Field::Mass)?,
                    area_m2: input.get(Field::Area)?,
                })?,
            ),
            CalculationKind::Thrust => CalculationResult::single(
                Field::Thrust,
                self.thrust_required(&ThrustInput {
                    cd: input.get(Field::Cd)?,
                    velocity_m_s: input.get(Field::Velocity)?,
                    area_m2: input.get(Field::Area)?,
                })?,
            ),
            CalculationKind::FlightTime => CalculationResult::single(
                Field::FlightTime,
                self.flight_time(&FlightTimeInput {
                    capacity_mah: input.get(Field::Capacity)?,
                    capacity_used_pct: input.get(Field::CapacityUsed)?,
                    cruise_current_a: input.get(Field::CruiseCurrentDraw)?,
                    battery_voltage_v: input.get(Field::BatteryVoltage)?,
                    payload_w: input.get(Field::WattagePayload)?,
                })?,
            ),
            CalculationKind::Range => CalculationResult::single(
                Field::AircraftRange,
                self.range(&RangeInput {
                    flight_time_min: input.get(Field::FlightTime)?,
                    true_airspeed_m_s: input.get(Field::TrueAirspeed)?,
                    wind_speed_m_s: input.get(Field::WindSpeed)?,
                    wind_origin_deg: input.get(Field::WindOrigin)?,
                    course_deg: input.get(Field::Course)?,
                })?,
            ),
            CalculationKind::Aggregate => self.aggregate(&aggregate_input(input)?)?.into(),
        };
        Ok(result)
    }
}

/// 입력 맵에서 일괄 계산 입력을 만든다.
pub fn aggregate_input(input: &CalculationInput) -> Result<AggregateInput, InputError> {
    Ok(AggregateInput {
        cl_max: input.get(Field::ClMax)?,
        mass_kg: input.get(Field::Mass)?,
        velocity_min_m_s: input.get(Field::VelocityMin)?,
        cd: input.get(Field::Cd)?,
        capacity_mah: input.get(Field::Capacity)?,
        capacity_used_pct: input.get(Field::CapacityUsed)?,
        cruise_current_a: input.get(Field::CruiseCurrentDraw)?,
        battery_voltage_v: input.get(Field::BatteryVoltage)?,
        payload_w: input.get(Field::WattageP)?,
        true_airspeed_m_s: input.get(Field::TrueAirspeed)?,
        wind_speed_m_s: input.get(Field::WindSpeed)?,
        wind_origin_deg: input.get(Field::WindOrigin)?,
        course_deg: input.get(Field::Course)?,
    })
}
