//! 항공기 성능 계산 모듈 모음.
//! 날개 면적, 실속 속도, 필요 추력, 비행 시간, 항속 거리와 이를 묶은 일괄 계산으로 구성한다.

pub mod aggregate;
pub mod formulas;
pub mod rounding;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::atmosphere::AtmosphereState;

pub use aggregate::*;
pub use formulas::*;

/// 계산식 종류. 오류 메시지에서 어느 식이 실패했는지 알리는 데 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    WingArea,
    StallSpeed,
    Thrust,
    FlightTime,
    Range,
}

impl Formula {
    pub fn key(&self) -> &'static str {
        match self {
            Formula::WingArea => "wing_area",
            Formula::StallSpeed => "stall_speed",
            Formula::Thrust => "thrust",
            Formula::FlightTime => "flight_time",
            Formula::Range => "range",
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 수식이 정의되지 않는 이유.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainReason {
    /// 분모가 0
    DivisionByZero,
    /// 제곱근 인자가 음수
    NegativeRadicand,
    /// 역삼각함수 인자 등 정의역 밖
    ArgumentOutOfRange,
    /// 결과가 NaN/무한대
    NonFinite,
}

impl fmt::Display for DomainReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DomainReason::DivisionByZero => "0으로 나눔",
            DomainReason::NegativeRadicand => "음수의 제곱근",
            DomainReason::ArgumentOutOfRange => "정의역 밖의 인자",
            DomainReason::NonFinite => "유한하지 않은 결과",
        };
        f.write_str(s)
    }
}

/// 성능 계산 오류. 호출자는 `field`를 다시 입력받아 재계산할 수 있다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PerfError {
    #[error("{formula} 계산 불가({reason}){}", field_suffix(.field))]
    Domain {
        formula: Formula,
        field: Option<&'static str>,
        reason: DomainReason,
    },
}

fn field_suffix(field: &Option<&'static str>) -> String {
    match field {
        Some(name) => format!(": 입력값 '{name}' 확인 필요"),
        None => String::new(),
    }
}

impl PerfError {
    pub(crate) fn domain(
        formula: Formula,
        field: Option<&'static str>,
        reason: DomainReason,
    ) -> Self {
        PerfError::Domain {
            formula,
            field,
            reason,
        }
    }

    pub fn formula(&self) -> Formula {
        match self {
            PerfError::Domain { formula, .. } => *formula,
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            PerfError::Domain { field, .. } => *field,
        }
    }

    pub fn reason(&self) -> DomainReason {
        match self {
            PerfError::Domain { reason, .. } => *reason,
        }
    }
}

/// 수식 변형 선택.
///
/// `Legacy`는 기존 결과와 완전히 같은 값을 내기 위해 원래 식을 그대로 쓴다
/// (날개 면적의 `v*2`, 실속 속도의 연산 순서, 각도를 라디안으로 해석하는 항속 거리).
/// `Corrected`는 교과서 식을 사용한다. 두 모드 모두 일괄 계산의 추력은 정수로 반올림한다.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FormulaMode {
    #[default]
    Legacy,
    Corrected,
}

/// 세션 동안 고정된 대기 상태와 수식 모드로 계산을 수행한다.
#[derive(Debug, Clone, Copy)]
pub struct PerformanceCalculator {
    atmosphere: AtmosphereState,
    mode: FormulaMode,
}

impl PerformanceCalculator {
    pub fn new(atmosphere: AtmosphereState, mode: FormulaMode) -> Self {
        Self { atmosphere, mode }
    }

    pub fn atmosphere(&self) -> AtmosphereState {
        self.atmosphere
    }

    pub fn mode(&self) -> FormulaMode {
        self.mode
    }

    /// 필요한 최소 날개 면적 [m²]
    pub fn wing_area(&self, input: &WingAreaInput) -> Result<f64, PerfError> {
        formulas::wing_area(input, &self.atmosphere, self.mode)
    }

    /// 실속 속도 [m/s]
    pub fn stall_speed(&self, input: &StallSpeedInput) -> Result<f64, PerfError> {
        formulas::stall_speed(input, &self.atmosphere, self.mode)
    }

    /// 수평 비행 필요 추력 [N]
    pub fn thrust_required(&self, input: &ThrustInput) -> Result<f64, PerfError> {
        formulas::thrust_required(input, &self.atmosphere)
    }

    /// 전기 동력 비행 시간 [min]
    pub fn flight_time(&self, input: &FlightTimeInput) -> Result<f64, PerfError> {
        formulas::flight_time(input)
    }

    /// 항속 거리 [km]
    pub fn range(&self, input: &RangeInput) -> Result<f64, PerfError> {
        formulas::range(input, self.mode)
    }

    /// 다섯 계산을 한 번에 수행한다.
    pub fn aggregate(&self, input: &AggregateInput) -> Result<AggregateResult, PerfError> {
        aggregate::aggregate(input, &self.atmosphere, self.mode)
    }
}
