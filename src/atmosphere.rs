//! ICAO 표준대기(1993) 모델.
//! 입력: 기하 고도(m)
//! 출력: 공기 밀도(kg/m³), 중력가속도(m/s²) 등

use thiserror::Error;

use crate::performance::rounding::round_to;

/// 표준 중력가속도 [m/s²]
pub const G0: f64 = 9.806_65;
/// 건조 공기 기체상수 [J/(kg·K)]
pub const R_AIR: f64 = 287.052_87;
/// 지오포텐셜 고도 환산용 유효 지구 반경 [m]
pub const EARTH_RADIUS_M: f64 = 6_356_766.0;

/// 모델이 지원하는 기하 고도 하한 [m]
pub const MIN_ALTITUDE_M: f64 = -5_004.0;
/// 모델이 지원하는 기하 고도 상한 [m]
pub const MAX_ALTITUDE_M: f64 = 81_020.0;

/// 층 기준값: (지오포텐셜 고도[m], 기준 온도[K], 감률[K/m], 기준 압력[Pa])
const LAYERS: [(f64, f64, f64, f64); 8] = [
    (-5_000.0, 320.65, -0.0065, 177_687.0),
    (0.0, 288.15, -0.0065, 101_325.0),
    (11_000.0, 216.65, 0.0, 22_632.0),
    (20_000.0, 216.65, 0.001, 5_474.87),
    (32_000.0, 228.65, 0.0028, 868.014),
    (47_000.0, 270.65, 0.0, 110.906),
    (51_000.0, 270.65, -0.0028, 66.938_4),
    (71_000.0, 214.65, -0.002, 3.956_39),
];

/// 대기 조회 실패. 세션 초기화 단계에서 치명적 오류로 취급한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AtmosphereError {
    #[error("고도 {altitude_m} m는 표준대기 유효 범위({MIN_ALTITUDE_M} ~ {MAX_ALTITUDE_M} m)를 벗어났습니다")]
    OutOfRange { altitude_m: f64 },
    #[error("고도 값이 유한한 숫자가 아닙니다")]
    NotFinite,
    #[error("고도 {altitude_m} m에서는 반올림한 공기 밀도가 0이 되어 계산할 수 없습니다")]
    Degenerate { altitude_m: f64 },
}

/// 계산식에서 사용하는 대기 상태. 소수점 셋째 자리로 반올림된 값이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereState {
    density: f64,
    gravity: f64,
}

impl AtmosphereState {
    /// 이미 알고 있는 밀도/중력으로 상태를 만든다. 두 값 모두 양수여야 한다.
    pub fn new(density: f64, gravity: f64) -> Option<Self> {
        if density.is_finite() && gravity.is_finite() && density > 0.0 && gravity > 0.0 {
            Some(Self { density, gravity })
        } else {
            None
        }
    }

    /// 공기 밀도 [kg/m³]
    pub fn density(&self) -> f64 {
        self.density
    }

    /// 중력가속도 [m/s²]
    pub fn gravity(&self) -> f64 {
        self.gravity
    }
}

/// 반올림 전의 대기 물성치.
#[derive(Debug, Clone, Copy)]
pub struct AtmosphereProperties {
    pub geopotential_altitude_m: f64,
    pub temperature_k: f64,
    pub pressure_pa: f64,
    pub density_kg_m3: f64,
    pub gravity_m_s2: f64,
}

/// 고도(m)에서 밀도와 중력가속도를 조회해 소수점 셋째 자리로 반올림한다.
/// 반올림한 밀도가 0이 되는 고도(약 56 km 이상)는 `Degenerate`.
pub fn lookup(altitude_m: f64) -> Result<AtmosphereState, AtmosphereError> {
    let props = properties(altitude_m)?;
    AtmosphereState::new(
        round_to(props.density_kg_m3, 3),
        round_to(props.gravity_m_s2, 3),
    )
    .ok_or(AtmosphereError::Degenerate { altitude_m })
}

/// 고도(m)의 전체 대기 물성치를 계산한다.
pub fn properties(altitude_m: f64) -> Result<AtmosphereProperties, AtmosphereError> {
    if !altitude_m.is_finite() {
        return Err(AtmosphereError::NotFinite);
    }
    if !(MIN_ALTITUDE_M..=MAX_ALTITUDE_M).contains(&altitude_m) {
        return Err(AtmosphereError::OutOfRange { altitude_m });
    }

    let h_geo = geopotential_altitude(altitude_m);
    let (h_base, t_base, lapse, p_base) = layer_for(h_geo);
    let dh = h_geo - h_base;
    let temperature_k = t_base + lapse * dh;
    let pressure_pa = if lapse == 0.0 {
        p_base * (-G0 * dh / (R_AIR * t_base)).exp()
    } else {
        p_base * (1.0 + lapse / t_base * dh).powf(-G0 / (lapse * R_AIR))
    };
    let density_kg_m3 = pressure_pa / (R_AIR * temperature_k);
    let gravity_m_s2 = G0 * (EARTH_RADIUS_M / (EARTH_RADIUS_M + altitude_m)).powi(2);

    Ok(AtmosphereProperties {
        geopotential_altitude_m: h_geo,
        temperature_k,
        pressure_pa,
        density_kg_m3,
        gravity_m_s2,
    })
}

/// 기하 고도를 지오포텐셜 고도로 환산한다.
pub fn geopotential_altitude(altitude_m: f64) -> f64 {
    EARTH_RADIUS_M * altitude_m / (EARTH_RADIUS_M + altitude_m)
}

fn layer_for(h_geo: f64) -> (f64, f64, f64, f64) {
    // 하한 근처(-5000 m 미만)는 첫 층을 연장해서 사용
    LAYERS
        .iter()
        .rev()
        .find(|layer| h_geo >= layer.0)
        .copied()
        .unwrap_or(LAYERS[0])
}
