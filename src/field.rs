/// 계산에 쓰이는 입력/결과 항목을 나타낸다.
///
/// `key()`는 입력 맵, 결과 맵, 스프레드시트 내보내기에서 공통으로 쓰는 이름이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    ClMax,
    Cd,
    Mass,
    Velocity,
    VelocityMin,
    Area,
    Capacity,
    CapacityUsed,
    CruiseCurrentDraw,
    BatteryVoltage,
    WattagePayload,
    WattageP,
    FlightTime,
    TrueAirspeed,
    WindSpeed,
    WindOrigin,
    Course,
    WingArea,
    StallSpeed,
    Thrust,
    AircraftRange,
    GroundSpeed,
}

impl Field {
    pub const ALL: [Field; 22] = [
        Field::ClMax,
        Field::Cd,
        Field::Mass,
        Field::Velocity,
        Field::VelocityMin,
        Field::Area,
        Field::Capacity,
        Field::CapacityUsed,
        Field::CruiseCurrentDraw,
        Field::BatteryVoltage,
        Field::WattagePayload,
        Field::WattageP,
        Field::FlightTime,
        Field::TrueAirspeed,
        Field::WindSpeed,
        Field::WindOrigin,
        Field::Course,
        Field::WingArea,
        Field::StallSpeed,
        Field::Thrust,
        Field::AircraftRange,
        Field::GroundSpeed,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::ClMax => "cl_max",
            Field::Cd => "cd",
            Field::Mass => "mass",
            Field::Velocity => "velocity",
            Field::VelocityMin => "velocity_min",
            Field::Area => "area",
            Field::Capacity => "capacity",
            Field::CapacityUsed => "capacity_used",
            Field::CruiseCurrentDraw => "cruise_current_draw",
            Field::BatteryVoltage => "battery_voltage",
            Field::WattagePayload => "wattage_payload",
            Field::WattageP => "wattage_p",
            Field::FlightTime => "flight_time",
            Field::TrueAirspeed => "true_airspeed",
            Field::WindSpeed => "wind_speed",
            Field::WindOrigin => "wind_origin",
            Field::Course => "course",
            Field::WingArea => "wing_area",
            Field::StallSpeed => "stall_speed",
            Field::Thrust => "thrust",
            Field::AircraftRange => "aircraft_range",
            Field::GroundSpeed => "ground_speed",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.key() == key)
    }

    /// 표시 단위. 무차원 값은 빈 문자열.
    pub fn unit(&self) -> &'static str {
        match self {
            Field::ClMax | Field::Cd => "",
            Field::Mass => "kg",
            Field::Velocity
            | Field::VelocityMin
            | Field::TrueAirspeed
            | Field::WindSpeed
            | Field::StallSpeed
            | Field::GroundSpeed => "m/s",
            Field::Area | Field::WingArea => "m²",
            Field::Capacity => "mAh",
            Field::CapacityUsed => "%",
            Field::CruiseCurrentDraw => "A",
            Field::BatteryVoltage => "V",
            Field::WattagePayload | Field::WattageP => "W",
            Field::FlightTime => "min",
            Field::WindOrigin | Field::Course => "°",
            Field::Thrust => "N",
            Field::AircraftRange => "km",
        }
    }

    /// 입력 프롬프트 문자열 키(i18n).
    pub fn prompt_key(&self) -> &'static str {
        use crate::i18n::keys::*;
        match self {
            Field::ClMax => PROMPT_CL_MAX,
            Field::Cd => PROMPT_CD,
            Field::Mass => PROMPT_MASS,
            Field::Velocity => PROMPT_VELOCITY,
            Field::VelocityMin => PROMPT_VELOCITY_MIN,
            Field::Area => PROMPT_AREA,
            Field::Capacity => PROMPT_CAPACITY,
            Field::CapacityUsed => PROMPT_CAPACITY_USED,
            Field::CruiseCurrentDraw => PROMPT_CRUISE_CURRENT,
            Field::BatteryVoltage => PROMPT_BATTERY_VOLTAGE,
            Field::WattagePayload | Field::WattageP => PROMPT_PAYLOAD_WATTAGE,
            Field::FlightTime => PROMPT_FLIGHT_TIME,
            Field::TrueAirspeed => PROMPT_TRUE_AIRSPEED,
            Field::WindSpeed => PROMPT_WIND_SPEED,
            Field::WindOrigin => PROMPT_WIND_ORIGIN,
            Field::Course => PROMPT_COURSE,
            Field::WingArea => LABEL_WING_AREA,
            Field::StallSpeed => LABEL_STALL_SPEED,
            Field::Thrust => LABEL_THRUST,
            Field::AircraftRange => LABEL_RANGE,
            Field::GroundSpeed => LABEL_GROUND_SPEED,
        }
    }

    /// 결과/내보내기용 짧은 이름 키(i18n).
    pub fn label_key(&self) -> &'static str {
        use crate::i18n::keys::*;
        match self {
            Field::ClMax => LABEL_CL_MAX,
            Field::Cd => LABEL_CD,
            Field::Mass => LABEL_MASS,
            Field::Velocity => LABEL_VELOCITY,
            Field::VelocityMin => LABEL_VELOCITY_MIN,
            Field::Area => LABEL_AREA,
            Field::Capacity => LABEL_CAPACITY,
            Field::CapacityUsed => LABEL_CAPACITY_USED,
            Field::CruiseCurrentDraw => LABEL_CRUISE_CURRENT,
            Field::BatteryVoltage => LABEL_BATTERY_VOLTAGE,
            Field::WattagePayload | Field::WattageP => LABEL_PAYLOAD_WATTAGE,
            Field::FlightTime => LABEL_FLIGHT_TIME,
            Field::TrueAirspeed => LABEL_TRUE_AIRSPEED,
            Field::WindSpeed => LABEL_WIND_SPEED,
            Field::WindOrigin => LABEL_WIND_ORIGIN,
            Field::Course => LABEL_COURSE,
            Field::WingArea => LABEL_WING_AREA,
            Field::StallSpeed => LABEL_STALL_SPEED,
            Field::Thrust => LABEL_THRUST,
            Field::AircraftRange => LABEL_RANGE,
            Field::GroundSpeed => LABEL_GROUND_SPEED,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::Field;

    #[test]
    fn keys_are_unique_and_resolvable() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("velocity_max"), None);
    }
}
