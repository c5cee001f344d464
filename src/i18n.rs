use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sys_locale::get_locale;
use tracing::{debug, warn};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const WELCOME: &str = "general.welcome";
    pub const DISCLAIMER: &str = "general.disclaimer";
    pub const UNSUPPORTED_LANGUAGE: &str = "general.unsupported_language";
    pub const ATMOSPHERE_INFO: &str = "general.atmosphere_info";
    pub const MODE_INFO: &str = "general.mode_info";
    pub const MODE_LEGACY: &str = "general.mode_legacy";
    pub const MODE_CORRECTED: &str = "general.mode_corrected";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_WING_AREA: &str = "main_menu.wing_area";
    pub const MAIN_MENU_STALL_SPEED: &str = "main_menu.stall_speed";
    pub const MAIN_MENU_THRUST: &str = "main_menu.thrust";
    pub const MAIN_MENU_FLIGHT_TIME: &str = "main_menu.flight_time";
    pub const MAIN_MENU_RANGE: &str = "main_menu.range";
    pub const MAIN_MENU_AGGREGATE: &str = "main_menu.aggregate";
    pub const MAIN_MENU_TERMINATE: &str = "main_menu.terminate";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const HEADING_WING_AREA: &str = "heading.wing_area";
    pub const HEADING_STALL_SPEED: &str = "heading.stall_speed";
    pub const HEADING_THRUST: &str = "heading.thrust";
    pub const HEADING_FLIGHT_TIME: &str = "heading.flight_time";
    pub const HEADING_RANGE: &str = "heading.range";
    pub const HEADING_AGGREGATE: &str = "heading.aggregate";
    pub const NOTE_LEVEL_FLIGHT: &str = "heading.note_level_flight";

    pub const PROMPT_CL_MAX: &str = "prompt.cl_max";
    pub const PROMPT_CD: &str = "prompt.cd";
    pub const PROMPT_MASS: &str = "prompt.mass";
    pub const PROMPT_VELOCITY: &str = "prompt.velocity";
    pub const PROMPT_VELOCITY_MIN: &str = "prompt.velocity_min";
    pub const PROMPT_AREA: &str = "prompt.area";
    pub const PROMPT_CAPACITY: &str = "prompt.capacity";
    pub const PROMPT_CAPACITY_USED: &str = "prompt.capacity_used";
    pub const PROMPT_CRUISE_CURRENT: &str = "prompt.cruise_current";
    pub const PROMPT_BATTERY_VOLTAGE: &str = "prompt.battery_voltage";
    pub const PROMPT_PAYLOAD_WATTAGE: &str = "prompt.payload_wattage";
    pub const PROMPT_FLIGHT_TIME: &str = "prompt.flight_time";
    pub const PROMPT_TRUE_AIRSPEED: &str = "prompt.true_airspeed";
    pub const PROMPT_WIND_SPEED: &str = "prompt.wind_speed";
    pub const PROMPT_WIND_ORIGIN: &str = "prompt.wind_origin";
    pub const PROMPT_COURSE: &str = "prompt.course";

    pub const LABEL_CL_MAX: &str = "label.cl_max";
    pub const LABEL_CD: &str = "label.cd";
    pub const LABEL_MASS: &str = "label.mass";
    pub const LABEL_VELOCITY: &str = "label.velocity";
    pub const LABEL_VELOCITY_MIN: &str = "label.velocity_min";
    pub const LABEL_AREA: &str = "label.area";
    pub const LABEL_CAPACITY: &str = "label.capacity";
    pub const LABEL_CAPACITY_USED: &str = "label.capacity_used";
    pub const LABEL_CRUISE_CURRENT: &str = "label.cruise_current";
    pub const LABEL_BATTERY_VOLTAGE: &str = "label.battery_voltage";
    pub const LABEL_PAYLOAD_WATTAGE: &str = "label.payload_wattage";
    pub const LABEL_FLIGHT_TIME: &str = "label.flight_time";
    pub const LABEL_TRUE_AIRSPEED: &str = "label.true_airspeed";
    pub const LABEL_WIND_SPEED: &str = "label.wind_speed";
    pub const LABEL_WIND_ORIGIN: &str = "label.wind_origin";
    pub const LABEL_COURSE: &str = "label.course";
    pub const LABEL_WING_AREA: &str = "label.wing_area";
    pub const LABEL_STALL_SPEED: &str = "label.stall_speed";
    pub const LABEL_THRUST: &str = "label.thrust";
    pub const LABEL_RANGE: &str = "label.range";
    pub const LABEL_GROUND_SPEED: &str = "label.ground_speed";

    pub const RESULT_WING_AREA: &str = "result.wing_area";
    pub const RESULT_STALL_SPEED: &str = "result.stall_speed";
    pub const RESULT_THRUST: &str = "result.thrust";
    pub const RESULT_FLIGHT_TIME: &str = "result.flight_time";
    pub const RESULT_RANGE: &str = "result.range";
    pub const RESULT_GROUND_SPEED: &str = "result.ground_speed";
    pub const NOTE_FLIGHT_TIME: &str = "result.note_flight_time";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_DOMAIN: &str = "error.domain";
    pub const ERROR_DOMAIN_FIELD: &str = "error.domain_field";
    pub const REASON_DIVISION_BY_ZERO: &str = "error.reason_division_by_zero";
    pub const REASON_NEGATIVE_RADICAND: &str = "error.reason_negative_radicand";
    pub const REASON_OUT_OF_RANGE: &str = "error.reason_out_of_range";
    pub const REASON_NON_FINITE: &str = "error.reason_non_finite";

    pub const EXPORT_ASK: &str = "export.ask";
    pub const EXPORT_PROMPT_DIR: &str = "export.prompt_dir";
    pub const EXPORT_PROMPT_NAME: &str = "export.prompt_name";
    pub const EXPORT_EMPTY_NAME: &str = "export.empty_name";
    pub const EXPORT_DONE: &str = "export.done";
    pub const EXPORT_FAILED: &str = "export.failed";

    pub const TERMINATE_CONFIRM: &str = "terminate.confirm";

    pub const GUI_ALTITUDE: &str = "gui.altitude";
    pub const GUI_MODE: &str = "gui.mode";
    pub const GUI_LANGUAGE: &str = "gui.language";
    pub const GUI_APPLY: &str = "gui.apply";
    pub const GUI_CALCULATE: &str = "gui.calculate";
    pub const GUI_EXPORT: &str = "gui.export";
    pub const GUI_RESULTS: &str = "gui.results";
    pub const GUI_SHOW_DISCLAIMER: &str = "gui.show_disclaimer";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
    De,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else if c.starts_with("de") {
            Language::De
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
            Language::De => "de",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: built_in_pack(lang_code),
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        debug!(
            lang = lang_code,
            pack = overrides.is_some(),
            "번역기 초기화"
        );
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 영어 → 키 순으로 폴백한다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let built_in = match self.lang {
            Language::Ko => ko(key),
            Language::En | Language::De => None,
        };
        built_in.or_else(|| en(key)).unwrap_or(key)
    }

    /// `{name}` 자리표시자를 채운 번역 문자열.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }
}

/// `{name}` 형태의 자리표시자를 값으로 바꾼다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// 언어 결정 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChoice {
    /// 사용할 언어 코드
    pub code: String,
    /// 요청되었지만 지원하지 않는 언어 태그
    pub unsupported: Option<String>,
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> LanguageChoice {
    let requested = cli_arg
        .filter(|s| !is_auto(s))
        .or_else(|| config_lang.filter(|s| !is_auto(s)));
    if let Some(tag) = requested {
        return match normalize_lang(tag) {
            Some(code) => LanguageChoice {
                code,
                unsupported: None,
            },
            None => {
                warn!(tag, "지원하지 않는 언어, 영어로 시작");
                LanguageChoice {
                    code: "en-us".to_string(),
                    unsupported: Some(tag.to_string()),
                }
            }
        };
    }
    LanguageChoice {
        code: detect_system_language().unwrap_or_else(|| "en-us".to_string()),
        unsupported: None,
    }
}

fn is_auto(code: &str) -> bool {
    matches!(code.trim().to_lowercase().as_str(), "" | "auto")
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase().replace('_', "-");
    match c.as_str() {
        "en" | "english" | "en-us" => Some("en-us".into()),
        "en-uk" | "en-gb" => Some("en-us".into()),
        "ko" | "ko-kr" | "korean" => Some("ko-kr".into()),
        "de" | "de-de" | "german" | "deutsch" => Some("de-de".into()),
        other if other.starts_with("en-") => Some("en-us".into()),
        other if other.starts_with("ko-") => Some("ko-kr".into()),
        other if other.starts_with("de-") => Some("de-de".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        "de" => Some("de-de".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., de-de)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., de)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// 언어팩 TOML을 `section.key` → 문자열 맵으로 펼친다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "de-de" | "de" => parse_toml_to_map(include_str!("../locales/de-de.toml")),
        _ => None,
    }
}

const DISCLAIMER_EN: &str = "\
DISCLAIMER: This program is provided for educational purposes only. It calculates the wing area, stall speed,
the thrust required, and other properties of an airplane based on certain input parameters.
The calculations are based on simplified physics and do not take into account all the complex variables and
conditions that can affect an airplane's performance in real-world scenarios.

The program is not intended to be used for actual flight planning or aircraft design. The results should not
be used for making decisions that can result in harm to people or property. The author of this program is
not responsible for any damages or losses arising from the use of this program.

For these calculations the ICAO standard atmosphere 1993 is used.

Additionally, this program includes translated language packs. The accuracy of translations is not guaranteed,
and the program's author is not responsible for errors or inaccuracies in the translated content.

Always consult with a certified aviation professional or use certified software for flight planning and
aircraft design.

USE AT YOUR OWN RISK.";

const DISCLAIMER_KO: &str = "\
면책 조항: 이 프로그램은 교육 목적으로만 제공됩니다. 입력값을 바탕으로 날개 면적, 실속 속도,
필요 추력 등 항공기의 특성을 계산합니다.
계산은 단순화된 물리 모델을 사용하며 실제 비행에서 성능에 영향을 주는 복잡한 변수와 조건을 모두 반영하지 않습니다.

이 프로그램은 실제 비행 계획이나 항공기 설계용이 아닙니다. 결과를 사람이나 재산에 피해를 줄 수 있는
결정에 사용하지 마십시오. 작성자는 이 프로그램 사용으로 인한 어떠한 손해에도 책임지지 않습니다.

계산에는 ICAO 표준대기(1993)를 사용합니다.

이 프로그램에는 번역된 언어팩이 포함되어 있습니다. 번역의 정확성은 보장되지 않으며,
작성자는 번역 내용의 오류에 책임지지 않습니다.

비행 계획과 항공기 설계는 반드시 공인된 항공 전문가 또는 인증된 소프트웨어를 이용하십시오.

사용에 따른 위험은 사용자 본인에게 있습니다.";

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        WELCOME => "PlaneAssist에 오신 것을 환영합니다. 항공기 설계의 핵심 값을 계산하는 프로그램입니다.\n-- 미터법 버전",
        DISCLAIMER => DISCLAIMER_KO,
        UNSUPPORTED_LANGUAGE => "지원하지 않는 언어입니다({tag}). 기본 언어(영어)로 시작합니다...",
        ATMOSPHERE_INFO => "고도 {altitude} m: 공기 밀도 {density} kg/m³, 중력가속도 {gravity} m/s²",
        MODE_INFO => "계산식 모드: {mode}",
        MODE_LEGACY => "기존(호환)",
        MODE_CORRECTED => "보정(교과서 식)",
        MAIN_MENU_TITLE => "\n=== PlaneAssist 메인 메뉴 ===",
        MAIN_MENU_WING_AREA => "[1] - 날개 면적 계산",
        MAIN_MENU_STALL_SPEED => "[2] - 실속 속도 계산",
        MAIN_MENU_THRUST => "[3] - 필요 추력 계산",
        MAIN_MENU_FLIGHT_TIME => "[4] - 비행 시간 계산",
        MAIN_MENU_RANGE => "[5] - 항속 거리 계산",
        MAIN_MENU_AGGREGATE => "[6] - 일괄 계산",
        MAIN_MENU_TERMINATE => "[T] - 프로그램 종료",
        PROMPT_MENU_SELECT => ">>> ",
        INVALID_SELECTION_RETRY => "지원하지 않는 선택입니다. 다시 시도하세요...",
        HEADING_WING_AREA => "\n-- 날개 면적 계산 --",
        HEADING_STALL_SPEED => "\n-- 실속 속도 계산 --",
        HEADING_THRUST => "\n-- 필요 추력 계산 --",
        HEADING_FLIGHT_TIME => "\n-- 비행 시간 계산 --",
        HEADING_RANGE => "\n-- 항속 거리 계산 --",
        HEADING_AGGREGATE => "\n-- 일괄 계산 --",
        NOTE_LEVEL_FLIGHT => "다음 계산은 가속 없는 수평 비행을 가정합니다.",
        PROMPT_CL_MAX => "익형의 최대 양력계수를 입력하세요",
        PROMPT_CD => "익형의 항력계수를 입력하세요",
        PROMPT_MASS => "기체 질량을 입력하세요 (kg)",
        PROMPT_VELOCITY => "비행 속도를 입력하세요 (m/s)",
        PROMPT_VELOCITY_MIN => "비행 가능한 최소 속도를 입력하세요 (m/s)",
        PROMPT_AREA => "날개 면적을 입력하세요 (m²)",
        PROMPT_CAPACITY => "배터리(팩) 전체 용량을 입력하세요 (mAh)",
        PROMPT_CAPACITY_USED => "사용할 배터리 비율을 입력하세요 (%)",
        PROMPT_CRUISE_CURRENT => "순항 시 소비 전류를 입력하세요 (A)",
        PROMPT_BATTERY_VOLTAGE => "배터리 전압을 입력하세요 (V)",
        PROMPT_PAYLOAD_WATTAGE => "배터리에 연결된 모든 장비의 소비 전력 합계를 입력하세요 (W)",
        PROMPT_FLIGHT_TIME => "전체 비행 시간을 입력하세요 (min)",
        PROMPT_TRUE_AIRSPEED => "진대기속도를 입력하세요 (m/s)",
        PROMPT_WIND_SPEED => "풍속을 입력하세요 (m/s)",
        PROMPT_WIND_ORIGIN => "바람이 불어오는 방향을 입력하세요, 북쪽 기준 시계방향 (°)",
        PROMPT_COURSE => "비행 코스를 입력하세요, 북쪽 기준 시계방향 (°)",
        LABEL_CL_MAX => "최대 양력계수",
        LABEL_CD => "항력계수",
        LABEL_MASS => "질량",
        LABEL_VELOCITY => "속도",
        LABEL_VELOCITY_MIN => "최소 속도",
        LABEL_AREA => "날개 면적",
        LABEL_CAPACITY => "배터리 용량",
        LABEL_CAPACITY_USED => "사용 용량",
        LABEL_CRUISE_CURRENT => "순항 전류",
        LABEL_BATTERY_VOLTAGE => "배터리 전압",
        LABEL_PAYLOAD_WATTAGE => "탑재 장비 전력",
        LABEL_FLIGHT_TIME => "비행 시간",
        LABEL_TRUE_AIRSPEED => "진대기속도",
        LABEL_WIND_SPEED => "풍속",
        LABEL_WIND_ORIGIN => "풍향",
        LABEL_COURSE => "코스",
        LABEL_WING_AREA => "날개 면적",
        LABEL_STALL_SPEED => "실속 속도",
        LABEL_THRUST => "필요 추력",
        LABEL_RANGE => "항속 거리",
        LABEL_GROUND_SPEED => "대지 속도",
        RESULT_WING_AREA => "권장 최소 날개 면적은 {value} m² 입니다",
        RESULT_STALL_SPEED => "실속 속도는 {value} m/s 입니다",
        RESULT_THRUST => "필요 최소 추력은 {value} N 입니다",
        RESULT_FLIGHT_TIME => "비행 시간: {value} min",
        RESULT_RANGE => "항속 거리: {value} km",
        RESULT_GROUND_SPEED => "대지 속도: {value} m/s",
        NOTE_FLIGHT_TIME => "이착륙 시 증가하는 전류 소모는 포함되지 않습니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력해야 합니다.\n쉼표 대신 소수점(.)을 사용하세요.",
        ERROR_DOMAIN => "{formula} 계산 불가: {reason}",
        ERROR_DOMAIN_FIELD => "입력값 '{field}'을(를) 확인하세요.",
        REASON_DIVISION_BY_ZERO => "0으로 나누게 됩니다",
        REASON_NEGATIVE_RADICAND => "음수의 제곱근이 필요합니다",
        REASON_OUT_OF_RANGE => "입력 조합이 유효 범위를 벗어났습니다",
        REASON_NON_FINITE => "결과가 유한한 값이 아닙니다",
        EXPORT_ASK => "이 데이터를 .xlsx 파일로 저장할까요?\n저장하려면 'y', 아니면 아무 문자나 입력하세요",
        EXPORT_PROMPT_DIR => "저장할 디렉터리를 입력하세요:\n(현재 디렉터리에 저장하려면 엔터)",
        EXPORT_PROMPT_NAME => "확장자 없이 파일 이름을 입력하세요:",
        EXPORT_EMPTY_NAME => "파일 이름은 비어 있을 수 없습니다.",
        EXPORT_DONE => "저장 완료: {path}",
        EXPORT_FAILED => "저장 실패: {error}",
        TERMINATE_CONFIRM => "정말 종료할까요? 입력한 내용은 모두 사라집니다.\n종료하려면 'y', 아니면 아무 문자나 입력하세요",
        GUI_ALTITUDE => "고도 [m]",
        GUI_MODE => "계산식",
        GUI_LANGUAGE => "언어",
        GUI_APPLY => "적용",
        GUI_CALCULATE => "계산",
        GUI_EXPORT => "엑셀로 내보내기…",
        GUI_RESULTS => "결과",
        GUI_SHOW_DISCLAIMER => "면책 조항 보기",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "program terminated...",
        WELCOME => "Welcome to PlaneAssist. PlaneAssist is a program that helps you calculate key parameters for aircraft design.\n-- Metric Version",
        DISCLAIMER => DISCLAIMER_EN,
        UNSUPPORTED_LANGUAGE => "You specified an unsupported language ({tag}).\nProgram started in default language (english)...",
        ATMOSPHERE_INFO => "Altitude {altitude} m: air density {density} kg/m³, gravity {gravity} m/s²",
        MODE_INFO => "Formula mode: {mode}",
        MODE_LEGACY => "legacy (compatible)",
        MODE_CORRECTED => "corrected (textbook)",
        MAIN_MENU_TITLE => "\n  PlaneAssist Main Menu:",
        MAIN_MENU_WING_AREA => "[1] - Wing Area Calculator",
        MAIN_MENU_STALL_SPEED => "[2] - Stall Speed Calculator",
        MAIN_MENU_THRUST => "[3] - Thrust Required Calculator",
        MAIN_MENU_FLIGHT_TIME => "[4] - Flight Time Calculator",
        MAIN_MENU_RANGE => "[5] - Range Calculator",
        MAIN_MENU_AGGREGATE => "[6] - 'All In One' Calculator",
        MAIN_MENU_TERMINATE => "[T] - Terminate Program",
        PROMPT_MENU_SELECT => ">>> ",
        INVALID_SELECTION_RETRY => "Sorry, this is an unsupported option.\nPlease try again...",
        HEADING_WING_AREA => "\n-- Wing Area Calculator --",
        HEADING_STALL_SPEED => "\n-- Stall Speed Calculator --",
        HEADING_THRUST => "\n-- Thrust Required Calculator --",
        HEADING_FLIGHT_TIME => "\n-- Flight Time Calculator --",
        HEADING_RANGE => "\n-- Range Calculator --",
        HEADING_AGGREGATE => "\n-- 'All In One' Calculator --",
        NOTE_LEVEL_FLIGHT => "The following calculations are for horizontal unaccelerated flight.",
        PROMPT_CL_MAX => "Please enter the maximum lift coefficient of your airfoil",
        PROMPT_CD => "Please enter the drag coefficient of your airfoil",
        PROMPT_MASS => "Please enter the mass of the aircraft (kg)",
        PROMPT_VELOCITY => "Please enter the velocity of your airplane (m/s)",
        PROMPT_VELOCITY_MIN => "Please enter the minimum velocity at which your airplane flies (m/s)",
        PROMPT_AREA => "Please enter the wing area of your airplane (m²)",
        PROMPT_CAPACITY => "Please enter the total capacity of your Battery/Battery pack (mAh)",
        PROMPT_CAPACITY_USED => "Please enter the percentage of your battery you plan to use (%)",
        PROMPT_CRUISE_CURRENT => "Please enter the current draw of your plane in cruise (A)",
        PROMPT_BATTERY_VOLTAGE => "Please enter the battery voltage (V)",
        PROMPT_PAYLOAD_WATTAGE => "Please enter the combined wattage of all devices that are connected to the battery (W)",
        PROMPT_FLIGHT_TIME => "Please enter the total flight time of your Aircraft (min)",
        PROMPT_TRUE_AIRSPEED => "Please enter the true airspeed of your airplane (m/s)",
        PROMPT_WIND_SPEED => "Please enter the velocity of the wind (m/s)",
        PROMPT_WIND_ORIGIN => "Please enter the direction from which the wind blows, measured clockwise from north (°)",
        PROMPT_COURSE => "Please enter the course of your aircraft, measured clockwise from north (°)",
        LABEL_CL_MAX => "Maximum lift coefficient",
        LABEL_CD => "Drag coefficient",
        LABEL_MASS => "Mass",
        LABEL_VELOCITY => "Velocity",
        LABEL_VELOCITY_MIN => "Minimum velocity",
        LABEL_AREA => "Wing area",
        LABEL_CAPACITY => "Battery capacity",
        LABEL_CAPACITY_USED => "Capacity used",
        LABEL_CRUISE_CURRENT => "Cruise current draw",
        LABEL_BATTERY_VOLTAGE => "Battery voltage",
        LABEL_PAYLOAD_WATTAGE => "Payload wattage",
        LABEL_FLIGHT_TIME => "Flight time",
        LABEL_TRUE_AIRSPEED => "True airspeed",
        LABEL_WIND_SPEED => "Wind speed",
        LABEL_WIND_ORIGIN => "Wind origin",
        LABEL_COURSE => "Course",
        LABEL_WING_AREA => "Wing area",
        LABEL_STALL_SPEED => "Stall speed",
        LABEL_THRUST => "Thrust required",
        LABEL_RANGE => "Range",
        LABEL_GROUND_SPEED => "Ground speed",
        RESULT_WING_AREA => "The minimum recommended wing area is {value}m²",
        RESULT_STALL_SPEED => "The stall speed is {value}m/s",
        RESULT_THRUST => "The minimum thrust required is {value}N",
        RESULT_FLIGHT_TIME => "Flight time: {value}min",
        RESULT_RANGE => "Range: {value}km",
        RESULT_GROUND_SPEED => "Ground speed: {value}m/s",
        NOTE_FLIGHT_TIME => "Note that this calculation does not include the increased current draw during takeoff and landing.",
        ERROR_INVALID_NUMBER => "Input has to be a number.\nAlso make sure to use a decimal dot instead of a comma.",
        ERROR_DOMAIN => "{formula} cannot be calculated: {reason}",
        ERROR_DOMAIN_FIELD => "Please check the input '{field}'.",
        REASON_DIVISION_BY_ZERO => "division by zero",
        REASON_NEGATIVE_RADICAND => "square root of a negative number",
        REASON_OUT_OF_RANGE => "input combination outside the valid range",
        REASON_NON_FINITE => "result is not a finite number",
        EXPORT_ASK => "Do you want to save this data in an .xlsx file?\nPress 'y' if yes, else press a random character",
        EXPORT_PROMPT_DIR => "Enter the path where you want to save this file:\n(if you want the file to be in the local directory just press enter)",
        EXPORT_PROMPT_NAME => "enter the name of your file without extension:",
        EXPORT_EMPTY_NAME => "Name cannot be empty.",
        EXPORT_DONE => "Saved: {path}",
        EXPORT_FAILED => "Saving failed: {error}",
        TERMINATE_CONFIRM => "Are you sure you want to exit? All your progress will be deleted.\nPress 'y' if yes, else press a random character",
        GUI_ALTITUDE => "Altitude [m]",
        GUI_MODE => "Formulas",
        GUI_LANGUAGE => "Language",
        GUI_APPLY => "Apply",
        GUI_CALCULATE => "Calculate",
        GUI_EXPORT => "Export to Excel…",
        GUI_RESULTS => "Results",
        GUI_SHOW_DISCLAIMER => "Show disclaimer",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_korean_key_has_english() {
        use keys::*;
        for key in [WELCOME, DISCLAIMER, EXPORT_ASK, LABEL_GROUND_SPEED, GUI_EXPORT] {
            assert!(ko(key).is_some());
            assert!(en(key).is_some());
        }
    }

    #[test]
    fn normalize_variants() {
        assert_eq!(normalize_lang("EN_gb").as_deref(), Some("en-us"));
        assert_eq!(normalize_lang("ko").as_deref(), Some("ko-kr"));
        assert_eq!(normalize_lang("de-AT").as_deref(), Some("de-de"));
        assert_eq!(normalize_lang("fr"), None);
    }
}
