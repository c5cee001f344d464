use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use tracing::{debug, warn};

use crate::app::{AppError, Session};
use crate::calculation::{CalcError, CalculationInput, CalculationKind, CalculationResult};
use crate::export::{self, ExportTemplate};
use crate::field::Field;
use crate::i18n::{keys, Translator};
use crate::performance::{DomainReason, Formula, PerfError};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    WingArea,
    StallSpeed,
    Thrust,
    FlightTime,
    Range,
    Aggregate,
    Terminate,
}

impl MenuChoice {
    /// 메뉴 입력 문자열을 해석한다. 종료는 `T`/`t`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::WingArea),
            "2" => Some(MenuChoice::StallSpeed),
            "3" => Some(MenuChoice::Thrust),
            "4" => Some(MenuChoice::FlightTime),
            "5" => Some(MenuChoice::Range),
            "6" => Some(MenuChoice::Aggregate),
            "T" | "t" => Some(MenuChoice::Terminate),
            _ => None,
        }
    }

    /// 계산 메뉴이면 해당 계산 종류.
    pub fn kind(&self) -> Option<CalculationKind> {
        match self {
            MenuChoice::WingArea => Some(CalculationKind::WingArea),
            MenuChoice::StallSpeed => Some(CalculationKind::StallSpeed),
            MenuChoice::Thrust => Some(CalculationKind::Thrust),
            MenuChoice::FlightTime => Some(CalculationKind::FlightTime),
            MenuChoice::Range => Some(CalculationKind::Range),
            MenuChoice::Aggregate => Some(CalculationKind::Aggregate),
            MenuChoice::Terminate => None,
        }
    }
}

/// 프롬프트 입출력 스트림 묶음. 테스트에서는 메모리 버퍼를 넣어 사용한다.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// 표준 입출력에 연결한다.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 한 줄(블록)을 출력한다.
    pub fn say(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 닫히면 `InputClosed`.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// 숫자를 입력받는다. 숫자가 아니거나 유한하지 않으면 다시 묻는다.
    pub fn read_f64(&mut self, tr: &Translator) -> Result<f64, AppError> {
        loop {
            let s = self.read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
            match parse_number(&s) {
                Some(v) => return Ok(v),
                None => {
                    debug!(input = %s, "숫자 입력 거부");
                    self.say(tr.t(keys::ERROR_INVALID_NUMBER))?;
                }
            }
        }
    }

    /// 계산 종류에 필요한 항목을 순서대로 입력받는다.
    pub fn collect_inputs(
        &mut self,
        tr: &Translator,
        kind: CalculationKind,
    ) -> Result<CalculationInput, AppError> {
        let mut input = CalculationInput::new();
        for field in kind.required_fields() {
            self.say(tr.t(kind.prompt_key(*field)))?;
            let value = self.read_f64(tr)?;
            input.set(*field, value);
        }
        Ok(input)
    }

    /// 메인 메뉴를 표시하고 선택값을 반환한다.
    pub fn main_menu(&mut self, tr: &Translator) -> Result<MenuChoice, AppError> {
        self.say(tr.t(keys::MAIN_MENU_TITLE))?;
        for key in [
            keys::MAIN_MENU_WING_AREA,
            keys::MAIN_MENU_STALL_SPEED,
            keys::MAIN_MENU_THRUST,
            keys::MAIN_MENU_FLIGHT_TIME,
            keys::MAIN_MENU_RANGE,
            keys::MAIN_MENU_AGGREGATE,
            keys::MAIN_MENU_TERMINATE,
        ] {
            self.say(tr.t(key))?;
        }
        loop {
            let sel = self.read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
            match MenuChoice::parse(&sel) {
                Some(choice) => return Ok(choice),
                None => self.say(tr.t(keys::INVALID_SELECTION_RETRY))?,
            }
        }
    }

    /// 질문을 출력하고 `y`이면 true.
    pub fn confirm(&mut self, tr: &Translator, key: &str) -> Result<bool, AppError> {
        self.say(tr.t(key))?;
        let answer = self.read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        Ok(answer.trim() == "y")
    }
}

/// 사용자 입력 문자열을 숫자로 해석한다. 쉼표 소수점은 허용하지 않는다.
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 계산 메뉴 하나를 처리한다. 수식 오류는 안내 후 메뉴로 돌아간다.
pub fn handle_calculation<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    session: &Session,
    kind: CalculationKind,
) -> Result<(), AppError> {
    let tr = &session.tr;
    term.say(tr.t(heading_key(kind)))?;
    term.say(tr.t(keys::NOTE_LEVEL_FLIGHT))?;

    let input = term.collect_inputs(tr, kind)?;
    let result = match session.calculator.calculate(kind, &input) {
        Ok(result) => result,
        Err(CalcError::Domain(err)) => {
            warn!(%err, "계산 실패");
            term.say(&describe_domain_error(tr, &err))?;
            return Ok(());
        }
        Err(CalcError::Input(err)) => {
            // 프롬프트가 모든 항목을 채우므로 여기까지 오지 않는다
            warn!(%err, "입력 누락");
            term.say(&format!("{}: {err}", tr.t(keys::ERROR_PREFIX)))?;
            return Ok(());
        }
    };

    for line in result_lines(tr, kind, &result) {
        term.say(&line)?;
    }

    if kind == CalculationKind::Aggregate && term.confirm(tr, keys::EXPORT_ASK)? {
        handle_export(term, session, &input, &result)?;
    }
    Ok(())
}

/// 결과 출력 문장을 만든다.
pub fn result_lines(
    tr: &Translator,
    kind: CalculationKind,
    result: &CalculationResult,
) -> Vec<String> {
    let line = |key: &str, field: Field| -> Option<String> {
        result
            .get(field)
            .map(|v| tr.tf(key, &[("value", format_value(v))]))
    };
    let mut lines = Vec::new();
    match kind {
        CalculationKind::WingArea => lines.extend(line(keys::RESULT_WING_AREA, Field::WingArea)),
        CalculationKind::StallSpeed => {
            lines.extend(line(keys::RESULT_STALL_SPEED, Field::StallSpeed))
        }
        CalculationKind::Thrust => lines.extend(line(keys::RESULT_THRUST, Field::Thrust)),
        CalculationKind::FlightTime => {
            lines.extend(line(keys::RESULT_FLIGHT_TIME, Field::FlightTime));
            lines.push(tr.t(keys::NOTE_FLIGHT_TIME).to_string());
        }
        CalculationKind::Range => lines.extend(line(keys::RESULT_RANGE, Field::AircraftRange)),
        CalculationKind::Aggregate => {
            lines.extend(line(keys::RESULT_WING_AREA, Field::WingArea));
            lines.extend(line(keys::RESULT_STALL_SPEED, Field::StallSpeed));
            lines.extend(line(keys::RESULT_THRUST, Field::Thrust));
            lines.extend(line(keys::RESULT_FLIGHT_TIME, Field::FlightTime));
            lines.extend(line(keys::RESULT_RANGE, Field::AircraftRange));
        }
    }
    lines
}

/// 결과 값을 표시용 문자열로 만든다. 정수 값은 소수점을 붙이지 않는다.
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// 수식 오류를 현재 언어로 설명한다.
pub fn describe_domain_error(tr: &Translator, err: &PerfError) -> String {
    let reason_key = match err.reason() {
        DomainReason::DivisionByZero => keys::REASON_DIVISION_BY_ZERO,
        DomainReason::NegativeRadicand => keys::REASON_NEGATIVE_RADICAND,
        DomainReason::ArgumentOutOfRange => keys::REASON_OUT_OF_RANGE,
        DomainReason::NonFinite => keys::REASON_NON_FINITE,
    };
    let mut text = format!(
        "{}: {}",
        tr.t(keys::ERROR_PREFIX),
        tr.tf(
            keys::ERROR_DOMAIN,
            &[
                ("formula", tr.t(formula_label_key(err.formula())).to_string()),
                ("reason", tr.t(reason_key).to_string()),
            ],
        )
    );
    if let Some(field) = err.field() {
        let name = Field::from_key(field)
            .map(|f| tr.t(f.label_key()).to_string())
            .unwrap_or_else(|| field.to_string());
        text.push('\n');
        text.push_str(&tr.tf(keys::ERROR_DOMAIN_FIELD, &[("field", name)]));
    }
    text
}

fn formula_label_key(formula: Formula) -> &'static str {
    match formula {
        Formula::WingArea => keys::LABEL_WING_AREA,
        Formula::StallSpeed => keys::LABEL_STALL_SPEED,
        Formula::Thrust => keys::LABEL_THRUST,
        Formula::FlightTime => keys::LABEL_FLIGHT_TIME,
        Formula::Range => keys::LABEL_RANGE,
    }
}

fn heading_key(kind: CalculationKind) -> &'static str {
    match kind {
        CalculationKind::WingArea => keys::HEADING_WING_AREA,
        CalculationKind::StallSpeed => keys::HEADING_STALL_SPEED,
        CalculationKind::Thrust => keys::HEADING_THRUST,
        CalculationKind::FlightTime => keys::HEADING_FLIGHT_TIME,
        CalculationKind::Range => keys::HEADING_RANGE,
        CalculationKind::Aggregate => keys::HEADING_AGGREGATE,
    }
}

/// 일괄 계산 결과를 xlsx로 저장한다. 실패해도 세션은 계속된다.
fn handle_export<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    session: &Session,
    input: &CalculationInput,
    result: &CalculationResult,
) -> Result<(), AppError> {
    let tr = &session.tr;
    term.say(tr.t(keys::EXPORT_PROMPT_DIR))?;
    let mut dir = term.read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    if dir.trim().is_empty() {
        dir = session.config.export_dir().display().to_string();
    }
    let name = loop {
        term.say(tr.t(keys::EXPORT_PROMPT_NAME))?;
        let name = term.read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        if !name.trim().is_empty() {
            break name;
        }
        term.say(tr.t(keys::EXPORT_EMPTY_NAME))?;
    };

    let values = export::collect_values(input, result);
    let outcome = export::export_path(&dir, &name).and_then(|path| {
        export::export_values(
            &ExportTemplate::aggregate(),
            &values,
            |f| tr.t(f.label_key()).to_string(),
            &path,
        )
        .map(|_| path)
    });
    match outcome {
        Ok(path) => term.say(&tr.tf(
            keys::EXPORT_DONE,
            &[("path", path.display().to_string())],
        ))?,
        Err(err) => {
            warn!(%err, "내보내기 실패");
            term.say(&tr.tf(keys::EXPORT_FAILED, &[("error", err.to_string())]))?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn menu_parse() {
        assert_eq!(MenuChoice::parse(" 6 \n"), Some(MenuChoice::Aggregate));
        assert_eq!(MenuChoice::parse("t"), Some(MenuChoice::Terminate));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("wing"), None);
    }

    #[test]
    fn read_f64_retries_until_number() {
        let tr = Translator::new("en-us");
        let mut term = Terminal::new(Cursor::new("not_a_float\n3,5\n15.7\n"), Vec::new());
        assert_eq!(term.read_f64(&tr).unwrap(), 15.7);
        let out = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(out.matches("decimal dot").count(), 2);
    }

    #[test]
    fn collect_inputs_uses_required_keys() {
        let tr = Translator::new("en-us");
        let mut term = Terminal::new(Cursor::new("10.5\n20.7\n30.9\n"), Vec::new());
        let input = term.collect_inputs(&tr, CalculationKind::WingArea).unwrap();
        assert_eq!(input.raw("cl_max"), Some(10.5));
        assert_eq!(input.raw("mass"), Some(20.7));
        assert_eq!(input.raw("velocity"), Some(30.9));
    }

    #[test]
    fn closed_input_is_reported() {
        let tr = Translator::new("en-us");
        let mut term = Terminal::new(Cursor::new(""), Vec::new());
        assert!(matches!(term.read_f64(&tr), Err(AppError::InputClosed)));
    }

    #[test]
    fn integer_thrust_prints_without_decimals() {
        assert_eq!(format_value(490.0), "490");
        assert_eq!(format_value(177.9), "177.9");
    }
}
