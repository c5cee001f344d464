use std::io::{BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::atmosphere::{self, AtmosphereError};
use crate::config::{Config, ConfigError};
use crate::export::ExportError;
use crate::i18n::{keys, Translator};
use crate::performance::{FormulaMode, PerformanceCalculator};
use crate::ui_cli::{self, MenuChoice, Terminal};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 세션 시작 시 대기 조회 실패
    #[error("표준대기 초기화 실패: {0}")]
    Atmosphere(#[from] AtmosphereError),
    /// 내보내기 오류
    #[error("내보내기 오류: {0}")]
    Export(#[from] ExportError),
    /// 입력 스트림 종료
    #[error("입력이 종료되었습니다")]
    InputClosed,
}

/// 한 번의 실행 동안 유지되는 상태. 고도와 계산식 모드는 시작 시 고정된다.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub config_path: PathBuf,
    pub tr: Translator,
    pub calculator: PerformanceCalculator,
    pub altitude_m: f64,
}

impl Session {
    /// 고도에서 대기 상태를 조회해 세션을 만든다. 범위를 벗어나면 오류.
    pub fn start(
        config: Config,
        config_path: PathBuf,
        tr: Translator,
        altitude_m: f64,
    ) -> Result<Self, AppError> {
        let atmo = atmosphere::lookup(altitude_m)?;
        let calculator = PerformanceCalculator::new(atmo, config.formula_mode);
        info!(
            altitude_m,
            density = atmo.density(),
            gravity = atmo.gravity(),
            mode = ?config.formula_mode,
            "세션 시작"
        );
        Ok(Self {
            config,
            config_path,
            tr,
            calculator,
            altitude_m,
        })
    }

    /// 시작 안내(환영, 면책, 대기값, 계산식 모드) 문단.
    pub fn banner(&self) -> Vec<String> {
        let tr = &self.tr;
        let atmo = self.calculator.atmosphere();
        let mode_key = match self.calculator.mode() {
            FormulaMode::Legacy => keys::MODE_LEGACY,
            FormulaMode::Corrected => keys::MODE_CORRECTED,
        };
        vec![
            tr.t(keys::WELCOME).to_string(),
            tr.t(keys::DISCLAIMER).to_string(),
            tr.tf(
                keys::ATMOSPHERE_INFO,
                &[
                    ("altitude", self.altitude_m.to_string()),
                    ("density", atmo.density().to_string()),
                    ("gravity", atmo.gravity().to_string()),
                ],
            ),
            tr.tf(keys::MODE_INFO, &[("mode", tr.t(mode_key).to_string())]),
        ]
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 종료 확인 시 설정을 저장한다. 입력이 닫히면 저장 없이 조용히 끝낸다.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
) -> Result<(), AppError> {
    loop {
        match step(session, term) {
            Ok(true) => {}
            Ok(false) => break,
            Err(AppError::InputClosed) => {
                debug!("입력 종료, 루프 탈출");
                break;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// 메뉴 한 번을 처리한다. 계속하면 true.
fn step<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
) -> Result<bool, AppError> {
    match term.main_menu(&session.tr)? {
        MenuChoice::Terminate => {
            if !term.confirm(&session.tr, keys::TERMINATE_CONFIRM)? {
                return Ok(true);
            }
            session.config.save_to(&session.config_path)?;
            term.say(session.tr.t(keys::APP_EXIT))?;
            Ok(false)
        }
        choice => {
            if let Some(kind) = choice.kind() {
                ui_cli::handle_calculation(term, session, kind)?;
            }
            Ok(true)
        }
    }
}
