//! 명령행 인자 정의.

use clap::Parser;

use crate::performance::FormulaMode;

/// PlaneAssist 명령행 인자.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "plane_assist",
    version,
    about = "This program calculates certain aircraft parameters"
)]
pub struct Args {
    /// 평균 해수면 기준 고도 [m] (소수점은 '.' 사용)
    #[arg(
        short,
        long,
        default_value_t = 0.0,
        num_args = 0..=1,
        default_missing_value = "0",
        allow_negative_numbers = true
    )]
    pub altitude: f64,

    /// IETF 언어 태그 (en, ko, de, auto)
    #[arg(short, long, visible_alias = "lang")]
    pub language: Option<String>,

    /// 언어팩(TOML) 디렉터리
    #[arg(long)]
    pub lang_pack: Option<String>,

    /// 계산식 모드. 지정하지 않으면 config.toml 값을 사용한다.
    #[arg(long, value_enum)]
    pub mode: Option<FormulaMode>,

    /// 디버그 로그 출력
    #[arg(short, long)]
    pub verbose: bool,
}
