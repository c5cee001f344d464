use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use plane_assist::app::{self, Session};
use plane_assist::cli::Args;
use plane_assist::i18n::{self, keys, Translator};
use plane_assist::ui_cli::Terminal;
use plane_assist::{config, logging};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!(%err, "설정 로드 실패, 기본값 사용");
            config::Config::default()
        }
    };
    if let Some(mode) = args.mode {
        cfg.formula_mode = mode;
    }

    let choice = i18n::resolve_language(args.language.as_deref(), cfg.language.as_deref());
    let tr = Translator::new_with_pack(&choice.code, args.lang_pack.as_deref());
    if let Some(tag) = &choice.unsupported {
        println!("{}", tr.tf(keys::UNSUPPORTED_LANGUAGE, &[("tag", tag.clone())]));
    }

    let prefix = tr.t(keys::ERROR_PREFIX).to_string();
    let mut session = match Session::start(cfg, PathBuf::from("config.toml"), tr, args.altitude) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{prefix}: {err}");
            return ExitCode::FAILURE;
        }
    };
    for block in session.banner() {
        println!("{block}\n");
    }

    let mut term = Terminal::stdio();
    match app::run(&mut session, &mut term) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{prefix}: {err}");
            ExitCode::FAILURE
        }
    }
}
