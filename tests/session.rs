use std::io::Cursor;

use plane_assist::app::{self, AppError, Session};
use plane_assist::atmosphere;
use plane_assist::config::Config;
use plane_assist::i18n::Translator;
use plane_assist::ui_cli::Terminal;

fn start(dir: &tempfile::TempDir) -> Session {
    Session::start(
        Config::default(),
        dir.path().join("config.toml"),
        Translator::new("en-us"),
        0.0,
    )
    .expect("session")
}

fn run_script(session: &mut Session, script: &str) -> String {
    let mut term = Terminal::new(Cursor::new(script.to_string()), Vec::new());
    app::run(session, &mut term).expect("run");
    String::from_utf8(term.into_output()).expect("utf8")
}

#[test]
fn aggregate_then_terminate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = start(&dir);
    let script = "6\n1.5\n500\n15\n0.02\n10000\n80\n2\n12\n50\n20\n5\n180\n45\nn\nt\ny\n";
    let out = run_script(&mut session, script);

    assert!(out.contains("The minimum recommended wing area is 177.9m²"), "{out}");
    assert!(out.contains("The stall speed is 1461.62m/s"));
    assert!(out.contains("The minimum thrust required is 490N"));
    assert!(out.contains("Flight time: 77.84min"));
    assert!(out.contains("Range: 104.43km"));
    assert!(out.contains("program terminated..."));
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn invalid_menu_and_numbers_are_retried() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = start(&dir);
    let out = run_script(&mut session, "9\n3\n0,05\n0.05\n50\n30\nt\nn\n");
    assert!(out.contains("unsupported option"));
    assert!(out.contains("decimal dot"));
    assert!(out.contains("The minimum thrust required is"));
    // 종료를 취소한 뒤 입력이 끝나면 저장 없이 빠져나온다
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn domain_error_returns_to_menu() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = start(&dir);
    let out = run_script(&mut session, "1\n1.5\n500\n0\nt\ny\n");
    assert!(out.contains("Wing area cannot be calculated: division by zero"), "{out}");
    assert!(out.contains("Please check the input 'Velocity'."));
    assert!(out.contains("program terminated..."));
}

#[test]
fn aggregate_export_writes_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = start(&dir);
    let export_dir = dir.path().display().to_string();
    let script = format!(
        "6\n1.5\n500\n15\n0.02\n10000\n80\n2\n12\n50\n20\n5\n180\n45\ny\n{export_dir}\n\nflight\nt\ny\n"
    );
    let out = run_script(&mut session, &script);
    assert!(out.contains("Name cannot be empty."));
    assert!(out.contains("Saved:"), "{out}");
    assert!(dir.path().join("flight.xlsx").exists());
}

#[test]
fn out_of_range_altitude_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Session::start(
        Config::default(),
        dir.path().join("config.toml"),
        Translator::new("en-us"),
        100_000.0,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Atmosphere(_)));
}

#[test]
fn near_space_altitude_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Session::start(
        Config::default(),
        dir.path().join("config.toml"),
        Translator::new("en-us"),
        70_000.0,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Atmosphere(atmosphere::AtmosphereError::Degenerate { .. })
    ));
}

#[test]
fn banner_mentions_atmosphere() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = start(&dir);
    let banner = session.banner().join("\n");
    assert!(banner.contains("air density 1.225 kg/m³, gravity 9.807 m/s²"), "{banner}");
    assert!(banner.contains("legacy (compatible)"));
}
