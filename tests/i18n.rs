use plane_assist::i18n::{self, keys, Translator};

#[test]
fn english_and_korean_built_ins() {
    let en = Translator::new("en-us");
    assert_eq!(en.t(keys::ERROR_PREFIX), "Error");
    let ko = Translator::new("ko-kr");
    assert_eq!(ko.t(keys::MAIN_MENU_TERMINATE), "[T] - 프로그램 종료");
    assert_eq!(ko.language_code(), "ko");
}

#[test]
fn german_pack_is_embedded() {
    let de = Translator::new("de-de");
    assert_eq!(de.t(keys::ERROR_PREFIX), "Fehler");
    assert_eq!(
        de.tf(keys::RESULT_THRUST, &[("value", "490".into())]),
        "Der minimal erforderliche Schub beträgt 490 N"
    );
}

#[test]
fn unknown_key_falls_back_to_key() {
    let tr = Translator::new("ko-kr");
    assert_eq!(tr.t("no.such.key"), "no.such.key");
}

#[test]
fn pack_directory_overrides_built_ins() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("en-us.toml"),
        "[general]\nerror_prefix = \"Oops\"\n",
    )
    .expect("write pack");
    let tr = Translator::new_with_pack("en-us", Some(&dir.path().display().to_string()));
    assert_eq!(tr.t(keys::ERROR_PREFIX), "Oops");
    // 팩에 없는 키는 내장 문자열로
    assert_eq!(tr.t(keys::LABEL_RANGE), "Range");
}

#[test]
fn resolve_language_priority() {
    let c = i18n::resolve_language(Some("de"), Some("ko"));
    assert_eq!(c.code, "de-de");
    assert!(c.unsupported.is_none());

    let c = i18n::resolve_language(Some("auto"), Some("ko_KR"));
    assert_eq!(c.code, "ko-kr");

    let c = i18n::resolve_language(Some("fr-FR"), None);
    assert_eq!(c.code, "en-us");
    assert_eq!(c.unsupported.as_deref(), Some("fr-FR"));
}

#[test]
fn nested_toml_is_flattened() {
    let map = i18n::parse_toml_to_map("[a]\nb = \"x\"\n[a.c]\nd = \"y\"\n").expect("parse");
    assert_eq!(map.get("a.b").map(String::as_str), Some("x"));
    assert_eq!(map.get("a.c.d").map(String::as_str), Some("y"));
}
