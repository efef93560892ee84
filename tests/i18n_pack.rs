//! 언어팩 덮어쓰기와 언어 결정 테스트.
use verification_roi::app::{self, AppError};
use verification_roi::config::Config;
use verification_roi::export::ExportError;
use verification_roi::i18n::{
    keys, parse_toml_to_map, resolve_language, Language, Localize, Translator,
};
use verification_roi::input::{InputAnomaly, InputField};
use verification_roi::rate_tables::ParseKeyError;

fn has_hangul(s: &str) -> bool {
    s.chars().any(|c| ('\u{AC00}'..='\u{D7A3}').contains(&c))
}

#[test]
fn nested_tables_become_dotted_keys() {
    let map = parse_toml_to_map("[card]\nnet_roi = \"Net\"\n[general]\napp_exit = \"Bye\"\n")
        .expect("map");
    assert_eq!(map.get("card.net_roi").map(String::as_str), Some("Net"));
    assert_eq!(map.get("general.app_exit").map(String::as_str), Some("Bye"));
    assert!(parse_toml_to_map("x = 1").is_none());
}

#[test]
fn pack_overrides_built_in_strings() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("en.toml"), "[card]\nnet_roi = \"Bottom line\"\n").unwrap();
    let tr = Translator::new_with_pack("en", dir.path().to_str());
    assert_eq!(tr.t(keys::CARD_NET_ROI), "Bottom line");
    assert_eq!(tr.t(keys::CARD_TOTAL_SAVINGS), "Total annual savings");
}

#[test]
fn missing_pack_uses_built_in_strings() {
    let tr = Translator::new_with_pack("ko", Some("/nonexistent/locales"));
    assert_eq!(tr.language(), Language::Ko);
    assert_eq!(tr.t(keys::APP_EXIT), "프로그램을 종료합니다.");
}

#[test]
fn explicit_language_wins() {
    assert_eq!(resolve_language("ko-KR", Some("en")), "ko");
    assert_eq!(resolve_language("auto", Some("en-us")), "en");
}

#[test]
fn configured_language_reaches_the_translator() {
    let cfg = Config {
        language: "ko".into(),
        ..Config::default()
    };
    let tr = app::translator_for(&cfg, "auto");
    assert_eq!(tr.language(), Language::Ko);
    assert_eq!(tr.language().as_code(), "ko");
    assert_eq!(app::translator_for(&cfg, "en").language().as_code(), "en");
}

#[test]
fn errors_follow_the_selected_language() {
    let en = Translator::new("en");
    let ko = Translator::new("ko");

    let key = AppError::Key(ParseKeyError::UnknownIndustry("retail".into()));
    assert_eq!(key.localize(&en), "Unknown industry: retail");
    assert_eq!(key.localize(&ko), "알 수 없는 업종: retail");

    let export = AppError::Export(ExportError::UnknownFormat("pdf".into()));
    let msg = export.localize(&en);
    assert_eq!(msg, "Export error: Unsupported export format: pdf");
    assert!(!has_hangul(&msg));

    let io = ExportError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
    assert_eq!(io.localize(&en), "I/O error: disk full");

    let negative = InputAnomaly::Negative {
        field: InputField::AvgTransactionValue,
        value: -5.0,
    };
    assert_eq!(negative.localize(&en), "avgTransactionValue: negative value -5");
    assert!(!has_hangul(&InputAnomaly::NonFiniteResult.localize(&en)));
    assert!(has_hangul(&InputAnomaly::NonFiniteResult.localize(&ko)));
}
