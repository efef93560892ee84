//! 대화형 메뉴 동작 중 입력 없이 검증 가능한 부분.
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use verification_roi::calculator::Calculator;
use verification_roi::config::Config;
use verification_roi::export::{ExportError, ExportFormat};
use verification_roi::i18n::Translator;
use verification_roi::input::InputField;
use verification_roi::roi::{compute_roi, Variant};
use verification_roi::ui_cli;

#[test]
fn blank_export_path_uses_configured_location() {
    let cfg = Config {
        export_dir: "out".into(),
        default_export_format: ExportFormat::Toml,
        ..Config::default()
    };
    let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
    let (path, format) = ui_cli::export_target("  \n", &cfg, at);
    assert_eq!(path, std::path::Path::new("out").join("roi-report-20261016-093000.toml"));
    assert_eq!(format, Some(ExportFormat::Toml));

    let (path, format) = ui_cli::export_target("mine.txt\n", &cfg, at);
    assert_eq!(path, std::path::PathBuf::from("mine.txt"));
    assert_eq!(format, None);
}

#[test]
fn failed_export_leaves_the_session_usable() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("taken");
    std::fs::write(&blocker, "not a directory").unwrap();
    let target = blocker.join("report.json");

    let tr = Translator::new("en");
    let cfg = Config::default();
    let mut calc = Calculator::default();
    let before = *calc.results();

    let err = ui_cli::export_current(&tr, &cfg, &calc, target.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
    assert_eq!(*calc.results(), before);

    calc.set_field(InputField::MonthlyVerifications, "20000");
    assert_eq!(calc.inputs().monthly_verifications, 20_000.0);
    assert_eq!(*calc.results(), compute_roi(calc.inputs(), calc.variant()));

    let good = dir.path().join("report.json");
    let (path, format) = ui_cli::export_current(&tr, &cfg, &calc, good.to_str().unwrap()).unwrap();
    assert_eq!(path, good);
    assert_eq!(format, ExportFormat::Json);
    assert!(good.exists());
}

#[test]
fn invalid_variant_choice_changes_nothing() {
    let mut cfg = Config::default();
    let mut calc = Calculator::new(cfg.defaults, cfg.variant);
    let before = *calc.results();

    assert_eq!(ui_cli::apply_variant_choice(&mut cfg, &mut calc, "9\n"), None);
    assert_eq!(cfg.variant, Variant::Enhanced);
    assert_eq!(calc.variant(), Variant::Enhanced);
    assert_eq!(*calc.results(), before);

    assert_eq!(
        ui_cli::apply_variant_choice(&mut cfg, &mut calc, "1\n"),
        Some(Variant::Base)
    );
    assert_eq!(cfg.variant, Variant::Base);
    assert_eq!(calc.variant(), Variant::Base);
    assert!(calc.results().enhanced.is_none());
}
