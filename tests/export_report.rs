//! 보고서 내보내기와 설정 파일 테스트.
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use verification_roi::config::{self, Config};
use std::path::Path;
use verification_roi::export::{self, ExportError, ExportFormat, Report};
use verification_roi::i18n::Translator;
use verification_roi::rate_tables::Industry;
use verification_roi::roi::{compute_roi, CalculatorInputs, Variant};

fn report(variant: Variant) -> Report {
    let inputs = CalculatorInputs {
        industry: Industry::Healthcare,
        ..CalculatorInputs::default()
    };
    let results = compute_roi(&inputs, variant);
    let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
    Report::generated_at(inputs, results, variant, at)
}

#[test]
fn json_uses_result_record_field_names() {
    let tr = Translator::new("en");
    let body = report(Variant::Enhanced)
        .render(ExportFormat::Json, &tr)
        .expect("json");
    let v: serde_json::Value = serde_json::from_str(&body).expect("parse");
    assert_eq!(v["generatedDate"], "2026-10-16T09:30:00Z");
    assert_eq!(v["variant"], "enhanced");
    assert_eq!(v["inputs"]["industry"], "healthcare");
    assert_eq!(v["inputs"]["monthlyVerifications"], 10_000.0);
    for key in [
        "annualFraudSavings",
        "annualComplianceSavings",
        "annualOperationalSavings",
        "totalAnnualSavings",
        "annualCostIncrease",
        "netAnnualROI",
        "roiPercentage",
        "paybackMonths",
        "monthlyBenefit",
        "threeYearROI",
        "riskScore",
    ] {
        assert!(v["results"].get(key).is_some(), "missing {key}");
    }
}

#[test]
fn base_variant_json_omits_enhanced_metrics() {
    let tr = Translator::new("en");
    let body = report(Variant::Base).render(ExportFormat::Json, &tr).unwrap();
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(v["results"].get("riskScore").is_none());
    assert!(v["results"].get("netAnnualROI").is_some());
}

#[test]
fn json_report_reads_back() {
    let tr = Translator::new("en");
    let original = report(Variant::Enhanced);
    let body = original.render(ExportFormat::Json, &tr).unwrap();
    let parsed: Report = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed.inputs, original.inputs);
    assert_eq!(parsed.variant, Variant::Enhanced);
    let diff = (parsed.results.net_annual_roi - original.results.net_annual_roi).abs();
    assert!(diff < 1e-6, "net diff {diff}");
    assert!(parsed.results.enhanced.is_some());
}

#[test]
fn toml_and_text_render() {
    let tr = Translator::new("en");
    let r = report(Variant::Enhanced);
    let toml_body = r.render(ExportFormat::Toml, &tr).expect("toml");
    let v: toml::Value = toml::from_str(&toml_body).expect("parse toml");
    assert!(v["results"].get("netAnnualROI").is_some());

    let text = r.render(ExportFormat::Txt, &tr).expect("txt");
    assert!(text.starts_with("2026-10-16T09:30:00Z"));
    assert!(text.contains("Net annual ROI"));
    assert!(text.contains("Healthcare (Small Business)"));
}

#[test]
fn write_to_picks_format_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let tr = Translator::new("en");
    let path = dir.path().join("nested").join("report.toml");
    let written = report(Variant::Base).write_to(&path, None, &tr).unwrap();
    assert_eq!(written, ExportFormat::Toml);
    assert!(std::fs::read_to_string(&path).unwrap().contains("netAnnualROI"));

    let explicit = dir.path().join("report.out");
    let written = report(Variant::Base)
        .write_to(&explicit, Some(ExportFormat::Txt), &tr)
        .unwrap();
    assert_eq!(written, ExportFormat::Txt);

    let bare = dir.path().join("report");
    let written = report(Variant::Base).write_to(&bare, None, &tr).unwrap();
    assert_eq!(written, ExportFormat::Json);
}

#[test]
fn unsupported_extension_is_rejected_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let tr = Translator::new("en");
    let path = dir.path().join("report.pdf");
    let err = report(Variant::Enhanced)
        .write_to(&path, None, &tr)
        .unwrap_err();
    assert!(matches!(err, ExportError::UnknownFormat(ref ext) if ext == "pdf"));
    assert!(!path.exists());

    assert_eq!(ExportFormat::from_path(Path::new("a/b.JSON")).unwrap(), Some(ExportFormat::Json));
    assert_eq!(ExportFormat::from_path(Path::new("a/b")).unwrap(), None);
    assert!(ExportFormat::from_path(Path::new("a/b.xlsx")).is_err());
}

#[test]
fn format_names_and_default_file_name() {
    assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
    assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
    assert!("pdf".parse::<ExportFormat>().is_err());
    let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
    assert_eq!(
        export::default_file_name(ExportFormat::Json, at),
        "roi-report-20261016-093000.json"
    );
}

#[test]
fn config_is_created_then_reloaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let created = config::load_or_default(&path).expect("create");
    assert!(path.exists());
    assert_eq!(created, Config::default());

    let mut changed = created.clone();
    changed.variant = Variant::Base;
    changed.language = "ko".into();
    changed.defaults.industry = Industry::Gaming;
    changed.defaults.current_fraud_rate = 4.25;
    changed.save(&path).expect("save");

    let reloaded = config::load_or_default(&path).expect("reload");
    assert_eq!(reloaded, changed);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "variant = \"base\"\n\n[defaults]\nindustry = \"insurance\"\nmonthlyVerifications = 500.0\n",
    )
    .unwrap();
    let cfg = config::load_or_default(&path).unwrap();
    assert_eq!(cfg.variant, Variant::Base);
    assert_eq!(cfg.defaults.industry, Industry::Insurance);
    assert_eq!(cfg.defaults.monthly_verifications, 500.0);
    assert_eq!(cfg.defaults.improvement_rate, 75.0);
    assert_eq!(cfg.export_dir, "reports");
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "variant = [").unwrap();
    assert!(matches!(
        config::load_or_default(&path),
        Err(config::ConfigError::Serde(_))
    ));
}
