use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::app::AppError;
use crate::calculator::Calculator;
use crate::config::Config;
use chrono::{DateTime, Utc};

use crate::export::{self, ExportError, ExportFormat, Report};
use crate::i18n::{keys, Localize, Translator};
use crate::input::InputField;
use crate::rate_tables::{CompanySize, Industry};
use crate::roi::Variant;
use crate::summary;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowResults,
    EditInputs,
    Industry,
    Toggles,
    Export,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_SHOW_RESULTS,
        keys::MAIN_MENU_EDIT_INPUTS,
        keys::MAIN_MENU_INDUSTRY,
        keys::MAIN_MENU_TOGGLES,
        keys::MAIN_MENU_EXPORT,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        // EOF
        if sel.is_empty() {
            return Ok(MenuChoice::Exit);
        }
        match sel.trim() {
            "1" => return Ok(MenuChoice::ShowResults),
            "2" => return Ok(MenuChoice::EditInputs),
            "3" => return Ok(MenuChoice::Industry),
            "4" => return Ok(MenuChoice::Toggles),
            "5" => return Ok(MenuChoice::Export),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn field_label_key(field: InputField) -> &'static str {
    match field {
        InputField::MonthlyVerifications => keys::FIELD_MONTHLY_VERIFICATIONS,
        InputField::CurrentFraudRate => keys::FIELD_CURRENT_FRAUD_RATE,
        InputField::ImprovementRate => keys::FIELD_IMPROVEMENT_RATE,
        InputField::AvgTransactionValue => keys::FIELD_AVG_TRANSACTION_VALUE,
        InputField::CurrentCostPerVerification => keys::FIELD_CURRENT_COST,
        InputField::OurCostPerVerification => keys::FIELD_OUR_COST,
    }
}

/// 결과 카드, 입력 경고, 요약 문장을 출력한다.
pub fn show_results(tr: &Translator, calc: &Calculator) {
    println!("{}", tr.t(keys::RESULTS_HEADING));
    print_cards(tr, calc);
    println!();
    println!(
        "{}",
        summary::narrative(calc.inputs(), calc.results(), calc.variant(), tr)
    );
}

/// 카드와 입력 경고만 출력한다. 비대화형 calc 명령도 사용한다.
pub fn print_cards(tr: &Translator, calc: &Calculator) {
    for anomaly in calc.anomalies() {
        println!("[{}] {}", tr.t(keys::WARNING_PREFIX), anomaly.localize(tr));
    }
    let cards = summary::cards(calc.results(), tr);
    let width = cards
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0);
    for card in cards {
        println!("  {:<width$}  {:>18}", card.label, card.value, width = width);
    }
}

/// 숫자 입력 필드를 수정한다.
pub fn handle_edit_inputs(tr: &Translator, calc: &mut Calculator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::INPUTS_HEADING));
    for (i, field) in InputField::ALL.iter().enumerate() {
        println!(
            "{}) {}: {}",
            i + 1,
            tr.t(field_label_key(*field)),
            summary::format_number(calc.inputs().get(*field), 2)
        );
    }
    let sel = read_line(tr.t(keys::INPUTS_PROMPT_FIELD))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let field = match sel.trim().parse::<usize>() {
        Ok(n) if (1..=InputField::ALL.len()).contains(&n) => InputField::ALL[n - 1],
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION));
            return Ok(());
        }
    };
    let text = read_line(tr.t(keys::INPUTS_PROMPT_VALUE))?;
    calc.set_field(field, &text);
    print_cards(tr, calc);
    Ok(())
}

/// 업종과 회사 규모를 고른다. 번호 또는 id를 받는다.
pub fn handle_industry(tr: &Translator, calc: &mut Calculator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::INDUSTRY_HEADING));
    for (i, industry) in Industry::ALL.iter().enumerate() {
        let cfg = industry.config();
        println!("{}) {} {} [{}]", i + 1, cfg.icon, cfg.name, industry.id());
    }
    println!(
        "{} {}",
        tr.t(keys::INDUSTRY_CURRENT),
        calc.inputs().industry.config().name
    );
    let sel = read_line(tr.t(keys::INDUSTRY_PROMPT))?;
    if !sel.trim().is_empty() {
        let key = resolve_choice(sel.trim(), &Industry::ALL.map(Industry::id));
        if let Err(e) = calc.set_industry(&key) {
            println!("{}", e.localize(tr));
        }
    }

    for (i, size) in CompanySize::ALL.iter().enumerate() {
        let cfg = size.config();
        println!("{}) {} x{} [{}]", i + 1, cfg.name, cfg.multiplier, size.id());
    }
    println!(
        "{} {}",
        tr.t(keys::INDUSTRY_CURRENT),
        calc.inputs().company_size.config().name
    );
    let sel = read_line(tr.t(keys::COMPANY_SIZE_PROMPT))?;
    if !sel.trim().is_empty() {
        let key = resolve_choice(sel.trim(), &CompanySize::ALL.map(CompanySize::id));
        if let Err(e) = calc.set_company_size(&key) {
            println!("{}", e.localize(tr));
        }
    }
    if calc.variant() == Variant::Base {
        println!("{}", tr.t(keys::TOGGLES_BASE_NOTE));
    }
    Ok(())
}

/// 번호면 목록의 id로, 아니면 입력 그대로 돌려준다.
fn resolve_choice(sel: &str, ids: &[&'static str]) -> String {
    match sel.parse::<usize>() {
        Ok(n) if (1..=ids.len()).contains(&n) => ids[n - 1].to_string(),
        _ => sel.to_string(),
    }
}

/// 규정 준수/운영 효율 절감 포함 여부를 전환한다.
pub fn handle_toggles(tr: &Translator, calc: &mut Calculator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TOGGLES_HEADING));
    let state = |on: bool| {
        if on {
            tr.t(keys::STATE_ON)
        } else {
            tr.t(keys::STATE_OFF)
        }
    };
    println!(
        "{} [{}]",
        tr.t(keys::TOGGLE_COMPLIANCE),
        state(calc.inputs().include_compliance_costs)
    );
    println!(
        "{} [{}]",
        tr.t(keys::TOGGLE_OPERATIONAL),
        state(calc.inputs().include_operational_efficiency)
    );
    if calc.variant() == Variant::Base {
        println!("{}", tr.t(keys::TOGGLES_BASE_NOTE));
    }
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let on = !calc.inputs().include_compliance_costs;
            calc.set_include_compliance_costs(on);
        }
        "2" => {
            let on = !calc.inputs().include_operational_efficiency;
            calc.set_include_operational_efficiency(on);
        }
        "" => return Ok(()),
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION));
            return Ok(());
        }
    }
    print_cards(tr, calc);
    Ok(())
}

/// 보고서 저장 위치를 정한다. 입력이 비면 설정의 기본 위치와 형식을 쓰고,
/// 아니면 입력 경로의 확장자에 맡긴다.
pub fn export_target(
    sel: &str,
    cfg: &Config,
    now: DateTime<Utc>,
) -> (PathBuf, Option<ExportFormat>) {
    let sel = sel.trim();
    if sel.is_empty() {
        let format = cfg.default_export_format;
        let name = export::default_file_name(format, now);
        (Path::new(&cfg.export_dir).join(name), Some(format))
    } else {
        (PathBuf::from(sel), None)
    }
}

/// 현재 세션의 입력·결과를 보고서로 쓴다. 세션은 읽기만 한다.
pub fn export_current(
    tr: &Translator,
    cfg: &Config,
    calc: &Calculator,
    sel: &str,
) -> Result<(PathBuf, ExportFormat), ExportError> {
    let report = Report::new(*calc.inputs(), *calc.results(), calc.variant());
    let (path, format) = export_target(sel, cfg, Utc::now());
    let written = report.write_to(&path, format, tr)?;
    Ok((path, written))
}

/// 현재 입력·결과를 보고서로 저장한다. 저장 실패는 알리고 메뉴로 돌아간다.
pub fn handle_export(tr: &Translator, cfg: &Config, calc: &Calculator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EXPORT_HEADING));
    let sel = read_line(tr.t(keys::EXPORT_PROMPT_PATH))?;
    match export_current(tr, cfg, calc, &sel) {
        Ok((path, format)) => println!(
            "{} {} ({})",
            tr.t(keys::EXPORT_DONE),
            path.display(),
            format.extension()
        ),
        Err(e) => {
            log::warn!("보고서 저장 실패: {e}");
            println!("{}: {}", tr.t(keys::ERROR_PREFIX), e.localize(tr));
        }
    }
    Ok(())
}

/// 설정 메뉴의 선택을 반영한다. 1은 기본, 2는 확장 변형이다.
/// 알 수 없는 선택이면 아무것도 바꾸지 않고 `None`이다.
pub fn apply_variant_choice(
    cfg: &mut Config,
    calc: &mut Calculator,
    sel: &str,
) -> Option<Variant> {
    let variant = match sel.trim() {
        "1" => Variant::Base,
        "2" => Variant::Enhanced,
        _ => return None,
    };
    cfg.variant = variant;
    calc.set_variant(variant);
    Some(variant)
}

/// 설정 메뉴를 처리한다. 계산 변형을 바꾸면 즉시 재계산한다.
pub fn handle_settings(
    tr: &Translator,
    cfg: &mut Config,
    calc: &mut Calculator,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_VARIANT), cfg.variant);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match apply_variant_choice(cfg, calc, &sel) {
        Some(variant) => println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), variant),
        None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
