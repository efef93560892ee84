use std::path::PathBuf;

use crate::calculator::Calculator;
use crate::config::Config;
use crate::export::ExportError;
use crate::i18n::{self, keys, Localize, Translator};
use crate::rate_tables::ParseKeyError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 보고서 내보내기 오류
    Export(ExportError),
    /// 알 수 없는 업종/규모 키
    Key(ParseKeyError),
    /// JSON 출력 오류
    Json(serde_json::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Export(e) => write!(f, "내보내기 오류: {e}"),
            AppError::Key(e) => write!(f, "입력 오류: {e}"),
            AppError::Json(e) => write!(f, "JSON 출력 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl Localize for AppError {
    fn localize(&self, tr: &Translator) -> String {
        match self {
            AppError::Io(e) => tr.fill(keys::ERR_IO, &e.to_string()),
            AppError::Config(e) => tr.fill(keys::ERR_CONFIG, &e.localize(tr)),
            AppError::Export(e) => tr.fill(keys::ERR_EXPORT, &e.localize(tr)),
            AppError::Key(e) => e.localize(tr),
            AppError::Json(e) => tr.fill(keys::ERR_JSON, &e.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        AppError::Export(value)
    }
}

impl From<ParseKeyError> for AppError {
    fn from(value: ParseKeyError) -> Self {
        AppError::Key(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Json(value)
    }
}

/// 설정과 명령행 언어 옵션으로 번역기를 만든다.
pub fn translator_for(config: &Config, cli_lang: &str) -> Translator {
    let lang = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
    let tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
    log::debug!("언어 결정: {}", tr.language().as_code());
    tr
}

/// 대화형 CLI의 메인 루프를 실행한다. 종료 시 설정을 저장한다.
pub fn run(config: &mut Config, config_path: PathBuf, tr: &Translator) -> Result<(), AppError> {
    let mut calc = Calculator::new(config.defaults, config.variant);
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::ShowResults => ui_cli::show_results(tr, &calc),
            MenuChoice::EditInputs => ui_cli::handle_edit_inputs(tr, &mut calc)?,
            MenuChoice::Industry => ui_cli::handle_industry(tr, &mut calc)?,
            MenuChoice::Toggles => ui_cli::handle_toggles(tr, &mut calc)?,
            MenuChoice::Export => ui_cli::handle_export(tr, config, &calc)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config, &mut calc)?;
                config.save(&config_path)?;
            }
            MenuChoice::Exit => {
                config.save(&config_path)?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
