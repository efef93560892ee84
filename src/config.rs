use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::export::ExportFormat;
use crate::i18n::{keys, Localize, Translator};
use crate::roi::{CalculatorInputs, Variant};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/ko/en)
    pub language: String,
    /// 번역 덮어쓰기 TOML 디렉터리
    pub language_pack_dir: Option<String>,
    pub variant: Variant,
    /// 보고서 기본 저장 위치
    pub export_dir: String,
    pub default_export_format: ExportFormat,
    /// 계산기 시작 시 입력값
    pub defaults: CalculatorInputs,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            variant: Variant::default(),
            export_dir: "reports".to_string(),
            default_export_format: ExportFormat::default(),
            defaults: CalculatorInputs::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Localize for ConfigError {
    fn localize(&self, tr: &Translator) -> String {
        match self {
            ConfigError::Io(e) => tr.fill(keys::ERR_IO, &e.to_string()),
            ConfigError::Serde(e) => tr.fill(keys::ERR_CONFIG_PARSE, &e.to_string()),
            ConfigError::Serialize(e) => tr.fill(keys::ERR_CONFIG_SERIALIZE, &e.to_string()),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        log::debug!("설정 로드: {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        log::info!("기본 설정 생성: {}", path.display());
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
