//! 입력·결과·생성 시각을 파일로 내보낸다. 계산 엔진과는 무관한 출력 전용 계층이다.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::i18n::{keys, Localize, Translator};
use crate::roi::{CalculatorInputs, RoiResults, Variant};
use crate::summary;

/// 내보내기 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Json,
    Toml,
    /// 서술형 요약 텍스트
    Txt,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Toml => "toml",
            ExportFormat::Txt => "txt",
        }
    }

    /// 파일 확장자로 형식을 추정한다. 확장자가 없으면 `None`,
    /// 모르는 확장자면 `UnknownFormat` 오류다.
    pub fn from_path(path: &Path) -> Result<Option<Self>, ExportError> {
        match path.extension() {
            None => Ok(None),
            Some(ext) => ext.to_string_lossy().parse().map(Some),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "toml" => Ok(ExportFormat::Toml),
            "txt" | "text" => Ok(ExportFormat::Txt),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// 내보내기 중 발생 가능한 오류.
#[derive(Debug)]
pub enum ExportError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 직렬화 오류
    Json(serde_json::Error),
    /// TOML 직렬화 오류
    Toml(toml::ser::Error),
    /// 지원하지 않는 형식
    UnknownFormat(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ExportError::Json(e) => write!(f, "JSON 직렬화 오류: {e}"),
            ExportError::Toml(e) => write!(f, "TOML 직렬화 오류: {e}"),
            ExportError::UnknownFormat(s) => write!(f, "지원하지 않는 내보내기 형식: {s}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl Localize for ExportError {
    fn localize(&self, tr: &Translator) -> String {
        match self {
            ExportError::Io(e) => tr.fill(keys::ERR_IO, &e.to_string()),
            ExportError::Json(e) => tr.fill(keys::ERR_JSON, &e.to_string()),
            ExportError::Toml(e) => tr.fill(keys::ERR_TOML, &e.to_string()),
            ExportError::UnknownFormat(s) => tr.fill(keys::ERR_UNKNOWN_FORMAT, s),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        ExportError::Io(value)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        ExportError::Json(value)
    }
}

impl From<toml::ser::Error> for ExportError {
    fn from(value: toml::ser::Error) -> Self {
        ExportError::Toml(value)
    }
}

/// 내보낼 보고서 한 건.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_date: String,
    pub variant: Variant,
    pub inputs: CalculatorInputs,
    pub results: RoiResults,
}

impl Report {
    pub fn new(inputs: CalculatorInputs, results: RoiResults, variant: Variant) -> Self {
        Self::generated_at(inputs, results, variant, Utc::now())
    }

    pub fn generated_at(
        inputs: CalculatorInputs,
        results: RoiResults,
        variant: Variant,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            generated_date: at.to_rfc3339_opts(SecondsFormat::Secs, true),
            variant,
            inputs,
            results,
        }
    }

    /// 형식에 맞는 문자열로 렌더링한다.
    pub fn render(&self, format: ExportFormat, tr: &Translator) -> Result<String, ExportError> {
        let body = match format {
            ExportFormat::Json => serde_json::to_string_pretty(self)?,
            ExportFormat::Toml => toml::to_string_pretty(self)?,
            ExportFormat::Txt => {
                let mut out = format!("{}\n\n", self.generated_date);
                for card in summary::cards(&self.results, tr) {
                    out.push_str(&format!("{}: {}\n", card.label, card.value));
                }
                out.push('\n');
                out.push_str(&summary::narrative(
                    &self.inputs,
                    &self.results,
                    self.variant,
                    tr,
                ));
                out.push('\n');
                out
            }
        };
        Ok(body)
    }

    /// 파일로 저장한다. 형식을 주지 않으면 확장자로 고르고, 확장자가 없으면 JSON이다.
    /// 확장자가 있는데 지원하지 않는 형식이면 아무것도 쓰지 않고 오류를 돌려준다.
    pub fn write_to(
        &self,
        path: &Path,
        format: Option<ExportFormat>,
        tr: &Translator,
    ) -> Result<ExportFormat, ExportError> {
        let format = match format {
            Some(f) => f,
            None => ExportFormat::from_path(path)?.unwrap_or_default(),
        };
        let body = self.render(format, tr)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, body)?;
        log::info!("보고서 저장: {} ({:?})", path.display(), format);
        Ok(format)
    }
}

/// 생성 시각을 붙인 기본 파일 이름. 예: roi-report-20261016-093000.json
pub fn default_file_name(format: ExportFormat, at: DateTime<Utc>) -> String {
    format!(
        "roi-report-{}.{}",
        at.format("%Y%m%d-%H%M%S"),
        format.extension()
    )
}
