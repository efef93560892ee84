use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const WARNING_PREFIX: &str = "general.warning_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const STATE_ON: &str = "general.on";
    pub const STATE_OFF: &str = "general.off";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SHOW_RESULTS: &str = "main_menu.show_results";
    pub const MAIN_MENU_EDIT_INPUTS: &str = "main_menu.edit_inputs";
    pub const MAIN_MENU_INDUSTRY: &str = "main_menu.industry";
    pub const MAIN_MENU_TOGGLES: &str = "main_menu.toggles";
    pub const MAIN_MENU_EXPORT: &str = "main_menu.export";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const INVALID_SELECTION: &str = "error.invalid_selection";

    pub const INPUTS_HEADING: &str = "inputs.heading";
    pub const INPUTS_PROMPT_FIELD: &str = "inputs.prompt_field";
    pub const INPUTS_PROMPT_VALUE: &str = "inputs.prompt_value";
    pub const FIELD_MONTHLY_VERIFICATIONS: &str = "field.monthly_verifications";
    pub const FIELD_CURRENT_FRAUD_RATE: &str = "field.current_fraud_rate";
    pub const FIELD_IMPROVEMENT_RATE: &str = "field.improvement_rate";
    pub const FIELD_AVG_TRANSACTION_VALUE: &str = "field.avg_transaction_value";
    pub const FIELD_CURRENT_COST: &str = "field.current_cost_per_verification";
    pub const FIELD_OUR_COST: &str = "field.our_cost_per_verification";

    pub const INDUSTRY_HEADING: &str = "industry.heading";
    pub const INDUSTRY_PROMPT: &str = "industry.prompt";
    pub const COMPANY_SIZE_PROMPT: &str = "industry.prompt_size";
    pub const INDUSTRY_CURRENT: &str = "industry.current";

    pub const TOGGLES_HEADING: &str = "toggles.heading";
    pub const TOGGLE_COMPLIANCE: &str = "toggles.compliance";
    pub const TOGGLE_OPERATIONAL: &str = "toggles.operational";
    pub const TOGGLES_BASE_NOTE: &str = "toggles.base_note";

    pub const EXPORT_HEADING: &str = "export.heading";
    pub const EXPORT_PROMPT_PATH: &str = "export.prompt_path";
    pub const EXPORT_DONE: &str = "export.done";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_VARIANT: &str = "settings.current_variant";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const RESULTS_HEADING: &str = "results.heading";
    pub const CARD_FRAUD_SAVINGS: &str = "card.fraud_savings";
    pub const CARD_COMPLIANCE_SAVINGS: &str = "card.compliance_savings";
    pub const CARD_OPERATIONAL_SAVINGS: &str = "card.operational_savings";
    pub const CARD_TOTAL_SAVINGS: &str = "card.total_savings";
    pub const CARD_COST_INCREASE: &str = "card.cost_increase";
    pub const CARD_NET_ROI: &str = "card.net_roi";
    pub const CARD_ROI_PERCENT: &str = "card.roi_percent";
    pub const CARD_PAYBACK: &str = "card.payback";
    pub const CARD_MONTHLY_BENEFIT: &str = "card.monthly_benefit";
    pub const CARD_THREE_YEAR: &str = "card.three_year";
    pub const CARD_RISK_SCORE: &str = "card.risk_score";

    pub const SUMMARY_HEADLINE: &str = "summary.headline";
    pub const SUMMARY_BREAKDOWN: &str = "summary.breakdown";
    pub const SUMMARY_COST_UP: &str = "summary.cost_up";
    pub const SUMMARY_COST_DOWN: &str = "summary.cost_down";
    pub const SUMMARY_PAYBACK: &str = "summary.payback";
    pub const SUMMARY_PAYBACK_IMMEDIATE: &str = "summary.payback_immediate";
    pub const SUMMARY_NO_PAYBACK: &str = "summary.no_payback";
    pub const SUMMARY_ENHANCED: &str = "summary.enhanced";
    pub const RISK_LOW: &str = "risk.low";
    pub const RISK_MODERATE: &str = "risk.moderate";
    pub const RISK_HIGH: &str = "risk.high";
    pub const UNIT_MONTHS: &str = "unit.months";

    pub const ERR_IO: &str = "error.io";
    pub const ERR_CONFIG: &str = "error.config";
    pub const ERR_CONFIG_PARSE: &str = "error.config_parse";
    pub const ERR_CONFIG_SERIALIZE: &str = "error.config_serialize";
    pub const ERR_EXPORT: &str = "error.export";
    pub const ERR_JSON: &str = "error.json";
    pub const ERR_TOML: &str = "error.toml";
    pub const ERR_UNKNOWN_FORMAT: &str = "error.unknown_format";
    pub const ERR_UNKNOWN_INDUSTRY: &str = "error.unknown_industry";
    pub const ERR_UNKNOWN_COMPANY_SIZE: &str = "error.unknown_company_size";

    pub const ANOMALY_NEGATIVE: &str = "anomaly.negative";
    pub const ANOMALY_PERCENT_ABOVE_100: &str = "anomaly.percent_above_100";
    pub const ANOMALY_NON_FINITE_RESULT: &str = "anomaly.non_finite_result";
}

/// 사용자에게 보여줄 메시지를 현재 언어로 만든다. `Display`는 로그용으로 남긴다.
pub trait Localize {
    fn localize(&self, tr: &Translator) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        if overrides.is_some() {
            log::info!("언어팩 로드: {lang_code} ({})", pack_dir.unwrap_or_default());
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// `{detail}` 자리표시자를 채운 번역.
    pub fn fill(&self, key: &str, detail: &str) -> String {
        self.t(key).replace("{detail}", detail)
    }

    /// 번역을 가져온다. 언어팩 값이 있으면 우선한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 중첩 테이블은 점으로 이은 키가 된다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        WARNING_PREFIX => "주의",
        APP_EXIT => "프로그램을 종료합니다.",
        STATE_ON => "켜짐",
        STATE_OFF => "꺼짐",
        MAIN_MENU_TITLE => "\n=== 본인확인 ROI 계산기 ===",
        MAIN_MENU_SHOW_RESULTS => "1) 결과 보기",
        MAIN_MENU_EDIT_INPUTS => "2) 입력값 수정",
        MAIN_MENU_INDUSTRY => "3) 업종 / 회사 규모",
        MAIN_MENU_TOGGLES => "4) 규정·운영 절감 포함 여부",
        MAIN_MENU_EXPORT => "5) 보고서 내보내기",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        INVALID_SELECTION => "잘못된 선택입니다.",
        INPUTS_HEADING => "\n-- 입력값 --",
        INPUTS_PROMPT_FIELD => "수정할 항목 번호(취소하려면 엔터): ",
        INPUTS_PROMPT_VALUE => "새 값 (숫자가 아니면 0): ",
        FIELD_MONTHLY_VERIFICATIONS => "월간 검증 건수",
        FIELD_CURRENT_FRAUD_RATE => "현재 사기 비율 [%]",
        FIELD_IMPROVEMENT_RATE => "사기 감소율 [%]",
        FIELD_AVG_TRANSACTION_VALUE => "평균 거래 금액 [$]",
        FIELD_CURRENT_COST => "기존 검증 단가 [$]",
        FIELD_OUR_COST => "신규 검증 단가 [$]",
        INDUSTRY_HEADING => "\n-- 업종 / 회사 규모 --",
        INDUSTRY_PROMPT => "업종 번호 또는 id (유지하려면 엔터): ",
        COMPANY_SIZE_PROMPT => "회사 규모 번호 또는 id (유지하려면 엔터): ",
        INDUSTRY_CURRENT => "현재:",
        TOGGLES_HEADING => "\n-- 절감 항목 --",
        TOGGLE_COMPLIANCE => "1) 규정 준수 절감",
        TOGGLE_OPERATIONAL => "2) 운영 효율 절감",
        TOGGLES_BASE_NOTE => "참고: 기본 변형에서는 토글과 회사 규모가 반영되지 않습니다.",
        EXPORT_HEADING => "\n-- 보고서 내보내기 --",
        EXPORT_PROMPT_PATH => "저장 경로 (.json / .toml / .txt): ",
        EXPORT_DONE => "저장 완료:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_VARIANT => "현재 계산 변형:",
        SETTINGS_OPTIONS => "1) 기본  2) 확장",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "계산 변형이 다음으로 설정되었습니다:",
        RESULTS_HEADING => "\n-- ROI 결과 --",
        CARD_FRAUD_SAVINGS => "연간 사기 절감",
        CARD_COMPLIANCE_SAVINGS => "연간 규정 준수 절감",
        CARD_OPERATIONAL_SAVINGS => "연간 운영 절감",
        CARD_TOTAL_SAVINGS => "연간 총 절감",
        CARD_COST_INCREASE => "연간 비용 증가",
        CARD_NET_ROI => "연간 순 ROI",
        CARD_ROI_PERCENT => "ROI",
        CARD_PAYBACK => "회수기간",
        CARD_MONTHLY_BENEFIT => "월간 효과",
        CARD_THREE_YEAR => "3년 순효과",
        CARD_RISK_SCORE => "위험 점수",
        SUMMARY_HEADLINE => "월 {verifications}건을 검증하는 {subject}의 연간 순효과는 {net}로 예상됩니다.",
        SUMMARY_BREAKDOWN => "절감 내역: 사기 {fraud} ({fraud_share}), 규정 준수 {compliance} ({compliance_share}), 운영 {operational} ({operational_share}).",
        SUMMARY_COST_UP => "검증 비용은 연 {cost} 늘어나며 ROI는 {roi}입니다.",
        SUMMARY_COST_DOWN => "검증 비용이 연 {cost} 줄어듭니다.",
        SUMMARY_PAYBACK => "회수기간: {months}개월.",
        SUMMARY_PAYBACK_IMMEDIATE => "회수기간: 즉시.",
        SUMMARY_NO_PAYBACK => "절감액으로 추가 비용을 회수하지 못합니다.",
        SUMMARY_ENHANCED => "3년 순효과 {three_year}, 위험 점수 {score}/100 ({band}).",
        RISK_LOW => "낮음",
        RISK_MODERATE => "보통",
        RISK_HIGH => "높음",
        UNIT_MONTHS => "개월",
        ERR_IO => "입출력 오류: {detail}",
        ERR_CONFIG => "설정 오류: {detail}",
        ERR_CONFIG_PARSE => "설정 파싱 오류: {detail}",
        ERR_CONFIG_SERIALIZE => "설정 직렬화 오류: {detail}",
        ERR_EXPORT => "내보내기 오류: {detail}",
        ERR_JSON => "JSON 직렬화 오류: {detail}",
        ERR_TOML => "TOML 직렬화 오류: {detail}",
        ERR_UNKNOWN_FORMAT => "지원하지 않는 내보내기 형식: {detail}",
        ERR_UNKNOWN_INDUSTRY => "알 수 없는 업종: {detail}",
        ERR_UNKNOWN_COMPANY_SIZE => "알 수 없는 회사 규모: {detail}",
        ANOMALY_NEGATIVE => "{field}: 음수 값 {value}",
        ANOMALY_PERCENT_ABOVE_100 => "{field}: 100%를 넘는 값 {value}",
        ANOMALY_NON_FINITE_RESULT => "입력값이 너무 커서 일부 결과가 무한대 또는 NaN입니다.",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        WARNING_PREFIX => "Warning",
        APP_EXIT => "Exiting.",
        STATE_ON => "on",
        STATE_OFF => "off",
        MAIN_MENU_TITLE => "\n=== Verification ROI Estimator ===",
        MAIN_MENU_SHOW_RESULTS => "1) Show results",
        MAIN_MENU_EDIT_INPUTS => "2) Edit inputs",
        MAIN_MENU_INDUSTRY => "3) Industry / company size",
        MAIN_MENU_TOGGLES => "4) Compliance / operational savings",
        MAIN_MENU_EXPORT => "5) Export report",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        INVALID_SELECTION => "Invalid selection.",
        INPUTS_HEADING => "\n-- Inputs --",
        INPUTS_PROMPT_FIELD => "Field number to edit (enter to cancel): ",
        INPUTS_PROMPT_VALUE => "New value (non-numeric = 0): ",
        FIELD_MONTHLY_VERIFICATIONS => "Monthly verifications",
        FIELD_CURRENT_FRAUD_RATE => "Current fraud rate [%]",
        FIELD_IMPROVEMENT_RATE => "Fraud reduction [%]",
        FIELD_AVG_TRANSACTION_VALUE => "Average transaction value [$]",
        FIELD_CURRENT_COST => "Current cost per verification [$]",
        FIELD_OUR_COST => "New cost per verification [$]",
        INDUSTRY_HEADING => "\n-- Industry / Company size --",
        INDUSTRY_PROMPT => "Industry number or id (enter to keep): ",
        COMPANY_SIZE_PROMPT => "Company size number or id (enter to keep): ",
        INDUSTRY_CURRENT => "Current:",
        TOGGLES_HEADING => "\n-- Savings components --",
        TOGGLE_COMPLIANCE => "1) Compliance savings",
        TOGGLE_OPERATIONAL => "2) Operational efficiency savings",
        TOGGLES_BASE_NOTE => "Note: the base variant ignores toggles and company size.",
        EXPORT_HEADING => "\n-- Export report --",
        EXPORT_PROMPT_PATH => "Output path (.json / .toml / .txt): ",
        EXPORT_DONE => "Saved:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_VARIANT => "Current calculator variant:",
        SETTINGS_OPTIONS => "1) Base  2) Enhanced",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; variant unchanged.",
        SETTINGS_SAVED => "Calculator variant set to:",
        RESULTS_HEADING => "\n-- ROI results --",
        CARD_FRAUD_SAVINGS => "Annual fraud savings",
        CARD_COMPLIANCE_SAVINGS => "Annual compliance savings",
        CARD_OPERATIONAL_SAVINGS => "Annual operational savings",
        CARD_TOTAL_SAVINGS => "Total annual savings",
        CARD_COST_INCREASE => "Annual cost increase",
        CARD_NET_ROI => "Net annual ROI",
        CARD_ROI_PERCENT => "ROI",
        CARD_PAYBACK => "Payback period",
        CARD_MONTHLY_BENEFIT => "Monthly benefit",
        CARD_THREE_YEAR => "Three-year net benefit",
        CARD_RISK_SCORE => "Risk score",
        SUMMARY_HEADLINE => "For {subject} processing {verifications} verifications a month, the projected net annual benefit is {net}.",
        SUMMARY_BREAKDOWN => "Savings: fraud {fraud} ({fraud_share}), compliance {compliance} ({compliance_share}), operational {operational} ({operational_share}).",
        SUMMARY_COST_UP => "Verification spend rises by {cost} a year for an ROI of {roi}.",
        SUMMARY_COST_DOWN => "Verification spend falls by {cost} a year.",
        SUMMARY_PAYBACK => "Payback period: {months} months.",
        SUMMARY_PAYBACK_IMMEDIATE => "Payback: immediate.",
        SUMMARY_NO_PAYBACK => "Savings never recover the added cost.",
        SUMMARY_ENHANCED => "Three-year net benefit {three_year}; risk score {score}/100 ({band}).",
        RISK_LOW => "low",
        RISK_MODERATE => "moderate",
        RISK_HIGH => "high",
        UNIT_MONTHS => "months",
        ERR_IO => "I/O error: {detail}",
        ERR_CONFIG => "Config error: {detail}",
        ERR_CONFIG_PARSE => "Config parse error: {detail}",
        ERR_CONFIG_SERIALIZE => "Config serialization error: {detail}",
        ERR_EXPORT => "Export error: {detail}",
        ERR_JSON => "JSON serialization error: {detail}",
        ERR_TOML => "TOML serialization error: {detail}",
        ERR_UNKNOWN_FORMAT => "Unsupported export format: {detail}",
        ERR_UNKNOWN_INDUSTRY => "Unknown industry: {detail}",
        ERR_UNKNOWN_COMPANY_SIZE => "Unknown company size: {detail}",
        ANOMALY_NEGATIVE => "{field}: negative value {value}",
        ANOMALY_PERCENT_ABOVE_100 => "{field}: value above 100% ({value})",
        ANOMALY_NON_FINITE_RESULT => "Inputs are too large; some results are infinite or NaN.",
        _ => "",
    }
}
