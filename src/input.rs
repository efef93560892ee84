//! 텍스트 입력을 계산 입력으로 옮기는 경계 계층.
//! 숫자 파싱 실패는 0으로 대체하고, 음수/범위 초과 값은 거부하지 않고 표시만 한다.

use crate::i18n::{keys, Localize, Translator};
use crate::rate_tables::{CompanySize, Industry, ParseKeyError};
use crate::roi::CalculatorInputs;

/// 텍스트로 편집 가능한 숫자 필드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    MonthlyVerifications,
    CurrentFraudRate,
    ImprovementRate,
    AvgTransactionValue,
    CurrentCostPerVerification,
    OurCostPerVerification,
}

impl InputField {
    pub const ALL: [InputField; 6] = [
        InputField::MonthlyVerifications,
        InputField::CurrentFraudRate,
        InputField::ImprovementRate,
        InputField::AvgTransactionValue,
        InputField::CurrentCostPerVerification,
        InputField::OurCostPerVerification,
    ];

    /// 직렬화 이름과 같은 camelCase 이름
    pub fn name(self) -> &'static str {
        match self {
            InputField::MonthlyVerifications => "monthlyVerifications",
            InputField::CurrentFraudRate => "currentFraudRate",
            InputField::ImprovementRate => "improvementRate",
            InputField::AvgTransactionValue => "avgTransactionValue",
            InputField::CurrentCostPerVerification => "currentCostPerVerification",
            InputField::OurCostPerVerification => "ourCostPerVerification",
        }
    }

    pub fn is_percent(self) -> bool {
        matches!(self, InputField::CurrentFraudRate | InputField::ImprovementRate)
    }
}

/// 경계에서 발견한 이상값. 계산은 그대로 진행된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAnomaly {
    Negative { field: InputField, value: f64 },
    PercentAbove100 { field: InputField, value: f64 },
    /// 입력이 너무 커서 결과 중 일부가 inf/NaN이 되었다.
    NonFiniteResult,
}

impl std::fmt::Display for InputAnomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputAnomaly::Negative { field, value } => {
                write!(f, "{}: 음수 값 {value}", field.name())
            }
            InputAnomaly::PercentAbove100 { field, value } => {
                write!(f, "{}: 100%를 넘는 값 {value}", field.name())
            }
            InputAnomaly::NonFiniteResult => write!(f, "결과에 무한대 또는 NaN이 포함됨"),
        }
    }
}

impl Localize for InputAnomaly {
    fn localize(&self, tr: &Translator) -> String {
        let (key, field, value) = match self {
            InputAnomaly::Negative { field, value } => (keys::ANOMALY_NEGATIVE, *field, *value),
            InputAnomaly::PercentAbove100 { field, value } => {
                (keys::ANOMALY_PERCENT_ABOVE_100, *field, *value)
            }
            InputAnomaly::NonFiniteResult => {
                return tr.t(keys::ANOMALY_NON_FINITE_RESULT).to_string()
            }
        };
        tr.t(key)
            .replace("{field}", field.name())
            .replace("{value}", &value.to_string())
    }
}

/// 숫자 텍스트를 f64로 바꾼다. 빈 문자열, 파싱 실패, NaN/무한대는 0이다.
/// `$`, 천 단위 `,`, 끝의 `%`는 무시한다.
pub fn parse_number_or_zero(text: &str) -> f64 {
    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

impl CalculatorInputs {
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::MonthlyVerifications => self.monthly_verifications,
            InputField::CurrentFraudRate => self.current_fraud_rate,
            InputField::ImprovementRate => self.improvement_rate,
            InputField::AvgTransactionValue => self.avg_transaction_value,
            InputField::CurrentCostPerVerification => self.current_cost_per_verification,
            InputField::OurCostPerVerification => self.our_cost_per_verification,
        }
    }

    pub fn set(&mut self, field: InputField, value: f64) {
        let slot = match field {
            InputField::MonthlyVerifications => &mut self.monthly_verifications,
            InputField::CurrentFraudRate => &mut self.current_fraud_rate,
            InputField::ImprovementRate => &mut self.improvement_rate,
            InputField::AvgTransactionValue => &mut self.avg_transaction_value,
            InputField::CurrentCostPerVerification => &mut self.current_cost_per_verification,
            InputField::OurCostPerVerification => &mut self.our_cost_per_verification,
        };
        *slot = value;
    }

    /// 텍스트 입력을 필드에 반영하고 실제로 저장된 값을 돌려준다.
    pub fn set_field(&mut self, field: InputField, text: &str) -> f64 {
        let value = parse_number_or_zero(text);
        self.set(field, value);
        value
    }

    pub fn set_industry(&mut self, key: &str) -> Result<Industry, ParseKeyError> {
        let industry: Industry = key.parse()?;
        self.industry = industry;
        Ok(industry)
    }

    pub fn set_company_size(&mut self, key: &str) -> Result<CompanySize, ParseKeyError> {
        let size: CompanySize = key.parse()?;
        self.company_size = size;
        Ok(size)
    }

    /// 음수와 100%를 넘는 비율을 모은다. 값은 바꾸지 않는다.
    pub fn anomalies(&self) -> Vec<InputAnomaly> {
        let mut out = Vec::new();
        for field in InputField::ALL {
            let value = self.get(field);
            if value < 0.0 {
                out.push(InputAnomaly::Negative { field, value });
            } else if field.is_percent() && value > 100.0 {
                out.push(InputAnomaly::PercentAbove100 { field, value });
            }
        }
        out
    }
}
