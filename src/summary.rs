//! 결과 카드와 서술형 요약 문장을 만든다.

use crate::i18n::{keys, Translator};
use crate::roi::{CalculatorInputs, RoiResults, Variant};

/// 위험 점수 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            RiskBand::Low
        } else if score < 60.0 {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }

    fn key(self) -> &'static str {
        match self {
            RiskBand::Low => keys::RISK_LOW,
            RiskBand::Moderate => keys::RISK_MODERATE,
            RiskBand::High => keys::RISK_HIGH,
        }
    }
}

/// 라벨-값 한 쌍.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub label: String,
    pub value: String,
}

/// 정수부에 천 단위 구분자를 넣는다.
fn group_thousands(int_part: &str) -> String {
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 소수 `decimals` 자리, 천 단위 구분자를 넣은 숫자 문자열.
pub fn format_number(value: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut out = String::new();
    // -0.00 처럼 보이지 않도록 반올림 후 0이면 부호를 뺀다.
    if value < 0.0 && raw.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(f) = frac {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// "$1,226,250.00", 음수는 "-$60,000.00".
pub fn format_currency(value: f64) -> String {
    let n = format_number(value, 2);
    match n.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${n}"),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value, 2))
}

fn share(part: f64, total: f64) -> String {
    if total == 0.0 {
        format_percent(0.0)
    } else {
        format_percent(part / total * 100.0)
    }
}

/// 결과를 화면 카드 목록으로 만든다. 확장 지표는 있을 때만 포함한다.
pub fn cards(results: &RoiResults, tr: &Translator) -> Vec<Card> {
    let card = |key: &str, value: String| Card {
        label: tr.t(key).to_string(),
        value,
    };
    let mut out = vec![
        card(keys::CARD_FRAUD_SAVINGS, format_currency(results.annual_fraud_savings)),
        card(
            keys::CARD_COMPLIANCE_SAVINGS,
            format_currency(results.annual_compliance_savings),
        ),
        card(
            keys::CARD_OPERATIONAL_SAVINGS,
            format_currency(results.annual_operational_savings),
        ),
        card(keys::CARD_TOTAL_SAVINGS, format_currency(results.total_annual_savings)),
        card(keys::CARD_COST_INCREASE, format_currency(results.annual_cost_increase)),
        card(keys::CARD_NET_ROI, format_currency(results.net_annual_roi)),
        card(keys::CARD_ROI_PERCENT, format_percent(results.roi_percentage)),
        card(
            keys::CARD_PAYBACK,
            format!("{} {}", format_number(results.payback_months, 1), tr.t(keys::UNIT_MONTHS)),
        ),
    ];
    if let Some(e) = results.enhanced {
        out.push(card(keys::CARD_MONTHLY_BENEFIT, format_currency(e.monthly_benefit)));
        out.push(card(keys::CARD_THREE_YEAR, format_currency(e.three_year_roi)));
        out.push(card(
            keys::CARD_RISK_SCORE,
            format!("{} / 100", format_number(e.risk_score, 0)),
        ));
    }
    out
}

/// 서술형 요약. 문장마다 한 줄씩이다.
pub fn narrative(
    inputs: &CalculatorInputs,
    results: &RoiResults,
    variant: Variant,
    tr: &Translator,
) -> String {
    let industry = inputs.industry.config().name;
    let subject = match variant {
        Variant::Base => industry.to_string(),
        Variant::Enhanced => format!("{industry} ({})", inputs.company_size.config().name),
    };
    let mut lines = Vec::new();
    lines.push(
        tr.t(keys::SUMMARY_HEADLINE)
            .replace("{subject}", &subject)
            .replace("{verifications}", &format_number(inputs.monthly_verifications, 0))
            .replace("{net}", &format_currency(results.net_annual_roi)),
    );
    let total = results.total_annual_savings;
    lines.push(
        tr.t(keys::SUMMARY_BREAKDOWN)
            .replace("{fraud}", &format_currency(results.annual_fraud_savings))
            .replace("{fraud_share}", &share(results.annual_fraud_savings, total))
            .replace("{compliance}", &format_currency(results.annual_compliance_savings))
            .replace(
                "{compliance_share}",
                &share(results.annual_compliance_savings, total),
            )
            .replace("{operational}", &format_currency(results.annual_operational_savings))
            .replace(
                "{operational_share}",
                &share(results.annual_operational_savings, total),
            ),
    );
    if results.annual_cost_increase > 0.0 {
        lines.push(
            tr.t(keys::SUMMARY_COST_UP)
                .replace("{cost}", &format_currency(results.annual_cost_increase))
                .replace("{roi}", &format_percent(results.roi_percentage)),
        );
        if results.total_annual_savings > 0.0 {
            lines.push(
                tr.t(keys::SUMMARY_PAYBACK)
                    .replace("{months}", &format_number(results.payback_months, 1)),
            );
        } else {
            lines.push(tr.t(keys::SUMMARY_NO_PAYBACK).to_string());
        }
    } else {
        if results.annual_cost_increase < 0.0 {
            lines.push(
                tr.t(keys::SUMMARY_COST_DOWN)
                    .replace("{cost}", &format_currency(-results.annual_cost_increase)),
            );
        }
        lines.push(tr.t(keys::SUMMARY_PAYBACK_IMMEDIATE).to_string());
    }
    if let Some(e) = results.enhanced {
        lines.push(
            tr.t(keys::SUMMARY_ENHANCED)
                .replace("{three_year}", &format_currency(e.three_year_roi))
                .replace("{score}", &format_number(e.risk_score, 0))
                .replace("{band}", tr.t(RiskBand::from_score(e.risk_score).key())),
        );
    }
    lines.join("\n")
}
