use serde::{Deserialize, Serialize};

use crate::rate_tables::{CompanySize, Industry};

/// 계산기 변형. 기본 변형은 회사 규모·토글·위험 점수를 사용하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Base,
    #[default]
    Enhanced,
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "base" => Ok(Variant::Base),
            "enhanced" => Ok(Variant::Enhanced),
            other => Err(format!("알 수 없는 계산 변형: {other}")),
        }
    }
}

/// ROI 계산 입력. UI가 필드 단위로 수정하고 매번 값 그대로 엔진에 넘긴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorInputs {
    pub industry: Industry,
    /// 확장 변형에서만 사용
    pub company_size: CompanySize,
    /// 월간 검증 건수
    pub monthly_verifications: f64,
    /// 현재 사기 비율 [%]
    pub current_fraud_rate: f64,
    /// 도입 후 사기 비율 감소율 [%]
    pub improvement_rate: f64,
    /// 평균 거래 금액 [$]
    pub avg_transaction_value: f64,
    /// 기존 검증 단가 [$/건]
    pub current_cost_per_verification: f64,
    /// 신규 검증 단가 [$/건]
    pub our_cost_per_verification: f64,
    /// 확장 변형에서만 사용
    pub include_compliance_costs: bool,
    /// 확장 변형에서만 사용
    pub include_operational_efficiency: bool,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            industry: Industry::default(),
            company_size: CompanySize::default(),
            monthly_verifications: 10_000.0,
            current_fraud_rate: 2.5,
            improvement_rate: 75.0,
            avg_transaction_value: 500.0,
            current_cost_per_verification: 2.50,
            our_cost_per_verification: 3.00,
            include_compliance_costs: true,
            include_operational_efficiency: true,
        }
    }
}

/// 확장 변형에서만 채워지는 지표.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedMetrics {
    pub monthly_benefit: f64,
    #[serde(rename = "threeYearROI")]
    pub three_year_roi: f64,
    /// 0~100 으로 클램프된 위험 점수
    pub risk_score: f64,
}

/// ROI 계산 결과. 입력이 바뀔 때마다 통째로 다시 만든다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResults {
    pub annual_fraud_savings: f64,
    pub annual_compliance_savings: f64,
    pub annual_operational_savings: f64,
    pub total_annual_savings: f64,
    /// 음수면 신규 서비스가 더 저렴하다는 뜻
    pub annual_cost_increase: f64,
    #[serde(rename = "netAnnualROI")]
    pub net_annual_roi: f64,
    pub roi_percentage: f64,
    pub payback_months: f64,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub enhanced: Option<EnhancedMetrics>,
}

impl RoiResults {
    /// 입력이 f64 범위를 넘으면 inf/NaN이 섞일 수 있다.
    pub fn is_finite(&self) -> bool {
        let base = [
            self.annual_fraud_savings,
            self.annual_compliance_savings,
            self.annual_operational_savings,
            self.total_annual_savings,
            self.annual_cost_increase,
            self.net_annual_roi,
            self.roi_percentage,
            self.payback_months,
        ];
        let enhanced = self
            .enhanced
            .map(|m| [m.monthly_benefit, m.three_year_roi, m.risk_score]);
        base.iter()
            .chain(enhanced.iter().flatten())
            .all(|v| v.is_finite())
    }
}

/// 결과를 만들기 전 단계의 중간값. 요약 문장과 검증용으로 노출한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiIntermediates {
    pub size_multiplier: f64,
    pub annual_verifications: f64,
    pub annual_transaction_volume: f64,
    pub current_annual_fraud_loss: f64,
    pub fraud_reduction_rate: f64,
    pub violation_probability: f64,
    pub reduced_violation_probability: f64,
}
