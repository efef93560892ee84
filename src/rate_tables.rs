//! 업종별/회사 규모별 ROI 계수 테이블.
//! 값은 참고용 추정치이며 실제 견적 시에는 고객 데이터로 검증해야 한다.
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::i18n::{keys, Localize, Translator};

/// 업종 키. 테이블에 없는 업종은 타입 수준에서 만들 수 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    FinancialServices,
    Healthcare,
    Ecommerce,
    Cryptocurrency,
    Gaming,
    Insurance,
}

impl Industry {
    pub const ALL: [Industry; 6] = [
        Industry::FinancialServices,
        Industry::Healthcare,
        Industry::Ecommerce,
        Industry::Cryptocurrency,
        Industry::Gaming,
        Industry::Insurance,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Industry::FinancialServices => "financial_services",
            Industry::Healthcare => "healthcare",
            Industry::Ecommerce => "ecommerce",
            Industry::Cryptocurrency => "cryptocurrency",
            Industry::Gaming => "gaming",
            Industry::Insurance => "insurance",
        }
    }

    /// 내장 테이블의 행을 반환한다.
    pub fn config(self) -> &'static IndustryConfig {
        // INDUSTRIES는 Industry::ALL 순서와 동일하다.
        &INDUSTRIES[self as usize]
    }
}

impl Default for Industry {
    fn default() -> Self {
        Industry::FinancialServices
    }
}

/// 회사 규모 키.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Startup,
    SmallBusiness,
    MidMarket,
    Enterprise,
}

impl CompanySize {
    pub const ALL: [CompanySize; 4] = [
        CompanySize::Startup,
        CompanySize::SmallBusiness,
        CompanySize::MidMarket,
        CompanySize::Enterprise,
    ];

    pub fn id(self) -> &'static str {
        match self {
            CompanySize::Startup => "startup",
            CompanySize::SmallBusiness => "small_business",
            CompanySize::MidMarket => "mid_market",
            CompanySize::Enterprise => "enterprise",
        }
    }

    pub fn config(self) -> &'static CompanySizeConfig {
        &COMPANY_SIZES[self as usize]
    }
}

impl Default for CompanySize {
    fn default() -> Self {
        CompanySize::SmallBusiness
    }
}

/// 알 수 없는 업종/규모 키를 입력 경계에서 거부할 때 사용한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseKeyError {
    UnknownIndustry(String),
    UnknownCompanySize(String),
}

impl std::fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseKeyError::UnknownIndustry(k) => write!(f, "알 수 없는 업종: {k}"),
            ParseKeyError::UnknownCompanySize(k) => write!(f, "알 수 없는 회사 규모: {k}"),
        }
    }
}

impl std::error::Error for ParseKeyError {}

impl Localize for ParseKeyError {
    fn localize(&self, tr: &Translator) -> String {
        match self {
            ParseKeyError::UnknownIndustry(k) => tr.fill(keys::ERR_UNKNOWN_INDUSTRY, k),
            ParseKeyError::UnknownCompanySize(k) => tr.fill(keys::ERR_UNKNOWN_COMPANY_SIZE, k),
        }
    }
}

impl FromStr for Industry {
    type Err = ParseKeyError;

    /// id("healthcare") 또는 표시 이름("Healthcare")을 대소문자 구분 없이 받는다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Industry::ALL
            .iter()
            .copied()
            .find(|i| {
                i.id().eq_ignore_ascii_case(key) || i.config().name.eq_ignore_ascii_case(key)
            })
            .ok_or_else(|| ParseKeyError::UnknownIndustry(key.to_string()))
    }
}

impl FromStr for CompanySize {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        CompanySize::ALL
            .iter()
            .copied()
            .find(|c| {
                c.id().eq_ignore_ascii_case(key) || c.config().name.eq_ignore_ascii_case(key)
            })
            .ok_or_else(|| ParseKeyError::UnknownCompanySize(key.to_string()))
    }
}

/// 업종별 계수 한 행.
#[derive(Debug, Clone)]
pub struct IndustryConfig {
    pub industry: Industry,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// 현재 계산식에서 사용하지 않는다. 업종별 사기 손실 심각도 기록용.
    pub fraud_loss_multiplier: f64,
    /// 규정 위반 1건당 예상 비용 [$]
    pub compliance_violation_cost: f64,
    /// 현재 계산식에서 사용하지 않는다. 레코드당 유출 비용 [$]
    pub breach_cost_per_record: f64,
    /// 기존 검증 비용 중 효율화로 회수 가능한 비율(0~1)
    pub operational_efficiency_gain: f64,
    /// 위험 점수 가중치. 기본 변형에서는 1로 취급한다.
    pub risk_multiplier: f64,
}

/// 회사 규모별 배수.
#[derive(Debug, Clone)]
pub struct CompanySizeConfig {
    pub size: CompanySize,
    pub name: &'static str,
    /// 사기/규정 절감액에 곱하는 선형 배수
    pub multiplier: f64,
}

/// 엔진이 계수를 읽어 가는 경계. 테스트나 보정된 테이블을 끼워 넣을 수 있다.
pub trait RateTables {
    fn industry(&self, industry: Industry) -> &IndustryConfig;
    fn company_size(&self, size: CompanySize) -> &CompanySizeConfig;
}

/// 컴파일 시점에 포함된 기본 테이블.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltInTables;

impl RateTables for BuiltInTables {
    fn industry(&self, industry: Industry) -> &IndustryConfig {
        industry.config()
    }

    fn company_size(&self, size: CompanySize) -> &CompanySizeConfig {
        size.config()
    }
}

pub fn industries() -> &'static [IndustryConfig] {
    INDUSTRIES
}

pub fn company_sizes() -> &'static [CompanySizeConfig] {
    COMPANY_SIZES
}

const INDUSTRIES: &[IndustryConfig] = &[
    IndustryConfig {
        industry: Industry::FinancialServices,
        name: "Financial Services",
        icon: "🏦",
        description: "Banks, lenders and payment providers under KYC/AML obligations",
        fraud_loss_multiplier: 1.5,
        compliance_violation_cost: 2_500_000.0,
        breach_cost_per_record: 266.0,
        operational_efficiency_gain: 0.20,
        risk_multiplier: 1.3,
    },
    IndustryConfig {
        industry: Industry::Healthcare,
        name: "Healthcare",
        icon: "🏥",
        description: "Providers, payers and telehealth platforms handling patient identity",
        fraud_loss_multiplier: 1.3,
        compliance_violation_cost: 1_500_000.0,
        breach_cost_per_record: 408.0,
        operational_efficiency_gain: 0.15,
        risk_multiplier: 1.2,
    },
    IndustryConfig {
        industry: Industry::Ecommerce,
        name: "E-commerce",
        icon: "🛒",
        description: "Online retail and marketplaces exposed to account takeover",
        fraud_loss_multiplier: 1.0,
        compliance_violation_cost: 500_000.0,
        breach_cost_per_record: 165.0,
        operational_efficiency_gain: 0.25,
        risk_multiplier: 1.0,
    },
    IndustryConfig {
        industry: Industry::Cryptocurrency,
        name: "Cryptocurrency",
        icon: "₿",
        description: "Exchanges and custodians with travel-rule and AML exposure",
        fraud_loss_multiplier: 2.0,
        compliance_violation_cost: 5_000_000.0,
        breach_cost_per_record: 300.0,
        operational_efficiency_gain: 0.30,
        risk_multiplier: 1.5,
    },
    IndustryConfig {
        industry: Industry::Gaming,
        name: "Gaming",
        icon: "🎮",
        description: "Online gaming and betting operators with age and identity checks",
        fraud_loss_multiplier: 1.2,
        compliance_violation_cost: 1_000_000.0,
        breach_cost_per_record: 150.0,
        operational_efficiency_gain: 0.20,
        risk_multiplier: 1.1,
    },
    IndustryConfig {
        industry: Industry::Insurance,
        name: "Insurance",
        icon: "🛡",
        description: "Carriers verifying policyholders and claimants",
        fraud_loss_multiplier: 1.4,
        compliance_violation_cost: 1_200_000.0,
        breach_cost_per_record: 220.0,
        operational_efficiency_gain: 0.18,
        risk_multiplier: 1.2,
    },
];

const COMPANY_SIZES: &[CompanySizeConfig] = &[
    CompanySizeConfig {
        size: CompanySize::Startup,
        name: "Startup",
        multiplier: 0.5,
    },
    CompanySizeConfig {
        size: CompanySize::SmallBusiness,
        name: "Small Business",
        multiplier: 1.0,
    },
    CompanySizeConfig {
        size: CompanySize::MidMarket,
        name: "Mid-Market",
        multiplier: 1.5,
    },
    CompanySizeConfig {
        size: CompanySize::Enterprise,
        name: "Enterprise",
        multiplier: 2.5,
    },
];
