use crate::rate_tables::{BuiltInTables, RateTables};

use super::model::{CalculatorInputs, EnhancedMetrics, RoiIntermediates, RoiResults, Variant};

/// 규정 위반 확률 상한(연 5%)
pub const MAX_VIOLATION_PROBABILITY: f64 = 0.05;
/// 위반 확률을 사기 비율의 몇 배로 볼지
pub const VIOLATION_TO_FRAUD_RATIO: f64 = 2.0;
/// 회수기간이 이 개월 수를 넘으면 위험 점수 가산
pub const PAYBACK_RISK_THRESHOLD_MONTHS: f64 = 12.0;
pub const PAYBACK_RISK_PENALTY: f64 = 20.0;
/// ROI가 이 % 미만이면 위험 점수 가산
pub const ROI_RISK_THRESHOLD_PERCENT: f64 = 100.0;
pub const ROI_RISK_PENALTY: f64 = 15.0;

/// 사기 비율(%)로부터 연간 규정 위반 확률을 구한다. 항상 0.05 이하.
pub fn violation_probability(current_fraud_rate: f64) -> f64 {
    MAX_VIOLATION_PROBABILITY.min((current_fraud_rate / 100.0) * VIOLATION_TO_FRAUD_RATIO)
}

/// 내장 테이블로 ROI를 계산한다.
pub fn compute_roi(inputs: &CalculatorInputs, variant: Variant) -> RoiResults {
    compute_roi_with(inputs, variant, &BuiltInTables)
}

/// 결과 이전 단계의 중간값을 계산한다.
pub fn compute_intermediates<T: RateTables + ?Sized>(
    inputs: &CalculatorInputs,
    variant: Variant,
    tables: &T,
) -> RoiIntermediates {
    let size_multiplier = match variant {
        Variant::Base => 1.0,
        Variant::Enhanced => tables.company_size(inputs.company_size).multiplier,
    };
    let annual_verifications = inputs.monthly_verifications * 12.0;
    let annual_transaction_volume = annual_verifications * inputs.avg_transaction_value;
    let current_annual_fraud_loss = annual_transaction_volume * (inputs.current_fraud_rate / 100.0);
    let fraud_reduction_rate = inputs.improvement_rate / 100.0;
    let violation_probability = violation_probability(inputs.current_fraud_rate);
    let reduced_violation_probability = violation_probability * (1.0 - fraud_reduction_rate);
    RoiIntermediates {
        size_multiplier,
        annual_verifications,
        annual_transaction_volume,
        current_annual_fraud_loss,
        fraud_reduction_rate,
        violation_probability,
        reduced_violation_probability,
    }
}

/// 주어진 계수 테이블로 ROI를 계산한다.
///
/// 모든 입력에 대해 값을 돌려주는 전함수다. 음수 입력은 거부하지 않고 산술적으로
/// 그대로 전파된다. 비용 증가가 0 이하이면 ROI%와 회수기간은 0이다.
pub fn compute_roi_with<T: RateTables + ?Sized>(
    inputs: &CalculatorInputs,
    variant: Variant,
    tables: &T,
) -> RoiResults {
    let industry = tables.industry(inputs.industry);
    let mid = compute_intermediates(inputs, variant, tables);
    let (compliance_enabled, operational_enabled) = match variant {
        Variant::Base => (true, true),
        Variant::Enhanced => (
            inputs.include_compliance_costs,
            inputs.include_operational_efficiency,
        ),
    };

    let annual_fraud_savings =
        mid.current_annual_fraud_loss * mid.fraud_reduction_rate * mid.size_multiplier;
    let annual_compliance_savings = if compliance_enabled {
        (mid.violation_probability - mid.reduced_violation_probability)
            * industry.compliance_violation_cost
            * mid.size_multiplier
    } else {
        0.0
    };
    let annual_operational_savings = if operational_enabled {
        mid.annual_verifications
            * inputs.current_cost_per_verification
            * industry.operational_efficiency_gain
            * mid.size_multiplier
    } else {
        0.0
    };
    let total_annual_savings =
        annual_fraud_savings + annual_compliance_savings + annual_operational_savings;

    let annual_cost_increase = mid.annual_verifications
        * (inputs.our_cost_per_verification - inputs.current_cost_per_verification);
    let net_annual_roi = total_annual_savings - annual_cost_increase;

    let roi_percentage = if annual_cost_increase > 0.0 {
        (net_annual_roi / annual_cost_increase) * 100.0
    } else {
        0.0
    };
    // 절감액이 0이면 나눗셈 대신 0으로 정의한다.
    let payback_months = if annual_cost_increase > 0.0 && total_annual_savings != 0.0 {
        annual_cost_increase / (total_annual_savings / 12.0)
    } else {
        0.0
    };

    let enhanced = match variant {
        Variant::Base => None,
        Variant::Enhanced => Some(EnhancedMetrics {
            monthly_benefit: total_annual_savings / 12.0,
            three_year_roi: net_annual_roi * 3.0,
            risk_score: risk_score(
                inputs.current_fraud_rate,
                industry.risk_multiplier,
                payback_months,
                roi_percentage,
            ),
        }),
    };

    RoiResults {
        annual_fraud_savings,
        annual_compliance_savings,
        annual_operational_savings,
        total_annual_savings,
        annual_cost_increase,
        net_annual_roi,
        roi_percentage,
        payback_months,
        enhanced,
    }
}

/// 사기 비율, 업종 가중치, 회수기간/ROI 임계값으로 0~100 위험 점수를 만든다.
pub fn risk_score(
    current_fraud_rate: f64,
    risk_multiplier: f64,
    payback_months: f64,
    roi_percentage: f64,
) -> f64 {
    let mut score = current_fraud_rate * risk_multiplier;
    if payback_months > PAYBACK_RISK_THRESHOLD_MONTHS {
        score += PAYBACK_RISK_PENALTY;
    }
    if roi_percentage < ROI_RISK_THRESHOLD_PERCENT {
        score += ROI_RISK_PENALTY;
    }
    score.clamp(0.0, 100.0)
}
