//! 계산 엔진 시나리오 회귀 테스트.
use verification_roi::rate_tables::{
    BuiltInTables, CompanySize, CompanySizeConfig, Industry, IndustryConfig, RateTables,
};
use verification_roi::roi::{
    compute_intermediates, compute_roi, compute_roi_with, violation_probability,
    CalculatorInputs, Variant,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn healthcare() -> CalculatorInputs {
    CalculatorInputs {
        industry: Industry::Healthcare,
        company_size: CompanySize::SmallBusiness,
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

#[test]
fn healthcare_reference_scenario() {
    let inputs = healthcare();
    let mid = compute_intermediates(&inputs, Variant::Base, &BuiltInTables);
    assert_close("annualVerifications", mid.annual_verifications, 120_000.0, 1e-12);
    assert_close("volume", mid.annual_transaction_volume, 60_000_000.0, 1e-12);
    assert_close("fraudLoss", mid.current_annual_fraud_loss, 1_500_000.0, 1e-12);
    assert_close("violation", mid.violation_probability, 0.05, 1e-12);
    assert_close("reduced", mid.reduced_violation_probability, 0.0125, 1e-12);

    let r = compute_roi(&inputs, Variant::Base);
    assert_close("fraud", r.annual_fraud_savings, 1_125_000.0, 1e-9);
    assert_close("compliance", r.annual_compliance_savings, 56_250.0, 1e-9);
    assert_close("operational", r.annual_operational_savings, 45_000.0, 1e-9);
    assert_close("total", r.total_annual_savings, 1_226_250.0, 1e-9);
    assert_close("cost", r.annual_cost_increase, 60_000.0, 1e-9);
    assert_close("net", r.net_annual_roi, 1_166_250.0, 1e-9);
    assert_close("roi%", r.roi_percentage, 1943.75, 1e-9);
    assert_close("payback", r.payback_months, 60_000.0 / (1_226_250.0 / 12.0), 1e-9);
    assert!((r.payback_months - 0.587).abs() < 1e-3);
    assert!(r.enhanced.is_none());
}

#[test]
fn enhanced_variant_adds_monthly_three_year_and_risk() {
    let r = compute_roi(&healthcare(), Variant::Enhanced);
    // 소기업 배수 1.0이므로 기본 변형과 금액이 같다.
    assert_close("total", r.total_annual_savings, 1_226_250.0, 1e-9);
    let e = r.enhanced.expect("enhanced metrics");
    assert_close("monthly", e.monthly_benefit, 1_226_250.0 / 12.0, 1e-9);
    assert_close("threeYear", e.three_year_roi, 1_166_250.0 * 3.0, 1e-9);
    // 2.5 * 1.2, 회수기간·ROI 가산 없음
    assert_close("risk", e.risk_score, 3.0, 1e-9);
}

#[test]
fn equal_unit_cost_gives_zero_roi_and_payback() {
    let mut inputs = healthcare();
    inputs.our_cost_per_verification = inputs.current_cost_per_verification;
    let r = compute_roi(&inputs, Variant::Enhanced);
    assert_eq!(r.annual_cost_increase, 0.0);
    assert_eq!(r.roi_percentage, 0.0);
    assert_eq!(r.payback_months, 0.0);
    assert_close("net", r.net_annual_roi, 1_226_250.0, 1e-9);
    assert_eq!(r.net_annual_roi, r.total_annual_savings);
    // ROI 0% < 100% 이므로 15점 가산
    assert_close("risk", r.enhanced.unwrap().risk_score, 3.0 + 15.0, 1e-9);
}

#[test]
fn cheaper_service_yields_negative_cost_increase() {
    let mut inputs = healthcare();
    inputs.our_cost_per_verification = 1.50;
    let r = compute_roi(&inputs, Variant::Base);
    assert_close("cost", r.annual_cost_increase, -120_000.0, 1e-9);
    assert_eq!(r.roi_percentage, 0.0);
    assert_eq!(r.payback_months, 0.0);
    assert_close("net", r.net_annual_roi, 1_226_250.0 + 120_000.0, 1e-9);
}

#[test]
fn zero_improvement_leaves_only_operational_savings() {
    let mut inputs = healthcare();
    inputs.improvement_rate = 0.0;
    let mid = compute_intermediates(&inputs, Variant::Enhanced, &BuiltInTables);
    assert_eq!(mid.reduced_violation_probability, mid.violation_probability);
    let r = compute_roi(&inputs, Variant::Enhanced);
    assert_eq!(r.annual_fraud_savings, 0.0);
    assert_eq!(r.annual_compliance_savings, 0.0);
    assert_close("operational", r.annual_operational_savings, 45_000.0, 1e-9);
    assert_close("total", r.total_annual_savings, 45_000.0, 1e-9);
}

#[test]
fn zero_savings_with_cost_increase_has_zero_payback() {
    let mut inputs = healthcare();
    inputs.improvement_rate = 0.0;
    inputs.include_operational_efficiency = false;
    let r = compute_roi(&inputs, Variant::Enhanced);
    assert_eq!(r.total_annual_savings, 0.0);
    assert!(r.annual_cost_increase > 0.0);
    assert_eq!(r.payback_months, 0.0);
    assert!(r.payback_months.is_finite());
    assert_close("roi%", r.roi_percentage, -100.0, 1e-9);
}

#[test]
fn toggles_gate_components_only_in_enhanced_variant() {
    let mut inputs = healthcare();
    inputs.include_compliance_costs = false;
    inputs.include_operational_efficiency = false;

    let enhanced = compute_roi(&inputs, Variant::Enhanced);
    assert_eq!(enhanced.annual_compliance_savings, 0.0);
    assert_eq!(enhanced.annual_operational_savings, 0.0);
    assert_close("total", enhanced.total_annual_savings, 1_125_000.0, 1e-9);

    let base = compute_roi(&inputs, Variant::Base);
    assert_close("compliance", base.annual_compliance_savings, 56_250.0, 1e-9);
    assert_close("operational", base.annual_operational_savings, 45_000.0, 1e-9);
}

#[test]
fn company_size_scales_fraud_compliance_and_operational() {
    let mut inputs = healthcare();
    inputs.company_size = CompanySize::Enterprise;
    let m = CompanySize::Enterprise.config().multiplier;

    let r = compute_roi(&inputs, Variant::Enhanced);
    assert_close("fraud", r.annual_fraud_savings, 1_125_000.0 * m, 1e-9);
    assert_close("compliance", r.annual_compliance_savings, 56_250.0 * m, 1e-9);
    assert_close("operational", r.annual_operational_savings, 45_000.0 * m, 1e-9);
    // 비용 증가는 규모와 무관하다.
    assert_close("cost", r.annual_cost_increase, 60_000.0, 1e-9);

    let base = compute_roi(&inputs, Variant::Base);
    assert_close("base fraud", base.annual_fraud_savings, 1_125_000.0, 1e-9);
}

#[test]
fn violation_probability_is_capped_at_five_percent() {
    assert_close("1%", violation_probability(1.0), 0.02, 1e-12);
    assert_eq!(violation_probability(2.5), 0.05);
    assert_eq!(violation_probability(40.0), 0.05);
    assert_eq!(violation_probability(1e9), 0.05);
}

#[test]
fn risk_score_is_clamped_to_100() {
    let mut inputs = healthcare();
    inputs.industry = Industry::Cryptocurrency;
    inputs.current_fraud_rate = 90.0;
    inputs.improvement_rate = 0.0;
    let r = compute_roi(&inputs, Variant::Enhanced);
    assert_eq!(r.enhanced.unwrap().risk_score, 100.0);
}

#[test]
fn long_payback_adds_risk_penalty() {
    let mut inputs = healthcare();
    inputs.industry = Industry::Ecommerce;
    inputs.current_fraud_rate = 0.1;
    inputs.improvement_rate = 10.0;
    inputs.our_cost_per_verification = 10.0;
    let r = compute_roi(&inputs, Variant::Enhanced);
    assert!(r.payback_months > 12.0, "payback {}", r.payback_months);
    assert!(r.roi_percentage < 100.0);
    // 0.1 * 1.0 + 20 + 15
    assert_close("risk", r.enhanced.unwrap().risk_score, 35.1, 1e-9);
}

#[test]
fn negative_inputs_propagate_arithmetically() {
    let mut inputs = healthcare();
    inputs.current_fraud_rate = -2.5;
    let r = compute_roi(&inputs, Variant::Enhanced);
    assert_close("fraud", r.annual_fraud_savings, -1_125_000.0, 1e-9);
    assert!(r.annual_compliance_savings < 0.0);
    let e = r.enhanced.unwrap();
    assert!((0.0..=100.0).contains(&e.risk_score));
}

struct FlatTables {
    industry: IndustryConfig,
    size: CompanySizeConfig,
}

impl RateTables for FlatTables {
    fn industry(&self, _industry: Industry) -> &IndustryConfig {
        &self.industry
    }

    fn company_size(&self, _size: CompanySize) -> &CompanySizeConfig {
        &self.size
    }
}

#[test]
fn caller_supplied_tables_drive_the_formulas() {
    let tables = FlatTables {
        industry: IndustryConfig {
            industry: Industry::Gaming,
            name: "Flat",
            icon: "",
            description: "",
            fraud_loss_multiplier: 99.0,
            compliance_violation_cost: 1_000_000.0,
            breach_cost_per_record: 99.0,
            operational_efficiency_gain: 0.10,
            risk_multiplier: 2.0,
        },
        size: CompanySizeConfig {
            size: CompanySize::MidMarket,
            name: "Double",
            multiplier: 2.0,
        },
    };
    let r = compute_roi_with(&healthcare(), Variant::Enhanced, &tables);
    assert_close("fraud", r.annual_fraud_savings, 2_250_000.0, 1e-9);
    assert_close("compliance", r.annual_compliance_savings, 0.0375 * 1_000_000.0 * 2.0, 1e-9);
    assert_close("operational", r.annual_operational_savings, 120_000.0 * 2.5 * 0.10 * 2.0, 1e-9);
    assert_close("risk", r.enhanced.unwrap().risk_score, 5.0, 1e-9);
}

#[test]
fn identical_inputs_give_identical_results() {
    let inputs = healthcare();
    assert_eq!(
        compute_roi(&inputs, Variant::Enhanced),
        compute_roi(&inputs, Variant::Enhanced)
    );
}
