use log::{debug, warn};

use crate::input::{InputAnomaly, InputField};
use crate::rate_tables::{CompanySize, Industry, ParseKeyError};
use crate::roi::{self, CalculatorInputs, RoiResults, Variant};

/// UI 쪽이 소유하는 계산 세션.
///
/// 입력 레코드 하나만 보관하고, 필드가 바뀔 때마다 결과를 처음부터 다시 계산한다.
/// 엔진에는 입력을 값으로 넘기므로 엔진이 세션을 참조하지 않는다.
#[derive(Debug, Clone)]
pub struct Calculator {
    variant: Variant,
    inputs: CalculatorInputs,
    results: RoiResults,
}

impl Calculator {
    pub fn new(inputs: CalculatorInputs, variant: Variant) -> Self {
        let results = roi::compute_roi(&inputs, variant);
        Self {
            variant,
            inputs,
            results,
        }
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    pub fn results(&self) -> &RoiResults {
        &self.results
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// 입력 이상값에 더해, 결과가 유한하지 않으면 `NonFiniteResult`를 붙인다.
    pub fn anomalies(&self) -> Vec<InputAnomaly> {
        let mut out = self.inputs.anomalies();
        if !self.results.is_finite() {
            out.push(InputAnomaly::NonFiniteResult);
        }
        out
    }

    pub fn set_variant(&mut self, variant: Variant) -> &RoiResults {
        self.variant = variant;
        self.recompute()
    }

    pub fn replace_inputs(&mut self, inputs: CalculatorInputs) -> &RoiResults {
        self.inputs = inputs;
        self.recompute()
    }

    /// 텍스트 입력 한 건을 반영한다. 파싱 실패는 0으로 처리된다.
    pub fn set_field(&mut self, field: InputField, text: &str) -> &RoiResults {
        let value = self.inputs.set_field(field, text);
        debug!("{} <- {value} (입력: {text:?})", field.name());
        self.recompute()
    }

    pub fn set_industry(&mut self, key: &str) -> Result<Industry, ParseKeyError> {
        let industry = self.inputs.set_industry(key)?;
        self.recompute();
        Ok(industry)
    }

    pub fn set_company_size(&mut self, key: &str) -> Result<CompanySize, ParseKeyError> {
        let size = self.inputs.set_company_size(key)?;
        self.recompute();
        Ok(size)
    }

    pub fn set_include_compliance_costs(&mut self, on: bool) -> &RoiResults {
        self.inputs.include_compliance_costs = on;
        self.recompute()
    }

    pub fn set_include_operational_efficiency(&mut self, on: bool) -> &RoiResults {
        self.inputs.include_operational_efficiency = on;
        self.recompute()
    }

    fn recompute(&mut self) -> &RoiResults {
        for anomaly in self.inputs.anomalies() {
            warn!("검증되지 않은 입력값: {anomaly}");
        }
        self.results = roi::compute_roi(&self.inputs, self.variant);
        if !self.results.is_finite() {
            warn!("결과에 무한대 또는 NaN이 포함됨: {:?}", self.inputs);
        }
        debug!(
            "재계산: 총 절감 {:.2}, 순 ROI {:.2}",
            self.results.total_annual_savings, self.results.net_annual_roi
        );
        &self.results
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorInputs::default(), Variant::default())
    }
}
