//! Salary deduction estimates.
//!
//! Each deduction is a flat share of the gross salary. There are no brackets,
//! thresholds or regional rules; the figures are an illustration for the
//! income page, not a tax computation.

use log::debug;
use shared::SalaryDeductions;

/// Flat deduction rates in basis points (1/100 of a percent)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeductionRates {
    pub resident_tax: u64,
    pub income_tax: u64,
    pub pension: u64,
    pub health_insurance: u64,
    pub nursing_insurance: u64,
    pub employment_insurance: u64,
}

impl Default for DeductionRates {
    fn default() -> Self {
        Self {
            resident_tax: 1_000,
            income_tax: 2_000,
            pension: 910,
            health_insurance: 500,
            nursing_insurance: 150,
            employment_insurance: 30,
        }
    }
}

const BASIS_POINTS: u64 = 10_000;

#[derive(Debug, Clone, Default)]
pub struct SalaryService {
    rates: DeductionRates,
}

impl SalaryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rates(rates: DeductionRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &DeductionRates {
        &self.rates
    }

    pub fn estimate(&self, gross: u64) -> SalaryDeductions {
        let deductions = SalaryDeductions {
            gross,
            resident_tax: share(gross, self.rates.resident_tax),
            income_tax: share(gross, self.rates.income_tax),
            pension: share(gross, self.rates.pension),
            health_insurance: share(gross, self.rates.health_insurance),
            nursing_insurance: share(gross, self.rates.nursing_insurance),
            employment_insurance: share(gross, self.rates.employment_insurance),
        };
        debug!("Estimated deductions for gross {}: total {}", gross, deductions.total());
        deductions
    }
}

/// `gross * rate` rounded to the nearest unit, halves rounding up
fn share(gross: u64, rate_bp: u64) -> u64 {
    let scaled = u128::from(gross) * u128::from(rate_bp);
    let rounded = (scaled + u128::from(BASIS_POINTS / 2)) / u128::from(BASIS_POINTS);
    u64::try_from(rounded).unwrap_or(u64::MAX)
}

/// Rate as a percentage label, e.g. 910 -> "9.1%"
pub fn rate_label(rate_bp: u64) -> String {
    let whole = rate_bp / 100;
    let fraction = rate_bp % 100;
    match fraction {
        0 => format!("{}%", whole),
        f if f % 10 == 0 => format!("{}.{}%", whole, f / 10),
        f => format!("{}.{:02}%", whole, f),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_for_three_hundred_thousand() {
        let deductions = SalaryService::new().estimate(300_000);

        assert_eq!(deductions.resident_tax, 30_000);
        assert_eq!(deductions.income_tax, 60_000);
        assert_eq!(deductions.pension, 27_300);
        assert_eq!(deductions.health_insurance, 15_000);
        assert_eq!(deductions.nursing_insurance, 4_500);
        assert_eq!(deductions.employment_insurance, 900);
    }

    #[test]
    fn test_estimate_rounds_to_nearest_unit() {
        let deductions = SalaryService::new().estimate(1_234);

        // 1234 * 9.1% = 112.294
        assert_eq!(deductions.pension, 112);
        // 1234 * 0.3% = 3.702
        assert_eq!(deductions.employment_insurance, 4);
        // 1234 * 1.5% = 18.51
        assert_eq!(deductions.nursing_insurance, 19);
    }

    #[test]
    fn test_half_rounds_up() {
        // 10 * 5% = 0.5
        assert_eq!(SalaryService::new().estimate(10).health_insurance, 1);
    }

    #[test]
    fn test_zero_gross() {
        let deductions = SalaryService::new().estimate(0);
        assert_eq!(deductions.total(), 0);
        assert_eq!(deductions.take_home(), 0);
    }

    #[test]
    fn test_custom_rates() {
        let rates = DeductionRates {
            income_tax: 1_500,
            ..DeductionRates::default()
        };
        let deductions = SalaryService::with_rates(rates).estimate(100_000);
        assert_eq!(deductions.income_tax, 15_000);
        assert_eq!(deductions.resident_tax, 10_000);
    }

    #[test]
    fn test_rate_labels() {
        let rates = DeductionRates::default();
        assert_eq!(rate_label(rates.resident_tax), "10%");
        assert_eq!(rate_label(rates.pension), "9.1%");
        assert_eq!(rate_label(rates.nursing_insurance), "1.5%");
        assert_eq!(rate_label(rates.employment_insurance), "0.3%");
        assert_eq!(rate_label(1_025), "10.25%");
    }
}
