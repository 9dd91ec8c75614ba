//! Net present value and internal rate of return
//!
//! Annual cash-flow series, discrete discounting, period 0 = the
//! investment period.

/// Net present value of a cash-flow series at a given annual rate.
pub fn npv(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

/// Derivative of NPV with respect to the rate.
fn npv_derivative(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| -(t as f64) * cf / (1.0 + rate).powi(t as i32 + 1))
        .sum()
}

/// Build the full cash-flow series from yearly cash and the upfront
/// investment. The investment's entered sign is normalized away: it always
/// enters as an outflow at period 0.
pub fn build_cash_flows(cash_by_year: &[f64], initial_investment: f64) -> Vec<f64> {
    let mut flows = Vec::with_capacity(cash_by_year.len() + 1);
    flows.push(-initial_investment.abs());
    flows.extend_from_slice(cash_by_year);
    flows
}

/// Internal rate of return of a cash-flow series, by Newton-Raphson.
///
/// Returns `None` when no real solution exists or the iteration fails to
/// find one: uniform-sign series, divergence below -100%, or no
/// convergence within 100 steps. A `None` is a legitimate business
/// outcome, not an error.
pub fn internal_rate_of_return(cashflows: &[f64]) -> Option<f64> {
    // A sign change is required for a root to exist.
    let has_positive = cashflows.iter().any(|&cf| cf > 0.0);
    let has_negative = cashflows.iter().any(|&cf| cf < 0.0);
    if !has_positive || !has_negative {
        return None;
    }

    let mut rate = 0.10;

    for _ in 0..100 {
        let value = npv(cashflows, rate);
        if value.abs() < 1e-6 {
            return Some(rate);
        }

        let mut derivative = npv_derivative(cashflows, rate);
        if derivative.abs() < 1e-10 {
            derivative = 1e-10;
        }

        rate -= value / derivative;

        // Discount factor hits or crosses zero: no sensible rate down there.
        if rate <= -1.0 {
            return None;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assume, proptest};

    #[test]
    fn test_build_cash_flows_prepends_negated_investment() {
        let flows = build_cash_flows(&[10_000.0, 20_000.0, 30_000.0], 50_000.0);
        assert_eq!(flows, vec![-50_000.0, 10_000.0, 20_000.0, 30_000.0]);
    }

    #[test]
    fn test_build_cash_flows_normalizes_investment_sign() {
        let flows = build_cash_flows(&[10_000.0], -50_000.0);
        assert_eq!(flows[0], -50_000.0);
    }

    #[test]
    fn test_irr_positive_below_one() {
        let irr = internal_rate_of_return(&[-1_000.0, 300.0, 400.0, 500.0]).unwrap();
        assert!(irr > 0.0 && irr < 1.0, "IRR out of (0, 1): {irr}");
    }

    #[test]
    fn test_irr_of_level_annuity() {
        // 100,000 upfront, 30,000/year for 5 years: annuity factor 3.333
        // solves to roughly 15.2%
        let mut flows = vec![-100_000.0];
        flows.extend(std::iter::repeat(30_000.0).take(5));

        let irr = internal_rate_of_return(&flows).unwrap();
        assert!(irr > 0.14 && irr < 0.16, "IRR out of (0.14, 0.16): {irr}");
        assert!(npv(&flows, irr).abs() < 1e-5);
    }

    #[test]
    fn test_irr_undefined_for_all_positive() {
        assert_eq!(internal_rate_of_return(&[1_000.0, 500.0, 600.0]), None);
    }

    #[test]
    fn test_irr_undefined_for_all_negative() {
        assert_eq!(internal_rate_of_return(&[-1_000.0, -500.0]), None);
    }

    #[test]
    fn test_irr_undefined_for_empty_series() {
        assert_eq!(internal_rate_of_return(&[]), None);
    }

    #[test]
    fn test_npv_at_zero_rate_is_plain_sum() {
        let flows = [-100.0, 60.0, 60.0];
        assert!((npv(&flows, 0.0) - 20.0).abs() < 1e-10);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_npv_at_irr_is_zero(
            investment in 100.0_f64..100_000.0,
            inflow in 10.0_f64..50_000.0,
            years in 1_usize..10,
        ) {
            let mut flows = vec![-investment];
            flows.extend(std::iter::repeat(inflow).take(years));

            if let Some(irr) = internal_rate_of_return(&flows) {
                prop_assert!(npv(&flows, irr).abs() < 1e-5);
            }
        }

        #[test]
        fn prop_uniform_sign_has_no_irr(
            values in proptest::collection::vec(0.01_f64..1_000.0, 1..8),
        ) {
            prop_assume!(!values.is_empty());
            let negated: Vec<f64> = values.iter().map(|v| -v).collect();

            prop_assert!(internal_rate_of_return(&values).is_none());
            prop_assert!(internal_rate_of_return(&negated).is_none());
        }
    }
}
