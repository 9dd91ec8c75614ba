//! Customer base growth model

/// Customer counts per projection year.
///
/// The base retains `(1 - churn)` of last year's customers and acquires a
/// new cohort that grows by `(1 + growth)` each year:
/// `c[0] = new_customers`, `c[t] = c[t-1]*(1-churn) + new_customers*(1+growth)^t`.
pub fn customers_per_year(
    new_customers: f64,
    churn: f64,
    growth: f64,
    forecast_years: u32,
) -> Vec<f64> {
    let mut customers = Vec::with_capacity(forecast_years as usize);

    for t in 0..forecast_years {
        if t == 0 {
            customers.push(new_customers);
        } else {
            let retained = customers[t as usize - 1] * (1.0 - churn);
            let acquired = new_customers * (1.0 + growth).powi(t as i32);
            customers.push(retained + acquired);
        }
    }

    customers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_year_equals_new_customers() {
        let series = customers_per_year(240.0, 0.25, 0.10, 5);
        assert_eq!(series.len(), 5);
        assert!((series[0] - 240.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_churn_no_growth_accumulates_linearly() {
        let series = customers_per_year(100.0, 0.0, 0.0, 6);

        for (t, &customers) in series.iter().enumerate() {
            assert!((customers - 100.0 * (t as f64 + 1.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_full_churn_leaves_only_new_cohorts() {
        // churn = 1 retains nothing: each year is its standalone cohort
        let series = customers_per_year(100.0, 1.0, 0.10, 4);

        for (t, &customers) in series.iter().enumerate() {
            let cohort = 100.0 * 1.10_f64.powi(t as i32);
            assert!((customers - cohort).abs() < 1e-9);
        }
    }

    #[test]
    fn test_churn_shrinks_the_base() {
        let low_churn = customers_per_year(100.0, 0.1, 0.05, 8);
        let high_churn = customers_per_year(100.0, 0.5, 0.05, 8);

        assert!(low_churn[7] > high_churn[7]);
    }
}
