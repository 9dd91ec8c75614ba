//! Per-product revenue model

use crate::config::Product;

/// Revenue for one product in one period.
///
/// Rental and shipping income both scale with the growth factor
/// `(1 + growth)^period`; monotonic in rentals and in price.
pub fn revenue_for_product(
    product: &Product,
    period: usize,
    growth: f64,
    actual_rentals: f64,
) -> f64 {
    let growth_factor = (1.0 + growth).powi(period as i32);

    actual_rentals * product.price_per_rental() * growth_factor
        + actual_rentals * product.shipping_income * growth_factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;

    fn product() -> Product {
        Configuration::baseline().products[0].clone()
    }

    #[test]
    fn test_revenue_scales_with_rentals() {
        let product = product();
        let low = revenue_for_product(&product, 0, 0.10, 100.0);
        let high = revenue_for_product(&product, 0, 0.10, 200.0);

        assert!((high - 2.0 * low).abs() < 1e-9);
    }

    #[test]
    fn test_revenue_monotonic_in_price() {
        let cheap = product();
        let mut dear = product();
        dear.price_per_day = Some(cheap.price_per_day.unwrap() + 5.0);

        assert!(
            revenue_for_product(&dear, 2, 0.10, 150.0)
                > revenue_for_product(&cheap, 2, 0.10, 150.0)
        );
    }

    #[test]
    fn test_growth_factor_compounds_by_period() {
        let product = product();
        let base = revenue_for_product(&product, 0, 0.10, 100.0);
        let later = revenue_for_product(&product, 3, 0.10, 100.0);

        assert!((later - base * 1.10_f64.powi(3)).abs() < 1e-6);
    }

    #[test]
    fn test_shipping_income_included() {
        let mut with_shipping = product();
        with_shipping.shipping_income = 9.0;
        let mut without = product();
        without.shipping_income = 0.0;

        let diff = revenue_for_product(&with_shipping, 0, 0.0, 100.0)
            - revenue_for_product(&without, 0, 0.0, 100.0);
        assert!((diff - 900.0).abs() < 1e-9);
    }
}
