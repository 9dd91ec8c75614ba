//! Configuration validation
//!
//! Every public entry point validates once, up front. A configuration that
//! passes here never produces NaN or infinity inside the engine; undefined
//! metrics are signalled through value-level sentinels instead.

use log::warn;
use thiserror::Error;

use super::data::{Configuration, PricingMode};

/// Rejection reasons for a malformed configuration
#[derive(Debug, Error)]
pub enum InvalidConfiguration {
    #[error("forecast horizon must cover at least one year")]
    EmptyHorizon,

    #[error("at least one product is required")]
    NoProducts,

    #[error("product `{0}` uses daily pricing but has no price_per_day")]
    MissingDailyPrice(String),

    #[error("product `{0}` uses monthly pricing but has no price_per_month")]
    MissingMonthlyPrice(String),

    #[error("product `{0}` must set exactly one price field, matching its pricing mode")]
    AmbiguousPrice(String),

    #[error("product `{0}` uses daily pricing but min_days is zero")]
    ZeroMinDays(String),

    #[error("product `{product}`: {field} must not be negative")]
    NegativeProductField {
        product: String,
        field: &'static str,
    },

    #[error("product `{product}`: {field} must lie within [0, 1]")]
    ProductRateOutOfRange {
        product: String,
        field: &'static str,
    },

    #[error("prescriber `{prescriber}`: {field} must not be negative")]
    NegativePrescriberField {
        prescriber: String,
        field: &'static str,
    },

    #[error("{0} must not be negative")]
    NegativeField(&'static str),

    #[error("churn must lie within [0, 1]")]
    ChurnOutOfRange,

    #[error("monte carlo simulation requires at least one trial")]
    NoTrials,
}

/// Validate a configuration before any projection work.
///
/// Fails fast with a descriptive error rather than deferring to NaN
/// propagation. Prescriber shares summing above 1 pass with a warning;
/// the permissive commission total stands.
pub fn validate(config: &Configuration) -> Result<(), InvalidConfiguration> {
    if config.forecast_years == 0 {
        return Err(InvalidConfiguration::EmptyHorizon);
    }
    if config.products.is_empty() {
        return Err(InvalidConfiguration::NoProducts);
    }

    for product in &config.products {
        match product.pricing_mode {
            PricingMode::Daily => {
                if product.price_per_day.is_none() {
                    return Err(InvalidConfiguration::MissingDailyPrice(product.name.clone()));
                }
                if product.price_per_month.is_some() {
                    return Err(InvalidConfiguration::AmbiguousPrice(product.name.clone()));
                }
                if product.min_days == 0 {
                    return Err(InvalidConfiguration::ZeroMinDays(product.name.clone()));
                }
            }
            PricingMode::Monthly => {
                if product.price_per_month.is_none() {
                    return Err(InvalidConfiguration::MissingMonthlyPrice(
                        product.name.clone(),
                    ));
                }
                if product.price_per_day.is_some() {
                    return Err(InvalidConfiguration::AmbiguousPrice(product.name.clone()));
                }
            }
        }

        let non_negative: [(&'static str, f64); 4] = [
            ("price", product.price_per_rental()),
            ("variable_cost", product.variable_cost),
            ("shipping_income", product.shipping_income),
            ("shipping_cost", product.shipping_cost),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(InvalidConfiguration::NegativeProductField {
                    product: product.name.clone(),
                    field,
                });
            }
        }

        let unit_rates: [(&'static str, f64); 2] = [
            ("occupancy", product.occupancy),
            ("occupancy_cap", product.occupancy_cap),
        ];
        for (field, value) in unit_rates {
            if !(0.0..=1.0).contains(&value) {
                return Err(InvalidConfiguration::ProductRateOutOfRange {
                    product: product.name.clone(),
                    field,
                });
            }
        }
    }

    for prescriber in &config.prescribers {
        if prescriber.share < 0.0 {
            return Err(InvalidConfiguration::NegativePrescriberField {
                prescriber: prescriber.name.clone(),
                field: "share",
            });
        }
        if prescriber.commission < 0.0 {
            return Err(InvalidConfiguration::NegativePrescriberField {
                prescriber: prescriber.name.clone(),
                field: "commission",
            });
        }
    }

    let non_negative_scalars: [(&'static str, f64); 9] = [
        ("salary", config.salary),
        ("infra_cost", config.infra_cost),
        ("web_maint", config.web_maint),
        ("director_commission", config.director_commission),
        ("marketing_spend", config.marketing_spend),
        ("new_customers", config.new_customers),
        ("rentals_per_customer", config.rentals_per_customer),
        ("discount_rate", config.discount_rate),
        ("initial_investment", config.initial_investment),
    ];
    for (field, value) in non_negative_scalars {
        if value < 0.0 {
            return Err(InvalidConfiguration::NegativeField(field));
        }
    }

    if !(0.0..=1.0).contains(&config.churn) {
        return Err(InvalidConfiguration::ChurnOutOfRange);
    }

    let share_sum: f64 = config.prescribers.iter().map(|p| p.share).sum();
    if share_sum > 1.0 {
        warn!(
            "prescriber shares sum to {share_sum:.2}; commissions will exceed \
             the single-attribution total"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::data::Configuration;

    #[test]
    fn test_baseline_is_valid() {
        assert!(validate(&Configuration::baseline()).is_ok());
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let mut config = Configuration::baseline();
        config.forecast_years = 0;

        assert!(matches!(
            validate(&config),
            Err(InvalidConfiguration::EmptyHorizon)
        ));
    }

    #[test]
    fn test_missing_price_for_active_mode_rejected() {
        let mut config = Configuration::baseline();
        config.products[0].price_per_day = None;

        assert!(matches!(
            validate(&config),
            Err(InvalidConfiguration::MissingDailyPrice(_))
        ));
    }

    #[test]
    fn test_both_prices_rejected() {
        let mut config = Configuration::baseline();
        config.products[0].price_per_month = Some(300.0);

        assert!(matches!(
            validate(&config),
            Err(InvalidConfiguration::AmbiguousPrice(_))
        ));
    }

    #[test]
    fn test_zero_min_days_rejected_for_daily_pricing() {
        let mut config = Configuration::baseline();
        config.products[0].min_days = 0;

        assert!(matches!(
            validate(&config),
            Err(InvalidConfiguration::ZeroMinDays(_))
        ));
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut config = Configuration::baseline();
        config.products[0].variable_cost = -1.0;

        assert!(matches!(
            validate(&config),
            Err(InvalidConfiguration::NegativeProductField { .. })
        ));
    }

    #[test]
    fn test_occupancy_cap_above_one_rejected() {
        let mut config = Configuration::baseline();
        config.products[0].occupancy_cap = 1.2;

        assert!(matches!(
            validate(&config),
            Err(InvalidConfiguration::ProductRateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_prescriber_shares_above_one_tolerated() {
        let mut config = Configuration::baseline();
        config.prescribers[0].share = 0.9;
        config.prescribers[1].share = 0.8;

        // Shares summing to 1.7 only warn; the permissive total stands.
        assert!(validate(&config).is_ok());
    }
}
