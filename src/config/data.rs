//! Business plan configuration structures

use serde::{Deserialize, Serialize};

/// Pricing mode for a rental product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Priced per rental day, with a minimum rental length in days
    Daily,
    /// Priced per month on a fixed 12-rentals-per-year cadence
    Monthly,
}

/// A rental product line in the business plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Display name of the product
    pub name: String,

    /// Number of physical units in inventory
    pub units: u32,

    /// Active pricing mode
    pub pricing_mode: PricingMode,

    /// Price per rental day (daily pricing only)
    #[serde(default)]
    pub price_per_day: Option<f64>,

    /// Price per month (monthly pricing only)
    #[serde(default)]
    pub price_per_month: Option<f64>,

    /// Minimum rental length in days; sets the yearly rental cadence
    /// under daily pricing
    pub min_days: u32,

    /// Direct cost incurred per rental
    pub variable_cost: f64,

    /// Target occupancy (0-1)
    pub occupancy: f64,

    /// Operational ceiling on realized occupancy (0-1)
    pub occupancy_cap: f64,

    /// Shipping charged to the customer per rental
    pub shipping_income: f64,

    /// Shipping cost borne by the business per rental
    pub shipping_cost: f64,
}

impl Product {
    /// Price charged for a single rental under the active pricing mode.
    ///
    /// A missing price field for the active mode yields 0.0 here;
    /// validation rejects such configurations before they reach the
    /// engine, so projections never see it.
    pub fn price_per_rental(&self) -> f64 {
        match self.pricing_mode {
            PricingMode::Daily => self.price_per_day.unwrap_or(0.0) * self.min_days as f64,
            PricingMode::Monthly => self.price_per_month.unwrap_or(0.0),
        }
    }

    /// Per-rental contribution margin: price plus shipping income, net of
    /// direct and shipping costs.
    pub fn contribution_margin(&self) -> f64 {
        self.price_per_rental() + self.shipping_income - self.variable_cost - self.shipping_cost
    }
}

/// A prescriber channel earning commission on a share of revenue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescriber {
    /// Display name of the channel
    pub name: String,

    /// Share of total revenue attributed to this channel (0-1).
    /// Shares across channels are not normalized; a sum above 1 is
    /// tolerated and produces correspondingly larger commission costs.
    pub share: f64,

    /// Commission rate applied to the attributed share (0-1)
    pub commission: f64,
}

/// Complete set of business assumptions for one projection.
///
/// Immutable per computation: every derived figure is a pure function of
/// this structure, recomputed wholesale on each call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    /// Product lines, in display order
    pub products: Vec<Product>,

    /// Prescriber channels
    pub prescribers: Vec<Prescriber>,

    /// Headcount
    pub employees: u32,

    /// Annual salary per employee
    pub salary: f64,

    /// Annual infrastructure cost
    pub infra_cost: f64,

    /// Annual web maintenance cost
    pub web_maint: f64,

    /// Commission rate on total revenue paid to the director (0-1)
    pub director_commission: f64,

    /// Annual marketing budget
    pub marketing_spend: f64,

    /// New customers acquired in the first year
    pub new_customers: f64,

    /// Average rentals per customer per year
    pub rentals_per_customer: f64,

    /// Fraction of the customer base lost each year (0-1)
    pub churn: f64,

    /// Annual growth rate of customer acquisition (0-1)
    pub growth: f64,

    /// Annual cost inflation (0-1)
    pub inflation: f64,

    /// Projection horizon in years
    pub forecast_years: u32,

    /// Annual discount rate for NPV and LTV (0-1)
    pub discount_rate: f64,

    /// Upfront investment; the sign of the entered value is normalized
    /// away when building the cash-flow series
    pub initial_investment: f64,
}

impl Configuration {
    /// Baseline scenario used to initialize new sessions.
    pub fn baseline() -> Self {
        Self {
            products: vec![
                Product {
                    name: "Compact".to_string(),
                    units: 40,
                    pricing_mode: PricingMode::Daily,
                    price_per_day: Some(12.0),
                    price_per_month: None,
                    min_days: 7,
                    variable_cost: 18.0,
                    occupancy: 0.70,
                    occupancy_cap: 0.85,
                    shipping_income: 9.0,
                    shipping_cost: 12.0,
                },
                Product {
                    name: "Premium".to_string(),
                    units: 15,
                    pricing_mode: PricingMode::Monthly,
                    price_per_day: None,
                    price_per_month: Some(149.0),
                    min_days: 30,
                    variable_cost: 35.0,
                    occupancy: 0.75,
                    occupancy_cap: 0.90,
                    shipping_income: 12.0,
                    shipping_cost: 15.0,
                },
            ],
            prescribers: vec![
                Prescriber {
                    name: "Clinics".to_string(),
                    share: 0.25,
                    commission: 0.10,
                },
                Prescriber {
                    name: "Pharmacies".to_string(),
                    share: 0.15,
                    commission: 0.08,
                },
            ],
            employees: 2,
            salary: 28_000.0,
            infra_cost: 9_000.0,
            web_maint: 2_400.0,
            director_commission: 0.05,
            marketing_spend: 18_000.0,
            new_customers: 240.0,
            rentals_per_customer: 2.4,
            churn: 0.25,
            growth: 0.10,
            inflation: 0.02,
            forecast_years: 5,
            discount_rate: 0.08,
            initial_investment: 60_000.0,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::baseline()
    }
}
