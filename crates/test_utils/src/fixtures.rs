//! Pre-built Test Fixtures
//!
//! Ready-to-use quote requests and expected amounts for the documented
//! pricing scenarios. These fixtures are consistent and predictable so
//! tests across crates pin the same numbers.

use pricing_engine::{CoverageOption, QuoteRequest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::builders::QuoteRequestBuilder;

/// Fixtures for quote request test data
pub struct QuoteFixtures;

impl QuoteFixtures {
    /// A 35 year old car driver, no add-ons: 1200 * 1.0 * 0.9 = 1080.00
    pub fn adult_car() -> QuoteRequest {
        QuoteRequestBuilder::new().build()
    }

    /// A 20 year old motorcycle rider: 800 * 1.8 * 1.5 = 2160.00
    pub fn young_motorcyclist() -> QuoteRequest {
        QuoteRequestBuilder::new()
            .with_vehicle_type("motorcycle")
            .with_driver_age(20)
            .build()
    }

    /// A 75 year old truck driver: 1800 * 1.3 * 1.2 = 2808.00, peasant
    pub fn senior_trucker() -> QuoteRequest {
        QuoteRequestBuilder::new()
            .with_vehicle_type("truck")
            .with_driver_age(75)
            .build()
    }

    /// The adult car driver with every coverage add-on selected
    pub fn fully_covered_adult_car() -> QuoteRequest {
        QuoteRequestBuilder::new()
            .with_coverage(CoverageOption::RoadsideAssistance, true)
            .with_coverage(CoverageOption::RentalCar, true)
            .with_coverage(CoverageOption::GlassCoverage, true)
            .build()
    }
}

/// Expected amounts for the fixtures above
pub struct AmountFixtures;

impl AmountFixtures {
    pub fn adult_car_premium() -> Decimal {
        dec!(1080.00)
    }

    pub fn young_motorcyclist_premium() -> Decimal {
        dec!(2160.00)
    }

    pub fn senior_trucker_premium() -> Decimal {
        dec!(2808.00)
    }

    /// Sum of all three coverage add-ons
    pub fn full_coverage_cost() -> Decimal {
        dec!(290)
    }
}
