//! Premium calculation
//!
//! The calculator is a pure function over a [`ValidatedQuote`] and the
//! [`RateTable`]: base rate times age multiplier, a fixed sequence of
//! conditional risk adjustments, half-away-from-zero rounding to cents,
//! then flat add-on costs for the selected coverages.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::rates::{AgeCategory, CoverageOption, RateTable, VehicleType};
use crate::validation::ValidatedQuote;

/// Final premiums above this amount are classified [`QuoteStatus::Peasant`]
const PEASANT_THRESHOLD: Decimal = dec!(2500);

/// Coarse affordability classification of a final premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    /// Within standard rates
    Premium,
    /// Exceeds standard rates
    Peasant,
}

impl QuoteStatus {
    /// Classifies a final premium against the fixed threshold
    pub fn from_final_premium(final_premium: Decimal) -> Self {
        if final_premium > PEASANT_THRESHOLD {
            QuoteStatus::Peasant
        } else {
            QuoteStatus::Premium
        }
    }

    /// Fixed response message for this status
    pub fn message(&self) -> &'static str {
        match self {
            QuoteStatus::Premium => "Standard premium calculated successfully",
            QuoteStatus::Peasant => "High-risk profile - premium exceeds standard rates",
        }
    }
}

/// A fully priced quote
///
/// Produced fresh per call; no state is shared between calculations.
/// Monetary fields serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub vehicle_type: VehicleType,
    pub driver_age: u8,
    pub age_category: AgeCategory,
    /// Base rate for the vehicle type, before any multiplier
    #[serde(with = "rust_decimal::serde::float")]
    pub base_premium: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub age_multiplier: Decimal,
    /// Premium after multiplier and risk adjustments, rounded to cents
    #[serde(with = "rust_decimal::serde::float")]
    pub calculated_premium: Decimal,
    /// Cost per selected coverage; unselected options are absent
    #[serde(serialize_with = "serialize_breakdown")]
    pub coverage_breakdown: BTreeMap<CoverageOption, Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_coverage_cost: Decimal,
    /// Calculated premium plus total coverage cost
    #[serde(with = "rust_decimal::serde::float")]
    pub final_premium: Decimal,
    pub currency: &'static str,
    pub status: QuoteStatus,
    pub message: &'static str,
}

/// Calculates a premium quote from validated input
///
/// Deterministic and total: identical inputs produce an identical result
/// and there is no error path. Validation must already have happened; see
/// [`crate::validation::validate_quote_request`].
pub fn calculate_premium(quote: &ValidatedQuote, rates: &RateTable) -> QuoteResult {
    let base_rate = rates.base_rate(quote.vehicle_type);
    let age_category = AgeCategory::from_age(quote.driver_age);
    let age_multiplier = rates.age_multiplier(age_category);

    let mut premium = base_rate * age_multiplier;

    // Conditional risk adjustments, applied in fixed order; the conditions
    // are independent and stack when several hold at once
    if quote.vehicle_type == VehicleType::Motorcycle && quote.driver_age < 21 {
        premium *= dec!(1.5);
    }
    if quote.vehicle_type == VehicleType::Truck && quote.driver_age > 70 {
        premium *= dec!(1.2);
    }
    if quote.vehicle_type == VehicleType::Car && (30..=50).contains(&quote.driver_age) {
        premium *= dec!(0.9);
    }

    let calculated_premium =
        premium.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    // Coverage costs are whole-number constants; no further rounding needed
    let mut coverage_breakdown = BTreeMap::new();
    let mut total_coverage_cost = Decimal::ZERO;
    for (option, selected) in &quote.selections {
        if *selected {
            let cost = rates.coverage_cost(*option);
            coverage_breakdown.insert(*option, cost);
            total_coverage_cost += cost;
        }
    }

    let final_premium = calculated_premium + total_coverage_cost;
    let status = QuoteStatus::from_final_premium(final_premium);

    tracing::debug!(
        vehicle = %quote.vehicle_type,
        age = quote.driver_age,
        %final_premium,
        ?status,
        "premium calculated"
    );

    QuoteResult {
        vehicle_type: quote.vehicle_type,
        driver_age: quote.driver_age,
        age_category,
        base_premium: base_rate,
        age_multiplier,
        calculated_premium,
        coverage_breakdown,
        total_coverage_cost,
        final_premium,
        currency: "USD",
        status,
        message: status.message(),
    }
}

/// Serializes breakdown costs as JSON numbers, matching the other
/// monetary fields
fn serialize_breakdown<S>(
    breakdown: &BTreeMap<CoverageOption, Decimal>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    struct FloatAmount<'a>(&'a Decimal);

    impl Serialize for FloatAmount<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            rust_decimal::serde::float::serialize(self.0, serializer)
        }
    }

    let mut map = serializer.serialize_map(Some(breakdown.len()))?;
    for (option, cost) in breakdown {
        map.serialize_entry(option, &FloatAmount(cost))?;
    }
    map.end()
}
