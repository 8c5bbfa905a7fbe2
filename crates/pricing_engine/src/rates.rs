//! Rate tables for vehicle insurance quoting
//!
//! This module is the single source of truth for base rates, age-bracket
//! multipliers, and coverage add-on prices. Both the validator and the
//! calculator read from [`RateTable`]; changing a rate means editing
//! [`RateTable::standard`] and nothing else.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Vehicle types the engine can quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Truck,
    Motorcycle,
    Suv,
    Van,
}

impl VehicleType {
    /// All supported vehicle types, in rate-table order
    pub const ALL: [VehicleType; 5] = [
        VehicleType::Car,
        VehicleType::Truck,
        VehicleType::Motorcycle,
        VehicleType::Suv,
        VehicleType::Van,
    ];

    /// Returns the canonical lowercase key
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Truck => "truck",
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Suv => "suv",
            VehicleType::Van => "van",
        }
    }

    /// Parses a vehicle type key, case-insensitively
    ///
    /// Returns `None` when the normalized input is not a supported type.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.to_lowercase();
        Self::ALL.iter().copied().find(|v| v.as_str() == normalized)
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Risk bracket derived from driver age
///
/// Never stored independently; always recomputed from the age via
/// [`AgeCategory::from_age`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeCategory {
    /// Ages 16-25
    Young,
    /// Ages 26-65
    Adult,
    /// Ages 66 and up
    Senior,
}

impl AgeCategory {
    /// All age categories
    pub const ALL: [AgeCategory; 3] = [AgeCategory::Young, AgeCategory::Adult, AgeCategory::Senior];

    /// Derives the risk bracket from a driver age
    pub fn from_age(age: u8) -> Self {
        match age {
            16..=25 => AgeCategory::Young,
            26..=65 => AgeCategory::Adult,
            _ => AgeCategory::Senior,
        }
    }

    /// Returns the canonical lowercase key
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeCategory::Young => "young",
            AgeCategory::Adult => "adult",
            AgeCategory::Senior => "senior",
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional add-on coverages with a fixed flat cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoverageOption {
    RoadsideAssistance,
    RentalCar,
    GlassCoverage,
}

impl CoverageOption {
    /// All supported coverage options, in rate-table order
    pub const ALL: [CoverageOption; 3] = [
        CoverageOption::RoadsideAssistance,
        CoverageOption::RentalCar,
        CoverageOption::GlassCoverage,
    ];

    /// Returns the canonical camelCase key
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageOption::RoadsideAssistance => "roadsideAssistance",
            CoverageOption::RentalCar => "rentalCar",
            CoverageOption::GlassCoverage => "glassCoverage",
        }
    }

    /// Parses a coverage option key (exact match)
    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == input)
    }
}

impl fmt::Display for CoverageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable rate table for premium quoting
///
/// Constructed once at process start and passed by shared reference into
/// the validator and calculator. There is no mutation API; every lookup is
/// total because [`RateTable::standard`] populates every enum variant.
#[derive(Debug, Clone)]
pub struct RateTable {
    base_rates: BTreeMap<VehicleType, Decimal>,
    age_multipliers: BTreeMap<AgeCategory, Decimal>,
    coverage_costs: BTreeMap<CoverageOption, Decimal>,
}

impl RateTable {
    /// Builds the standard USD rate table
    pub fn standard() -> Self {
        let base_rates = BTreeMap::from([
            (VehicleType::Car, dec!(1200)),
            (VehicleType::Truck, dec!(1800)),
            (VehicleType::Motorcycle, dec!(800)),
            (VehicleType::Suv, dec!(1500)),
            (VehicleType::Van, dec!(1400)),
        ]);

        let age_multipliers = BTreeMap::from([
            (AgeCategory::Young, dec!(1.8)),
            (AgeCategory::Adult, dec!(1.0)),
            (AgeCategory::Senior, dec!(1.3)),
        ]);

        let coverage_costs = BTreeMap::from([
            (CoverageOption::RoadsideAssistance, dec!(75)),
            (CoverageOption::RentalCar, dec!(120)),
            (CoverageOption::GlassCoverage, dec!(95)),
        ]);

        Self {
            base_rates,
            age_multipliers,
            coverage_costs,
        }
    }

    /// Base annual premium for a vehicle type, before any multiplier
    pub fn base_rate(&self, vehicle: VehicleType) -> Decimal {
        self.base_rates[&vehicle]
    }

    /// Scaling factor for an age category
    pub fn age_multiplier(&self, category: AgeCategory) -> Decimal {
        self.age_multipliers[&category]
    }

    /// Flat cost of a coverage add-on
    pub fn coverage_cost(&self, option: CoverageOption) -> Decimal {
        self.coverage_costs[&option]
    }

    /// Vehicle types present in the table
    pub fn supported_vehicles(&self) -> impl Iterator<Item = VehicleType> + '_ {
        self.base_rates.keys().copied()
    }

    /// Coverage options present in the table
    pub fn supported_coverage_options(&self) -> impl Iterator<Item = CoverageOption> + '_ {
        self.coverage_costs.keys().copied()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_brackets() {
        assert_eq!(AgeCategory::from_age(16), AgeCategory::Young);
        assert_eq!(AgeCategory::from_age(25), AgeCategory::Young);
        assert_eq!(AgeCategory::from_age(26), AgeCategory::Adult);
        assert_eq!(AgeCategory::from_age(65), AgeCategory::Adult);
        assert_eq!(AgeCategory::from_age(66), AgeCategory::Senior);
        assert_eq!(AgeCategory::from_age(100), AgeCategory::Senior);
    }

    #[test]
    fn test_vehicle_parse_is_case_insensitive() {
        assert_eq!(VehicleType::parse("CAR"), Some(VehicleType::Car));
        assert_eq!(VehicleType::parse("Truck"), Some(VehicleType::Truck));
        assert_eq!(VehicleType::parse("spaceship"), None);
    }

    #[test]
    fn test_coverage_parse_is_exact() {
        assert_eq!(
            CoverageOption::parse("roadsideAssistance"),
            Some(CoverageOption::RoadsideAssistance)
        );
        assert_eq!(CoverageOption::parse("roadsideassistance"), None);
    }

    #[test]
    fn test_standard_table_values() {
        let rates = RateTable::standard();

        assert_eq!(rates.base_rate(VehicleType::Car), dec!(1200));
        assert_eq!(rates.base_rate(VehicleType::Motorcycle), dec!(800));
        assert_eq!(rates.age_multiplier(AgeCategory::Young), dec!(1.8));
        assert_eq!(rates.age_multiplier(AgeCategory::Adult), dec!(1.0));
        assert_eq!(rates.coverage_cost(CoverageOption::RentalCar), dec!(120));
    }

    #[test]
    fn test_table_covers_every_key() {
        let rates = RateTable::standard();

        assert_eq!(rates.supported_vehicles().count(), VehicleType::ALL.len());
        assert_eq!(
            rates.supported_coverage_options().count(),
            CoverageOption::ALL.len()
        );
    }
}
