//! Quote request validation
//!
//! The validator owns every dynamic check on an incoming quote request:
//! field presence, JSON types, age range, and the coverage key/value shape.
//! It returns a discriminated result rather than signalling through panics,
//! and on success produces a [`ValidatedQuote`], the only input type the
//! calculator accepts, so unvalidated data cannot reach it.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationFailure;
use crate::rates::{CoverageOption, RateTable, VehicleType};

/// Minimum insurable driver age, inclusive
pub const MIN_DRIVER_AGE: u8 = 16;

/// Maximum insurable driver age, inclusive
pub const MAX_DRIVER_AGE: u8 = 100;

/// An untrusted quote request, as deserialized from a request body
///
/// Fields are raw JSON values so the validator can distinguish "absent"
/// from "present with the wrong type" and report the precise failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub vehicle_type: Option<Value>,
    #[serde(default)]
    pub driver_age: Option<Value>,
    #[serde(default)]
    pub coverage_selections: Option<Value>,
}

/// A quote request that has passed validation
///
/// Construction goes through [`validate_quote_request`]; the calculator
/// assumes these fields hold and does not re-check them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuote {
    pub vehicle_type: VehicleType,
    pub driver_age: u8,
    /// Coverage flags exactly as the caller supplied them; options flagged
    /// `false` are carried through and omitted from the final breakdown
    pub selections: BTreeMap<CoverageOption, bool>,
}

/// Validates a quote request against the rate table
///
/// Checks run in a fixed order and short-circuit on the first failure:
/// vehicle type presence, driver age, vehicle type support, coverage
/// selection shape, coverage keys, coverage values. Absent or null
/// coverage selections are treated as an empty selection.
pub fn validate_quote_request(
    request: &QuoteRequest,
    rates: &RateTable,
) -> Result<ValidatedQuote, ValidationFailure> {
    let vehicle_raw = match request.vehicle_type.as_ref().and_then(Value::as_str) {
        Some(s) => s,
        None => return Err(ValidationFailure::MissingVehicleType),
    };

    let driver_age = parse_driver_age(request.driver_age.as_ref())?;

    let vehicle_type = VehicleType::parse(vehicle_raw).ok_or_else(|| {
        ValidationFailure::UnsupportedVehicleType {
            vehicle: vehicle_raw.to_string(),
            supported: supported_vehicle_list(rates),
        }
    })?;

    let selections = parse_selections(request.coverage_selections.as_ref(), rates)?;

    Ok(ValidatedQuote {
        vehicle_type,
        driver_age,
        selections,
    })
}

/// Accepts a JSON number that is integer-valued and within 16..=100
fn parse_driver_age(raw: Option<&Value>) -> Result<u8, ValidationFailure> {
    let number = raw
        .and_then(Value::as_f64)
        .ok_or(ValidationFailure::InvalidDriverAge)?;

    if number.fract() != 0.0 {
        return Err(ValidationFailure::InvalidDriverAge);
    }

    let age = number as i64;
    if age < i64::from(MIN_DRIVER_AGE) || age > i64::from(MAX_DRIVER_AGE) {
        return Err(ValidationFailure::InvalidDriverAge);
    }

    Ok(age as u8)
}

fn parse_selections(
    raw: Option<&Value>,
    rates: &RateTable,
) -> Result<BTreeMap<CoverageOption, bool>, ValidationFailure> {
    let value = match raw {
        None | Some(Value::Null) => return Ok(BTreeMap::new()),
        Some(value) => value,
    };

    let entries = match value {
        Value::Object(entries) => entries,
        other => {
            return Err(ValidationFailure::InvalidCoverageShape {
                found: json_type_name(other),
            })
        }
    };

    let mut selections = BTreeMap::new();
    for (key, value) in entries {
        let option = CoverageOption::parse(key).ok_or_else(|| {
            ValidationFailure::UnsupportedCoverageOption {
                option: key.clone(),
                supported: supported_coverage_list(rates),
            }
        })?;

        let selected = value
            .as_bool()
            .ok_or_else(|| ValidationFailure::NonBooleanCoverageValue {
                option: key.clone(),
            })?;

        selections.insert(option, selected);
    }

    Ok(selections)
}

fn supported_vehicle_list(rates: &RateTable) -> String {
    rates
        .supported_vehicles()
        .map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn supported_coverage_list(rates: &RateTable) -> String {
    rates
        .supported_coverage_options()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
