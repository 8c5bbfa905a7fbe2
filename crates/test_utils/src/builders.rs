//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use pricing_engine::{CoverageOption, QuoteRequest};
use serde_json::{json, Map, Value};

/// Builder for constructing quote request bodies
///
/// Defaults to a valid request (a 35 year old car driver with no add-ons);
/// the `raw` setters inject arbitrary JSON for negative tests.
pub struct QuoteRequestBuilder {
    vehicle_type: Option<Value>,
    driver_age: Option<Value>,
    coverage_selections: Option<Value>,
}

impl Default for QuoteRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRequestBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            vehicle_type: Some(json!("car")),
            driver_age: Some(json!(35)),
            coverage_selections: None,
        }
    }

    /// Sets the vehicle type
    pub fn with_vehicle_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = Some(json!(vehicle_type.into()));
        self
    }

    /// Sets the vehicle type to an arbitrary JSON value
    pub fn with_raw_vehicle_type(mut self, value: Value) -> Self {
        self.vehicle_type = Some(value);
        self
    }

    /// Removes the vehicle type
    pub fn without_vehicle_type(mut self) -> Self {
        self.vehicle_type = None;
        self
    }

    /// Sets the driver age
    pub fn with_driver_age(mut self, age: u8) -> Self {
        self.driver_age = Some(json!(age));
        self
    }

    /// Sets the driver age to an arbitrary JSON value
    pub fn with_raw_driver_age(mut self, value: Value) -> Self {
        self.driver_age = Some(value);
        self
    }

    /// Removes the driver age
    pub fn without_driver_age(mut self) -> Self {
        self.driver_age = None;
        self
    }

    /// Flags a coverage option
    pub fn with_coverage(self, option: CoverageOption, selected: bool) -> Self {
        self.with_raw_coverage(option.as_str(), json!(selected))
    }

    /// Adds an arbitrary key/value pair to the coverage selections
    pub fn with_raw_coverage(mut self, key: impl Into<String>, value: Value) -> Self {
        let mut entries = match self.coverage_selections.take() {
            Some(Value::Object(entries)) => entries,
            _ => Map::new(),
        };
        entries.insert(key.into(), value);
        self.coverage_selections = Some(Value::Object(entries));
        self
    }

    /// Replaces the whole coverage selections value, valid or not
    pub fn with_raw_selections(mut self, value: Value) -> Self {
        self.coverage_selections = Some(value);
        self
    }

    /// Builds the typed request the validator consumes
    pub fn build(self) -> QuoteRequest {
        QuoteRequest {
            vehicle_type: self.vehicle_type,
            driver_age: self.driver_age,
            coverage_selections: self.coverage_selections,
        }
    }

    /// Builds the request as a raw JSON body for HTTP tests
    pub fn build_json(self) -> Value {
        let mut body = Map::new();
        if let Some(vehicle_type) = self.vehicle_type {
            body.insert("vehicleType".to_string(), vehicle_type);
        }
        if let Some(driver_age) = self.driver_age {
            body.insert("driverAge".to_string(), driver_age);
        }
        if let Some(selections) = self.coverage_selections {
            body.insert("coverageSelections".to_string(), selections);
        }
        Value::Object(body)
    }
}
