//! Quote validation failure taxonomy
//!
//! Every variant is a caller-input error detected synchronously by the
//! validator; the calculator has no error conditions of its own.

use thiserror::Error;

/// Reasons a quote request can be rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// Vehicle type missing or not a string
    #[error("Vehicle type is required and must be a string")]
    MissingVehicleType,

    /// Driver age missing, non-numeric, or outside the insurable range
    #[error("Driver age is required and must be an integer between 16 and 100")]
    InvalidDriverAge,

    /// Vehicle type not present in the rate table
    #[error("Unsupported vehicle type: {vehicle}. Supported types: {supported}")]
    UnsupportedVehicleType { vehicle: String, supported: String },

    /// Coverage selections were not an object-shaped mapping
    #[error("Coverage selections must be an object, not {found}")]
    InvalidCoverageShape { found: &'static str },

    /// A coverage key not present in the coverage option table
    #[error("Invalid coverage option: {option}. Supported options: {supported}")]
    UnsupportedCoverageOption { option: String, supported: String },

    /// A coverage value that was not a boolean
    #[error("Coverage option {option} must be a boolean value")]
    NonBooleanCoverageValue { option: String },
}

impl ValidationFailure {
    /// Stable machine-readable code for transport-layer error bodies
    pub fn code(&self) -> &'static str {
        match self {
            ValidationFailure::MissingVehicleType => "missing_vehicle_type",
            ValidationFailure::InvalidDriverAge => "invalid_driver_age",
            ValidationFailure::UnsupportedVehicleType { .. } => "unsupported_vehicle_type",
            ValidationFailure::InvalidCoverageShape { .. } => "invalid_coverage_shape",
            ValidationFailure::UnsupportedCoverageOption { .. } => "unsupported_coverage_option",
            ValidationFailure::NonBooleanCoverageValue { .. } => "non_boolean_coverage_value",
        }
    }
}
