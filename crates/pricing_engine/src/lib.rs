//! Vehicle Insurance Pricing Engine
//!
//! Pure quoting core for vehicle insurance: a static rate table, a request
//! validator, and a premium calculator. No I/O, no shared mutable state;
//! the transport layer lives in `interface_api`.
//!
//! # Control flow
//!
//! Callers validate first, then calculate. Validation returns a
//! discriminated result and, on success, a typed [`ValidatedQuote`], which
//! is the only input the calculator accepts:
//!
//! ```rust
//! use pricing_engine::{calculate_premium, validate_quote_request, QuoteRequest, RateTable};
//! use serde_json::json;
//!
//! let rates = RateTable::standard();
//! let request: QuoteRequest =
//!     serde_json::from_value(json!({"vehicleType": "car", "driverAge": 35})).unwrap();
//!
//! let validated = validate_quote_request(&request, &rates).expect("valid request");
//! let result = calculate_premium(&validated, &rates);
//! assert_eq!(result.status, pricing_engine::QuoteStatus::Premium);
//! ```

pub mod error;
pub mod quote;
pub mod rates;
pub mod validation;

pub use error::ValidationFailure;
pub use quote::{calculate_premium, QuoteResult, QuoteStatus};
pub use rates::{AgeCategory, CoverageOption, RateTable, VehicleType};
pub use validation::{
    validate_quote_request, QuoteRequest, ValidatedQuote, MAX_DRIVER_AGE, MIN_DRIVER_AGE,
};
