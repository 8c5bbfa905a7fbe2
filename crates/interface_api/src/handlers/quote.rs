//! Quote handlers

use axum::{extract::State, Json};

use pricing_engine::{calculate_premium, validate_quote_request, QuoteRequest, QuoteResult};

use crate::{error::ApiError, AppState};

/// Creates a premium quote
///
/// Validates the request body against the rate table; a validation failure
/// becomes a 400 response carrying the failure's message, otherwise the
/// calculated quote is returned as-is.
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResult>, ApiError> {
    let validated = validate_quote_request(&request, &state.rates)?;
    let result = calculate_premium(&validated, &state.rates);

    tracing::info!(
        vehicle = %result.vehicle_type,
        age = result.driver_age,
        final_premium = %result.final_premium,
        "quote issued"
    );

    Ok(Json(result))
}
