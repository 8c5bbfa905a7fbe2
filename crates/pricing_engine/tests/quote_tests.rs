//! Premium Calculation Tests
//!
//! Pins the exact premium values for the documented scenarios and checks
//! the adjustment, rounding, coverage, and classification rules end to end
//! through validate-then-calculate, the same path the HTTP layer takes.
//!
//! # Test Organization
//!
//! - `adjustment_tests` - age multiplier and conditional surcharges/discounts
//! - `coverage_tests` - add-on breakdown and totals
//! - `classification_tests` - premium/peasant threshold behavior

use pricing_engine::{
    calculate_premium, validate_quote_request, AgeCategory, QuoteRequest, QuoteResult, QuoteStatus,
    RateTable,
};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

fn priced(body: Value) -> QuoteResult {
    let rates = RateTable::standard();
    let request: QuoteRequest = serde_json::from_value(body).expect("body should deserialize");
    let validated = validate_quote_request(&request, &rates).expect("request should validate");
    calculate_premium(&validated, &rates)
}

mod adjustment_tests {
    use super::*;

    /// 1200 * 1.0 adult multiplier * 0.9 prime-age car discount
    #[test]
    fn test_adult_car_gets_prime_age_discount() {
        let result = priced(json!({"vehicleType": "car", "driverAge": 35}));

        assert_eq!(result.age_category, AgeCategory::Adult);
        assert_eq!(result.base_premium, dec!(1200));
        assert_eq!(result.age_multiplier, dec!(1.0));
        assert_eq!(result.calculated_premium, dec!(1080.00));
        assert_eq!(result.final_premium, dec!(1080.00));
    }

    /// 800 * 1.8 young multiplier * 1.5 young-rider surcharge
    #[test]
    fn test_young_motorcycle_rider_surcharge() {
        let result = priced(json!({"vehicleType": "motorcycle", "driverAge": 20}));

        assert_eq!(result.age_category, AgeCategory::Young);
        assert_eq!(result.final_premium, dec!(2160.00));
        assert_eq!(result.status, QuoteStatus::Premium);
    }

    /// 1800 * 1.3 senior multiplier * 1.2 senior-trucker surcharge
    #[test]
    fn test_senior_truck_driver_surcharge() {
        let result = priced(json!({"vehicleType": "truck", "driverAge": 75}));

        assert_eq!(result.age_category, AgeCategory::Senior);
        assert_eq!(result.final_premium, dec!(2808.00));
    }

    /// The car discount only applies inside 30..=50
    #[test]
    fn test_discount_window_boundaries() {
        assert_eq!(
            priced(json!({"vehicleType": "car", "driverAge": 29})).calculated_premium,
            dec!(1200.00)
        );
        assert_eq!(
            priced(json!({"vehicleType": "car", "driverAge": 30})).calculated_premium,
            dec!(1080.00)
        );
        assert_eq!(
            priced(json!({"vehicleType": "car", "driverAge": 50})).calculated_premium,
            dec!(1080.00)
        );
        assert_eq!(
            priced(json!({"vehicleType": "car", "driverAge": 51})).calculated_premium,
            dec!(1200.00)
        );
    }

    /// Motorcycle surcharge stops at 21; truck surcharge starts above 70
    #[test]
    fn test_surcharge_boundaries() {
        assert_eq!(
            priced(json!({"vehicleType": "motorcycle", "driverAge": 21})).calculated_premium,
            dec!(1440.00)
        );
        assert_eq!(
            priced(json!({"vehicleType": "truck", "driverAge": 70})).calculated_premium,
            dec!(2340.00)
        );
        assert_eq!(
            priced(json!({"vehicleType": "truck", "driverAge": 71})).calculated_premium,
            dec!(2808.00)
        );
    }

    /// Unadjusted vehicles are just base rate times multiplier
    #[test]
    fn test_suv_and_van_have_no_conditional_adjustments() {
        assert_eq!(
            priced(json!({"vehicleType": "suv", "driverAge": 40})).calculated_premium,
            dec!(1500.00)
        );
        assert_eq!(
            priced(json!({"vehicleType": "van", "driverAge": 20})).calculated_premium,
            dec!(2520.00)
        );
    }

    /// Identical input yields a byte-identical serialized result
    #[test]
    fn test_calculation_is_idempotent() {
        let body = json!({
            "vehicleType": "car",
            "driverAge": 35,
            "coverageSelections": {"glassCoverage": true}
        });

        let first = serde_json::to_string(&priced(body.clone())).unwrap();
        let second = serde_json::to_string(&priced(body)).unwrap();
        assert_eq!(first, second);
    }
}

mod coverage_tests {
    use super::*;

    #[test]
    fn test_all_coverages_selected() {
        let result = priced(json!({
            "vehicleType": "car",
            "driverAge": 35,
            "coverageSelections": {
                "roadsideAssistance": true,
                "rentalCar": true,
                "glassCoverage": true
            }
        }));

        assert_eq!(result.total_coverage_cost, dec!(290));
        assert_eq!(result.final_premium, dec!(1370.00));

        let breakdown = serde_json::to_value(&result).unwrap();
        assert_eq!(breakdown["coverageBreakdown"]["roadsideAssistance"].as_f64(), Some(75.0));
        assert_eq!(breakdown["coverageBreakdown"]["rentalCar"].as_f64(), Some(120.0));
        assert_eq!(breakdown["coverageBreakdown"]["glassCoverage"].as_f64(), Some(95.0));
    }

    #[test]
    fn test_false_selection_is_absent_not_zero() {
        let result = priced(json!({
            "vehicleType": "car",
            "driverAge": 35,
            "coverageSelections": {"roadsideAssistance": true, "rentalCar": false}
        }));

        assert_eq!(result.total_coverage_cost, dec!(75));
        assert_eq!(result.final_premium, dec!(1155.00));

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["coverageBreakdown"].get("rentalCar").is_none());
    }

    #[test]
    fn test_no_selections_means_zero_coverage_cost() {
        let result = priced(json!({"vehicleType": "van", "driverAge": 45}));

        assert_eq!(result.total_coverage_cost, dec!(0));
        assert!(result.coverage_breakdown.is_empty());
    }
}

mod classification_tests {
    use super::*;

    #[test]
    fn test_premium_status_and_message() {
        let result = priced(json!({"vehicleType": "car", "driverAge": 40}));

        assert_eq!(result.status, QuoteStatus::Premium);
        assert_eq!(result.message, "Standard premium calculated successfully");
        assert_eq!(result.currency, "USD");
    }

    #[test]
    fn test_peasant_status_and_message() {
        let result = priced(json!({"vehicleType": "truck", "driverAge": 18}));

        // 1800 * 1.8 = 3240, above the 2500 threshold
        assert_eq!(result.final_premium, dec!(3240.00));
        assert_eq!(result.status, QuoteStatus::Peasant);
        assert_eq!(
            result.message,
            "High-risk profile - premium exceeds standard rates"
        );
    }

    /// Coverage add-ons can push an otherwise standard quote over the
    /// threshold
    #[test]
    fn test_coverage_can_tip_the_threshold() {
        // 1800 * 1.3 = 2340, under the threshold on its own
        let without = priced(json!({"vehicleType": "truck", "driverAge": 68}));
        assert_eq!(without.final_premium, dec!(2340.00));
        assert_eq!(without.status, QuoteStatus::Premium);

        let with = priced(json!({
            "vehicleType": "truck",
            "driverAge": 68,
            "coverageSelections": {
                "roadsideAssistance": true,
                "rentalCar": true,
                "glassCoverage": true
            }
        }));
        assert_eq!(with.final_premium, dec!(2630.00));
        assert_eq!(with.status, QuoteStatus::Peasant);
    }
}
