use meshcalc_core::domain::{InputField, ScreenInput, ScreenResult};
use meshcalc_core::engine::{compute, missing_required_fields, validate};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/engine_cases.json")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EngineFixtures {
    calculation_cases: Vec<CalculationCase>,
    validation_cases: Vec<ValidationCase>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalculationCase {
    id: String,
    input: ScreenInput,
    expected: ScreenResult,
    abs_tol: f64,
    rel_tol: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidationCase {
    id: String,
    input: ScreenInput,
    valid: bool,
    invalid_fields: Vec<String>,
}

fn load_fixtures() -> EngineFixtures {
    let path = fixture_path();
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|error| panic!("failed to read '{}': {}", path.display(), error));
    serde_json::from_str(&content)
        .unwrap_or_else(|error| panic!("failed to parse '{}': {}", path.display(), error))
}

fn assert_within_tolerance(
    case_id: &str,
    quantity: &str,
    actual: f64,
    expected: f64,
    abs_tol: f64,
    rel_tol: f64,
) {
    let diff = (actual - expected).abs();
    let allowed = abs_tol.max(rel_tol * expected.abs());
    assert!(
        diff <= allowed,
        "{case_id} {quantity}: expected {expected}, got {actual} (diff {diff}, allowed {allowed})"
    );
}

#[test]
fn calculation_cases_match_reference_values() {
    let fixtures = load_fixtures();
    assert!(!fixtures.calculation_cases.is_empty());

    for case in &fixtures.calculation_cases {
        assert!(validate(&case.input), "{} should validate", case.id);
        let actual = compute(&case.input);
        let expected = case.expected;

        for (quantity, actual, expected) in [
            ("wireWeightPerMeter", actual.wire_weight_per_meter, expected.wire_weight_per_meter),
            (
                "screenWeightPerSquareMeter",
                actual.screen_weight_per_square_meter,
                expected.screen_weight_per_square_meter,
            ),
            (
                "totalAreaSquareMeters",
                actual.total_area_square_meters,
                expected.total_area_square_meters,
            ),
            ("totalWeightKg", actual.total_weight_kg, expected.total_weight_kg),
            (
                "pricePerSquareMeter",
                actual.price_per_square_meter,
                expected.price_per_square_meter,
            ),
            ("totalPrice", actual.total_price, expected.total_price),
        ] {
            assert_within_tolerance(
                &case.id,
                quantity,
                actual,
                expected,
                case.abs_tol,
                case.rel_tol,
            );
        }
    }
}

#[test]
fn validated_results_are_finite_and_non_negative() {
    let fixtures = load_fixtures();
    for case in &fixtures.calculation_cases {
        let result = compute(&case.input);
        for value in [
            result.wire_weight_per_meter,
            result.screen_weight_per_square_meter,
            result.total_area_square_meters,
            result.total_weight_kg,
            result.price_per_square_meter,
            result.total_price,
        ] {
            assert!(value.is_finite() && value >= 0.0, "{}: {}", case.id, value);
        }
    }
}

#[test]
fn validation_cases_report_expected_fields() {
    let fixtures = load_fixtures();
    for case in &fixtures.validation_cases {
        assert_eq!(validate(&case.input), case.valid, "{}", case.id);

        let expected = case
            .invalid_fields
            .iter()
            .map(|name| {
                InputField::from_name(name)
                    .unwrap_or_else(|| panic!("{}: unknown field '{}'", case.id, name))
            })
            .collect::<Vec<_>>();
        assert_eq!(missing_required_fields(&case.input), expected, "{}", case.id);
    }
}
