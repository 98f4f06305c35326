//! Screen weight and price calculation.
//!
//! `validate` and `compute` are deliberately separate: `compute` trusts its
//! caller and runs the formulas on whatever the fields normalize to.

pub mod normalize;

pub use normalize::{normalize, parse_decimal};

use crate::common::constants::{K_MASS, K1, K2, K3};
use crate::domain::{InputField, MeshError, MeshResult, ParseMode, ScreenInput, ScreenResult};
use serde::Serialize;
use tracing::debug;

/// Numeric snapshot of a [`ScreenInput`]; `quantity` is already the effective quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenDimensions {
    pub mesh_aperture: f64,
    pub wire_diameter: f64,
    pub length: f64,
    pub loss_margin: f64,
    pub width: f64,
    pub hook_allowance: f64,
    pub price_per_kg: f64,
    pub quantity: f64,
}

impl ScreenDimensions {
    pub fn from_input(input: &ScreenInput) -> Self {
        Self {
            mesh_aperture: normalize(&input.mesh_aperture),
            wire_diameter: normalize(&input.wire_diameter),
            length: normalize(&input.length),
            loss_margin: normalize(&input.loss_margin),
            width: normalize(&input.width),
            hook_allowance: normalize(&input.hook_allowance),
            price_per_kg: normalize(&input.price_per_kg),
            quantity: effective_quantity(&input.quantity),
        }
    }
}

/// Never below 1: blank, zero, negative and garbage all count as one unit.
pub fn effective_quantity(raw: &str) -> f64 {
    normalize(raw).max(1.0)
}

pub fn validate(input: &ScreenInput) -> bool {
    missing_required_fields(input).is_empty()
}

/// Required fields that are blank or do not normalize to a finite positive number, in form order.
pub fn missing_required_fields(input: &ScreenInput) -> Vec<InputField> {
    InputField::ALL
        .iter()
        .copied()
        .filter(|field| field.is_required())
        .filter(|field| match field {
            InputField::ProductType => input.product_type.trim().is_empty(),
            numeric => {
                let value = normalize(input.field(*numeric));
                !(value.is_finite() && value > 0.0)
            }
        })
        .collect()
}

pub fn require_valid(input: &ScreenInput) -> MeshResult<()> {
    let missing = missing_required_fields(input);
    if missing.is_empty() {
        return Ok(());
    }

    let names = missing
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Err(MeshError::input_validation(
        "INPUT.REQUIRED_FIELDS",
        format!(
            "select a product type and fill mesh, wire, length, loss and width with values greater than zero (invalid: {})",
            names
        ),
    ))
}

/// Rejects malformed text in any numeric field, then applies [`require_valid`].
pub fn validate_strict(input: &ScreenInput) -> MeshResult<()> {
    for field in InputField::ALL
        .iter()
        .copied()
        .filter(|field| field.is_numeric())
    {
        parse_decimal(input.field(field)).map_err(|error| {
            MeshError::input_validation(
                error.placeholder(),
                format!("field '{}': {}", field, error.message()),
            )
        })?;
    }
    require_valid(input)
}

pub fn validate_with_mode(input: &ScreenInput, mode: ParseMode) -> MeshResult<()> {
    match mode {
        ParseMode::Lenient => require_valid(input),
        ParseMode::Strict => validate_strict(input),
    }
}

/// Runs the formulas without validating. Callers check [`validate`] first.
pub fn compute(input: &ScreenInput) -> ScreenResult {
    compute_dimensions(&ScreenDimensions::from_input(input))
}

pub fn compute_dimensions(dimensions: &ScreenDimensions) -> ScreenResult {
    let wire = dimensions.wire_diameter;

    let wire_weight_per_meter = ((wire * wire) * K_MASS) / K3;
    let screen_weight_per_square_meter =
        (K3 / (wire + dimensions.mesh_aperture)) * K2 * K1 * wire_weight_per_meter;

    let area = ((dimensions.width + dimensions.hook_allowance) / K3)
        * ((dimensions.length + dimensions.loss_margin) / K3);
    let total_area_square_meters = if area < 0.0 { 0.0 } else { area };

    let total_weight_kg =
        screen_weight_per_square_meter * total_area_square_meters * dimensions.quantity;
    let price_per_square_meter = screen_weight_per_square_meter * dimensions.price_per_kg;
    let total_price = total_weight_kg * dimensions.price_per_kg;

    ScreenResult {
        wire_weight_per_meter,
        screen_weight_per_square_meter,
        total_area_square_meters,
        total_weight_kg,
        price_per_square_meter,
        total_price,
    }
}

/// Validates under `mode` and computes.
///
/// Huge but finite dimensions can still overflow; such results are rejected
/// with `RUN.NON_FINITE` instead of being returned.
pub fn calculate(input: &ScreenInput, mode: ParseMode) -> MeshResult<ScreenResult> {
    validate_with_mode(input, mode)?;
    let result = compute(input);
    if !result.is_finite() {
        return Err(MeshError::computation(
            "RUN.NON_FINITE",
            "the inputs are too large to produce a finite weight or price",
        ));
    }
    debug!(
        product = %input.product_type,
        total_weight_kg = result.total_weight_kg,
        total_price = result.total_price,
        "screen calculation completed"
    );
    Ok(result)
}
