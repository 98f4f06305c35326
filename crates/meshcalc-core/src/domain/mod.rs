pub mod errors;

pub use errors::{MeshError, MeshErrorCategory, MeshResult};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    ProductType,
    MeshAperture,
    WireDiameter,
    Length,
    LossMargin,
    Width,
    HookAllowance,
    PricePerKg,
    Quantity,
    FinishNote,
}

impl InputField {
    /// Form order.
    pub const ALL: [InputField; 10] = [
        Self::ProductType,
        Self::FinishNote,
        Self::MeshAperture,
        Self::WireDiameter,
        Self::Length,
        Self::LossMargin,
        Self::Width,
        Self::HookAllowance,
        Self::PricePerKg,
        Self::Quantity,
    ];

    pub const REQUIRED_NUMERIC: [InputField; 5] = [
        Self::MeshAperture,
        Self::WireDiameter,
        Self::Length,
        Self::LossMargin,
        Self::Width,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProductType => "product-type",
            Self::MeshAperture => "mesh",
            Self::WireDiameter => "wire",
            Self::Length => "length",
            Self::LossMargin => "loss",
            Self::Width => "width",
            Self::HookAllowance => "hook",
            Self::PricePerKg => "price-per-kg",
            Self::Quantity => "quantity",
            Self::FinishNote => "finish",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ProductType => "Tipo de Produto",
            Self::MeshAperture => "Malha (mm)",
            Self::WireDiameter => "Fio (mm)",
            Self::Length => "Comprimento (mm)",
            Self::LossMargin => "Perda (mm)",
            Self::Width => "Largura (mm)",
            Self::HookAllowance => "Gancho (mm)",
            Self::PricePerKg => "Preço do Kg (R$)",
            Self::Quantity => "Quantidade",
            Self::FinishNote => "Acabamento/Tipo",
        }
    }

    pub const fn is_required(self) -> bool {
        matches!(
            self,
            Self::ProductType
                | Self::MeshAperture
                | Self::WireDiameter
                | Self::Length
                | Self::LossMargin
                | Self::Width
        )
    }

    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::ProductType | Self::FinishNote)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str().eq_ignore_ascii_case(&normalized))
    }
}

impl Display for InputField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Raw form state. Every numeric field holds the text exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenInput {
    pub product_type: String,
    pub mesh_aperture: String,
    pub wire_diameter: String,
    pub length: String,
    pub loss_margin: String,
    pub width: String,
    pub hook_allowance: String,
    pub price_per_kg: String,
    pub quantity: String,
    pub finish_note: String,
}

impl ScreenInput {
    pub fn from_json_str(content: &str) -> MeshResult<Self> {
        serde_json::from_str(content).map_err(|source| {
            MeshError::input_validation(
                "INPUT.JSON",
                format!("failed to parse screen input JSON: {}", source),
            )
        })
    }

    pub fn field(&self, field: InputField) -> &str {
        match field {
            InputField::ProductType => &self.product_type,
            InputField::MeshAperture => &self.mesh_aperture,
            InputField::WireDiameter => &self.wire_diameter,
            InputField::Length => &self.length,
            InputField::LossMargin => &self.loss_margin,
            InputField::Width => &self.width,
            InputField::HookAllowance => &self.hook_allowance,
            InputField::PricePerKg => &self.price_per_kg,
            InputField::Quantity => &self.quantity,
            InputField::FinishNote => &self.finish_note,
        }
    }

    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        let value = value.into();
        match field {
            InputField::ProductType => self.product_type = value,
            InputField::MeshAperture => self.mesh_aperture = value,
            InputField::WireDiameter => self.wire_diameter = value,
            InputField::Length => self.length = value,
            InputField::LossMargin => self.loss_margin = value,
            InputField::Width => self.width = value,
            InputField::HookAllowance => self.hook_allowance = value,
            InputField::PricePerKg => self.price_per_kg = value,
            InputField::Quantity => self.quantity = value,
            InputField::FinishNote => self.finish_note = value,
        }
    }
}

/// One batch of derived quantities. Units: kg/m, kg/m², m², kg, currency/m², currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenResult {
    pub wire_weight_per_meter: f64,
    pub screen_weight_per_square_meter: f64,
    pub total_area_square_meters: f64,
    pub total_weight_kg: f64,
    pub price_per_square_meter: f64,
    pub total_price: f64,
}

impl ScreenResult {
    pub fn is_finite(&self) -> bool {
        [
            self.wire_weight_per_meter,
            self.screen_weight_per_square_meter,
            self.total_area_square_meters,
            self.total_weight_kg,
            self.price_per_square_meter,
            self.total_price,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Malformed numeric text silently becomes 0.
    #[default]
    Lenient,
    /// Malformed numeric text is rejected.
    Strict,
}
