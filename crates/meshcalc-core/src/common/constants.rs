//! Fixed coefficients of the screen weight model.
//!
//! The form shows these values read-only; they are not user-overridable.

use serde::Serialize;

/// Mass factor applied to the squared wire diameter (kg/m per mm², scaled by `K3`).
pub const K_MASS: f64 = 6.165;
pub const K1: f64 = 1.1;
pub const K2: f64 = 2.0;
/// Millimetre to metre conversion factor.
pub const K3: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationConstants {
    pub mass_factor: f64,
    pub k1: f64,
    pub k2: f64,
    pub k3: f64,
}

impl Default for CalculationConstants {
    fn default() -> Self {
        Self {
            mass_factor: K_MASS,
            k1: K1,
            k2: K2,
            k3: K3,
        }
    }
}

impl CalculationConstants {
    /// Label/value rows in display order.
    pub fn rows(&self) -> [(&'static str, f64); 4] {
        [
            ("Massa do material (g/cm³)", self.mass_factor),
            ("Constante 1", self.k1),
            ("Constante 2", self.k2),
            ("Constante 3", self.k3),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{CalculationConstants, K_MASS, K1, K2, K3};

    #[test]
    fn default_constants_match_model_values() {
        let constants = CalculationConstants::default();
        assert_eq!(constants.mass_factor, 6.165);
        assert_eq!(constants.k1, 1.1);
        assert_eq!(constants.k2, 2.0);
        assert_eq!(constants.k3, 1000.0);
    }

    #[test]
    fn constants_remain_finite_and_positive() {
        for value in [K_MASS, K1, K2, K3] {
            assert!(value.is_finite());
            assert!(value > 0.0);
        }
    }

    #[test]
    fn display_rows_follow_form_order() {
        let rows = CalculationConstants::default().rows();
        assert_eq!(rows[0].0, "Massa do material (g/cm³)");
        assert_eq!(rows[3], ("Constante 3", 1000.0));
    }
}
