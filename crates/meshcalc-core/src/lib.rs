//! Mesh screen weight and price calculator.
//!
//! [`engine`] holds the pure formulas; [`session`] and [`report`] are the
//! form state, share and export layers built on top of it.

pub mod common;
pub mod domain;
pub mod engine;
pub mod report;
pub mod session;

pub use domain::{
    InputField, MeshError, MeshErrorCategory, MeshResult, ParseMode, ScreenInput, ScreenResult,
};
pub use engine::{calculate, compute, normalize, validate};
pub use session::{Calculation, CalculatorSession};
