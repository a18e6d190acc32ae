//! This module defines the regression model interface and the shipped tree-ensemble
//! implementation.
//!
//! The pipeline consumes models purely as black-box functions from feature matrices to
//! prediction vectors. The `Regressor` trait captures that contract; `GbdtEnsemble` is the
//! concrete implementation that evaluates pretrained gradient-boosted decision trees loaded
//! from JSON artifacts. Training and other serialization formats are out of scope.

mod gbdt;

pub use gbdt::GbdtEnsemble;

use crate::error::QboostError;
use ndarray::ArrayView2;

/// A stateless regression model mapping feature rows to scalar predictions.
///
/// Implementations must return exactly one prediction per input row, in row order.
/// The pipeline treats any model failure as fatal for the whole batch.
pub trait Regressor {
    /// Predicts one scalar per row of `features`.
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Vec<f64>, QboostError>;
}
