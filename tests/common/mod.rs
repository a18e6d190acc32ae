#![allow(dead_code)]

use ndarray::ArrayView2;
use qboost::{Molecule, QboostError, Regressor};

/// Stub model predicting the same value for every atom.
pub struct ConstantModel(pub f64);

impl Regressor for ConstantModel {
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Vec<f64>, QboostError> {
        Ok(vec![self.0; features.nrows()])
    }
}

/// Stub model predicting a scaled copy of one feature column; deterministic and
/// feature-sensitive, which is all the pipeline tests need.
pub struct ColumnModel {
    pub column: usize,
    pub scale: f64,
}

impl Regressor for ColumnModel {
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Vec<f64>, QboostError> {
        Ok(features
            .rows()
            .into_iter()
            .map(|row| row[self.column] * self.scale)
            .collect())
    }
}

/// Stub model returning a deliberately wrong number of predictions.
pub struct BrokenModel;

impl Regressor for BrokenModel {
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Vec<f64>, QboostError> {
        Ok(vec![0.0; features.nrows() + 1])
    }
}

pub fn diatomic(z1: u8, z2: u8, distance: f64, total_charge: i32) -> Molecule {
    Molecule::new(
        vec![z1, z2],
        vec![[0.0, 0.0, 0.0], [0.0, 0.0, distance]],
        total_charge,
        "diatomic.xyz",
    )
    .unwrap()
}

pub fn water(total_charge: i32) -> Molecule {
    Molecule::new(
        vec![8, 1, 1],
        vec![
            [0.0, 0.0, 0.117],
            [0.757, 0.0, -0.469],
            [-0.757, 0.0, -0.469],
        ],
        total_charge,
        "water.xyz",
    )
    .unwrap()
}
