//! This module implements the two-stage charge prediction pipeline.
//!
//! The `ChargePipeline` wires the descriptor generator to two black-box regression stages:
//! geometry descriptors feed the first model, whose raw predictions are summarized into
//! molecule-level statistics for the second, refining model. A final exact neutrality
//! correction rescales each molecule's predictions so they sum to its declared total charge.
//! The pipeline integrates with the broader `qboost` architecture through the `MoleculeView`
//! trait for input data and the `Regressor` trait for models, keeping it decoupled from both
//! the geometry file format and the model serialization.

use crate::config::Settings;
use crate::descriptor::{assemble_features, charge_statistics_descriptors};
use crate::error::QboostError;
use crate::model::Regressor;
use crate::types::{MoleculeView, PredictionResult};

/// The two-stage charge prediction pipeline.
///
/// This struct borrows the two pretrained regression stages and carries the descriptor
/// settings. It is cheap to construct and holds no per-run state; every call to
/// [`ChargePipeline::predict`] is an independent batch computation.
pub struct ChargePipeline<'m> {
    /// The first-stage model mapping geometry descriptors to raw charges.
    first_stage: &'m dyn Regressor,
    /// The second-stage model refining raw charges from molecule statistics.
    second_stage: &'m dyn Regressor,
    /// Descriptor hyperparameters; must match what the models were trained with.
    settings: Settings,
}

impl<'m> ChargePipeline<'m> {
    /// Creates a new pipeline over the given regression stages with default settings.
    pub fn new(first_stage: &'m dyn Regressor, second_stage: &'m dyn Regressor) -> Self {
        Self {
            first_stage,
            second_stage,
            settings: Settings::default(),
        }
    }

    /// Replaces the descriptor settings.
    ///
    /// This consumes the pipeline and returns a new instance, mirroring the builder
    /// pattern used throughout the crate.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Predicts corrected partial charges for a batch of molecules.
    ///
    /// The batch is processed as a whole: descriptors for every atom across all molecules
    /// are assembled into one matrix (molecules in input order), both inference stages run
    /// over it, and the neutrality correction is applied per molecule. Molecules must be
    /// non-empty; models failing or returning the wrong number of predictions abort the
    /// batch before any result is produced.
    ///
    /// # Errors
    ///
    /// Returns `QboostError::NoAtoms` for an empty molecule, or any model error from the
    /// regression stages, including `QboostError::PredictionLength` when a stage returns a
    /// vector that does not match the atom count.
    pub fn predict<M>(&self, molecules: &[M]) -> Result<PredictionResult, QboostError>
    where
        M: MoleculeView + Sync,
    {
        for molecule in molecules {
            if molecule.atom_count() == 0 {
                return Err(QboostError::NoAtoms(molecule.label().to_string()));
            }
        }

        let features = assemble_features(molecules, &self.settings.descriptor);
        let total_atoms = features.nrows();

        let raw = self.first_stage.predict(features.view())?;
        check_prediction_length(total_atoms, raw.len())?;

        let descriptors = charge_statistics_descriptors(&features, molecules, &raw);
        let refined = self.second_stage.predict(descriptors.view())?;
        check_prediction_length(total_atoms, refined.len())?;

        let charges = apply_neutrality_correction(molecules, &refined);

        let mut molecule_offsets = Vec::with_capacity(molecules.len() + 1);
        molecule_offsets.push(0);
        let mut running = 0;
        for molecule in molecules {
            running += molecule.atom_count();
            molecule_offsets.push(running);
        }

        Ok(PredictionResult {
            charges,
            molecule_offsets,
        })
    }
}

fn check_prediction_length(expected: usize, actual: usize) -> Result<(), QboostError> {
    if expected == actual {
        Ok(())
    } else {
        Err(QboostError::PredictionLength { expected, actual })
    }
}

/// Applies the exact per-molecule neutrality correction.
///
/// For each molecule the residual `sum(raw) - Qtot` is spread uniformly: every atom's raw
/// prediction is shifted by `-residual/Natoms`, so the corrected charges sum exactly to the
/// declared total charge. This is a deterministic linear correction applied exactly once.
pub fn apply_neutrality_correction<M: MoleculeView>(molecules: &[M], raw: &[f64]) -> Vec<f64> {
    let mut corrected = Vec::with_capacity(raw.len());
    let mut offset = 0;
    for molecule in molecules {
        let natoms = molecule.atom_count();
        let predictions = &raw[offset..offset + natoms];
        let residual =
            predictions.iter().sum::<f64>() - molecule.total_charge() as f64;
        let shift = residual / natoms as f64;
        corrected.extend(predictions.iter().map(|q| q - shift));
        offset += natoms;
    }
    corrected
}
