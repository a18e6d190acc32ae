//! Assembly of per-atom feature vectors across a batch of molecules.

use super::expansion::molecule_power_spectra;
use super::radial::RadialBasis;
use crate::config::DescriptorSettings;
use crate::types::MoleculeView;
use ndarray::Array2;
use rayon::prelude::*;

/// Builds the first-stage feature matrix for a batch of molecules.
///
/// Each atom contributes one row `[element index, Qtot/Natoms, flattened power spectrum]`;
/// rows follow atom order within each molecule and molecules follow input order, so
/// downstream per-molecule slicing by running atom-count offsets stays valid. Molecules are
/// independent, so their descriptor blocks are computed in parallel; the ordered collection
/// writes each block into its own disjoint row range.
pub fn assemble_features<M>(molecules: &[M], settings: &DescriptorSettings) -> Array2<f64>
where
    M: MoleculeView + Sync,
{
    let basis = RadialBasis::new(settings.cutoff, settings.nmax);
    let blocks: Vec<Array2<f64>> = molecules
        .par_iter()
        .map(|molecule| molecule_power_spectra(molecule, &basis, settings.lmax))
        .collect();

    let total_atoms: usize = molecules.iter().map(MoleculeView::atom_count).sum();
    let mut features = Array2::<f64>::zeros((total_atoms, settings.feature_len()));

    let mut row = 0;
    for (molecule, block) in molecules.iter().zip(&blocks) {
        let ideal_average =
            molecule.total_charge() as f64 / molecule.atom_count() as f64;
        for (i, &number) in molecule.atomic_numbers().iter().enumerate() {
            features[(row, 0)] = number as f64;
            features[(row, 1)] = ideal_average;
            for k in 0..block.ncols() {
                features[(row, 2 + k)] = block[(i, k)];
            }
            row += 1;
        }
    }
    features
}
