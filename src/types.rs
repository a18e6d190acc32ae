//! This module defines the core types used in the qboost library for representing molecules
//! and prediction results.
//!
//! It includes the `MoleculeView` trait for abstracting molecular data access, the `Molecule`
//! struct for concrete molecule representation, and the `PredictionResult` struct for storing
//! the outcome of a charge prediction run. These types form the foundation for the decoupled
//! design that allows integration with various molecular data structures.

use crate::error::QboostError;
use std::path::PathBuf;

/// A trait for viewing molecular data without owning it.
///
/// This trait provides a common interface for accessing a molecule's atomic numbers, Cartesian
/// coordinates, and declared total charge, enabling the charge prediction pipeline to work with
/// different molecular representations. By decoupling the pipeline from specific data structures,
/// users can integrate the `qboost` library with their own molecular representations without
/// data conversion overhead.
pub trait MoleculeView {
    /// Returns the atomic numbers of all atoms, in atom order.
    ///
    /// Atomic numbers are expected to be alias-folded (see [`crate::elements::fold_alias`]) if
    /// the molecule is destined for the shipped models, since those were trained on folded
    /// indices.
    fn atomic_numbers(&self) -> &[u8];

    /// Returns the 3D positions of all atoms in Cartesian coordinates, in atom order.
    ///
    /// Each position is an array of three `f64` values corresponding to x, y, and z. Units must
    /// be consistent with the descriptor cutoff radius (angstroms for the shipped models).
    fn positions(&self) -> &[[f64; 3]];

    /// Returns the declared total integer charge of the molecule.
    ///
    /// The corrected per-atom charges produced by the pipeline sum exactly to this value.
    fn total_charge(&self) -> i32;

    /// Returns a short human-readable identifier for the molecule, used in error messages and
    /// output file naming.
    fn label(&self) -> &str;

    /// Returns the number of atoms in the molecule.
    #[inline]
    fn atom_count(&self) -> usize {
        self.atomic_numbers().len()
    }
}

/// A concrete, owned representation of a molecule read from a geometry file.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    /// The atomic numbers of all atoms, alias-folded at parse time.
    pub elements: Vec<u8>,
    /// The Cartesian coordinates of all atoms, one `[x, y, z]` row per atom.
    pub coordinates: Vec<[f64; 3]>,
    /// The declared total integer charge (0 when the source file carried no charge line).
    pub total_charge: i32,
    /// The path of the source geometry file; its stem names the molecule and its
    /// sibling `.charges` file.
    pub source: PathBuf,
}

impl Molecule {
    /// Creates a new `Molecule`, validating the basic geometry invariants.
    ///
    /// # Errors
    ///
    /// Returns `QboostError::AtomCountMismatch` if `elements` and `coordinates` differ in
    /// length, or `QboostError::NoAtoms` if both are empty.
    pub fn new(
        elements: Vec<u8>,
        coordinates: Vec<[f64; 3]>,
        total_charge: i32,
        source: impl Into<PathBuf>,
    ) -> Result<Self, QboostError> {
        let source = source.into();
        let label = stem_of(&source).to_string();
        if elements.len() != coordinates.len() {
            return Err(QboostError::AtomCountMismatch {
                label,
                elements: elements.len(),
                coordinates: coordinates.len(),
            });
        }
        if elements.is_empty() {
            return Err(QboostError::NoAtoms(label));
        }
        Ok(Self {
            elements,
            coordinates,
            total_charge,
            source,
        })
    }
}

impl MoleculeView for Molecule {
    #[inline(always)]
    fn atomic_numbers(&self) -> &[u8] {
        &self.elements
    }

    #[inline(always)]
    fn positions(&self) -> &[[f64; 3]] {
        &self.coordinates
    }

    #[inline(always)]
    fn total_charge(&self) -> i32 {
        self.total_charge
    }

    fn label(&self) -> &str {
        stem_of(&self.source)
    }
}

fn stem_of(source: &std::path::Path) -> &str {
    source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("molecule")
}

/// The result of a full charge prediction run over a batch of molecules.
///
/// Charges are stored flat, in the same atom order as the input molecules; per-molecule
/// slices are recovered through the offset table.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    /// The corrected partial charge of every atom across the batch, in input order.
    ///
    /// Within each molecule the charges sum exactly (up to floating rounding) to that
    /// molecule's declared total charge.
    pub charges: Vec<f64>,
    /// Prefix sums of per-molecule atom counts; length is `molecule count + 1` and the
    /// first entry is 0.
    pub molecule_offsets: Vec<usize>,
}

impl PredictionResult {
    /// Returns the number of molecules in the batch.
    pub fn molecule_count(&self) -> usize {
        self.molecule_offsets.len().saturating_sub(1)
    }

    /// Returns the corrected charges of the molecule at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn molecule_charges(&self, index: usize) -> &[f64] {
        let start = self.molecule_offsets[index];
        let end = self.molecule_offsets[index + 1];
        &self.charges[start..end]
    }
}
