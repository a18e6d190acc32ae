//! Spherical expansion of an atom's neighborhood into a rotation-invariant power spectrum.
//!
//! Every neighbor contributes the outer product of its weighted radial basis values and the
//! spherical-harmonic table of its direction to a complex coefficient tensor indexed by
//! `(n, l, m)`. Summing squared magnitudes over `m` collapses each `(n, l)` slice into a
//! real entry that is invariant under rotations of the molecule and permutations of the
//! neighbors.

use super::radial::RadialBasis;
use crate::math::spherical::{cartesian_to_spherical, spherical_harmonics};
use crate::types::MoleculeView;
use ndarray::{Array2, Array3};
use num_complex::Complex64;

/// Computes the power spectrum of the atom at index `center`.
///
/// Neighbors are weighted by their atomic number, acting as an effective nuclear charge
/// weight; the center atom itself is excluded. An atom with no neighbors inside the cutoff
/// yields an all-zero spectrum. The returned array has shape `(nmax + 1, lmax + 1)` with
/// non-negative entries.
///
/// The quadratic scan over all other atoms is the dominant cost of the pipeline; a
/// neighbor-list cutoff would slot in here without touching the accumulation.
pub fn atom_power_spectrum(
    center: usize,
    numbers: &[u8],
    positions: &[[f64; 3]],
    basis: &RadialBasis,
    lmax: usize,
) -> Array2<f64> {
    let order_count = basis.order_count();
    let mut coefficients =
        Array3::<Complex64>::zeros((order_count, lmax + 1, 2 * lmax + 1));
    let mut radial = vec![0.0; order_count];
    let origin = positions[center];

    for (j, position) in positions.iter().enumerate() {
        if j == center {
            continue;
        }
        let displacement = [
            position[0] - origin[0],
            position[1] - origin[1],
            position[2] - origin[2],
        ];
        let (r, theta, phi) = cartesian_to_spherical(displacement);
        if r > basis.cutoff() {
            continue;
        }
        basis.evaluate_into(r, &mut radial);
        let weight = numbers[j] as f64;
        let harmonics = spherical_harmonics(lmax, theta, phi);

        for n in 0..order_count {
            let weighted = weight * radial[n];
            if weighted == 0.0 {
                continue;
            }
            for l in 0..=lmax {
                for column in (lmax - l)..=(lmax + l) {
                    coefficients[(n, l, column)] += weighted * harmonics[(l, column)];
                }
            }
        }
    }

    let mut spectrum = Array2::<f64>::zeros((order_count, lmax + 1));
    for n in 0..order_count {
        for l in 0..=lmax {
            let mut total = 0.0;
            for column in (lmax - l)..=(lmax + l) {
                total += coefficients[(n, l, column)].norm_sqr();
            }
            spectrum[(n, l)] = total;
        }
    }
    spectrum
}

/// Computes the power spectra of every atom in a molecule.
///
/// The returned array has one row per atom (input order) holding the row-major flattening
/// of that atom's `(nmax + 1) x (lmax + 1)` spectrum.
pub fn molecule_power_spectra<M: MoleculeView>(
    molecule: &M,
    basis: &RadialBasis,
    lmax: usize,
) -> Array2<f64> {
    let numbers = molecule.atomic_numbers();
    let positions = molecule.positions();
    let width = basis.order_count() * (lmax + 1);
    let mut block = Array2::<f64>::zeros((molecule.atom_count(), width));

    for i in 0..molecule.atom_count() {
        let spectrum = atom_power_spectrum(i, numbers, positions, basis, lmax);
        for (k, value) in spectrum.iter().enumerate() {
            block[(i, k)] = *value;
        }
    }
    block
}
