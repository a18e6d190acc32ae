//! Molecule-level charge statistics for the second regression stage.
//!
//! After the first stage has produced raw per-atom charges, each molecule is summarized by
//! seven aggregate statistics which are broadcast identically to every one of its atoms and
//! packaged together with the atom's element index and raw prediction.

use crate::types::MoleculeView;
use ndarray::Array2;

/// Width of one second-stage descriptor row: element index, raw prediction, and the seven
/// broadcast statistics.
pub const DESCRIPTOR_COLUMNS: usize = 9;

/// Builds the second-stage descriptor matrix from raw first-stage predictions.
///
/// For each molecule the statistics are, in column order after the `[element, raw]` prefix:
/// mean raw charge, ideal average charge (`Qtot/Natoms`), mean positive charge, mean
/// negative charge, mean absolute charge, and the two relative extremal ratios. Both ratios
/// put the overall maximum prediction in the numerator and divide by the positive (resp.
/// negative) sum as it stands before the per-atom normalization; a molecule with no
/// positive (or no negative) predictions gets 0 for the corresponding mean and ratio.
///
/// `features` must be the first-stage matrix the predictions came from (its first column
/// supplies the element index) and `raw` must hold one prediction per feature row.
pub fn charge_statistics_descriptors<M: MoleculeView>(
    features: &Array2<f64>,
    molecules: &[M],
    raw: &[f64],
) -> Array2<f64> {
    debug_assert_eq!(features.nrows(), raw.len());
    let mut descriptors = Array2::<f64>::zeros((raw.len(), DESCRIPTOR_COLUMNS));

    let mut offset = 0;
    for molecule in molecules {
        let natoms = molecule.atom_count();
        let predictions = &raw[offset..offset + natoms];
        let n = natoms as f64;

        let ideal_average = molecule.total_charge() as f64 / n;
        let average = predictions.iter().sum::<f64>() / n;

        let mut positive_sum = 0.0;
        let mut negative_sum = 0.0;
        let mut absolute_sum = 0.0;
        let mut maximum = f64::NEG_INFINITY;
        for &q in predictions {
            if q > 0.0 {
                positive_sum += q;
            } else if q < 0.0 {
                negative_sum += q;
            }
            absolute_sum += q.abs();
            maximum = maximum.max(q);
        }

        // Both ratios deliberately use the overall maximum; see the tests pinning this.
        let relative_positive = if positive_sum != 0.0 {
            maximum / positive_sum
        } else {
            0.0
        };
        let relative_negative = if negative_sum != 0.0 {
            maximum / negative_sum
        } else {
            0.0
        };

        let statistics = [
            average,
            ideal_average,
            positive_sum / n,
            negative_sum / n,
            absolute_sum / n,
            relative_positive,
            relative_negative,
        ];

        for i in 0..natoms {
            let row = offset + i;
            descriptors[(row, 0)] = features[(row, 0)];
            descriptors[(row, 1)] = predictions[i];
            for (k, statistic) in statistics.iter().enumerate() {
                descriptors[(row, 2 + k)] = *statistic;
            }
        }
        offset += natoms;
    }
    descriptors
}
