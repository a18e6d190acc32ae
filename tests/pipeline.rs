//! End-to-end behavior of the two-stage prediction pipeline with stub models.

mod common;

use approx::assert_relative_eq;
use common::{diatomic, water, BrokenModel, ColumnModel, ConstantModel};
use qboost::{ChargePipeline, Molecule, QboostError};

#[test]
fn two_atom_pipeline_sums_to_declared_charge() {
    // elements [C, H] at 1.1 angstrom, neutral: the canonical smoke case
    let molecules = vec![diatomic(6, 1, 1.1, 0)];

    // second stage reads the raw prediction column of the statistics descriptor
    let first = ColumnModel {
        column: 0,
        scale: 0.1,
    };
    let second = ColumnModel {
        column: 1,
        scale: 1.0,
    };
    let pipeline = ChargePipeline::new(&first, &second);

    let result = pipeline.predict(&molecules).unwrap();
    assert_eq!(result.charges.len(), 2);
    assert_eq!(result.molecule_count(), 1);

    let total: f64 = result.charges.iter().sum();
    assert_relative_eq!(total, 0.0, epsilon = 1e-12);

    // raw predictions were 0.6 (C) and 0.1 (H); the uniform shift preserves their gap
    assert_relative_eq!(result.charges[0], 0.25, epsilon = 1e-12);
    assert_relative_eq!(result.charges[1], -0.25, epsilon = 1e-12);
}

#[test]
fn homonuclear_diatomic_yields_symmetric_charges() {
    let molecules = vec![diatomic(1, 1, 0.74, 0)];
    let first = ConstantModel(0.37);
    let second = ColumnModel {
        column: 1,
        scale: 1.0,
    };
    let pipeline = ChargePipeline::new(&first, &second);

    let result = pipeline.predict(&molecules).unwrap();
    // equal raw predictions and a zero total charge leave exactly zero on both atoms
    assert_relative_eq!(result.charges[0], 0.0, epsilon = 1e-15);
    assert_relative_eq!(result.charges[1], 0.0, epsilon = 1e-15);
    assert_relative_eq!(result.charges[0], result.charges[1], epsilon = 1e-15);
}

#[test]
fn neutrality_holds_per_molecule_across_a_batch() {
    let molecules = vec![water(0), diatomic(7, 1, 1.04, -1), water(1)];
    let first = ColumnModel {
        column: 0,
        scale: -0.05,
    };
    let second = ColumnModel {
        column: 1,
        scale: 0.9,
    };
    let pipeline = ChargePipeline::new(&first, &second);

    let result = pipeline.predict(&molecules).unwrap();
    assert_eq!(result.molecule_count(), 3);
    assert_eq!(result.charges.len(), 8);

    let expectations = [0.0, -1.0, 1.0];
    for (index, expected) in expectations.iter().enumerate() {
        let total: f64 = result.molecule_charges(index).iter().sum();
        assert_relative_eq!(total, *expected, epsilon = 1e-12);
    }
}

#[test]
fn molecule_slices_follow_input_order() {
    let molecules = vec![diatomic(6, 8, 1.13, 0), water(0)];
    let first = ConstantModel(0.0);
    let second = ConstantModel(0.5);
    let pipeline = ChargePipeline::new(&first, &second);

    let result = pipeline.predict(&molecules).unwrap();
    assert_eq!(result.molecule_charges(0).len(), 2);
    assert_eq!(result.molecule_charges(1).len(), 3);
    assert_eq!(result.molecule_offsets, vec![0, 2, 5]);

    // constant second stage: the correction spreads -0.5 per 2-atom molecule, -0.5 per 3-atom
    assert_relative_eq!(result.molecule_charges(0)[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(
        result.molecule_charges(1)[0],
        0.5 - 1.5 / 3.0,
        epsilon = 1e-12
    );
}

#[test]
fn wrong_prediction_length_is_fatal() {
    let molecules = vec![water(0)];
    let first = BrokenModel;
    let second = ConstantModel(0.0);
    let pipeline = ChargePipeline::new(&first, &second);

    let result = pipeline.predict(&molecules);
    assert!(matches!(
        result,
        Err(QboostError::PredictionLength {
            expected: 3,
            actual: 4
        })
    ));
}

#[test]
fn empty_molecule_is_rejected() {
    // bypass Molecule::new validation through a hand-built value
    let empty = Molecule {
        elements: vec![],
        coordinates: vec![],
        total_charge: 0,
        source: "empty.xyz".into(),
    };
    let first = ConstantModel(0.0);
    let second = ConstantModel(0.0);
    let pipeline = ChargePipeline::new(&first, &second);

    let result = pipeline.predict(&[empty]);
    assert!(matches!(result, Err(QboostError::NoAtoms(_))));
}

#[test]
fn charged_molecule_centers_on_ideal_average() {
    // a +1 molecule with a zero-output model ends up with Qtot spread uniformly
    let molecules = vec![water(1)];
    let first = ConstantModel(0.0);
    let second = ConstantModel(0.0);
    let pipeline = ChargePipeline::new(&first, &second);

    let result = pipeline.predict(&molecules).unwrap();
    for &charge in &result.charges {
        assert_relative_eq!(charge, 1.0 / 3.0, epsilon = 1e-12);
    }
}
