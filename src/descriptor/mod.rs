//! This module contains the atomic-environment descriptor generator.
//!
//! The descriptor converts raw 3D coordinates into fixed-length feature vectors per atom: an
//! orthonormalized radial basis expansion is combined with complex spherical harmonics into a
//! smooth, rotation- and permutation-invariant power spectrum of each atom's neighborhood,
//! which is then assembled with element identity and molecule-level charge information into
//! the regression inputs. A second statistics pass aggregates molecule-level charge summaries
//! for the refinement stage.

pub mod expansion;
pub mod features;
pub mod radial;
pub mod statistics;

pub use expansion::{atom_power_spectrum, molecule_power_spectra};
pub use features::assemble_features;
pub use radial::RadialBasis;
pub use statistics::{charge_statistics_descriptors, DESCRIPTOR_COLUMNS};
