//! This module provides mathematical utilities and numerical constants for the qboost library.
//!
//! It contains numerical thresholds as well as the angular machinery behind the
//! atomic-environment descriptor: spherical-coordinate conversion and complex spherical
//! harmonics evaluated through stable normalized recurrences. These components support the
//! descriptor generator by providing the mathematical infrastructure for the expansion of an
//! atom's neighborhood over radial and angular basis functions.

/// Numerical constants used throughout the library.
pub mod constants;

/// Spherical-coordinate conversion and spherical-harmonic tables.
///
/// This module implements the angular half of the descriptor: the `sinc` primitive with its
/// removable-singularity convention, Cartesian-to-spherical conversion with a defensive
/// zero-distance fallback, and the full complex `Y_l^m` table up to a requested degree.
pub mod spherical;
