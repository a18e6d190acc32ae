//! This module defines numerical constants used throughout the qboost library.
//!
//! These constants provide the thresholds needed for numerically stable handling of
//! degenerate geometry in descriptor calculations.

/// Threshold below which an interatomic distance is considered zero.
///
/// This small numerical threshold is used in distance comparisons and geometric operations
/// to account for floating-point precision limitations. Distances smaller than this value
/// take the closed-form zero-distance limits of the radial basis and polar angle instead of
/// evaluating expressions with a 0/0 singularity.
pub const DISTANCE_THRESHOLD: f64 = 1e-12;
