use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in the `qboost` library.
///
/// This enum is designed to be comprehensive, providing clear and actionable
/// information for each potential failure mode, from I/O issues to malformed
/// model artifacts. It implements `std::error::Error`, allowing it to be
/// composed with other error types in application code.
#[derive(Error, Debug)]
pub enum QboostError {
    /// A validation error indicating that a molecule contained no atoms.
    /// At least one atom is required to build descriptors and to divide the
    /// total charge across the molecule.
    #[error("Input validation failed: molecule '{0}' contains no atoms")]
    NoAtoms(String),

    /// Indicates that a molecule's element list and coordinate array disagree
    /// in length, violating the basic geometry invariant.
    #[error(
        "Molecule '{label}' has {elements} element entries but {coordinates} coordinate rows"
    )]
    AtomCountMismatch {
        /// The label of the offending molecule.
        label: String,
        /// The number of element entries.
        elements: usize,
        /// The number of coordinate rows.
        coordinates: usize,
    },

    /// An I/O error that occurred while reading or writing a file.
    ///
    /// The path of the file and the underlying I/O error are provided for context.
    #[error("I/O error at path '{path}': {source}")]
    Io {
        /// The path of the file that caused the I/O error.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// An error that occurred while parsing an XYZ geometry file.
    ///
    /// Parse failures are molecule-scoped: callers processing a batch should
    /// skip the offending file with a warning and continue with the remainder.
    #[error("Failed to parse geometry from '{path}' (line {line}): {details}")]
    XyzParse {
        /// The path of the geometry file.
        path: PathBuf,
        /// The 1-based line number where parsing failed.
        line: usize,
        /// A description of what went wrong.
        details: String,
    },

    /// An error that occurred while parsing a settings file, typically
    /// indicating invalid TOML or a structural mismatch with `Settings`.
    #[error("Failed to deserialize TOML settings: {0}")]
    SettingsFormat(#[from] toml::de::Error),

    /// An error that occurred while deserializing a model artifact.
    ///
    /// Model artifacts are required for the pipeline to run at all, so this
    /// error is fatal to the whole batch.
    #[error("Failed to deserialize model artifact: {0}")]
    ModelFormat(#[from] serde_json::Error),

    /// A structural defect in a loaded model artifact, such as a split node
    /// referencing a feature column or child node that does not exist.
    #[error("Model artifact is malformed: {0}")]
    MalformedModel(String),

    /// The model returned a prediction vector whose length does not match the
    /// number of atoms it was given.
    #[error("Model returned {actual} predictions for {expected} atoms")]
    PredictionLength {
        /// The number of atoms (feature rows) passed to the model.
        expected: usize,
        /// The number of predictions the model returned.
        actual: usize,
    },
}
