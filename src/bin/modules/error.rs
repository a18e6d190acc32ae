#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Errors originating from the core qboost library: settings, models, descriptors,
    /// inference, or output writing.
    #[error("Prediction error: {0}")]
    Pipeline(#[from] qboost::QboostError),

    /// Every supplied geometry file failed to read, or the directory held no .xyz files.
    #[error("No valid input: nothing to predict after scanning the supplied geometry files")]
    NoValidInput,
}
