pub mod config;
pub mod descriptor;
pub mod elements;
pub mod error;
pub mod io;
pub mod math;
pub mod model;
pub mod pipeline;
pub mod types;

pub use config::{DescriptorSettings, Settings};
pub use error::QboostError;
pub use model::{GbdtEnsemble, Regressor};
pub use pipeline::{apply_neutrality_correction, ChargePipeline};
pub use types::{Molecule, MoleculeView, PredictionResult};

use std::sync::OnceLock;

static DEFAULT_SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Returns the descriptor settings the shipped models were trained with.
///
/// The settings are parsed once from an embedded TOML resource and cached for the
/// lifetime of the process.
pub fn get_default_settings() -> &'static Settings {
    DEFAULT_SETTINGS.get_or_init(|| {
        const DEFAULT_SETTINGS_TOML: &str = include_str!("../resources/defaults.toml");
        Settings::load_from_str(DEFAULT_SETTINGS_TOML)
            .expect("Failed to parse embedded default settings. This is a library bug.")
    })
}
