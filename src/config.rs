//! This module provides descriptor settings and utilities for loading them from TOML files.
//!
//! It defines the `DescriptorSettings` struct holding the hyperparameters of the
//! atomic-environment descriptor (cutoff radius and radial/angular expansion orders) and the
//! `Settings` struct wrapping the full configuration file. The hyperparameters must match the
//! values the regression models were trained with, so the crate embeds a default set and only
//! expects users to supply a file when working with retrained models.

use crate::error::QboostError;
use serde::Deserialize;
use std::path::Path;

/// Hyperparameters of the rotation-invariant atomic-environment descriptor.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DescriptorSettings {
    /// The cutoff radius in angstroms; neighbors beyond it contribute nothing.
    #[serde(rename = "rc")]
    pub cutoff: f64,
    /// The maximum radial basis order; orders 0..=nmax are used.
    pub nmax: usize,
    /// The maximum spherical-harmonic degree; degrees 0..=lmax are used.
    pub lmax: usize,
}

impl DescriptorSettings {
    /// Returns the length of one flattened power spectrum, `(nmax+1)(lmax+1)`.
    pub fn power_spectrum_len(&self) -> usize {
        (self.nmax + 1) * (self.lmax + 1)
    }

    /// Returns the length of one first-stage feature row: element index, ideal average
    /// charge, and the flattened power spectrum.
    pub fn feature_len(&self) -> usize {
        2 + self.power_spectrum_len()
    }
}

impl Default for DescriptorSettings {
    fn default() -> Self {
        Self {
            cutoff: 3.0,
            nmax: 4,
            lmax: 5,
        }
    }
}

/// The full configuration of a prediction run.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Settings {
    /// Descriptor hyperparameters.
    pub descriptor: DescriptorSettings,
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `QboostError::Io` if the file cannot be read, or
    /// `QboostError::SettingsFormat` if the TOML content is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use qboost::Settings;
    /// use std::path::Path;
    ///
    /// let settings = Settings::load_from_file(Path::new("qboost.toml")).unwrap();
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self, QboostError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| QboostError::Io {
            path: path.to_path_buf(),
            source: io_error,
        })?;

        Self::load_from_str(&content)
    }

    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `QboostError::SettingsFormat` if the TOML content is invalid or missing fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use qboost::Settings;
    ///
    /// let toml_data = r#"
    /// [descriptor]
    /// rc = 3.0
    /// nmax = 4
    /// lmax = 5
    /// "#;
    ///
    /// let settings = Settings::load_from_str(toml_data).unwrap();
    /// assert_eq!(settings.descriptor.feature_len(), 32);
    /// ```
    pub fn load_from_str(toml_str: &str) -> Result<Self, QboostError> {
        toml::from_str(toml_str).map_err(QboostError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID_TOML: &str = r#"
        [descriptor]
        rc = 4.5
        nmax = 6
        lmax = 3
    "#;

    #[test]
    fn test_load_from_str_valid() {
        let settings = Settings::load_from_str(VALID_TOML).unwrap();
        assert_eq!(
            settings.descriptor,
            DescriptorSettings {
                cutoff: 4.5,
                nmax: 6,
                lmax: 3,
            }
        );
    }

    #[test]
    fn test_load_from_str_invalid_toml() {
        let result = Settings::load_from_str("this is not valid toml");
        assert!(matches!(result, Err(QboostError::SettingsFormat(_))));
    }

    #[test]
    fn test_load_from_str_missing_field() {
        let toml_str = r#"
        [descriptor]
        rc = 3.0
        nmax = 4
        "#;
        let result = Settings::load_from_str(toml_str);
        assert!(matches!(result, Err(QboostError::SettingsFormat(_))));
    }

    #[test]
    fn test_load_from_file_valid() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", VALID_TOML).unwrap();

        let settings = Settings::load_from_file(temp_file.path()).unwrap();
        assert_eq!(settings.descriptor.cutoff, 4.5);
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = Settings::load_from_file(Path::new("non_existent_settings.toml"));
        assert!(matches!(result, Err(QboostError::Io { .. })));
    }

    #[test]
    fn test_default_matches_shipped_models() {
        let settings = Settings::default();
        assert_eq!(settings.descriptor.cutoff, 3.0);
        assert_eq!(settings.descriptor.nmax, 4);
        assert_eq!(settings.descriptor.lmax, 5);
        assert_eq!(settings.descriptor.power_spectrum_len(), 30);
        assert_eq!(settings.descriptor.feature_len(), 32);
    }
}
