use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

// --- Replacement values ---
// The regression equations were fitted with clinical covariates that the intake
// form does not collect. These values stand in for them on every evaluation.

pub const DEFAULT_AGE: f64 = 50.0;
pub const CVD_REPLACED: f64 = 0.0;
pub const HBA1C_REPLACED: f64 = 5.7;
pub const BUN_REPLACED: f64 = 13.8;

#[derive(Error, Debug)]
pub enum CovariateError {
    #[error("Failed to read or write covariate file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML covariate file: {0}")]
    TomlParseError(#[from] toml::de::Error),
    #[error("Failed to serialize covariates to TOML format: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
    #[error("Covariate '{0}' must be a finite number")]
    NotFinite(&'static str),
}

/// Covariates held constant across all donors.
///
/// Any subset may be overridden from a TOML file; keys that are absent keep
/// their default replacement value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixedCovariates {
    /// Donor age in years.
    pub age: f64,
    /// Cardiovascular disease indicator.
    pub cvd: f64,
    /// Glycated haemoglobin, %.
    pub hba1c: f64,
    /// Blood urea nitrogen, mg/dL.
    pub bun: f64,
}

impl Default for FixedCovariates {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            cvd: CVD_REPLACED,
            hba1c: HBA1C_REPLACED,
            bun: BUN_REPLACED,
        }
    }
}

impl FixedCovariates {
    pub fn validate(&self) -> Result<(), CovariateError> {
        let values = [
            ("age", self.age),
            ("cvd", self.cvd),
            ("hba1c", self.hba1c),
            ("bun", self.bun),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(CovariateError::NotFinite(name));
            }
        }
        Ok(())
    }

    /// Loads covariate overrides from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CovariateError> {
        let toml_string = fs::read_to_string(path)?;
        let covariates: Self = toml::from_str(&toml_string)?;
        covariates.validate()?;
        log::info!(
            "Loaded covariates from {}: age={}, cvd={}, hba1c={}, bun={}",
            path.display(),
            covariates.age,
            covariates.cvd,
            covariates.hba1c,
            covariates.bun
        );
        Ok(covariates)
    }

    /// Writes the covariates to a TOML file, suitable as a starting point for overrides.
    pub fn save(&self, path: &Path) -> Result<(), CovariateError> {
        let toml_string = self.to_toml()?;
        let mut file = BufWriter::new(fs::File::create(path)?);
        file.write_all(toml_string.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, CovariateError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn defaults_are_the_replacement_constants() {
        let c = FixedCovariates::default();
        assert_eq!(c.age, 50.0);
        assert_eq!(c.cvd, 0.0);
        assert_eq!(c.hba1c, 5.7);
        assert_eq!(c.bun, 13.8);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let file = write_toml("age = 62.0\nbun = 15.5\n");
        let c = FixedCovariates::load(file.path()).unwrap();
        assert_eq!(c.age, 62.0);
        assert_eq!(c.bun, 15.5);
        assert_eq!(c.cvd, CVD_REPLACED);
        assert_eq!(c.hba1c, HBA1C_REPLACED);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_toml("egfr = 90.0\n");
        let err = FixedCovariates::load(file.path()).unwrap_err();
        assert!(matches!(err, CovariateError::TomlParseError(_)));
    }

    #[test]
    fn non_finite_override_is_rejected() {
        let file = write_toml("hba1c = nan\n");
        let err = FixedCovariates::load(file.path()).unwrap_err();
        assert!(matches!(err, CovariateError::NotFinite("hba1c")));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("covariates.toml");
        let original = FixedCovariates {
            age: 41.0,
            ..FixedCovariates::default()
        };
        original.save(&path).unwrap();
        assert_eq!(FixedCovariates::load(&path).unwrap(), original);
    }
}
