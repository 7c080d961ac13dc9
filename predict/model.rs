use crate::covariates::FixedCovariates;
use crate::ensemble::{ENSEMBLE, ENSEMBLE_SIZE};
use crate::input::PredictionInput;
use crate::median::median;
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Failures while evaluating the ensemble.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputationError {
    #[error(
        "Body weight is 0 kg; model_6 divides kidney volume by body weight and is undefined."
    )]
    ZeroBodyWeight,
    #[error("{model} produced a non-finite value ({value}); refusing to report a median.")]
    NonFiniteModelOutput { model: &'static str, value: f64 },
    #[error("Failed to serialize prediction to TOML format: {0}")]
    TomlSerializeError(String),
    #[error("Failed to write prediction file: {0}")]
    IoError(String),
}

/// Output of one ensemble evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    /// One value per ensemble member, in [`ENSEMBLE`] order.
    pub per_model_values: [f64; ENSEMBLE_SIZE],
    /// The reported prediction, mg/dL.
    pub median_value: f64,
}

impl PredictionResult {
    /// `(model name, value)` pairs in ensemble order.
    pub fn model_values(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        ENSEMBLE
            .iter()
            .zip(self.per_model_values.iter())
            .map(|(model, &value)| (model.name, value))
    }

    /// Saves the result, with the per-model breakdown, as TOML.
    pub fn save(&self, path: &Path) -> Result<(), ComputationError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ComputationError::TomlSerializeError(e.to_string()))?;
        let write = || -> std::io::Result<()> {
            let mut file = BufWriter::new(fs::File::create(path)?);
            file.write_all(toml_string.as_bytes())?;
            file.flush()
        };
        write().map_err(|e| ComputationError::IoError(e.to_string()))
    }
}

/// Evaluates the ensemble against a fixed set of replacement covariates.
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    covariates: FixedCovariates,
}

impl Predictor {
    pub fn new(covariates: FixedCovariates) -> Self {
        Self { covariates }
    }

    pub fn covariates(&self) -> &FixedCovariates {
        &self.covariates
    }

    /// Evaluates all nine equations and reports their median.
    ///
    /// Zero body weight is rejected up front: with a positive kidney volume
    /// `model_6` would otherwise return a finite but meaningless value. Any other
    /// non-finite member output is rejected before the median is taken.
    pub fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, ComputationError> {
        if input.body_weight_kg() == 0.0 {
            return Err(ComputationError::ZeroBodyWeight);
        }

        let mut per_model_values = [0.0; ENSEMBLE_SIZE];
        for (slot, model) in per_model_values.iter_mut().zip(ENSEMBLE.iter()) {
            let value = (model.evaluate)(input, &self.covariates);
            log::debug!("{} = {}", model.name, value);
            if !value.is_finite() {
                log::warn!("{} produced non-finite output {} for {:?}", model.name, value, input);
                return Err(ComputationError::NonFiniteModelOutput {
                    model: model.name,
                    value,
                });
            }
            *slot = value;
        }

        // Non-empty by construction.
        let median_value = median(&per_model_values).unwrap_or(f64::NAN);
        log::info!("Ensemble median: {median_value}");

        Ok(PredictionResult {
            per_model_values,
            median_value,
        })
    }
}
