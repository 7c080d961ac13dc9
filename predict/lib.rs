#![deny(unused_variables)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(clippy::no_effect_underscore_binding)]

//! One-year post-donation creatinine prediction for living kidney donors.
//!
//! The reported value is the median of nine fixed-coefficient regression
//! equations evaluated on four pre-operative measurements. Covariates the
//! intake form does not collect (age, cardiovascular disease, HbA1c, BUN)
//! are replaced by fixed values supplied through [`covariates::FixedCovariates`].

pub mod covariates;
pub mod ensemble;
pub mod form;
pub mod input;
pub mod median;
pub mod model;
pub mod report;

use thiserror::Error;

pub use covariates::FixedCovariates;
pub use input::{PredictionInput, Sex};
pub use model::{PredictionResult, Predictor};

/// Everything that can stop a "Calculate" action, as seen by the operator.
///
/// All variants are surfaced the same way: a generic error message carrying
/// the underlying text verbatim.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error(transparent)]
    Input(#[from] input::InputError),
    #[error(transparent)]
    Covariates(#[from] covariates::CovariateError),
    #[error(transparent)]
    Computation(#[from] model::ComputationError),
    #[error(transparent)]
    Form(#[from] form::FormError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
