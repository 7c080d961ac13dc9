//! # Donor Measurements
//!
//! The validated value object every prediction starts from. Operator input is
//! checked once, here, so that the regression code can assume well-formed
//! numbers:
//!
//! - every numeric measurement is finite and non-negative,
//! - sex is one of exactly two indicators (`1` male, `0` female).
//!
//! There are deliberately no upper bounds and no cross-field checks.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be greater than or equal to 0 (got {value})")]
    Negative { field: Field, value: f64 },
    #[error("{field} must be a finite number")]
    NotFinite { field: Field },
    #[error("{field}: could not parse '{text}' as a number")]
    Malformed { field: Field, text: String },
    #[error("Male must be 1 (male) or 0 (female), got '{0}'")]
    InvalidSexIndicator(String),
}

/// The four operator-facing fields, in the order the form presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    BodyWeight,
    Creatinine,
    NonExcisedKidneyVolume,
    Male,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::BodyWeight,
        Field::Creatinine,
        Field::NonExcisedKidneyVolume,
        Field::Male,
    ];

    /// The control label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::BodyWeight => "Body Weight (Bw)",
            Field::Creatinine => "Creatinine (Cre)",
            Field::NonExcisedKidneyVolume => "Non-Excised Kidney Volume",
            Field::Male => "Male (1 for Male, 0 for Female)",
        }
    }

    pub fn unit(self) -> Option<&'static str> {
        match self {
            Field::BodyWeight => Some("kg"),
            Field::Creatinine => Some("mg/dL"),
            Field::NonExcisedKidneyVolume => Some("mL"),
            Field::Male => None,
        }
    }

    /// Increment used by stepper controls. `None` for the fixed choice.
    pub fn step(self) -> Option<f64> {
        match self {
            Field::BodyWeight => Some(0.1),
            Field::Creatinine => Some(0.01),
            Field::NonExcisedKidneyVolume => Some(0.1),
            Field::Male => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// The regression indicator: 1 for male, 0 for female.
    pub fn indicator(self) -> f64 {
        match self {
            Sex::Male => 1.0,
            Sex::Female => 0.0,
        }
    }
}

impl FromStr for Sex {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Sex::Male),
            "0" => Ok(Sex::Female),
            other => Err(InputError::InvalidSexIndicator(other.to_string())),
        }
    }
}

/// One donor's measurements. Constructed only through [`PredictionInput::new`],
/// so a value of this type always satisfies the range contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionInput {
    body_weight_kg: f64,
    creatinine_mg_dl: f64,
    non_excised_kidney_volume_ml: f64,
    sex: Sex,
}

impl PredictionInput {
    pub fn new(
        body_weight_kg: f64,
        creatinine_mg_dl: f64,
        non_excised_kidney_volume_ml: f64,
        sex: Sex,
    ) -> Result<Self, InputError> {
        let measurements = [
            (Field::BodyWeight, body_weight_kg),
            (Field::Creatinine, creatinine_mg_dl),
            (Field::NonExcisedKidneyVolume, non_excised_kidney_volume_ml),
        ];
        for (field, value) in measurements {
            check_measurement(field, value)?;
        }

        Ok(Self {
            body_weight_kg,
            creatinine_mg_dl,
            non_excised_kidney_volume_ml,
            sex,
        })
    }

    pub fn body_weight_kg(&self) -> f64 {
        self.body_weight_kg
    }

    pub fn creatinine_mg_dl(&self) -> f64 {
        self.creatinine_mg_dl
    }

    pub fn non_excised_kidney_volume_ml(&self) -> f64 {
        self.non_excised_kidney_volume_ml
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Shorthand for `self.sex().indicator()`.
    pub fn male(&self) -> f64 {
        self.sex.indicator()
    }
}

fn check_measurement(field: Field, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(value)
}

/// Parses operator text for one of the numeric fields and applies the same
/// range contract as [`PredictionInput::new`].
pub fn parse_measurement(field: Field, text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| InputError::Malformed {
        field,
        text: trimmed.to_string(),
    })?;
    check_measurement(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_accepted_for_every_measurement() {
        let input = PredictionInput::new(0.0, 0.0, 0.0, Sex::Female).unwrap();
        assert_eq!(input.body_weight_kg(), 0.0);
        assert_eq!(input.creatinine_mg_dl(), 0.0);
        assert_eq!(input.non_excised_kidney_volume_ml(), 0.0);
        assert_eq!(input.male(), 0.0);
    }

    #[test]
    fn negative_measurement_names_the_field() {
        let err = PredictionInput::new(70.0, -0.1, 150.0, Sex::Male).unwrap_err();
        match err {
            InputError::Negative { field, value } => {
                assert_eq!(field, Field::Creatinine);
                assert_eq!(value, -0.1);
            }
            other => panic!("Expected Negative(Creatinine), got {:?}", other),
        }
    }

    #[test]
    fn non_finite_measurements_are_rejected() {
        let err = PredictionInput::new(f64::NAN, 1.0, 150.0, Sex::Male).unwrap_err();
        assert_eq!(
            err,
            InputError::NotFinite {
                field: Field::BodyWeight
            }
        );
        let err = PredictionInput::new(70.0, 1.0, f64::INFINITY, Sex::Male).unwrap_err();
        assert_eq!(
            err,
            InputError::NotFinite {
                field: Field::NonExcisedKidneyVolume
            }
        );
    }

    #[test]
    fn sex_indicator_accepts_only_one_and_zero() {
        assert_eq!("1".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" 0\n".parse::<Sex>().unwrap(), Sex::Female);
        for bad in ["2", "-1", "0.5", "male", ""] {
            assert!(
                matches!(bad.parse::<Sex>(), Err(InputError::InvalidSexIndicator(_))),
                "'{bad}' should be rejected"
            );
        }
    }

    #[test]
    fn parse_measurement_reports_malformed_text() {
        assert_eq!(parse_measurement(Field::BodyWeight, " 65.5 ").unwrap(), 65.5);
        let err = parse_measurement(Field::BodyWeight, "sixty").unwrap_err();
        assert!(matches!(err, InputError::Malformed { field: Field::BodyWeight, .. }));
        let err = parse_measurement(Field::Creatinine, "nan").unwrap_err();
        assert!(matches!(err, InputError::NotFinite { .. }));
    }

    #[test]
    fn field_metadata_matches_the_form() {
        assert_eq!(Field::Creatinine.step(), Some(0.01));
        assert_eq!(Field::BodyWeight.step(), Some(0.1));
        assert_eq!(Field::Male.unit(), None);
        assert_eq!(Field::ALL.len(), 4);
    }
}
