//! Interactive intake: prompts the operator for each field in turn.
//!
//! Invalid entries are explained and re-prompted; after [`MAX_ATTEMPTS`]
//! consecutive failures on one field the session is abandoned. The form only
//! collects values. Evaluation is the caller's job.

use crate::input::{Field, InputError, PredictionInput, Sex, parse_measurement};
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const MAX_ATTEMPTS: usize = 3;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("I/O error while reading input: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Input closed before '{0}' was entered")]
    Closed(&'static str),
    #[error("Gave up on '{field}' after {attempts} invalid entries (last: {last})")]
    TooManyAttempts {
        field: &'static str,
        attempts: usize,
        last: InputError,
    },
}

pub struct Form<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Form<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Runs the full intake and returns validated measurements.
    pub fn collect(&mut self) -> Result<PredictionInput, FormError> {
        let body_weight = self.ask(Field::BodyWeight, |t| parse_measurement(Field::BodyWeight, t))?;
        let creatinine = self.ask(Field::Creatinine, |t| parse_measurement(Field::Creatinine, t))?;
        let volume = self.ask(Field::NonExcisedKidneyVolume, |t| {
            parse_measurement(Field::NonExcisedKidneyVolume, t)
        })?;
        let sex = self.ask(Field::Male, |t| t.parse::<Sex>())?;

        Ok(PredictionInput::new(body_weight, creatinine, volume, sex)?)
    }

    fn ask<T>(
        &mut self,
        field: Field,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, FormError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            write!(self.writer, "{}", prompt(field))?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(FormError::Closed(field.label()));
            }

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= MAX_ATTEMPTS => {
                    log::warn!("Abandoning form on '{}' after {} attempts", field, attempt);
                    return Err(FormError::TooManyAttempts {
                        field: field.label(),
                        attempts: attempt,
                        last: e,
                    });
                }
                Err(e) => {
                    log::debug!("Rejected entry for '{}': {}", field, e);
                    writeln!(self.writer, "  {e}")?;
                }
            }
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn prompt(field: Field) -> String {
    match (field.unit(), field.step()) {
        (Some(unit), Some(step)) => format!("{} [{unit}, >= 0, step {step}]: ", field.label()),
        _ => format!("{} [1/0]: ", field.label()),
    }
}
