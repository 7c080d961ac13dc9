//! The nine regression equations behind the ensemble prediction.
//!
//! Each equation was fitted independently on the same donor cohort. Coefficients
//! are kept at full precision and terms are evaluated left to right, exactly as
//! published, so that results are reproducible bit for bit.
//!
//! Notation in the docs below: `Bw` body weight (kg), `Cre` creatinine (mg/dL),
//! `Vol` non-excised kidney volume (mL), `Male` sex indicator, and the fixed
//! covariates `Age`, `CVD`, `HbA1c`, `BUN`.

use crate::covariates::FixedCovariates;
use crate::input::PredictionInput;

/// One member of the ensemble.
#[derive(Debug, Clone, Copy)]
pub struct RegressionModel {
    pub name: &'static str,
    pub evaluate: fn(&PredictionInput, &FixedCovariates) -> f64,
}

pub const ENSEMBLE_SIZE: usize = 9;

/// The ensemble in its canonical order. The order carries no meaning for the
/// median but is fixed so per-model output is reproducible.
pub const ENSEMBLE: [RegressionModel; ENSEMBLE_SIZE] = [
    RegressionModel { name: "model_1", evaluate: model_1 },
    RegressionModel { name: "model_2", evaluate: model_2 },
    RegressionModel { name: "model_3", evaluate: model_3 },
    RegressionModel { name: "model_4", evaluate: model_4 },
    RegressionModel { name: "model_5", evaluate: model_5 },
    RegressionModel { name: "model_6", evaluate: model_6 },
    RegressionModel { name: "model_7", evaluate: model_7 },
    RegressionModel { name: "model_8", evaluate: model_8 },
    RegressionModel { name: "model_9", evaluate: model_9 },
];

/// `Bw + sqrt(Cre) + Male + Vol`
pub fn model_1(x: &PredictionInput, _c: &FixedCovariates) -> f64 {
    -0.09903755662234529 + 0.006502924180113298 * x.body_weight_kg()
        + 1.3625035862329375 * x.creatinine_mg_dl().sqrt()
        + 0.1139767991517405 * x.male()
        - 0.0027455075816872963 * x.non_excised_kidney_volume_ml()
}

/// `BUN + Bw + Cre + BUN²·Vol`
pub fn model_2(x: &PredictionInput, c: &FixedCovariates) -> f64 {
    -0.3901364879414445 + 0.04471756216946074 * c.bun
        + 0.006715659519617908 * x.body_weight_kg()
        + 1.0352518798689898 * x.creatinine_mg_dl()
        - 0.000009604315179117748 * c.bun.powf(2.0) * x.non_excised_kidney_volume_ml()
}

/// `Age + BUN + Bw + Cre + Male + BUN²·Vol`
pub fn model_3(x: &PredictionInput, c: &FixedCovariates) -> f64 {
    -0.38478682583687274 + 0.002081547696286225 * c.age
        + 0.04399956263153849 * c.bun
        + 0.005628920758504391 * x.body_weight_kg()
        + 0.9320131800396743 * x.creatinine_mg_dl()
        + 0.06722065750493375 * x.male()
        - 0.000009867424180159245 * c.bun.powf(2.0) * x.non_excised_kidney_volume_ml()
}

/// `Cre + CVD + HbA1c + Male + Vol`
pub fn model_4(x: &PredictionInput, c: &FixedCovariates) -> f64 {
    0.049617816124754036 + 0.9225151798784034 * x.creatinine_mg_dl()
        + 0.18320900637720863 * c.cvd
        + 0.10349178758374927 * c.hba1c
        + 0.13985579153513217 * x.male()
        - 0.0019323076033121343 * x.non_excised_kidney_volume_ml()
}

/// `BUN + Bw + BUN⁴·Vol`. The only member without a creatinine term.
pub fn model_5(x: &PredictionInput, c: &FixedCovariates) -> f64 {
    -0.18899026587394271 + 0.024398835894397737 * c.bun
        + 0.0032842131730298754 * x.body_weight_kg()
        + 1.142965718977502e-9 * c.bun.powf(4.0) * x.non_excised_kidney_volume_ml()
}

/// `Cre + Male + 1 / (k + Vol/Bw)`. Undefined for `Bw = 0`.
pub fn model_6(x: &PredictionInput, _c: &FixedCovariates) -> f64 {
    -0.006961262066861628 + 0.8126766126098913 * x.creatinine_mg_dl()
        + 0.11057326356803435 * x.male()
        + 1.4573284728625062
            / (0.7326765340341233 + x.non_excised_kidney_volume_ml() / x.body_weight_kg())
}

/// `BUN + Bw + Cre + Male + BUN·Vol`
pub fn model_7(x: &PredictionInput, c: &FixedCovariates) -> f64 {
    0.005082859737290714 + 0.03531000856642338 * c.bun
        + 0.00699894215253158 * x.body_weight_kg()
        + 0.7899600124990199 * x.creatinine_mg_dl()
        + 0.10910119812549417 * x.male()
        - 0.0002167791209982864 * c.bun * x.non_excised_kidney_volume_ml()
}

/// `Bw + Cre + 1 / (CVD + HbA1c + Male) + Vol`. Undefined when the divisor sums to 0.
pub fn model_8(x: &PredictionInput, c: &FixedCovariates) -> f64 {
    1.2549512514779957 + 0.005164327440285673 * x.body_weight_kg()
        + 0.8188362941962077 * x.creatinine_mg_dl()
        - 4.127069601506772 / (c.cvd + c.hba1c + x.male())
        - 0.0026704663767301066 * x.non_excised_kidney_volume_ml()
}

/// `Age·BUN + Bw + Cre + BUN³·Vol³`
pub fn model_9(x: &PredictionInput, c: &FixedCovariates) -> f64 {
    -0.15903717053578167 + 0.00025977004836070643 * c.age * c.bun
        + 0.005291867117086743 * x.body_weight_kg()
        + 1.0913423662894317 * x.creatinine_mg_dl()
        - 6.322735119054266e-12 * c.bun.powf(3.0) * x.non_excised_kidney_volume_ml().powf(3.0)
}
