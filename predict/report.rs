//! Operator-facing text: page description, field guide, and the two possible
//! outcomes of a "Calculate" action.

use crate::input::Field;
use crate::model::PredictionResult;
use std::fmt::Write as FmtWrite;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ja,
}

pub fn title(lang: Language) -> &'static str {
    match lang {
        Language::En => "Predicted creatinine one year after kidney donation",
        Language::Ja => "ドナー腎提供後1年後の予測Cr値",
    }
}

pub fn overview(lang: Language) -> &'static str {
    match lang {
        Language::En => {
            "This tool estimates the donor's serum creatinine one year after donation \
             from body weight, creatinine, non-excised kidney volume and sex."
        }
        Language::Ja => {
            "このアプリは、体重、クレアチニン値、非摘出腎容積、性別を入力して\
             提供1年後のクレアチニン値を計算するツールです。"
        }
    }
}

fn field_description(field: Field, lang: Language) -> &'static str {
    match (lang, field) {
        (Language::En, Field::BodyWeight) => "donor body weight (kg)",
        (Language::En, Field::Creatinine) => "pre-operative serum creatinine (mg/dL)",
        (Language::En, Field::NonExcisedKidneyVolume) => {
            "CT-measured volume of the kidney the donor keeps (mL)"
        }
        (Language::En, Field::Male) => "sex (male: 1, female: 0)",
        (Language::Ja, Field::BodyWeight) => "ドナーの体重（kg単位）",
        (Language::Ja, Field::Creatinine) => "術前の血中クレアチニン値（mg/dL）",
        (Language::Ja, Field::NonExcisedKidneyVolume) => "CTで測定した非摘出腎の容積（単位：mL）",
        (Language::Ja, Field::Male) => "性別（男性: 1、女性: 0）",
    }
}

/// One line per input field: label and what it means.
pub fn field_guide(lang: Language) -> String {
    let mut out = String::new();
    let heading = match lang {
        Language::En => "Input fields",
        Language::Ja => "入力項目の説明",
    };
    let _ = writeln!(out, "{heading}");
    for field in Field::ALL {
        let _ = writeln!(out, "- {}: {}", field.label(), field_description(field, lang));
    }
    out
}

pub fn disclaimer(lang: Language) -> &'static str {
    match lang {
        Language::En => {
            "This result is derived from donors who actually donated a kidney at the \
             Department of Urology, Tokyo Women's Medical University. It may differ \
             from the value you will actually measure."
        }
        Language::Ja => {
            "この結果は東京女子医科大学泌尿器科で実際に腎提供された患者さまのデータを元に算出しています。\
             実際の測定値とは異なる可能性があることをご了承ください。"
        }
    }
}

/// The rendered outcome of one "Calculate" action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Success(String),
    Failure(String),
}

impl Report {
    /// Prediction to two decimals followed by the cohort disclaimer.
    pub fn success(result: &PredictionResult, lang: Language) -> Self {
        let headline = match lang {
            Language::En => format!(
                "Predicted creatinine one year after donation (mg/dL): {:.2}",
                result.median_value
            ),
            Language::Ja => format!(
                "あなたの腎提供1年後の予測クレアチニン値は以下の通りです（単位mg/dL): {:.2}",
                result.median_value
            ),
        };
        Report::Success(format!("{headline}\n\n{}", disclaimer(lang)))
    }

    /// Generic error message carrying the error text verbatim.
    pub fn failure(error: &dyn std::error::Error, lang: Language) -> Self {
        match lang {
            Language::En => Report::Failure(format!("An error occurred: {error}")),
            Language::Ja => Report::Failure(format!("エラーが発生しました: {error}")),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Report::Success(text) | Report::Failure(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Report::Success(_))
    }
}

/// Per-model table for `--show-models`.
pub fn model_breakdown(result: &PredictionResult) -> String {
    let mut out = String::new();
    for (name, value) in result.model_values() {
        let marker = if value == result.median_value { "  <- median" } else { "" };
        let _ = writeln!(out, "{name:<8} {value:>10.6}{marker}");
    }
    out
}
