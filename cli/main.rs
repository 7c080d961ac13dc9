#![deny(unused_variables)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(clippy::no_effect_underscore_binding)]

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use donorcre::form::Form;
use donorcre::report::{self, Language, Report};
use donorcre::{CalculatorError, FixedCovariates, PredictionInput, PredictionResult, Predictor, Sex};

// ========================================================================================
//                         COMMAND-LINE INTERFACE DEFINITION
// ========================================================================================

#[derive(Clone, Copy, ValueEnum)]
enum LanguageCli {
    En,
    Ja,
}

impl From<LanguageCli> for Language {
    fn from(lang: LanguageCli) -> Self {
        match lang {
            LanguageCli::En => Language::En,
            LanguageCli::Ja => Language::Ja,
        }
    }
}

#[derive(Args)]
struct DisplayArgs {
    /// TOML file overriding the fixed covariates (age, cvd, hba1c, bun)
    #[arg(long, value_name = "TOML")]
    covariates: Option<PathBuf>,

    /// Also print each of the nine model outputs
    #[arg(long)]
    show_models: bool,

    /// Save the prediction, with the per-model breakdown, to a TOML file
    #[arg(long, value_name = "TOML")]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct PredictArgs {
    /// Body weight (Bw), kg
    #[arg(long, value_name = "KG", allow_hyphen_values = true)]
    bw: f64,

    /// Pre-operative serum creatinine (Cre), mg/dL
    #[arg(long, value_name = "MG_DL", allow_hyphen_values = true)]
    cre: f64,

    /// Non-excised kidney volume measured on CT, mL
    #[arg(long, value_name = "ML", allow_hyphen_values = true)]
    volume: f64,

    /// 1 for male, 0 for female
    #[arg(long, value_name = "1|0", allow_hyphen_values = true)]
    male: String,

    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Parser)]
#[command(
    name = "donorcre",
    version,
    about = "Predict serum creatinine one year after living kidney donation",
    long_about = "Evaluates nine regression equations fitted on a living-donor cohort and \
                 reports their median as the predicted one-year post-donation creatinine."
)]
struct Cli {
    /// Language for page text and messages
    #[arg(long, global = true, value_enum, default_value_t = LanguageCli::En)]
    lang: LanguageCli,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate from command-line measurements
    Predict(PredictArgs),

    /// Enter the measurements at prompts, then calculate
    Interactive(DisplayArgs),

    /// Print the default fixed covariates as TOML, or write them to a file
    Covariates {
        #[arg(long, value_name = "TOML")]
        write: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

// ========================================================================================
//                                 ORCHESTRATION
// ========================================================================================

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let Cli { lang, command } = Cli::parse();
    let lang = Language::from(lang);

    let result = match command {
        Some(Commands::Predict(args)) => run_predict(args, lang),
        Some(Commands::Interactive(args)) => run_interactive(args, lang),
        Some(Commands::Covariates { write }) => run_covariates(write.as_deref()),
        Some(Commands::Version) => {
            print_version_info();
            Ok(())
        }
        None => {
            if let Err(e) = Cli::command().print_help() {
                eprintln!("{e}");
            }
            println!();
            Ok(())
        }
    };

    if let Err(e) = result {
        log::debug!("Calculation failed: {e:?}");
        eprintln!("{}", Report::failure(&e, lang).text());
        process::exit(1);
    }
}

fn load_predictor(path: Option<&Path>) -> Result<Predictor, CalculatorError> {
    let covariates = match path {
        Some(path) => FixedCovariates::load(path)?,
        None => FixedCovariates::default(),
    };
    Ok(Predictor::new(covariates))
}

fn run_predict(args: PredictArgs, lang: Language) -> Result<(), CalculatorError> {
    let predictor = load_predictor(args.display.covariates.as_deref())?;
    let sex: Sex = args.male.parse()?;
    let input = PredictionInput::new(args.bw, args.cre, args.volume, sex)?;
    let result = predictor.predict(&input)?;
    present(&result, &args.display, lang)
}

fn run_interactive(args: DisplayArgs, lang: Language) -> Result<(), CalculatorError> {
    let predictor = load_predictor(args.covariates.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}\n", report::title(lang))?;
    writeln!(out, "{}\n", report::overview(lang))?;
    writeln!(out, "{}", report::field_guide(lang))?;

    let stdin = io::stdin();
    let mut form = Form::new(stdin.lock(), out);
    let input = form.collect()?;
    drop(form);

    let result = predictor.predict(&input)?;
    present(&result, &args, lang)
}

fn present(
    result: &PredictionResult,
    args: &DisplayArgs,
    lang: Language,
) -> Result<(), CalculatorError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", Report::success(result, lang).text())?;
    if args.show_models {
        writeln!(out)?;
        write!(out, "{}", report::model_breakdown(result))?;
    }
    if let Some(path) = &args.output {
        result.save(path)?;
        log::info!("Prediction written to {}", path.display());
    }
    Ok(())
}

fn run_covariates(write: Option<&Path>) -> Result<(), CalculatorError> {
    let defaults = FixedCovariates::default();
    match write {
        Some(path) => {
            defaults.save(path)?;
            println!("Default covariates written to {}", path.display());
        }
        None => print!("{}", defaults.to_toml()?),
    }
    Ok(())
}

fn print_version_info() {
    let version = env!("CARGO_PKG_VERSION");
    let build_timestamp: u64 = env!("DONORCRE_BUILD_TIMESTAMP").parse().unwrap_or(0);

    println!("donorcre {}", version);
    if build_timestamp > 0 {
        println!("Built: {} (unix seconds)", build_timestamp);
    }
}
