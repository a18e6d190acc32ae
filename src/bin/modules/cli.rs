use clap::{ArgGroup, Args, Parser};
use std::path::PathBuf;

const ABOUT: &str = "A command-line tool for predicting atomic partial charges with a two-stage \
gradient-boosted model over rotation-invariant environment descriptors.";
const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser)]
#[command(version, about = ABOUT, help_template = HELP_TEMPLATE)]
#[command(propagate_version = true)]
#[command(group(ArgGroup::new("input").required(true).args(["files", "directory"])))]
pub struct Cli {
    /// Comma-separated list of XYZ geometry files to process.
    #[arg(short, long, value_name = "FILES", value_delimiter = ',')]
    pub files: Vec<PathBuf>,

    /// Directory of XYZ geometry files (the .xyz extension is obligatory).
    ///
    /// One charge file is written next to each geometry file, with the same base
    /// name and the .charges extension.
    #[arg(short, long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    #[command(flatten)]
    pub models: ModelOptions,

    #[command(flatten)]
    pub calculation: CalculationOptions,
}

/// Options locating the pretrained model artifacts.
#[derive(Args)]
#[command(next_help_heading = "Model Options")]
pub struct ModelOptions {
    /// First-stage model artifact (geometry descriptors to raw charges).
    #[arg(long, value_name = "FILE", default_value = "qboost-model-1.json")]
    pub model1: PathBuf,

    /// Second-stage model artifact (charge statistics to refined charges).
    #[arg(long, value_name = "FILE", default_value = "qboost-model-2.json")]
    pub model2: PathBuf,
}

/// Options for controlling the calculation parameters.
#[derive(Args)]
#[command(next_help_heading = "Calculation Options")]
pub struct CalculationOptions {
    /// Custom descriptor settings file in TOML format.
    ///
    /// If not specified, built-in defaults matching the shipped models are used.
    /// Changing the settings only makes sense together with retrained models.
    #[arg(short = 'S', long, value_name = "FILE")]
    pub settings: Option<PathBuf>,
}
