use clap::{Args, Parser, Subcommand, ValueEnum};
use protparam::engine::config::{CystineModel, MassType};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "ProtParam++ Developers",
    version,
    about = "ProtParam++ CLI - Compute molecular weight, isoelectric point, extinction coefficients, GRAVY and composition of protein sequences.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for batch analysis.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S isoelectric.pka-scale=emboss
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single protein sequence given inline, in a file, or on stdin.
    Analyze(AnalyzeArgs),
    /// Analyze every record of a multi-record FASTA file in parallel.
    Batch(BatchArgs),
    /// Download a sequence from the RCSB Protein Data Bank and analyze it.
    Fetch(FetchArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Sequence text (one-letter codes). A leading '>' line is treated as a FASTA header.
    #[arg(value_name = "SEQUENCE", conflicts_with = "input")]
    pub sequence: Option<String>,

    /// Read the sequence from a file instead. Use '-' for stdin.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub analysis: AnalysisOverrides,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Path to a FASTA file with one or more records.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    #[command(flatten)]
    pub analysis: AnalysisOverrides,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `fetch` subcommand.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Four-character PDB identifier (e.g., 1CRN).
    #[arg(value_name = "PDB_ID")]
    pub pdb_id: String,

    /// Override the download timeout in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub analysis: AnalysisOverrides,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Command-line overrides for the analysis parameters.
#[derive(Args, Debug, Clone, Default)]
pub struct AnalysisOverrides {
    /// Override the isotope masses used for the molecular weight.
    #[arg(long, value_enum, value_name = "TYPE")]
    pub mass_type: Option<MassTypeArg>,

    /// Override how cysteines count towards the cystine extinction coefficient.
    #[arg(long, value_enum, value_name = "MODEL")]
    pub cystine_model: Option<CystineModelArg>,

    /// Override the pKa scale.
    /// Can be a built-in name ('bjellqvist', 'emboss') or a path to a TOML scale file.
    #[arg(short = 'p', long, value_name = "NAME_OR_PATH")]
    pub pka_scale: Option<String>,

    /// Override the minimum number of residues a sequence must have.
    #[arg(long, value_name = "INT")]
    pub min_length: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format of the report.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassTypeArg {
    Average,
    Monoisotopic,
}

impl From<MassTypeArg> for MassType {
    fn from(arg: MassTypeArg) -> Self {
        match arg {
            MassTypeArg::Average => MassType::Average,
            MassTypeArg::Monoisotopic => MassType::Monoisotopic,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CystineModelArg {
    PerCysteine,
    PairedOnly,
}

impl From<CystineModelArg> for CystineModel {
    fn from(arg: CystineModelArg) -> Self {
        match arg {
            CystineModelArg::PerCysteine => CystineModel::PerCysteine,
            CystineModelArg::PairedOnly => CystineModel::PairedOnly,
        }
    }
}
