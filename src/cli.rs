use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "agroadvisor",
    version,
    about = "Agro advisory prototype (rule-based recommendations)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the rules document (JSON, or YAML by extension)
    #[arg(short, long, global = true)]
    pub rules: Option<PathBuf>,

    /// Directory for history and report files
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a fertilization recommendation for one soil test
    Recommend(RecommendArgs),
    /// List crops known to the rules document
    Crops,
    /// Interactively write a config file
    Init,
}

/// Numeric values are kept as text so parse errors can name the field.
#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Crop name (e.g. maize, coffee, sesame)
    #[arg(long)]
    pub crop: String,

    /// Soil pH (e.g. 6.2)
    #[arg(long, allow_hyphen_values = true)]
    pub ph: String,

    /// Soil nitrogen index
    #[arg(long, allow_hyphen_values = true)]
    pub n: String,

    /// Soil phosphorus index
    #[arg(long, allow_hyphen_values = true)]
    pub p: String,

    /// Soil potassium index
    #[arg(long, allow_hyphen_values = true)]
    pub k: String,

    /// Expected annual rainfall (mm)
    #[arg(long, allow_hyphen_values = true)]
    pub rainfall: String,

    /// Print the result without writing history or a report
    #[arg(long)]
    pub no_save: bool,
}
