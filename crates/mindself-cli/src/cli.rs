use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mindself_instruments::scoring::ScaleCategory;

#[derive(Debug, Parser)]
#[command(name = "mindself", version, about = "Take and track self-assessment questionnaires")]
pub struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available scales
    List {
        /// Only show scales in this category (e.g. depression, self_esteem)
        #[arg(long)]
        category: Option<ScaleCategory>,
    },
    /// Show a scale's questions, options and cut points
    Show { scale_id: String },
    /// Take a scale interactively
    Take { scale_id: String },
    /// Score a full set of answers, given as option indices
    Score {
        scale_id: String,
        #[arg(required = true)]
        answers: Vec<u32>,
        /// Print the result without saving it to history
        #[arg(long)]
        dry_run: bool,
    },
    /// List saved results, newest first
    History {
        #[arg(long)]
        scale: Option<String>,
    },
    /// Show one scale's scores over time
    Trend { scale_id: String },
    /// Show totals and the current day streak
    Stats,
    /// Delete all saved results
    ClearHistory,
    /// Delete one saved result
    Forget { record_id: String },
    /// Show or change settings
    Config {
        #[arg(long)]
        retention: Option<usize>,
        /// IANA time zone name, e.g. Asia/Shanghai
        #[arg(long)]
        time_zone: Option<String>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}
