use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::style::Metric;

/// Dashboard data-engine CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "munidash", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the dashboard page spec from a data directory (forbids stdout)
    Render(RenderArgs),

    /// Report join coverage between the dataset and the boundary file
    Check(CheckArgs),
}

/// Map metric, spelled the way the selection UI spells it.
#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum MetricArg {
    Cluster,
    Mortalidade,
    Pib,
    Prenatal,
    Icsap,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Cluster => Metric::Cluster,
            MetricArg::Mortalidade => Metric::InfantMortality,
            MetricArg::Pib => Metric::GdpPerCapita,
            MetricArg::Prenatal => Metric::PrenatalCoverage,
            MetricArg::Icsap => Metric::AvoidableAdmissions,
        }
    }
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Data directory holding the dataset and boundary files
    #[arg(value_hint = ValueHint::DirPath)]
    pub data_dir: PathBuf,

    /// Configuration file (JSON), relative to the data directory
    #[arg(short, long)]
    pub config: Option<String>,

    /// States to select, e.g. SP,RJ (defaults to the configured preselection)
    #[arg(long, value_delimiter = ',')]
    pub states: Vec<String>,

    /// Lower population bound (defaults to the dataset minimum)
    #[arg(long)]
    pub pop_min: Option<i64>,

    /// Upper population bound (defaults to the dataset maximum)
    #[arg(long)]
    pub pop_max: Option<i64>,

    /// Metric coloring the map
    #[arg(long, value_enum, default_value = "cluster")]
    pub metric: MetricArg,

    /// Municipality names for the comparison panel, comma separated
    #[arg(long, value_delimiter = ',')]
    pub compare: Vec<String>,

    /// Metric for the comparison chart
    #[arg(long, value_enum, default_value = "mortalidade")]
    pub compare_metric: MetricArg,

    /// Output spec file (must be a file path; "-" is rejected)
    #[arg(short, long, value_hint = ValueHint::FilePath, default_value = "dashboard.json")]
    pub output: PathBuf,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Data directory holding the dataset and boundary files
    #[arg(value_hint = ValueHint::DirPath)]
    pub data_dir: PathBuf,

    /// Configuration file (JSON), relative to the data directory
    #[arg(short, long)]
    pub config: Option<String>,
}
