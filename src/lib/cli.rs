use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::lib::config::Mode;
use crate::lib::report::SortKey;

/// Compute instance rightsizing
///
/// Correlates CPU utilisation with cost and recommends downsizing,
/// upsizing or keeping each instance.
#[derive(Parser, Debug)]
#[command(name = "rightsizer", author, version, about, styles=get_styles())]
pub struct Cli {
    /// Force mock mode for this run (overrides the stored mode)
    #[arg(long, global = true)]
    pub use_mock: bool,

    /// Enable debug logging output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress log output to stderr (logs still written to file)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory holding the mock fixtures
    #[arg(long, value_name = "DIR", default_value = "testdata", global = true)]
    pub fixtures: PathBuf,

    /// Config file to use instead of the platform default
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List discovered instances
    Discover,

    /// Analyse instances and print recommendations as JSON
    Recommend(RecommendArgs),

    /// Show or change the stored data-source mode
    #[command(subcommand)]
    Mode(ModeCommand),
}

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    /// Hours of CPU metrics to analyse
    #[arg(long, default_value = "24")]
    pub metric_hours: u32,

    /// Days of cost data to analyse
    #[arg(long, default_value = "30")]
    pub cost_days: u32,

    /// Sort recommendations (descending)
    #[arg(long, value_enum, default_value = "none")]
    pub sort: SortKey,

    /// Show only downsize recommendations
    #[arg(long, conflicts_with = "only_upsize")]
    pub only_downsize: bool,

    /// Show only upsize recommendations
    #[arg(long)]
    pub only_upsize: bool,

    /// Filter by instance state (e.g. running, stopped)
    #[arg(long)]
    pub state: Option<String>,

    /// Minimum average CPU (%)
    #[arg(long, default_value = "0")]
    pub min_cpu: f64,
}

#[derive(Subcommand, Debug)]
pub enum ModeCommand {
    /// Show the current mode
    Show,

    /// Set the mode used by subsequent runs
    Set {
        #[arg(value_enum)]
        mode: Mode,
    },
}

/// Set color and variants for help description
///
/// Thanks to [Praveen Perera](https://stackoverflow.com/a/76916424)
fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))),
        )
}
