use log::{debug, info, warn};
use std::path::Path;

use crate::Result;
use crate::lib::analyser::analyse_instances;
use crate::lib::cli::{Cli, Commands, ModeCommand, RecommendArgs};
use crate::lib::config::{AppConfig, Mode};
use crate::lib::mock::{MockCostProvider, MockInstanceSource, MockMetricsProvider};
use crate::lib::output::RecommenderOutput;
use crate::lib::providers::InstanceSource;
use crate::lib::report::{RecommendationFilter, sort_recommendations};

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => AppConfig::default_path()?,
    };

    match &cli.command {
        Commands::Discover => discover(&cli, &config_path).await,
        Commands::Recommend(args) => recommend(&cli, &config_path, args).await,
        Commands::Mode(ModeCommand::Show) => show_mode(&config_path),
        Commands::Mode(ModeCommand::Set { mode }) => set_mode(&config_path, *mode),
    }
}

/// Decide which data source this run uses
///
/// No live backend ships with this build, so `real` falls back to the
/// fixtures with a warning.
pub fn resolve_mode(use_mock: bool, config_path: &Path) -> Mode {
    if use_mock {
        debug!("Mode override: mock (via --use-mock)");
        return Mode::Mock;
    }

    let stored = match AppConfig::load_from(config_path) {
        Ok(config) => config.mode,
        Err(e) => {
            warn!("Could not load config: {}, defaulting to mock mode", e);
            Mode::Mock
        }
    };

    if stored == Mode::Real {
        warn!("Live provider unavailable, switching to mock mode");
    }
    Mode::Mock
}

async fn discover(cli: &Cli, config_path: &Path) -> Result<()> {
    let mode = resolve_mode(cli.use_mock, config_path);
    info!("Mode: {}", mode);

    let source = MockInstanceSource::new(&cli.fixtures);
    let instances = source.list_instances().await?;

    if instances.is_empty() {
        println!("No instances found.");
        return Ok(());
    }

    println!("Discovered instances:");
    for instance in &instances {
        println!(
            " - {} ({}) [{}]",
            instance.id, instance.instance_type, instance.state
        );
    }

    if source.is_mock() {
        info!("Using mock data from {}", cli.fixtures.display());
    }
    Ok(())
}

async fn recommend(cli: &Cli, config_path: &Path, args: &RecommendArgs) -> Result<()> {
    let mode = resolve_mode(cli.use_mock, config_path);
    info!("Mode: {}", mode);

    let source = MockInstanceSource::new(&cli.fixtures);
    let metrics = MockMetricsProvider::new(&cli.fixtures);
    let costs = MockCostProvider::new(&cli.fixtures);

    let instances = source.list_instances().await?;
    if instances.is_empty() {
        info!("No instances found");
    }

    let recommendations = analyse_instances(
        &instances,
        &metrics,
        &costs,
        args.metric_hours,
        args.cost_days,
    )
    .await?;

    let filter = RecommendationFilter {
        state: args.state.clone(),
        only_downsize: args.only_downsize,
        only_upsize: args.only_upsize,
        min_cpu: args.min_cpu,
    };
    let mut recommendations = filter.apply(recommendations);
    sort_recommendations(&mut recommendations, args.sort);

    let output = RecommenderOutput::new(
        mode,
        args.metric_hours,
        args.cost_days,
        instances.len(),
        recommendations,
    );
    println!("{}", output.to_json_pretty()?);

    if source.is_mock() {
        info!("Using mock data from {}", cli.fixtures.display());
    }
    Ok(())
}

fn show_mode(config_path: &Path) -> Result<()> {
    match AppConfig::load_from(config_path) {
        Ok(config) => println!("Current mode: {}", config.mode),
        Err(e) => {
            warn!("Error loading config: {}", e);
            println!("Current mode: {} (default)", Mode::default());
        }
    }
    Ok(())
}

fn set_mode(config_path: &Path, mode: Mode) -> Result<()> {
    AppConfig::new(mode).save_to(config_path)?;
    println!("Mode successfully updated to: {}", mode);
    Ok(())
}
