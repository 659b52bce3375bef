use clap::Parser;
use log::debug;
use rightsizer::{Cli, init_logger};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logger(cli.debug, cli.quiet) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    debug!("Fixture directory: {}", cli.fixtures.display());

    if let Err(e) = rightsizer::lib::commands::run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
