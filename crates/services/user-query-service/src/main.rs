//! User Query - CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_query_service_lib::{cli::Cli, config::QueryServiceConfig};

fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration (CLI flags win over env)
    let config = QueryServiceConfig::from_env().with_users_file(cli.users);

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose, &config.service.log_level);
    let _span = tracing::info_span!("service", name = %config.service.service_name).entered();
    tracing::debug!(?config, "Configuration loaded");

    let command = cli.command.into_query(&config.default_delimiter);

    match user_query_service_lib::run(&config, &command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(code = e.code(), "Query failed: {}", e.user_message());
            std::process::exit(1);
        }
    }
}

/// Initialize tracing subscriber, logging to stderr so stdout stays JSON
fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
