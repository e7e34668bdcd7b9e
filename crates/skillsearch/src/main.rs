mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays parseable with --json
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Version => commands::version::run(),
        Commands::Domains => {
            let config = commands::load_config(cli.config.as_deref(), cli.preset)?;
            commands::domains::run(&config)
        }
        Commands::Search {
            query,
            domain,
            max_results,
            json,
        } => {
            let searcher = commands::searcher(cli.config.as_deref(), cli.preset, cli.data_dir)?;
            commands::search::run(
                &searcher,
                &query.join(" "),
                domain.as_deref(),
                max_results,
                json,
            )
        }
        Commands::Multi {
            query,
            domains,
            max_results,
            json,
        } => {
            let searcher = commands::searcher(cli.config.as_deref(), cli.preset, cli.data_dir)?;
            commands::multi::run(&searcher, &query.join(" "), &domains, max_results, json)
        }
    }
}
