mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

/// Log to stderr; `RUST_LOG` overrides the level picked by `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.store_config();
    match cli.command {
        Commands::List {
            search,
            queries,
            output_type,
        } => commands::list(&config, &search, &queries, output_type),
        Commands::Get { key } => commands::get(&config, &key),
        Commands::Dump { output } => commands::dump(&config, output.as_deref()),
        Commands::Browse { page_size } => commands::browse(&config, page_size),
    }
}
