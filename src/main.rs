mod cli;
mod error;
mod fmt;
mod log;
mod models;
mod parser;
mod settings;
mod store;
mod validation;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let paths = settings::load_settings().paths(cli.file.as_deref());

    let result = match cli.command {
        Commands::Init { data_file } => cli::init::run(data_file, cli.file.as_deref()),
        Commands::Load { path } => cli::load::run(&path),
        Commands::List => cli::list::run(&paths),
        Commands::Add { command } => cli::add::run(&paths, &command),
        Commands::WriteOff { position, date } => cli::write_off::run(&paths, position, &date),
        Commands::Remove { position } => cli::remove::run(&paths, position),
        Commands::Status => cli::status::run(&paths),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
