// src/main.rs

use clap::Parser;
use vibeshare::cli::{Cli, Commands};
use vibeshare::commands;
use vibeshare::config::Config;
use vibeshare::logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(&cli.log_level) {
        eprintln!("Warning: {}", e);
    }

    let result = Config::resolve(cli.db).and_then(|config| match cli.command {
        Commands::Init => commands::handle_init(&config),
        Commands::Feed => commands::handle_feed(&config),
        Commands::Create(args) => commands::handle_create(&config, args),
        Commands::Analyze { prompt } => commands::handle_analyze(&config, prompt),
        Commands::Show { id } => commands::handle_show(&config, &id),
        Commands::Del { ids } => commands::handle_del(&config, &ids),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
