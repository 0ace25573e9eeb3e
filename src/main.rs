use anyhow::Result;
use clap::Parser;
use emopalette::cli::{Cli, Commands};
use emopalette::commands::{self, ExportArgs};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            clarity,
            intensity,
            json,
            language,
        } => commands::handle_classify(&clarity, intensity, json, language),
        Commands::Export {
            input,
            output,
            format,
            config,
        } => commands::handle_export(ExportArgs {
            input,
            output,
            format,
            config,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
