use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mod_compat::config::Config;

#[derive(Parser)]
#[command(name = "mod-compat")]
#[command(version, about = "Enrich a mods catalog with version compatibility data")]
struct Cli {
    /// Input catalog CSV (overrides MODS_DB_INPUT)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output catalog CSV (overrides MODS_DB_OUTPUT)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env();
    if let Some(input) = cli.input {
        config.input_path = input;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(mod_compat::run(config))
}
