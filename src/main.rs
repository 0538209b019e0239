mod cli;
mod config;

use clap::Parser;
use config::{CliConfig, DEFAULT_CONFIG_FILE};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "varuint")]
#[command(about = "Encode and decode SQLite4 varuint integers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, help = "Config file path")]
    config: Option<String>,

    #[arg(long, help = "Output as JSON (overrides config)")]
    json: bool,

    #[arg(long, help = "Upper-case hex output (overrides config)")]
    uppercase: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Encode one or more u64 values
    Encode {
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Decode a concatenation of varints given as hex
    Decode { hex: String },
    /// Describe the first varint in a hex string
    Inspect { hex: String },
    /// Print the tier table
    Table,
    GenerateConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Config file path")]
        output: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("varuint=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if cli.json {
        config.json = true;
    }
    if cli.uppercase {
        config.uppercase = true;
    }

    let output = match cli.command {
        Commands::Encode { values } => cli::encode(&values, &config)?,
        Commands::Decode { hex } => cli::decode(&hex, &config)?,
        Commands::Inspect { hex } => cli::inspect(&hex, &config)?,
        Commands::Table => cli::table(&config)?,
        Commands::GenerateConfig { output } => {
            CliConfig::default().save(&output)?;
            info!("Wrote default config to {}", output);
            return Ok(());
        }
    };

    println!("{}", output);
    Ok(())
}
