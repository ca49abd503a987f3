use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// fox2it - Fox 2 IT Solutions landing site
#[derive(Parser)]
#[command(name = "fox2it")]
#[command(about = "Landing page and contact form for Fox 2 IT Solutions", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Send a contact message through the configured gateway
    Submit {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = fox2it::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    fox2it::observability::init_observability(
        "fox2it",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Submit {
            name,
            email,
            message,
        } => cli::submit::submit(config, name, email, message).await,
    }
}
