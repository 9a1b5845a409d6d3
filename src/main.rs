//! trendware-tools CLI entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use trendware_tools::config::Config;
use trendware_tools::tools::ToolRunner;

#[derive(Parser)]
#[command(name = "trendware-tools")]
#[command(about = "Tool server exposing product search and discount derivation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the tool server
    Serve {
        /// Bind host (overrides REPO_BIND_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides REPO_BIND_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List registered tool definitions
    Tools,

    /// Invoke a tool once and print its result
    Call {
        /// Tool name
        name: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    ctrlc::set_handler(|| {
        println!("\nShutting down");
        std::process::exit(0);
    })
    .ok();

    let cli = Cli::parse();
    let config = Config::from_env().validate()?;

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            println!("Starting tool server on http://{}", config.bind_addr());
            trendware_tools::server::run(&config).await?;
        }

        Commands::Tools => {
            let runner = ToolRunner::new_with_defaults(&config)?;
            for def in runner.definitions() {
                println!("{}  {}", def.name, def.description);
            }
        }

        Commands::Call { name, args } => {
            let params: serde_json::Value = serde_json::from_str(&args)?;
            let runner = ToolRunner::new_with_defaults(&config)?;
            let result = runner.execute(&name, params).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
