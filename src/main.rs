//! # Encuesta CLI
//!
//! Command-line interface for the form builder.
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! encuesta serve --listen 0.0.0.0:8080
//!
//! # List the element palette
//! encuesta elements
//!
//! # Validate a saved layout file
//! encuesta check layout.json
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use encuesta::{
    FormError,
    designer::DesignerSession,
    element::{element_types, parse_layout},
    server::{ServerConfig, serve},
};

/// Encuesta - drag-and-drop form builder
#[derive(Parser, Debug)]
#[command(name = "encuesta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,
    },

    /// List the element palette
    Elements,

    /// Parse and validate a saved layout file
    Check {
        /// Path to a serialized layout (JSON array of elements)
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), FormError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { listen } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "encuesta=info,tower_http=info".into()),
                )
                .init();

            serve(ServerConfig { listen_addr: listen }).await
        }

        Commands::Elements => {
            println!("Available elements:");
            for meta in element_types() {
                println!("  {:<16} {}", meta.type_name, meta.label);
            }
            Ok(())
        }

        Commands::Check { file } => {
            let json = std::fs::read_to_string(&file)?;
            let parsed = parse_layout(&json)?;

            // Loading through the session also enforces unique ids
            let mut session = DesignerSession::new();
            session.replace_all(parsed)?;

            for (i, instance) in session.elements().iter().enumerate() {
                println!("{:>3}. {:<16} {}", i, instance.element.tag(), instance.id);
            }
            println!("{} element(s), all known", session.elements().len());
            Ok(())
        }
    }
}
