//! Coverreg CLI - cover-song registration service
//!
//! # Commands
//!
//! ```bash
//! coverreg serve                         # Start HTTP server (port 3000)
//! coverreg serve --latency-ms 0          # ... without simulated latency
//! coverreg check recording-id USRC17607839
//! coverreg sample-receipt                # Print the fixture receipt
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use coverreg::{sample_receipt, ServerConfig};
use coverreg_shared::validators::{is_valid_email, is_valid_receipt_id, is_valid_recording_id, is_valid_url};

#[derive(Parser)]
#[command(name = "coverreg")]
#[command(about = "Cover-song registration service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on (default: COVERREG_PORT or 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Simulated latency of each endpoint in milliseconds (default: COVERREG_LATENCY_MS or 1200)
        #[arg(long)]
        latency_ms: Option<u64>,

        /// Upstream metadata service base URL (default: COVERREG_METADATA_URL, fixture if unset)
        #[arg(long)]
        metadata_url: Option<String>,
    },

    /// Check the syntax of a value with the same validators as the service
    Check {
        /// Kind of value
        #[arg(value_enum)]
        kind: CheckKind,

        /// Value to check
        value: String,
    },

    /// Print the fixture receipt as JSON
    SampleReceipt,
}

#[derive(Clone, Copy, ValueEnum)]
enum CheckKind {
    RecordingId,
    Email,
    Url,
    ReceiptId,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            latency_ms,
            metadata_url,
        } => cmd_serve(port, latency_ms, metadata_url).await,

        Commands::Check { kind, value } => cmd_check(kind, &value),

        Commands::SampleReceipt => cmd_sample_receipt(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(
    port: Option<u16>,
    latency_ms: Option<u64>,
    metadata_url: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?.with_overrides(port, latency_ms, metadata_url);
    coverreg::server::start_server(config).await?;
    Ok(())
}

fn cmd_check(kind: CheckKind, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (label, valid) = match kind {
        CheckKind::RecordingId => ("ISRC", is_valid_recording_id(value)),
        CheckKind::Email => ("e-mail", is_valid_email(value)),
        CheckKind::Url => ("link", is_valid_url(value)),
        CheckKind::ReceiptId => ("receipt id", is_valid_receipt_id(value)),
    };

    if valid {
        eprintln!("✅ Valid {}: {}", label, value);
        Ok(())
    } else {
        Err(format!("invalid {}: '{}'", label, value).into())
    }
}

fn cmd_sample_receipt() -> Result<(), Box<dyn std::error::Error>> {
    let receipt = sample_receipt("00000000-0000-4000-8000-000000000000");
    println!("{}", serde_json::to_string_pretty(&receipt)?);
    Ok(())
}
