//! CLI argument parsing

use clap::Parser;

/// Batch CSV to Parquet conversion over object storage
#[derive(Parser, Debug)]
#[command(name = "parqshift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source storage URI (e.g. s3://bucket/inbound)
    #[arg(long)]
    pub inbound_path: String,

    /// Destination storage URI (e.g. s3://bucket/outbound)
    #[arg(long)]
    pub outbound_path: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
