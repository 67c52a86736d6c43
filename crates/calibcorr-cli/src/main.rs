// crates/calibcorr-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "calibcorr-cli")]
#[command(about = "HCAL run-dependent correction table tools", long_about = None)]
pub struct Cli {
    /// Per-row and per-query diagnostics
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up the correction factor of one channel in one run
    Lookup(cmd::lookup::LookupArgs),

    /// Print periods, entry counts and load diagnostics of a table
    Inspect(cmd::inspect::InspectArgs),

    /// Pack (subdet, ieta, iphi, depth) into a canonical channel id
    Encode(cmd::detid::EncodeArgs),

    /// Unpack a channel id (legacy or canonical) and show its canonical form
    Decode(cmd::detid::DecodeArgs),
}

fn init_logging(debug: bool) {
    let fallback = if debug { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stdout)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.cmd {
        Commands::Lookup(args) => cmd::lookup::run(args, cli.debug),
        Commands::Inspect(args) => cmd::inspect::run(args, cli.debug),
        Commands::Encode(args) => cmd::detid::run_encode(args),
        Commands::Decode(args) => cmd::detid::run_decode(args),
    }
}
