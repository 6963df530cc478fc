use clap::{Parser, Subcommand};
use contract_caller::cmd::{self, CallArgs, RunArgs};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serves the HTTP API.
    Run(RunArgs),
    /// Calls a single read-only contract method and prints the result.
    Call(CallArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    let subscriber =
        FmtSubscriber::builder().with_env_filter(EnvFilter::from_default_env()).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => cmd::run::execute(args).await?,
        Commands::Call(args) => cmd::call::execute(args).await?,
    }

    Ok(())
}
