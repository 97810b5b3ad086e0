use clap::Parser;

use runsim::cli;
use runsim::error::Result;

use runsim::cli::Args;
use runsim::config::load_simulation_config;

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

// The run is a single sequential loop; no worker threads.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    setup_logging();
    let args = Args::parse();

    if let Err(e) = run_app(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_app(args: Args) -> Result<()> {
    let config = load_simulation_config()?;
    cli::run(args, config).await?;
    Ok(())
}
