use crate::demo::{run_demo, run_estimate, run_ratio, DemoArgs, EstimateArgs, RatioArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rentwise::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Rentwise",
    about = "Check rent affordability and estimate unit rents from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Analyze a household debt-to-income ratio
    Ratio(RatioArgs),
    /// Estimate the rent range of a unit, or of every building in a property roll
    Estimate(EstimateArgs),
    /// Print a full affordability report for a sample household and building
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Ratio(args) => run_ratio(args),
        Command::Estimate(args) => run_estimate(args),
        Command::Demo(args) => run_demo(args),
    }
}
