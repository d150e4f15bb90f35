use crate::demo::{run_assess, run_demo, run_roster, AssessArgs, DemoArgs, RosterArgs};
use crate::server;
use crate::workforce::{run_workforce, WorkforceCommand};
use clap::{Args, Parser, Subcommand};
use people_analytics::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "People Analytics",
    about = "Score employee turnover risk and compute workforce KPIs from the command line",
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
    /// Score a single employee profile
    Assess(AssessArgs),
    /// Score every employee in a CSV roster
    Roster(RosterArgs),
    /// Compute a workforce KPI
    Workforce {
        #[command(subcommand)]
        command: WorkforceCommand,
    },
    /// Walk through sample profiles and dashboard KPIs
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
        Command::Assess(args) => run_assess(args),
        Command::Roster(args) => run_roster(args),
        Command::Workforce { command } => run_workforce(command),
        Command::Demo(args) => run_demo(args),
    }
}
