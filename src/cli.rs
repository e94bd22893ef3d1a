use crate::demo::{run_demo, DemoArgs};
use crate::report::{run_report, ReportArgs, ReportKind};
use crate::server;
use clap::{Args, Parser, Subcommand};
use placement_registrar::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Campus Placement Registrar",
    about = "Run the campus placement registrar and its reports from the command line",
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
    /// Print or export placement reports for a seeded roster
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },
    /// Walk through a placement season in memory and print every report
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ReportCommand {
    /// One row per applicant with eligible roles and final offer
    Students(ReportArgs),
    /// One row per drive with its selections
    Drives(ReportArgs),
    /// Selections and average package per company
    Companies(ReportArgs),
    /// Totals across companies with drive counts per category
    Full(ReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// JSON roster loaded before the server accepts requests
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Report { command } => match command {
            ReportCommand::Students(args) => run_report(ReportKind::Students, args),
            ReportCommand::Drives(args) => run_report(ReportKind::Drives, args),
            ReportCommand::Companies(args) => run_report(ReportKind::Companies, args),
            ReportCommand::Full(args) => run_report(ReportKind::Full, args),
        },
        Command::Demo(args) => run_demo(args),
    }
}
