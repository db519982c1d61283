use clap::{Args, Parser, Subcommand};

use verdante_core::{CompareMode, ReportingRegime};

mod commands;
mod report;

#[derive(Parser)]
#[command(
    name = "verdante",
    about = "Verdante — carbon-aware job estimates and execution plans",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Which document and project to work on.
#[derive(Args)]
struct ProjectArgs {
    /// Project document (.toml or exported .json state)
    #[arg(short, long, default_value = "verdante.toml")]
    file: String,
    /// Project id (default: first project in the document)
    #[arg(short, long)]
    project: Option<String>,
    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute worst-case cost, CO₂, power and time per job and in total
    Estimate {
        #[command(flatten)]
        target: ProjectArgs,
    },
    /// Pick a region and provider for each job
    Plan {
        #[command(flatten)]
        target: ProjectArgs,
        /// Limit the plan to one job id (default: all jobs)
        #[arg(short, long)]
        job: Option<String>,
        /// Objective to compare regions on: auto, greenest, cheapest, fastest
        #[arg(short, long, default_value = "auto")]
        compare: CompareMode,
    },
    /// Simulate a run and print its receipt
    Run {
        #[command(flatten)]
        target: ProjectArgs,
        #[arg(short, long)]
        job: Option<String>,
        #[arg(short, long, default_value = "auto")]
        compare: CompareMode,
        /// Reporting regime: canada, eu, both (default: the project's)
        #[arg(short, long)]
        regime: Option<ReportingRegime>,
        /// Interval between progress ticks in milliseconds
        #[arg(long, default_value_t = 350)]
        tick_ms: u64,
        /// Total simulated run time in milliseconds
        #[arg(long, default_value_t = 9000)]
        duration_ms: u64,
        /// Write the receipt JSON to this path
        #[arg(long)]
        receipt: Option<String>,
    },
    /// Write a sample project document
    Init {
        /// Directory to write into
        #[arg(short, long, default_value = ".")]
        path: String,
        /// Document format: toml or json
        #[arg(long, default_value = "toml")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for target in ["verdante_cli", "verdante_estimate", "verdante_planner", "verdante_runner"] {
        filter = filter.add_directive(format!("{target}=info").parse()?);
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate { target } => {
            commands::estimate::estimate(&target.file, target.project.as_deref(), &target.format)
        }
        Commands::Plan { target, job, compare } => commands::plan::plan(
            &target.file,
            target.project.as_deref(),
            job.as_deref(),
            compare,
            &target.format,
        ),
        Commands::Run {
            target,
            job,
            compare,
            regime,
            tick_ms,
            duration_ms,
            receipt,
        } => {
            let opts = commands::run::RunOptions {
                job,
                compare,
                regime,
                tick_ms,
                duration_ms,
                receipt,
                format: target.format,
            };
            commands::run::run(&target.file, target.project.as_deref(), opts).await
        }
        Commands::Init { path, format } => commands::init::init(&path, &format),
    }
}
