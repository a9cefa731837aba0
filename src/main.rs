//! chainaudit: multi-AI supply-chain arbitration demo dashboard
//!
//! Interactive terminal dashboard plus non-interactive module reports.

#![allow(clippy::needless_pass_by_value)]

use anyhow::Result;
use chainaudit::{
    cli,
    config::{CliOverrides, DashboardModule},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chainaudit")]
#[command(version)]
#[command(about = "Multi-AI supply-chain arbitration demo dashboard", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    3  Error occurred

EXAMPLES:
    # Interactive dashboard (summary when not on a terminal)
    chainaudit dashboard

    # Scenario readout for a different baseline price
    chainaudit scenario --base-price 15.5 --risk-threshold 75 -o summary

    # Triple-conflict cases as JSON
    chainaudit cases --case-filter triple -o json

All data shown is simulated.")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Slider positions
#[derive(Args)]
struct ParameterArgs {
    /// Baseline price in units of 10,000 yuan (10.0-20.0)
    #[arg(long)]
    base_price: Option<f64>,

    /// Risk threshold (0-100); below 70 rates the supplier high risk
    #[arg(long)]
    risk_threshold: Option<u8>,
}

/// Output selection
#[derive(Args)]
struct OutputArgs {
    /// Output format (auto detects TTY)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `dashboard` subcommand
#[derive(Args)]
struct DashboardArgs {
    /// Module shown first
    #[arg(short, long, value_enum, default_value = "scenario")]
    module: DashboardModule,

    #[command(flatten)]
    parameters: ParameterArgs,

    /// Case library filter: all, triple, double, single
    #[arg(long)]
    case_filter: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the single-module report subcommands
#[derive(Args)]
struct ModuleArgs {
    #[command(flatten)]
    parameters: ParameterArgs,

    /// Case library filter: all, triple, double, single
    #[arg(long)]
    case_filter: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard
    Dashboard(DashboardArgs),

    /// Render the conflict scenario simulation
    Scenario(ModuleArgs),

    /// Render the arbitration workflow
    Workflow(ModuleArgs),

    /// Render the case library
    Cases(ModuleArgs),

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .chainaudit.yaml in the current directory
    Init,
    /// Print the JSON Schema of the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn overrides(
    parameters: &ParameterArgs,
    case_filter: Option<String>,
    output: OutputArgs,
    no_color: bool,
) -> CliOverrides {
    CliOverrides {
        base_price: parameters.base_price,
        risk_threshold: parameters.risk_threshold,
        case_filter,
        format: output.output,
        file: output.output_file,
        no_color,
    }
}

/// Log sink: stderr, or nowhere while the dashboard owns the terminal.
fn log_writer() -> Box<dyn io::Write> {
    if chainaudit::tui::terminal_active() {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let log_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(log_writer),
        )
        .init();
}

fn run_module(
    module: DashboardModule,
    args: ModuleArgs,
    config_path: Option<&Path>,
    quiet: bool,
    no_color: bool,
) -> Result<i32> {
    let overrides = overrides(&args.parameters, args.case_filter, args.output, no_color);
    let (config, loaded_from) = cli::resolve_config(config_path, &overrides, module, quiet)?;
    cli::run_report(config, loaded_from)
}

fn run(cli: Cli) -> Result<i32> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Dashboard(args) => {
            let overrides = overrides(&args.parameters, args.case_filter, args.output, cli.no_color);
            let (config, loaded_from) =
                cli::resolve_config(config_path, &overrides, args.module, cli.quiet)?;
            cli::run_dashboard(config, loaded_from)
        }

        Commands::Scenario(args) => {
            run_module(DashboardModule::Scenario, args, config_path, cli.quiet, cli.no_color)
        }
        Commands::Workflow(args) => {
            run_module(DashboardModule::Workflow, args, config_path, cli.quiet, cli.no_color)
        }
        Commands::Cases(args) => {
            run_module(DashboardModule::Cases, args, config_path, cli.quiet, cli.no_color)
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Show => cli::run_config_show(config_path)?,
                ConfigAction::Path => eprint!("{}", cli::config_paths_report(config_path)),
                ConfigAction::Init => {
                    let dir = std::env::current_dir()?;
                    let target = cli::run_config_init(&dir)?;
                    eprintln!("Created {}", target.display());
                }
                ConfigAction::Schema { output } => cli::run_config_schema(output.as_deref())?,
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "chainaudit", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}
