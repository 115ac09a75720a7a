//! `evcoid` CLI.

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err.user_message());
        std::process::exit(1);
    }
}

/// Internal module.
mod commands;
/// Internal module.
mod config;
/// Internal module.
mod error;
/// Internal module.
mod output;
/// Internal module.
mod util;

use clap::{Parser, Subcommand};
use config::Preferences;
use error::{CliError, Result};
use output::Output;

#[derive(Parser)]
#[command(name = "evcoid")]
#[command(about = "E-Mobility contract ID check digit tool", version)]
#[command(arg_required_else_help = true)]
/// Internal struct.
struct Cli {
    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (only results and errors).
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    /// Internal field.
    command: Commands,
}

#[derive(Subcommand)]
/// Internal enum.
enum Commands {
    /// Compute the check digit of a contract ID.
    Compute(commands::compute::CmdArgs),

    /// Verify the check digit of a 15-character contract ID.
    Verify(commands::verify::CmdArgs),

    /// Show the parts of a contract ID.
    Parse(commands::parse::CmdArgs),
}

/// Internal struct.
struct Context {
    /// Internal field.
    out: Output,
    /// Emit JSON instead of text.
    json: bool,
    /// Prefer the `CC-PPP-IIIIIIIII-D` form when printing full IDs.
    hyphenated: bool,
}

/// Internal helper function.
fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet && cli.verbose {
        return Err(CliError::Message(
            "--quiet and --verbose cannot be used together".to_string(),
        ));
    }

    let out = Output::new(cli.quiet, cli.verbose);
    let prefs = match Preferences::load() {
        Ok(prefs) => prefs,
        Err(err) => {
            out.warn_user(format!("ignoring config: {err}"));
            Preferences::default()
        }
    };

    let ctx = Context {
        out,
        json: cli.json || prefs.json.unwrap_or(false),
        hyphenated: prefs.hyphenated.unwrap_or(false),
    };

    match cli.command {
        Commands::Compute(args) => commands::compute::run(&ctx, &args),
        Commands::Verify(args) => commands::verify::run(&ctx, &args),
        Commands::Parse(args) => commands::parse::run(&ctx, &args),
    }
}
