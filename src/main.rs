//! GridPost - card-grid image post editor
//!
//! Command-line access to presets, style files, the saved-style library,
//! HTML previews and configuration.

use clap::{Parser, Subcommand};
use gridpost::cli::{ConfigArgs, ExitCode, PresetArgs, RenderArgs, StyleArgs};
use gridpost::constants::APP_BINARY_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// GridPost - card-grid image post editor
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect built-in presets
    Preset(PresetArgs),
    /// Import, export and save styles
    Style(StyleArgs),
    /// Render a post to an HTML preview
    Render(RenderArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Preset(args) => args.execute(),
        Command::Style(args) => args.execute(),
        Command::Render(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    let code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };
    std::process::exit(code.code());
}
