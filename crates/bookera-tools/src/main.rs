//! Bookera module CLI - Scaffolding for Bookera modules

use anyhow::Result;
use clap::Parser;
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::{ProductConfig, RunOutcome};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Bookera product configuration
#[derive(Clone)]
pub struct BookeraConfig;

impl ProductConfig for BookeraConfig {
    fn name(&self) -> &'static str {
        "bookera-module"
    }

    fn display_name(&self) -> &'static str {
        "Bookera Module TUI"
    }

    fn template_repo_url(&self) -> &'static str {
        "https://github.com/serranolabs-io/bookera-module-template.git"
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: Open README for instructions
        steps.push("Open README.md to get started".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "bookera-module")]
#[command(about = "CLI for scaffolding Bookera modules")]
#[command(version)]
pub struct Args {
    /// Create the module under ./test instead of the current directory (for development use)
    #[arg(long)]
    pub debug: bool,

    /// Read module metadata from a YAML file instead of asking
    #[arg(short, long = "metadata")]
    pub metadata: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl From<&Args> for CreateArgs {
    fn from(args: &Args) -> Self {
        CreateArgs {
            metadata_file: args.metadata.clone(),
            debug: args.debug,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully while prompts are showing
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing(args.verbose);
    let config = BookeraConfig;
    tracing::debug!(product = config.name(), ?args, "starting");

    let result = scaffolder_core::run(&config, CreateArgs::from(&args)).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result? {
        RunOutcome::Completed => Ok(()),
        // In-flight work is not awaited; the module directory may be partially written
        RunOutcome::Quit => std::process::exit(130),
    }
}
