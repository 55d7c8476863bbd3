//! Charm-style CLI flow using cliclack

use super::form;
use super::terminal::{KeyListener, TerminalSink};
use crate::config::ScaffoldConfig;
use crate::metadata::{self, ModuleMetadata};
use crate::pipeline::{self, Orchestrator, RunOutcome, ScaffoldPlan};
use crate::product::ProductConfig;
use crate::runtime::{check, GitCloner};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;

/// CLI arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Read the module metadata from a YAML file instead of asking
    pub metadata_file: Option<PathBuf>,

    /// Nest the generated module under the product's debug directory
    pub debug: bool,
}

/// Run the CLI: collect metadata, then clone and template with a progress display
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<RunOutcome> {
    cliclack::intro(format!("Welcome to the {}", config.display_name()))?;

    // Step 1: Git is needed for the clone phase
    handle_git_check()?;

    // Step 2: Collect metadata
    let metadata = collect_metadata(&args)?;

    // Step 3: Resolve where the module goes
    let scaffold = ScaffoldConfig::from_current_dir(args.debug).with_debug_dir(config.debug_dir());
    let plan = ScaffoldPlan::new(metadata, config.template_repo_url(), &scaffold);
    let target_dir = plan.target_dir.clone();
    cliclack::log::info(format!(
        "Creating {} in {}",
        plan.metadata.package_name(),
        target_dir.display()
    ))?;

    // Step 4: Clone and template
    let outcome = run_pipeline(plan, scaffold.tick).await?;

    // Step 5: Show next steps
    if outcome == RunOutcome::Completed {
        print_next_steps(config, &target_dir)?;
    }

    Ok(outcome)
}

fn handle_git_check() -> Result<()> {
    let git = check::check_git();
    if !git.available {
        cliclack::log::error("Git is not installed")?;
        anyhow::bail!("Please install git (https://git-scm.com) and try again.");
    }
    cliclack::log::success(format!(
        "{} installed ({})",
        git.name,
        git.version.as_deref().unwrap_or("unknown")
    ))?;
    Ok(())
}

fn collect_metadata(args: &CreateArgs) -> Result<ModuleMetadata> {
    match &args.metadata_file {
        Some(path) => {
            cliclack::log::info(format!("Using metadata from {}", path.display()))?;
            metadata::file::load(path)
                .with_context(|| format!("Failed to load metadata from {}", path.display()))
        }
        None => form::collect_metadata(),
    }
}

async fn run_pipeline(plan: ScaffoldPlan, tick: Duration) -> Result<RunOutcome> {
    let mut orchestrator = Orchestrator::new(plan, GitCloner::new());
    let mut sink = TerminalSink::stdout();
    let (keys_tx, mut keys) = mpsc::channel(8);

    // Keys are only read from a real terminal
    let listener = if sink.is_term() {
        sink.hide_cursor()?;
        Some(KeyListener::spawn(keys_tx).context("Failed to enable raw terminal mode")?)
    } else {
        drop(keys_tx);
        None
    };

    let result = pipeline::run(&mut orchestrator, &mut sink, &mut keys, tick).await;

    drop(listener);
    sink.release()?;

    Ok(result?)
}

fn print_next_steps<C: ProductConfig>(config: &C, target_dir: &Path) -> Result<()> {
    let steps = config.next_steps(target_dir);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
