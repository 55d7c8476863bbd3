//! End-to-end pipeline runs against a fixture template instead of a real clone

use async_trait::async_trait;
use scaffolder_core::error::FsAction;
use scaffolder_core::pipeline::{self, Frame, FrameSink, KeyAction, RunOutcome};
use scaffolder_core::{
    ModuleMetadata, Orchestrator, PipelineStep, RenderMode, RepoCloner, ScaffoldConfig,
    ScaffoldError, ScaffoldPlan,
};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;

const TICK: Duration = Duration::from_millis(1);

/// Writes a small module template into the target directory
struct FixtureCloner;

#[async_trait]
impl RepoCloner for FixtureCloner {
    async fn clone_repo(&self, _url: &str, target: &Path) -> scaffolder_core::Result<()> {
        let write = |rel: &str, content: &str| -> scaffolder_core::Result<()> {
            let path = target.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| io_error(FsAction::Create, parent, e))?;
            }
            fs::write(&path, content).map_err(|e| io_error(FsAction::Write, &path, e))
        };

        write("package.json", "{\n  \"name\": \"{package_name}\",\n  \"description\": \"{description}\"\n}\n")?;
        write(
            "src/{module_name_kc}.ts",
            "export class $ModuleElementName {\n  title = '{module_name_hr}';\n  renderModes: [];\n}\n",
        )?;
        write(
            "src/tab.ts",
            "const icon = '{tab.icon}';\nthis.removeTab();\nconst side = '{tab.side}';\n",
        )?;
        write("src/main.ts", "import { $moduleElementName } from './{module_element_kc}';\n")?;
        write("LICENSE", "MIT\n")?;
        Ok(())
    }
}

fn io_error(action: FsAction, path: &Path, source: io::Error) -> ScaffoldError {
    ScaffoldError::Filesystem {
        action,
        path: path.to_path_buf(),
        source,
    }
}

/// Never finishes, so only a key press can end the run
struct HangingCloner;

#[async_trait]
impl RepoCloner for HangingCloner {
    async fn clone_repo(&self, _url: &str, _target: &Path) -> scaffolder_core::Result<()> {
        std::future::pending::<()>().await;
        Ok(())
    }
}

struct FailingCloner;

#[async_trait]
impl RepoCloner for FailingCloner {
    async fn clone_repo(&self, url: &str, _target: &Path) -> scaffolder_core::Result<()> {
        Err(ScaffoldError::Subprocess {
            command: format!("git clone {}", url),
            detail: "exit code 128: repository not found".to_string(),
        })
    }
}

/// Leaves a tokenized file whose renamed path is already taken
struct ClashingCloner;

#[async_trait]
impl RepoCloner for ClashingCloner {
    async fn clone_repo(&self, _url: &str, target: &Path) -> scaffolder_core::Result<()> {
        for name in ["reading-list-element.ts", "{module_name_kc}.ts"] {
            let path = target.join(name);
            fs::write(&path, "{package_name}").map_err(|e| io_error(FsAction::Write, &path, e))?;
        }
        Ok(())
    }
}

struct PanickingCloner;

#[async_trait]
impl RepoCloner for PanickingCloner {
    async fn clone_repo(&self, _url: &str, _target: &Path) -> scaffolder_core::Result<()> {
        panic!("clone crashed");
    }
}

#[derive(Default)]
struct RecordingSink {
    frames: Vec<String>,
    finished: Option<String>,
    suspends: usize,
}

impl FrameSink for RecordingSink {
    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.text.clone());
        Ok(())
    }

    fn finish(&mut self, frame: &Frame) -> io::Result<()> {
        self.finished = Some(frame.text.clone());
        Ok(())
    }

    fn suspend(&mut self) -> io::Result<()> {
        self.suspends += 1;
        Ok(())
    }
}

fn side_panel_metadata() -> ModuleMetadata {
    let mut metadata = ModuleMetadata::new(
        "reading list",
        "Keeps track of books",
        [RenderMode::SidePanel, RenderMode::Panel],
    );
    if let Some(tab) = metadata.ensure_tab_defaults() {
        tab.icon = "book".to_string();
        tab.show_by_default = true;
        tab.show_on_left_side = false;
    }
    metadata
}

fn plan(base: &Path, metadata: ModuleMetadata, debug: bool) -> ScaffoldPlan {
    let config = ScaffoldConfig::new(base, debug);
    ScaffoldPlan::new(metadata, "https://example.invalid/template.git", &config)
}

#[tokio::test]
async fn test_full_run_produces_templated_module() {
    let dir = tempfile::tempdir().unwrap();
    let mut orchestrator = Orchestrator::new(plan(dir.path(), side_panel_metadata(), false), FixtureCloner);
    let mut sink = RecordingSink::default();
    let (_keys_tx, mut keys) = mpsc::channel(1);

    let outcome = pipeline::run(&mut orchestrator, &mut sink, &mut keys, TICK)
        .await
        .unwrap();

    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(orchestrator.step(), PipelineStep::Done);
    assert_eq!(sink.finished.as_deref(), Some("Enjoy "));

    let module = dir.path().join("reading-list");
    let package = fs::read_to_string(module.join("package.json")).unwrap();
    assert!(package.contains("\"name\": \"bookera-reading-list\""));
    assert!(package.contains("\"description\": \"Keeps track of books\""));

    assert!(!module.join("src/{module_name_kc}.ts").exists());
    let element = fs::read_to_string(module.join("src/reading-list-element.ts")).unwrap();
    assert_eq!(
        element,
        "export class ReadingListElement {\n  title = 'Reading List';\n  renderModes: ['renderInSidePanel', 'renderInPanel'];\n}\n"
    );

    let tab = fs::read_to_string(module.join("src/tab.ts")).unwrap();
    assert_eq!(tab, "const icon = 'book';\n\nconst side = 'right';\n");

    let main = fs::read_to_string(module.join("src/main.ts")).unwrap();
    assert_eq!(
        main,
        "import { readingListElement } from './reading-list-element';\n"
    );

    assert_eq!(fs::read_to_string(module.join("LICENSE")).unwrap(), "MIT\n");
}

#[tokio::test]
async fn test_frames_follow_phase_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut orchestrator = Orchestrator::new(plan(dir.path(), side_panel_metadata(), false), FixtureCloner);
    let mut sink = RecordingSink::default();
    let (_keys_tx, mut keys) = mpsc::channel(1);

    pipeline::run(&mut orchestrator, &mut sink, &mut keys, TICK)
        .await
        .unwrap();

    let phase = |text: &str| {
        if text.starts_with("Cloning repo") {
            PipelineStep::Cloning
        } else if text.starts_with("Creating template") {
            PipelineStep::Templating
        } else {
            PipelineStep::Done
        }
    };
    let phases: Vec<PipelineStep> = sink.frames.iter().map(|f| phase(f)).collect();
    assert!(phases.windows(2).all(|w| w[0] <= w[1]), "phases went backwards: {phases:?}");
    assert!(phases.contains(&PipelineStep::Templating));
}

#[tokio::test]
async fn test_debug_run_nests_under_test_dir() {
    let dir = tempfile::tempdir().unwrap();
    let metadata = ModuleMetadata::new("notes", "", [RenderMode::Daemon]);
    let mut orchestrator = Orchestrator::new(plan(dir.path(), metadata, true), FixtureCloner);
    let mut sink = RecordingSink::default();
    let (_keys_tx, mut keys) = mpsc::channel(1);

    pipeline::run(&mut orchestrator, &mut sink, &mut keys, TICK)
        .await
        .unwrap();

    let module = dir.path().join("test").join("notes");
    assert!(module.join("package.json").exists());
    assert!(!dir.path().join("notes").exists());

    // No tab: tab tokens stay in place
    let tab = fs::read_to_string(module.join("src/tab.ts")).unwrap();
    assert!(tab.contains("{tab.icon}"));
    assert!(tab.contains("this.removeTab();"));
}

#[tokio::test]
async fn test_clone_failure_is_returned() {
    let dir = tempfile::tempdir().unwrap();
    let mut orchestrator = Orchestrator::new(plan(dir.path(), side_panel_metadata(), false), FailingCloner);
    let mut sink = RecordingSink::default();
    let (_keys_tx, mut keys) = mpsc::channel(1);

    let err = pipeline::run(&mut orchestrator, &mut sink, &mut keys, TICK)
        .await
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::Subprocess { .. }));
    assert_eq!(orchestrator.step(), PipelineStep::Cloning);
    assert!(sink.finished.is_none());
}

#[tokio::test]
async fn test_existing_module_dir_fails_without_cloning() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("reading-list")).unwrap();
    fs::write(dir.path().join("reading-list/keep.txt"), "{package_name}").unwrap();

    let mut orchestrator = Orchestrator::new(plan(dir.path(), side_panel_metadata(), false), FixtureCloner);
    let mut sink = RecordingSink::default();
    let (_keys_tx, mut keys) = mpsc::channel(1);

    let err = pipeline::run(&mut orchestrator, &mut sink, &mut keys, TICK)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::Filesystem {
            action: FsAction::Create,
            ..
        }
    ));
    assert_eq!(
        fs::read_to_string(dir.path().join("reading-list/keep.txt")).unwrap(),
        "{package_name}"
    );
}

#[tokio::test]
async fn test_quit_key_stops_run_mid_clone() {
    let dir = tempfile::tempdir().unwrap();
    let mut orchestrator = Orchestrator::new(plan(dir.path(), side_panel_metadata(), false), HangingCloner);
    let mut sink = RecordingSink::default();
    let (keys_tx, mut keys) = mpsc::channel(4);
    keys_tx.send(KeyAction::Suspend).await.unwrap();
    keys_tx.send(KeyAction::Quit).await.unwrap();

    let outcome = pipeline::run(&mut orchestrator, &mut sink, &mut keys, TICK)
        .await
        .unwrap();

    assert_eq!(outcome, RunOutcome::Quit);
    assert_eq!(sink.suspends, 1);
    assert_eq!(orchestrator.step(), PipelineStep::Cloning);
}

#[tokio::test]
async fn test_templating_failure_is_returned() {
    let dir = tempfile::tempdir().unwrap();
    let mut orchestrator = Orchestrator::new(plan(dir.path(), side_panel_metadata(), false), ClashingCloner);
    let mut sink = RecordingSink::default();
    let (_keys_tx, mut keys) = mpsc::channel(1);

    let err = pipeline::run(&mut orchestrator, &mut sink, &mut keys, TICK)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::Filesystem {
            action: FsAction::Rename,
            ..
        }
    ));
    assert_eq!(orchestrator.step(), PipelineStep::Templating);
    assert!(sink.finished.is_none());
}

#[tokio::test]
async fn test_panicking_clone_task_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut orchestrator = Orchestrator::new(plan(dir.path(), side_panel_metadata(), false), PanickingCloner);
    let mut sink = RecordingSink::default();
    let (_keys_tx, mut keys) = mpsc::channel(1);

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        pipeline::run(&mut orchestrator, &mut sink, &mut keys, TICK),
    )
    .await
    .expect("render loop hung after the clone task panicked");

    match result {
        Err(ScaffoldError::TaskAborted { step, detail }) => {
            assert_eq!(step, PipelineStep::Cloning);
            assert!(detail.contains("panic"), "unexpected detail: {detail}");
        }
        other => panic!("expected an aborted task, got {other:?}"),
    }
}
