//! Walks a cloned template and resolves its placeholder tokens in place

use super::tokens::{self, Substitution};
use crate::error::{FsAction, Result, ScaffoldError};
use crate::metadata::ModuleMetadata;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Summary of a templating run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateReport {
    /// Regular files the substitution step ran on
    pub files_visited: usize,
    pub files_renamed: usize,
    /// Files whose content changed and was written back
    pub files_rewritten: usize,
}

/// Rename and rewrite every regular file under `root` from `metadata`.
///
/// Stops at the first I/O error. Files handled before the error stay modified.
/// A rename never replaces an existing file.
pub fn apply_template(root: &Path, metadata: &ModuleMetadata) -> Result<TemplateReport> {
    let subs = tokens::content_substitutions(metadata);

    // Collect first so renamed files are never walked twice
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    let mut report = TemplateReport::default();
    for path in &files {
        template_file(root, path, metadata, &subs, &mut report)?;
    }

    info!(
        root = %root.display(),
        visited = report.files_visited,
        renamed = report.files_renamed,
        rewritten = report.files_rewritten,
        "template applied"
    );
    Ok(report)
}

fn template_file(
    root: &Path,
    path: &Path,
    metadata: &ModuleMetadata,
    subs: &[Substitution],
    report: &mut TemplateReport,
) -> Result<()> {
    report.files_visited += 1;

    let target = match rename_target(root, path, metadata) {
        Some(new_path) => {
            if new_path.symlink_metadata().is_ok() {
                let clash = io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} already exists", new_path.display()),
                );
                return Err(ScaffoldError::fs(FsAction::Rename, path, clash));
            }
            if let Some(parent) = new_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| ScaffoldError::fs(FsAction::Create, parent, e))?;
            }
            fs::rename(path, &new_path)
                .map_err(|e| ScaffoldError::fs(FsAction::Rename, path, e))?;
            debug!(from = %path.display(), to = %new_path.display(), "renamed template file");
            report.files_renamed += 1;
            new_path
        }
        None => path.to_path_buf(),
    };

    let bytes = fs::read(&target).map_err(|e| ScaffoldError::fs(FsAction::Read, &target, e))?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(_) => {
            debug!(path = %target.display(), "binary file, content left as is");
            return Ok(());
        }
    };

    let updated = tokens::substitute(&content, subs);
    if updated != content {
        fs::write(&target, updated).map_err(|e| ScaffoldError::fs(FsAction::Write, &target, e))?;
        report.files_rewritten += 1;
    }

    Ok(())
}

/// New absolute path for a file whose path below `root` contains a file-name token
fn rename_target(root: &Path, path: &Path, metadata: &ModuleMetadata) -> Option<PathBuf> {
    let relative = path.strip_prefix(root).ok()?.to_str()?;
    tokens::substitute_file_name(relative, metadata).map(|renamed| root.join(renamed))
}
