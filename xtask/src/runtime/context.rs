//! Shared command context passed into command families.

use crate::runtime::error::{XtaskError, XtaskResult};
use crate::runtime::workflow::WorkflowRecorder;
use std::path::{Path, PathBuf};

/// Shared execution context for xtask command families.
#[derive(Clone, Debug)]
pub struct CommandContext {
    root: PathBuf,
    workflow: WorkflowRecorder,
}

impl CommandContext {
    /// Create a new command context rooted at the current workspace.
    pub fn new() -> XtaskResult<Self> {
        Ok(Self::with_root(workspace_root()?))
    }

    /// Create a context rooted at an explicit directory.
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            root,
            workflow: WorkflowRecorder::new(),
        }
    }

    /// Workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Shared workflow recorder.
    pub fn workflow(&self) -> &WorkflowRecorder {
        &self.workflow
    }
}

fn workspace_root() -> XtaskResult<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| XtaskError::environment("xtask lives under workspace root"))
}
