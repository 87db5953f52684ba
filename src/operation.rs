use std::fmt;
use std::path::PathBuf;

use crate::template::reconcile::{BlockAction, BlockDecision};

/// How a generated script ended up on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    WrittenFresh,
    Replaced,
    UpdatedInPlace,
    SkippedPreserved,
}

/// How an image asset was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAction {
    Rendered,
    Skipped,
}

/// A hand-edited block that reconciliation kept. Informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub path: PathBuf,
    pub block: String,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Kept customized block '{}' in '{}' (it no longer matches the template)",
            self.block,
            self.path.display()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Generate {
        target: PathBuf,
        resolution: Resolution,
        decisions: Vec<BlockDecision>,
        changed: bool,
    },
    Copy {
        source: PathBuf,
        target: PathBuf,
        target_exists: bool,
    },
    Image {
        target: PathBuf,
        action: ImageAction,
        changed: bool,
    },
    CreateDirectory {
        target: PathBuf,
        target_exists: bool,
    },
    Delete {
        target: PathBuf,
    },
}

impl Operation {
    /// Returns the target path for this operation.
    pub fn target_path(&self) -> &PathBuf {
        match self {
            Operation::Generate { target, .. }
            | Operation::Copy { target, .. }
            | Operation::Image { target, .. }
            | Operation::CreateDirectory { target, .. }
            | Operation::Delete { target } => target,
        }
    }

    /// Advisories for every hand-edited block this operation kept.
    pub fn advisories(&self) -> Vec<Advisory> {
        match self {
            Operation::Generate { target, decisions, .. } => decisions
                .iter()
                .filter(|d| d.action == BlockAction::Preserved)
                .map(|d| Advisory { path: target.clone(), block: d.identity.clone() })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    ///
    /// # Returns
    /// * `String` - A descriptive message about the operation
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            Operation::Generate { target, resolution, decisions, changed } => match resolution {
                Resolution::WrittenFresh => {
                    format!("{}Writing '{}'", prefix, target.display())
                }
                Resolution::Replaced if *changed => {
                    format!("{}Replacing '{}' with a fresh render", prefix, target.display())
                }
                Resolution::Replaced => {
                    format!("{}'{}' already matches a fresh render", prefix, target.display())
                }
                Resolution::UpdatedInPlace => {
                    let count = |action: BlockAction| {
                        decisions.iter().filter(|d| d.action == action).count()
                    };
                    format!(
                        "{}Updating '{}' ({} refreshed, {} inserted, {} kept as customized)",
                        prefix,
                        target.display(),
                        count(BlockAction::Refreshed),
                        count(BlockAction::Inserted),
                        count(BlockAction::Preserved)
                    )
                }
                Resolution::SkippedPreserved => format!(
                    "{}Skipping '{}' (target already exists)",
                    prefix,
                    target.display()
                ),
            },

            Operation::Copy { source, target, target_exists } => {
                if *target_exists {
                    format!(
                        "{}Skipping copy of '{}' to '{}' (target already exists)",
                        prefix,
                        source.display(),
                        target.display()
                    )
                } else {
                    format!(
                        "{}Copying '{}' to '{}'",
                        prefix,
                        source.display(),
                        target.display()
                    )
                }
            }

            Operation::Image { target, action, changed } => match action {
                ImageAction::Skipped => format!(
                    "{}Skipping image '{}' (target already exists)",
                    prefix,
                    target.display()
                ),
                ImageAction::Rendered if *changed => {
                    format!("{}Rendering image '{}'", prefix, target.display())
                }
                ImageAction::Rendered => {
                    format!("{}Image '{}' is already up to date", prefix, target.display())
                }
            },

            Operation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "{}Skipping directory creation '{}' (already exists)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Creating directory '{}'", prefix, target.display())
                }
            }

            Operation::Delete { target } => {
                format!("{}Removing '{}'", prefix, target.display())
            }
        }
    }
}

/// Every operation performed by one generation step, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    operations: Vec<Operation>,
}

impl GenerationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `operation`, logging it and any advisories it carries.
    pub fn record(&mut self, operation: Operation, dry_run: bool) {
        log::info!("{}", operation.get_message(dry_run));
        for advisory in operation.advisories() {
            log::warn!("{advisory}");
        }
        self.operations.push(operation);
    }

    pub fn extend(&mut self, other: GenerationReport) {
        self.operations.extend(other.operations);
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        self.operations.iter().flat_map(Operation::advisories).collect()
    }

    /// The operation for `target`, if one was recorded.
    pub fn find(&self, target: &std::path::Path) -> Option<&Operation> {
        self.operations.iter().find(|op| op.target_path() == target)
    }
}
