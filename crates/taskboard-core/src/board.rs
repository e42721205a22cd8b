//! Board Controller
//!
//! Owns everything the dashboard shows: the latest snapshot, the active
//! project and the last load failure. The UI holds one `Board` in a signal
//! and derives tabs, stats and the task area from it.

use std::sync::Arc;

use crate::error::LoadError;
use crate::models::Snapshot;
use crate::stats::Stats;
use crate::tree::{build_sections, flatten_tasks, FolderSection};

pub const ERROR_ICON: &str = "⚠️";
pub const ERROR_TEXT: &str = "Error loading tasks";
pub const EMPTY_ICON: &str = "📋";
pub const EMPTY_TEXT: &str = "No tasks yet";
pub const EMPTY_HINT: &str = "Create your first task with: task home / + my task H";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTab {
    pub name: String,
    pub active: bool,
}

/// Placeholder shown instead of the folder tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub icon: &'static str,
    pub text: &'static str,
    pub hint: String,
}

/// What the task region shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskArea {
    /// Nothing fetched yet
    Loading,
    Failed { message: String },
    /// The active project has no tasks anywhere in its tree
    Empty,
    Folders(Vec<FolderSection>),
}

impl TaskArea {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            TaskArea::Failed { message } => Some(Notice {
                icon: ERROR_ICON,
                text: ERROR_TEXT,
                hint: message.clone(),
            }),
            TaskArea::Empty => Some(Notice {
                icon: EMPTY_ICON,
                text: EMPTY_TEXT,
                hint: EMPTY_HINT.to_string(),
            }),
            TaskArea::Loading | TaskArea::Folders(_) => None,
        }
    }
}

/// Pick the project to show: the fragment if it names a project, otherwise
/// the snapshot's default. A default that is itself missing falls back to the
/// first project.
pub fn resolve_project(snapshot: &Snapshot, fragment: &str) -> String {
    if !fragment.is_empty() && snapshot.projects.contains_key(fragment) {
        return fragment.to_string();
    }
    if snapshot.projects.contains_key(&snapshot.current_project) {
        return snapshot.current_project.clone();
    }
    match snapshot.projects.keys().next() {
        Some(first) => {
            log::warn!(
                "default project {:?} not in snapshot, showing {:?}",
                snapshot.current_project,
                first
            );
            first.clone()
        }
        None => snapshot.current_project.clone(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    snapshot: Option<Arc<Snapshot>>,
    active: String,
    failure: Option<LoadError>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched snapshot and re-resolve the selection.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot, fragment: &str) {
        self.active = resolve_project(&snapshot, fragment);
        log::debug!(
            "applied snapshot: {} projects, active {:?}",
            snapshot.projects.len(),
            self.active
        );
        self.snapshot = Some(Arc::new(snapshot));
        self.failure = None;
    }

    /// Record a failed load. The previous snapshot, tabs and stats are kept;
    /// only the task area reports the error.
    pub fn apply_failure(&mut self, error: LoadError) {
        self.failure = Some(error);
    }

    /// Select `name` as-is. Unknown names render as an empty project.
    pub fn switch_project(&mut self, name: &str) {
        self.active = name.to_string();
        self.failure = None;
    }

    /// Follow a fragment change made outside the tab bar (history navigation,
    /// edited URL). Returns whether the selection changed.
    pub fn follow_fragment(&mut self, fragment: &str) -> bool {
        let Some(snapshot) = &self.snapshot else {
            return false;
        };
        let target = resolve_project(snapshot, fragment);
        if target == self.active {
            return false;
        }
        self.switch_project(&target);
        true
    }

    pub fn active_project(&self) -> &str {
        &self.active
    }

    fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_deref()
    }

    pub fn tabs(&self) -> Vec<ProjectTab> {
        self.snapshot
            .iter()
            .flat_map(|snapshot| snapshot.projects.keys())
            .map(|name| ProjectTab {
                name: name.clone(),
                active: *name == self.active,
            })
            .collect()
    }

    /// `None` until the first snapshot arrives.
    pub fn stats(&self) -> Option<Stats> {
        self.snapshot().map(|snapshot| Stats::for_project(snapshot, &self.active))
    }

    pub fn task_area(&self) -> TaskArea {
        if let Some(error) = &self.failure {
            return TaskArea::Failed { message: error.to_string() };
        }
        let Some(snapshot) = self.snapshot() else {
            return TaskArea::Loading;
        };
        match snapshot.project(&self.active) {
            Some(project) if !flatten_tasks(&project.folders).is_empty() => {
                TaskArea::Folders(build_sections(&project.folders))
            }
            _ => TaskArea::Empty,
        }
    }
}
