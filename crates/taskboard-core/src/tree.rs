//! Tree Utilities
//!
//! Flattening and priority grouping over a project's folder tree.

use crate::models::{FolderNode, FolderTree, Priority, Task};

/// Separator between folder names in a section header
pub const PATH_SEPARATOR: &str = " / ";

/// Collect every task reachable from `tree`, depth-first in source order.
pub fn flatten_tasks(tree: &FolderTree) -> Vec<&Task> {
    fn collect<'a>(tree: &'a FolderTree, result: &mut Vec<&'a Task>) {
        for (_, node) in tree.iter() {
            match node {
                FolderNode::Tasks(tasks) => result.extend(tasks.iter()),
                FolderNode::SubTree(inner) => collect(inner, result),
            }
        }
    }

    let mut result = Vec::new();
    collect(tree, &mut result);
    result
}

/// Display group of a leaf folder, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    High,
    Medium,
    Low,
    Completed,
}

impl GroupKind {
    pub const ORDER: [GroupKind; 4] = [GroupKind::High, GroupKind::Medium, GroupKind::Low, GroupKind::Completed];

    /// Completed groups ignore priority; the others hold open tasks only.
    pub fn accepts(self, task: &Task) -> bool {
        match self {
            GroupKind::High => task.is_open() && task.priority == Priority::High,
            GroupKind::Medium => task.is_open() && task.priority == Priority::Medium,
            GroupKind::Low => task.is_open() && task.priority == Priority::Low,
            GroupKind::Completed => task.is_closed(),
        }
    }

    pub fn label(self, count: usize) -> String {
        match self {
            GroupKind::High => "🔥 High Priority".to_string(),
            GroupKind::Medium => "⚡ Medium Priority".to_string(),
            GroupKind::Low => "📌 Low Priority".to_string(),
            GroupKind::Completed => format!("✓ Completed ({})", count),
        }
    }

    /// Priority badge class for tasks rendered in this group
    pub fn css_class(self) -> &'static str {
        match self {
            GroupKind::High => "high",
            GroupKind::Medium => "medium",
            GroupKind::Low | GroupKind::Completed => "low",
        }
    }

    pub fn is_completed(self) -> bool {
        self == GroupKind::Completed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup {
    pub kind: GroupKind,
    pub tasks: Vec<Task>,
}

impl TaskGroup {
    pub fn label(&self) -> String {
        self.kind.label(self.tasks.len())
    }
}

/// Split a leaf folder's tasks into its non-empty groups.
pub fn group_tasks(tasks: &[Task]) -> Vec<TaskGroup> {
    GroupKind::ORDER
        .iter()
        .map(|&kind| TaskGroup {
            kind,
            tasks: tasks.iter().filter(|t| kind.accepts(t)).cloned().collect(),
        })
        .filter(|group| !group.tasks.is_empty())
        .collect()
}

/// One folder as rendered: its full path, its groups (leaf folders) and its
/// nested folders (branch folders).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSection {
    pub path: Vec<String>,
    pub groups: Vec<TaskGroup>,
    pub children: Vec<FolderSection>,
}

impl FolderSection {
    pub fn label(&self) -> String {
        self.path.join(PATH_SEPARATOR)
    }
}

/// Build renderable sections for `tree`, carrying the path down.
pub fn build_sections(tree: &FolderTree) -> Vec<FolderSection> {
    fn walk(tree: &FolderTree, path: &[String]) -> Vec<FolderSection> {
        tree.iter()
            .map(|(name, node)| {
                let mut section_path = path.to_vec();
                section_path.push(name.to_string());
                match node {
                    FolderNode::Tasks(tasks) => FolderSection {
                        groups: group_tasks(tasks),
                        children: Vec::new(),
                        path: section_path,
                    },
                    FolderNode::SubTree(inner) => FolderSection {
                        groups: Vec::new(),
                        children: walk(inner, &section_path),
                        path: section_path,
                    },
                }
            })
            .collect()
    }

    walk(tree, &[])
}
