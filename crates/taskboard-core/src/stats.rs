//! Summary Statistics

use crate::models::{Priority, Snapshot, Task};
use crate::tree::flatten_tasks;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub open: usize,
    pub closed: usize,
    /// Open tasks with priority H
    pub high_priority: usize,
    pub archived: usize,
}

impl Stats {
    pub fn compute<'a>(tasks: impl IntoIterator<Item = &'a Task>, archived: usize) -> Self {
        tasks.into_iter().fold(Stats { archived, ..Default::default() }, |mut stats, task| {
            if task.is_open() {
                stats.open += 1;
                if task.priority == Priority::High {
                    stats.high_priority += 1;
                }
            } else if task.is_closed() {
                stats.closed += 1;
            }
            stats
        })
    }

    /// Stats for `project`. An unknown project has no tasks, but archive
    /// entries are still matched by name.
    pub fn for_project(snapshot: &Snapshot, project: &str) -> Self {
        let archived = snapshot.archived_count(project);
        match snapshot.project(project) {
            Some(p) => Self::compute(flatten_tasks(&p.folders), archived),
            None => Stats { archived, ..Default::default() },
        }
    }

    /// (value, label) pairs in display order
    pub fn cards(&self) -> [(usize, &'static str); 4] {
        [
            (self.open, "Open Tasks"),
            (self.closed, "Completed"),
            (self.high_priority, "High Priority"),
            (self.archived, "Archived"),
        ]
    }
}
