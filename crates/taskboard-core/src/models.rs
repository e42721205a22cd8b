//! Snapshot Models
//!
//! Data structures matching the `tasks.json` document.
//!
//! Folder trees are parsed straight into [`FolderNode`] so nothing downstream
//! has to inspect JSON values: arrays become task lists, objects become
//! sub-trees, and anything else is dropped while parsing.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "H")]
    High,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Low,
}

impl Priority {
    /// Badge text
    pub fn letter(self) -> &'static str {
        match self {
            Priority::High => "H",
            Priority::Medium => "M",
            Priority::Low => "L",
        }
    }
}

/// A single task (leaf of a folder tree)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub status: Status,
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Task {
    pub fn is_open(&self) -> bool {
        self.status == Status::Open
    }

    pub fn is_closed(&self) -> bool {
        self.status == Status::Closed
    }
}

/// Archived task record. Only the owning project is read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ArchiveEntry {
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderNode {
    Tasks(Vec<Task>),
    SubTree(FolderTree),
}

/// Named folders in source order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FolderTree {
    entries: IndexMap<String, FolderNode>,
}

impl FolderTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a leaf folder
    pub fn with_tasks(mut self, name: impl Into<String>, tasks: Vec<Task>) -> Self {
        self.entries.insert(name.into(), FolderNode::Tasks(tasks));
        self
    }

    /// Builder: add a nested folder
    pub fn with_folder(mut self, name: impl Into<String>, tree: FolderTree) -> Self {
        self.entries.insert(name.into(), FolderNode::SubTree(tree));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FolderNode)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub folders: FolderTree,
}

/// Projects keyed by name, in source order. A repeated key keeps its first
/// position and takes the last value.
pub type Projects = IndexMap<String, Project>;

/// The whole document, replaced on every poll
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub current_project: String,
    pub projects: Projects,
    #[serde(default)]
    pub archive: Option<Vec<ArchiveEntry>>,
}

impl Snapshot {
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    /// Archive entries belonging to `project`; zero when there is no archive.
    pub fn archived_count(&self, project: &str) -> usize {
        self.archive
            .iter()
            .flatten()
            .filter(|entry| entry.project.as_deref() == Some(project))
            .count()
    }
}

// ========================
// Deserialization
// ========================

impl<'de> Deserialize<'de> for FolderTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FolderTreeVisitor)
    }
}

struct FolderTreeVisitor;

impl<'de> Visitor<'de> for FolderTreeVisitor {
    type Value = FolderTree;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of folder names to folders or task lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<FolderTree, A::Error> {
        // Slots stay in place until the end so a repeated key overrides the
        // earlier value without moving, even when the later value is dropped.
        let mut slots: IndexMap<String, Option<FolderNode>> = IndexMap::new();
        while let Some((name, NodeSlot(node))) = map.next_entry::<String, NodeSlot>()? {
            slots.insert(name, node);
        }
        let entries = slots
            .into_iter()
            .filter_map(|(name, node)| match node {
                Some(node) => Some((name, node)),
                None => {
                    log::debug!("ignoring folder {:?}: not a task list or folder", name);
                    None
                }
            })
            .collect();
        Ok(FolderTree { entries })
    }
}

/// A folder value that may turn out to be neither a list nor a map.
struct NodeSlot(Option<FolderNode>);

impl<'de> Deserialize<'de> for NodeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeSlotVisitor)
    }
}

struct NodeSlotVisitor;

impl<'de> Visitor<'de> for NodeSlotVisitor {
    type Value = NodeSlot;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a task list or a folder map")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<NodeSlot, A::Error> {
        let mut tasks = Vec::new();
        while let Some(value) = seq.next_element::<Value>()? {
            match serde_json::from_value::<Task>(value) {
                Ok(task) => tasks.push(task),
                Err(err) => log::warn!("skipping malformed task: {}", err),
            }
        }
        Ok(NodeSlot(Some(FolderNode::Tasks(tasks))))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<NodeSlot, A::Error> {
        FolderTreeVisitor
            .visit_map(map)
            .map(|tree| NodeSlot(Some(FolderNode::SubTree(tree))))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<NodeSlot, E> {
        Ok(NodeSlot(None))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<NodeSlot, E> {
        Ok(NodeSlot(None))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<NodeSlot, E> {
        Ok(NodeSlot(None))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<NodeSlot, E> {
        Ok(NodeSlot(None))
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<NodeSlot, E> {
        Ok(NodeSlot(None))
    }

    fn visit_unit<E: de::Error>(self) -> Result<NodeSlot, E> {
        Ok(NodeSlot(None))
    }

    fn visit_none<E: de::Error>(self) -> Result<NodeSlot, E> {
        Ok(NodeSlot(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Snapshot {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parse_nested_tree() {
        let snapshot = parse(json!({
            "currentProject": "home",
            "projects": {
                "home": { "folders": {
                    "a": { "b": [ { "name": "x", "status": "open", "priority": "H", "tags": [] } ] }
                } }
            }
        }));

        assert_eq!(snapshot.current_project, "home");
        let folders = &snapshot.project("home").unwrap().folders;
        let (name, node) = folders.iter().next().unwrap();
        assert_eq!(name, "a");
        let FolderNode::SubTree(inner) = node else { panic!("expected sub-tree") };
        let (leaf, node) = inner.iter().next().unwrap();
        assert_eq!(leaf, "b");
        let FolderNode::Tasks(tasks) = node else { panic!("expected task list") };
        assert_eq!(tasks[0].name, "x");
        assert_eq!(tasks[0].priority, Priority::High);
        assert!(tasks[0].is_open());
    }

    #[test]
    fn test_scalar_nodes_dropped() {
        let snapshot = parse(json!({
            "currentProject": "p",
            "projects": { "p": { "folders": {
                "keep": [],
                "num": 3,
                "text": "oops",
                "flag": true,
                "nothing": null,
                "nested": { "deep": 1.5 }
            } } }
        }));

        let folders = &snapshot.project("p").unwrap().folders;
        let names: Vec<&str> = folders.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["keep", "nested"]);
        match folders.iter().nth(1).unwrap().1 {
            FolderNode::SubTree(inner) => assert_eq!(inner.iter().count(), 0),
            other => panic!("unexpected node {:?}", other),
        };
    }

    #[test]
    fn test_malformed_tasks_skipped() {
        let snapshot = parse(json!({
            "currentProject": "p",
            "projects": { "p": { "folders": { "f": [
                { "name": "ok", "status": "closed", "priority": "L" },
                { "name": "bad", "status": "pending", "priority": "L" },
                "not a task"
            ] } } }
        }));

        let (_, node) = snapshot.project("p").unwrap().folders.iter().next().unwrap();
        let FolderNode::Tasks(tasks) = node else { panic!("expected task list") };
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "ok");
        assert!(tasks[0].tags.is_empty());
    }

    #[test]
    fn test_project_order_preserved() {
        let snapshot = Snapshot::from_json(
            r#"{"currentProject":"b","projects":{"zeta":{"folders":{}},"alpha":{},"mid":{"folders":{}}}}"#,
        )
        .unwrap();
        let names: Vec<&str> = snapshot.projects.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_project_keeps_first_position() {
        let snapshot = Snapshot::from_json(
            r#"{"currentProject":"a","projects":{"a":{},"b":{},"a":{"folders":{"f":[]}}}}"#,
        )
        .unwrap();
        let names: Vec<&str> = snapshot.projects.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(snapshot.project("a").unwrap().folders.iter().count(), 1);
    }

    #[test]
    fn test_duplicate_folder_last_value_wins() {
        let snapshot = Snapshot::from_json(
            r#"{"currentProject":"p","projects":{"p":{"folders":{
                "a":[{"name":"x","status":"open","priority":"H"}],
                "b":[],
                "a":3
            }}}}"#,
        )
        .unwrap();
        let names: Vec<&str> = snapshot.project("p").unwrap().folders.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b"]);

        let snapshot = Snapshot::from_json(
            r#"{"currentProject":"p","projects":{"p":{"folders":{
                "a":null,
                "b":[],
                "a":[{"name":"x","status":"open","priority":"H"}]
            }}}}"#,
        )
        .unwrap();
        let names: Vec<&str> = snapshot.project("p").unwrap().folders.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_archive_counting() {
        let snapshot = parse(json!({
            "currentProject": "home",
            "projects": { "home": {} },
            "archive": [
                { "project": "home", "name": "old", "archivedAt": "2024-01-01" },
                { "project": "work" },
                { "project": "home" },
                {}
            ]
        }));
        assert_eq!(snapshot.archived_count("home"), 2);
        assert_eq!(snapshot.archived_count("work"), 1);
        assert_eq!(snapshot.archived_count("missing"), 0);
    }

    #[test]
    fn test_archive_absent_or_null() {
        let absent = parse(json!({ "currentProject": "p", "projects": { "p": {} } }));
        let null = parse(json!({ "currentProject": "p", "projects": { "p": {} }, "archive": null }));
        assert_eq!(absent.archived_count("p"), 0);
        assert_eq!(null.archived_count("p"), 0);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(Snapshot::from_json("<html>404</html>"), Err(LoadError::Parse(_))));
        assert!(matches!(Snapshot::from_json(r#"{"currentProject":"p"}"#), Err(LoadError::Parse(_))));
    }
}
