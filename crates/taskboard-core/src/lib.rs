//! TaskBoard Core
//!
//! Platform-independent half of the dashboard: the snapshot model, project
//! selection, priority grouping and summary statistics. The wasm frontend
//! only turns these values into markup.

pub mod board;
pub mod config;
pub mod error;
pub mod fragment;
pub mod models;
pub mod stats;
pub mod tree;

pub use board::{Board, Notice, ProjectTab, TaskArea};
pub use config::BoardConfig;
pub use error::LoadError;
pub use models::{ArchiveEntry, FolderNode, FolderTree, Priority, Project, Projects, Snapshot, Status, Task};
pub use stats::Stats;
pub use tree::{FolderSection, GroupKind, TaskGroup};
