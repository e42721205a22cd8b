//! UI Components
//!
//! Leptos components for the board regions.

mod empty_state;
mod folder_section;
mod project_tab_bar;
mod stats_panel;
mod task_group;
mod task_list;
mod task_row;

pub use empty_state::EmptyState;
pub use folder_section::FolderSectionView;
pub use project_tab_bar::ProjectTabBar;
pub use stats_panel::StatsPanel;
pub use task_group::TaskGroupView;
pub use task_list::TaskList;
pub use task_row::TaskRow;
