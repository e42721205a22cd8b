//! Application Context
//!
//! Shared board state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_core::{Board, BoardConfig};

use crate::{fetch, location};

/// Board state and the actions that change it
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Everything the page renders
    pub board: RwSignal<Board>,
    config: StoredValue<BoardConfig>,
}

impl BoardContext {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            board: RwSignal::new(Board::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config.get_value()
    }

    /// Fetch a fresh snapshot. Overlapping loads are not coordinated; the
    /// last one to resolve wins.
    pub fn reload(&self) {
        let board = self.board;
        let config = self.config.get_value();
        spawn_local(async move {
            match fetch::fetch_snapshot(&config).await {
                Ok(snapshot) => {
                    log::info!("Loaded snapshot with {} projects", snapshot.projects.len());
                    let fragment = location::current_fragment();
                    board.update(|b| b.apply_snapshot(snapshot, &fragment));
                }
                Err(err) => {
                    log::error!("Error loading tasks: {}", err);
                    board.update(|b| b.apply_failure(err));
                }
            }
        });
    }

    /// Select a project and record it in the URL.
    pub fn switch_project(&self, name: &str) {
        location::set_fragment(name);
        self.select(name);
    }

    /// Re-resolve the selection after the fragment changed elsewhere.
    pub fn follow_fragment(&self) {
        self.follow(&location::current_fragment());
    }

    fn select(&self, name: &str) {
        self.board.update(|b| b.switch_project(name));
    }

    /// Returns whether the selection changed. A fragment naming the active
    /// project (our own `switch_project` writing the hash) is a no-op and
    /// does not notify subscribers.
    fn follow(&self, fragment: &str) -> bool {
        if self.board.with_untracked(|b| b.active_project() == fragment) {
            return false;
        }
        let mut changed = false;
        self.board.update(|b| changed = b.follow_fragment(fragment));
        changed
    }
}

pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use taskboard_core::Snapshot;

    const SNAPSHOT: &str = r#"{
        "currentProject": "home",
        "projects": {
            "home": { "folders": { "chores": [ { "name": "a", "status": "open", "priority": "H" } ] } },
            "work": { "folders": {} }
        }
    }"#;

    fn loaded_context() -> BoardContext {
        let ctx = BoardContext::new(BoardConfig::default());
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        ctx.board.update(|b| b.apply_snapshot(snapshot, ""));
        ctx
    }

    #[test]
    fn test_follow_own_fragment_is_noop() {
        Owner::new().with(|| {
            let ctx = loaded_context();
            ctx.select("work");

            // hashchange fired by the write in switch_project
            assert!(!ctx.follow("work"));
            assert_eq!(ctx.board.with_untracked(|b| b.active_project().to_string()), "work");
        });
    }

    #[test]
    fn test_follow_history_navigation() {
        Owner::new().with(|| {
            let ctx = loaded_context();
            ctx.select("work");

            assert!(ctx.follow(""));
            assert_eq!(ctx.board.with_untracked(|b| b.active_project().to_string()), "home");

            // unknown names fall back to the default, which is already active
            assert!(!ctx.follow("missing"));
            assert!(ctx.follow("work"));
        });
    }
}
