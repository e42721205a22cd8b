//! Task List Component
//!
//! The task region: the folder tree, or a placeholder when there is nothing
//! to show or the last load failed.

use leptos::prelude::*;
use taskboard_core::{Board, TaskArea};

use crate::components::{EmptyState, FolderSectionView};
use crate::context::use_board;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_board();
    let area = Memo::new(move |_| ctx.board.with(Board::task_area));

    move || {
        let area = area.get();
        if let Some(notice) = area.notice() {
            return view! { <EmptyState notice=notice /> }.into_any();
        }
        match area {
            TaskArea::Folders(sections) => sections
                .into_iter()
                .map(|section| view! { <FolderSectionView section=section /> })
                .collect_view()
                .into_any(),
            _ => view! { <div class="loading">"Loading tasks…"</div> }.into_any(),
        }
    }
}
