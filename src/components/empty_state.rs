//! Empty State Component

use leptos::prelude::*;
use taskboard_core::Notice;

/// Placeholder for the task region (no tasks, or a load error)
#[component]
pub fn EmptyState(notice: Notice) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">{notice.icon}</div>
            <div class="empty-state-text">{notice.text}</div>
            <div class="empty-state-hint">{notice.hint}</div>
        </div>
    }
}
