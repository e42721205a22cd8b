//! Task Row Component
//!
//! Individual task in a group.

use leptos::prelude::*;
use taskboard_core::{GroupKind, Task};

/// A single task: priority badge, name, tags and a done marker when closed
#[component]
pub fn TaskRow(task: Task, kind: GroupKind) -> impl IntoView {
    let closed = kind.is_completed();
    let row_class = if closed { "task closed" } else { "task" };
    let badge_class = format!("priority priority-{}", kind.css_class());
    let tags = task.tags;

    view! {
        <div class=row_class>
            <div class=badge_class>{task.priority.letter()}</div>
            <div class="task-name">{task.name}</div>
            <div class="task-meta">
                {(!tags.is_empty()).then(|| view! {
                    <div class="tags">
                        {tags
                            .into_iter()
                            .map(|tag| view! { <span class="tag">{tag}</span> })
                            .collect_view()}
                    </div>
                })}
                {closed.then(|| view! { <span class="status-badge">"✓ Done"</span> })}
            </div>
        </div>
    }
}
