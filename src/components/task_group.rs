//! Task Group Component

use leptos::prelude::*;
use taskboard_core::TaskGroup;

use crate::components::TaskRow;

/// Labeled block of tasks sharing a priority (or all completed tasks)
#[component]
pub fn TaskGroupView(group: TaskGroup) -> impl IntoView {
    let title = group.label();
    let kind = group.kind;

    view! {
        <div class="task-group">
            <div class="task-group-title">{title}</div>
            {group
                .tasks
                .into_iter()
                .map(|task| view! { <TaskRow task=task kind=kind /> })
                .collect_view()}
        </div>
    }
}
