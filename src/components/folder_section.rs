//! Folder Section Component
//!
//! A folder header followed by its priority groups or nested folders.

use leptos::prelude::*;
use taskboard_core::FolderSection;

use crate::components::TaskGroupView;

#[component]
pub fn FolderSectionView(section: FolderSection) -> impl IntoView {
    section_view(section)
}

/// Recursive, so the view is type-erased.
fn section_view(section: FolderSection) -> AnyView {
    let label = section.label();

    view! {
        <div class="folder">
            <div class="folder-header">"📁 " {label}</div>
            {section
                .groups
                .into_iter()
                .map(|group| view! { <TaskGroupView group=group /> })
                .collect_view()}
            {section.children.into_iter().map(section_view).collect_view()}
        </div>
    }
    .into_any()
}
