//! Project Tab Bar Component
//!
//! One tab per project in the snapshot; clicking switches the view.

use leptos::prelude::*;
use taskboard_core::Board;

use crate::context::use_board;

#[component]
pub fn ProjectTabBar() -> impl IntoView {
    let ctx = use_board();
    let tabs = Memo::new(move |_| ctx.board.with(Board::tabs));

    view! {
        <For
            each=move || tabs.get()
            key=|tab| (tab.name.clone(), tab.active)
            children=move |tab| {
                let name = tab.name.clone();
                let tab_class = if tab.active { "tab active" } else { "tab" };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| ctx.switch_project(&name)
                    >
                        {tab.name}
                    </button>
                }
            }
        />
    }
}
