//! Stats Panel Component

use leptos::prelude::*;
use taskboard_core::Board;

use crate::context::use_board;

/// Open / completed / high priority / archived counts for the active project
#[component]
pub fn StatsPanel() -> impl IntoView {
    let ctx = use_board();
    let stats = Memo::new(move |_| ctx.board.with(Board::stats));

    move || {
        stats.get().map(|stats| {
            view! {
                <div class="stats">
                    {stats
                        .cards()
                        .into_iter()
                        .map(|(value, label)| view! {
                            <div class="stat">
                                <div class="stat-value">{value}</div>
                                <div class="stat-label">{label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            }
        })
    }
}
