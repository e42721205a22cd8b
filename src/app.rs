//! TaskBoard App
//!
//! Page shell with the three regions the board renders into.

use leptos::ev;
use leptos::prelude::*;
use taskboard_core::BoardConfig;

use crate::components::{ProjectTabBar, StatsPanel, TaskList};
use crate::context::BoardContext;
use crate::poller::Poller;

pub const TABS_REGION_ID: &str = "project-tabs";
pub const STATS_REGION_ID: &str = "stats";
pub const TASKS_REGION_ID: &str = "tasks";

#[component]
pub fn App() -> impl IntoView {
    let ctx = BoardContext::new(BoardConfig::default());
    provide_context(ctx);

    // Load now, then on every interval until the app is torn down
    let poller = StoredValue::new_local(Poller::start(ctx.config().poll_interval_ms, move || ctx.reload()));
    on_cleanup(move || {
        poller.update_value(|p| p.cancel());
    });

    // Back/forward and hand-edited URLs
    let _ = window_event_listener(ev::hashchange, move |_| ctx.follow_fragment());

    view! {
        <div class="container">
            <header class="header">
                <h1>"📋 TaskBoard"</h1>
            </header>

            <nav id=TABS_REGION_ID class="project-tabs">
                <ProjectTabBar />
            </nav>

            <section id=STATS_REGION_ID>
                <StatsPanel />
            </section>

            <section id=TASKS_REGION_ID>
                <TaskList />
            </section>
        </div>
    }
}
