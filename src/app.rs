//! Task Tracker App
//!
//! Root component: provides the store and router context, then renders
//! whichever view the active route selects.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CreateTaskView, HomeView, NotFoundView};
use crate::context::RouterContext;
use crate::router::Route;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Provide the task store to all children
    let store = Store::new(AppState::default());
    provide_context(store);

    // Router context, seeded from the address bar
    let router = RouterContext::new();
    router.listen_popstate();
    provide_context(router);

    web_sys::console::log_1(
        &format!(
            "[APP] started, active route: {:?}",
            router.active().map(|route| route.name())
        )
        .into(),
    );

    view! {
        <div class="app-layout">
            {move || match router.active() {
                Some(Route::Home) => view! { <HomeView/> }.into_any(),
                Some(Route::CreateTask) => view! { <CreateTaskView/> }.into_any(),
                None => view! { <NotFoundView/> }.into_any(),
            }}
        </div>
    }
}
