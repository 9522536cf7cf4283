//! Not Found View Component
//!
//! Rendered when the current path matches no route table entry.

use leptos::prelude::*;

use crate::context::use_router;
use crate::router::Route;

#[component]
pub fn NotFoundView() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="not-found-view">
            <h1>"Page not found"</h1>
            <p>"This address does not match any page of the task tracker."</p>
            <button on:click=move |_| router.navigate_to(Route::Home)>
                "Back to tasks"
            </button>
        </div>
    }
}
