//! Home View Component
//!
//! Task list with toggle and delete, registered under `/`.

use leptos::prelude::*;

use crate::components::TagBadge;
use crate::context::use_router;
use crate::models::Task;
use crate::router::Route;
use crate::store::{store_remove_task, store_toggle_task, use_app_store, AppStateStoreFields};

/// Single task row
#[component]
fn TaskRow(index: usize, task: Task) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="task-row">
            <input
                type="checkbox"
                checked=task.done
                on:change=move |_| store_toggle_task(&store, index)
            />
            <div class="task-body">
                <span
                    class="task-title"
                    style=if task.done { "text-decoration: line-through; color: #888;" } else { "" }
                >
                    {task.title.clone()}
                </span>
                {(!task.description.is_empty()).then(|| view! {
                    <p class="task-description">{task.description.clone()}</p>
                })}
                <div class="task-tags">
                    {task.tags.iter().map(|tag| view! {
                        <TagBadge title=tag.clone()/>
                    }).collect_view()}
                </div>
            </div>
            <button
                class="delete-button"
                on:click=move |_| store_remove_task(&store, index)
            >
                "Delete"
            </button>
        </div>
    }
}

/// Task list overview
#[component]
pub fn HomeView() -> impl IntoView {
    let store = use_app_store();
    let router = use_router();

    view! {
        <div class="home-view">
            <header class="view-header">
                <h1>"Tasks"</h1>
                <button
                    class="create-link"
                    on:click=move |_| router.navigate_to(Route::CreateTask)
                >
                    "New task"
                </button>
            </header>

            <div class="task-list">
                {move || {
                    let tasks = store.tasks().get();
                    if tasks.is_empty() {
                        view! {
                            <p class="empty-hint">"No tasks yet. Create one to get started."</p>
                        }.into_any()
                    } else {
                        tasks.into_iter().enumerate().map(|(index, task)| view! {
                            <TaskRow index=index task=task/>
                        }).collect_view().into_any()
                    }
                }}
            </div>

            <p class="task-count">
                {move || format!("{} tasks", store.tasks().with(|tasks| tasks.len()))}
            </p>
        </div>
    }
}
