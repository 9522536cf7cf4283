//! Create Task View Component
//!
//! Task creation form, registered under `/create-task`. The tag picker
//! is generated from the catalog, so only known tag titles can be
//! attached; the store re-validates on submit anyway.

use leptos::prelude::*;

use crate::catalog;
use crate::context::use_router;
use crate::models::Task;
use crate::router::Route;
use crate::store::{store_add_task, use_app_store};

#[component]
pub fn CreateTaskView() -> impl IntoView {
    let store = use_app_store();
    let router = use_router();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (selected_tags, set_selected_tags) = signal(Vec::<String>::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let toggle_tag = move |tag_title: String| {
        set_selected_tags.update(|tags| {
            if let Some(pos) = tags.iter().position(|t| *t == tag_title) {
                tags.remove(pos);
            } else {
                tags.push(tag_title);
            }
        });
    };

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let task = Task {
            title: title.get(),
            description: description.get(),
            done: false,
            tags: selected_tags.get(),
        };
        match store_add_task(&store, task) {
            Ok(()) => router.navigate_to(Route::Home),
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <div class="create-task-view">
            <h1>"Create Task"</h1>

            <form class="create-task-form" on:submit=create_task>
                <input
                    type="text"
                    placeholder="Task title..."
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Description..."
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>

                <div class="tag-picker">
                    {catalog::list_tags().into_iter().map(|tag| {
                        let checked_title = tag.title.clone();
                        let toggled_title = tag.title.clone();
                        view! {
                            <label
                                class="tag-option"
                                style=format!("background-color: {};", tag.color)
                            >
                                <input
                                    type="checkbox"
                                    prop:checked=move || selected_tags.get().contains(&checked_title)
                                    on:change=move |_| toggle_tag(toggled_title.clone())
                                />
                                {tag.title.clone()}
                            </label>
                        }
                    }).collect_view()}
                </div>

                {move || error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}

                <div class="form-actions">
                    <button type="submit">"Create"</button>
                    <button
                        type="button"
                        on:click=move |_| router.navigate_to(Route::Home)
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
