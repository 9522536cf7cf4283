//! Tag Badge Component

use leptos::prelude::*;

use crate::catalog;

/// Colored chip for a tag title. Unknown titles render without a
/// background so drift stays visible instead of crashing the view.
#[component]
pub fn TagBadge(title: String) -> impl IntoView {
    let style = catalog::find_tag(&title)
        .map(|tag| format!("background-color: {};", tag.color))
        .unwrap_or_default();

    view! {
        <span class="tag-badge" style=style>{title}</span>
    }
}
