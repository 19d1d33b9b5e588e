//! Terminal error shown when a page is opened without its parent selection.

use leptos::prelude::*;

use crate::util::session::{MissingSelection, Selection};

#[component]
pub fn SelectionNotice(missing: MissingSelection, back_href: &'static str) -> impl IntoView {
    view! {
        <div class="page-error" role="alert">
            <p>{missing.to_string()}</p>
            <a class="btn" href=back_href>
                "Go back"
            </a>
        </div>
    }
}

/// Render `children` with the selected id once it is known, the notice
/// when it is missing, and nothing while the session is still unread.
#[component]
pub fn RequireSelection<F, V>(selection: RwSignal<Selection>, back_href: &'static str, children: F) -> impl IntoView
where
    F: Fn(u64) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || match selection.get() {
        Selection::Pending => view! { <p class="page-loading">"Loading..."</p> }.into_any(),
        Selection::Missing(missing) => view! { <SelectionNotice missing back_href /> }.into_any(),
        Selection::Ready(id) => children(id).into_any(),
    }
}
