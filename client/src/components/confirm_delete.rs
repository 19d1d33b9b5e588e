//! Delete confirmation bound to one record's detail endpoint.

use leptos::prelude::*;

use crate::components::dialog::{Dialog, FormError};
use crate::components::toast_host::notify_success;
use crate::net::api;
use crate::net::loader::spawn;
use crate::state::modal::SubmitStatus;
use crate::state::toast::ToastState;

#[component]
pub fn ConfirmDelete(
    label: &'static str,
    #[prop(into)] name: String,
    #[prop(into)] path: String,
    on_close: Callback<()>,
    on_deleted: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let status = RwSignal::new(SubmitStatus::Idle);

    let confirm = move |_| {
        if status.get_untracked().is_submitting() {
            return;
        }
        status.set(SubmitStatus::Submitting);
        let path = path.clone();
        spawn(async move {
            match api::delete(&path).await {
                Ok(()) => {
                    status.set(SubmitStatus::Succeeded);
                    notify_success(toasts, format!("{label} deleted"));
                    on_deleted.run(());
                }
                Err(err) => status.set(SubmitStatus::Failed(err.to_string())),
            }
        });
    };

    view! {
        <Dialog title=format!("Delete {label}") on_close=on_close>
            <p class="dialog__danger">
                "Delete " <strong>{name}</strong> "? This cannot be undone."
            </p>
            <FormError message=Signal::derive(move || status.with(|s| s.error().map(ToOwned::to_owned))) />
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--danger" disabled=move || status.get().is_submitting() on:click=confirm>
                    {move || if status.get().is_submitting() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </Dialog>
    }
}
