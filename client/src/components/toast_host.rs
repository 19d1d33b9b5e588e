//! Toast stack rendered once by `App`.

use leptos::prelude::*;

use crate::state::toast::{TOAST_TTL_MS, ToastKind, ToastState};

/// Show a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message));
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(TOAST_TTL_MS, move || {
            toasts.update(|t| t.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, TOAST_TTL_MS);
    }
}

pub fn notify_success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message);
}

/// Error toast; also logged to the console.
pub fn notify_error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    let message = message.into();
    leptos::logging::warn!("{message}");
    notify(toasts, ToastKind::Error, message);
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="btn btn--icon toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
