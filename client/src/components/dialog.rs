//! Backdrop + panel shell shared by every modal.

use leptos::prelude::*;

/// Modal dialog. Clicking the backdrop or pressing Escape calls `on_close`.
#[component]
pub fn Dialog(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };
    let class = if class.is_empty() { "dialog".to_owned() } else { format!("dialog {class}") };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class=class
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <header class="dialog__header">
                    <h2>{title}</h2>
                    <button class="btn btn--icon" title="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </header>
                {children()}
            </div>
        </div>
    }
}

/// Inline error line under a form.
#[component]
pub fn FormError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="dialog__error" role="alert">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
