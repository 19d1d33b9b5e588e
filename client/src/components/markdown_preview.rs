//! Rendered Markdown for description fields.

use leptos::prelude::*;

use crate::util::markdown::render_markdown;

#[component]
pub fn MarkdownPreview(#[prop(into)] source: Signal<String>) -> impl IntoView {
    view! {
        <div class="markdown" inner_html=move || render_markdown(&source.get())></div>
    }
}

/// Description textarea with a live preview underneath.
#[component]
pub fn DescriptionField(value: RwSignal<String>) -> impl IntoView {
    let show_preview = RwSignal::new(false);

    view! {
        <label class="dialog__label">
            "Description"
            <textarea
                class="dialog__input dialog__textarea"
                rows="4"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
        <button
            class="btn btn--link"
            type="button"
            on:click=move |_| show_preview.update(|v| *v = !*v)
        >
            {move || if show_preview.get() { "Hide preview" } else { "Preview" }}
        </button>
        <Show when=move || show_preview.get()>
            <MarkdownPreview source=value />
        </Show>
    }
}
