//! File picker that also accepts drag-and-drop.
//!
//! The slot keeps only plain file metadata; the browser handle is parked in
//! `util::files` until the form is submitted or the selection is cleared.

use leptos::prelude::*;
use records::UploadKind;

use crate::state::file_slot::FileSlot;
use crate::util::files::{self, PickedFile};

/// Validate `picked` into `slot` and release whatever it displaced.
pub fn offer_file(slot: RwSignal<FileSlot>, kind: UploadKind, picked: PickedFile) {
    let mut stale = Vec::new();
    slot.update(|s| stale = s.offer(kind, picked));
    files::release_all(&stale);
}

/// Empty `slot`, releasing its file.
pub fn clear_slot(slot: RwSignal<FileSlot>) {
    let mut removed = None;
    slot.update(|s| removed = s.clear());
    if let Some(file) = removed {
        files::release(&file);
    }
}

#[component]
pub fn FileDropZone(
    kind: UploadKind,
    file_slot: RwSignal<FileSlot>,
    #[prop(into)] label: String,
    /// URL of the file already stored on the server, when editing.
    #[prop(optional, into)]
    current: Option<String>,
) -> impl IntoView {
    let dragging = RwSignal::new(false);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        if let Some(picked) = files::from_input_event(&ev, kind) {
            offer_file(file_slot, kind, picked);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        #[cfg(feature = "hydrate")]
        if let Some(picked) = files::from_drop_event(&ev, kind) {
            offer_file(file_slot, kind, picked);
        }
    };

    let hint = match kind.max_bytes() {
        Some(limit) => format!("Drop a {} here or browse (max {} MB)", kind.label(), limit / (1024 * 1024)),
        None => format!("Drop a {} here or browse", kind.label()),
    };

    view! {
        <div class="file-drop">
            <span class="dialog__label">{label}</span>
            <label
                class="file-drop__zone"
                class:file-drop__zone--active=move || dragging.get()
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    dragging.set(true);
                }
                on:dragleave=move |_| dragging.set(false)
                on:drop=on_drop
            >
                <input class="file-drop__input" type="file" accept=kind.accept() on:change=on_change />
                <span class="file-drop__hint">{hint}</span>
            </label>
            {move || {
                file_slot.get()
                    .file
                    .map(|file| {
                        view! {
                            <div class="file-drop__chip">
                                {file.preview_url.clone().map(|src| view! { <img class="file-drop__preview" src=src alt="" /> })}
                                <span class="file-drop__name">{file.meta.name.clone()}</span>
                                <span class="file-drop__size">{file.size_label()}</span>
                                <button class="btn btn--icon" type="button" title="Remove" on:click=move |_| clear_slot(file_slot)>
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}
            {current
                .filter(|url| !url.is_empty())
                .map(|url| {
                    view! {
                        <Show when=move || file_slot.with(FileSlot::is_empty)>
                            <a class="file-drop__current" href=url.clone() target="_blank" rel="noopener">
                                "Current file"
                            </a>
                        </Show>
                    }
                })}
            <Show when=move || file_slot.with(|s| s.error.is_some())>
                <p class="dialog__error" role="alert">{move || file_slot.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
        </div>
    }
}
