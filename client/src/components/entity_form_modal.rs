//! Create/edit modal shared by tracks, subjects, chapters, notes, videos
//! and universities.
//!
//! On success the modal reports back through `on_saved` (the page closes it
//! and refetches). On failure it stays open with the server message inline.

use leptos::prelude::*;
use records::UploadKind;

use crate::components::dialog::{Dialog, FormError};
use crate::components::file_drop_zone::{FileDropZone, clear_slot};
use crate::components::markdown_preview::DescriptionField;
use crate::components::toast_host::notify_success;
use crate::net::api;
use crate::net::loader::spawn;
use crate::state::entity_form::{EntityDraft, EntityKind};
use crate::state::file_slot::FileSlot;
use crate::state::modal::{SubmitLatch, SubmitStatus};
use crate::state::toast::ToastState;

#[component]
pub fn EntityFormModal(
    kind: EntityKind,
    draft: EntityDraft,
    #[prop(optional)] thumbnail_url: Option<String>,
    #[prop(optional)] attachment_url: Option<String>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let is_edit = draft.is_edit();
    let name = RwSignal::new(draft.name.clone());
    let description = RwSignal::new(draft.description.clone());
    let has_university = RwSignal::new(draft.has_university);
    let thumbnail = RwSignal::new(FileSlot::default());
    let attachment = RwSignal::new(FileSlot::default());
    let status = RwSignal::new(SubmitStatus::Idle);
    let latch = SubmitLatch::new();
    let cleanup_latch = latch.clone();

    on_cleanup(move || {
        cleanup_latch.release();
        clear_slot(thumbnail);
        clear_slot(attachment);
    });

    let submit = Callback::new(move |()| {
        // Video create holds the latch until the upload settles.
        let guard = if kind == EntityKind::Video && !is_edit {
            match latch.try_acquire() {
                Some(guard) => Some(guard),
                None => return,
            }
        } else {
            None
        };
        if status.get_untracked().is_submitting() {
            return;
        }
        let current = EntityDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            has_university: has_university.get_untracked(),
            ..draft.clone()
        };
        let attached = attachment.with_untracked(|s| s.file.clone());
        if let Err(err) = current.validate(kind, attached.is_some()) {
            status.set(SubmitStatus::Failed(err.to_string()));
            return;
        }
        let payload = current.to_payload(kind, thumbnail.with_untracked(|s| s.file.clone()), attached);
        let (method, path) = current.request(kind);
        status.set(SubmitStatus::Submitting);
        spawn(async move {
            let _guard = guard;
            match api::send(method, &path, payload).await {
                Ok(_) => {
                    status.set(SubmitStatus::Succeeded);
                    let verb = if is_edit { "updated" } else { "created" };
                    notify_success(toasts, format!("{} {verb}", kind.label()));
                    on_saved.run(());
                }
                Err(err) => {
                    leptos::logging::warn!("saving {} failed: {err}", kind.label());
                    status.set(SubmitStatus::Failed(err.to_string()));
                }
            }
        });
    });

    let title = format!("{} {}", if is_edit { "Edit" } else { "New" }, kind.label());
    let attachment_field = kind.attachment();

    view! {
        <Dialog title=title on_close=on_close>
            <form
                class="dialog__form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <DescriptionField value=description />
                {kind.has_university_flag().then(|| view! {
                    <label class="dialog__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || has_university.get()
                            on:change=move |ev| has_university.set(event_target_checked(&ev))
                        />
                        "Has universities"
                    </label>
                })}
                <FileDropZone
                    kind=UploadKind::Image
                    file_slot=thumbnail
                    label="Thumbnail"
                    current=thumbnail_url.unwrap_or_default()
                />
                {attachment_field.map(|(_, upload)| {
                    let label = if upload == UploadKind::Pdf { "PDF source" } else { "Video file" };
                    view! {
                        <FileDropZone
                            kind=upload
                            file_slot=attachment
                            label=label
                            current=attachment_url.clone().unwrap_or_default()
                        />
                    }
                })}
                <FormError message=Signal::derive(move || status.with(|s| s.error().map(ToOwned::to_owned))) />
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || status.get().is_submitting()>
                        {move || if status.get().is_submitting() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Dialog>
    }
}
