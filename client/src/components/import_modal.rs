//! Spreadsheet upload that creates exams in bulk.

use leptos::prelude::*;
use records::{ExamType, UploadKind};

use crate::components::dialog::{Dialog, FormError};
use crate::components::file_drop_zone::{FileDropZone, clear_slot};
use crate::components::toast_host::notify_success;
use crate::net::api::{self, Method};
use crate::net::loader::spawn;
use crate::state::exam_builder::ExamScope;
use crate::state::import::ImportDraft;
use crate::state::modal::SubmitStatus;
use crate::state::toast::ToastState;

#[component]
pub fn ImportModal(
    exam_type: ExamType,
    scope: ExamScope,
    on_close: Callback<()>,
    on_imported: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let slot = RwSignal::new(ImportDraft::new(exam_type).file);
    let status = RwSignal::new(SubmitStatus::Idle);

    on_cleanup(move || clear_slot(slot));

    let upload = move |_| {
        if status.get_untracked().is_submitting() {
            return;
        }
        let draft = ImportDraft { exam_type, file: slot.get_untracked() };
        let payload = match draft.to_payload(&scope) {
            Ok(payload) => payload,
            Err(err) => {
                status.set(SubmitStatus::Failed(err.to_string()));
                return;
            }
        };
        let path = draft.path();
        status.set(SubmitStatus::Submitting);
        spawn(async move {
            match api::send(Method::Post, &path, payload).await {
                Ok(_) => {
                    status.set(SubmitStatus::Succeeded);
                    notify_success(toasts, "Exams imported");
                    on_imported.run(());
                }
                Err(err) => status.set(SubmitStatus::Failed(err.to_string())),
            }
        });
    };

    view! {
        <Dialog title=format!("Import {}s", exam_type.label().to_lowercase()) on_close=on_close>
            <p class="muted">"Upload an .xlsx or .csv file in the exam import template."</p>
            <FileDropZone kind=UploadKind::Spreadsheet file_slot=slot label="Spreadsheet" />
            <FormError message=Signal::derive(move || status.with(|s| s.error().map(ToOwned::to_owned))) />
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    class="btn btn--primary"
                    disabled=move || status.get().is_submitting() || slot.with(|s| s.is_empty())
                    on:click=upload
                >
                    {move || if status.get().is_submitting() { "Uploading..." } else { "Upload" }}
                </button>
            </div>
        </Dialog>
    }
}
