//! Exam list panel shared by grand, chapter and university test screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists the exams of one type under the current scope with search and
//! paging, links to the builder and the review page, and hosts the import,
//! details-edit and delete modals.

use leptos::prelude::*;
use records::{Exam, ExamType};

use crate::components::confirm_delete::ConfirmDelete;
use crate::components::dialog::{Dialog, FormError};
use crate::components::import_modal::ImportModal;
use crate::components::markdown_preview::DescriptionField;
use crate::components::resource_table::{ResourceTable, RowAction};
use crate::components::toast_host::notify_success;
use crate::net::api::{self, Method};
use crate::net::loader::{load_into, spawn};
use crate::net::payload::{FormPayload, Payload};
use crate::state::exam_builder::ExamScope;
use crate::state::modal::{ModalState, SubmitStatus};
use crate::state::question_draft::BuilderError;
use crate::state::resource::ListState;
use crate::state::toast::ToastState;
use crate::util::session::{self, keys};

/// Write the session keys the review page reads.
pub fn remember_exam(exam: &Exam) {
    let (id_key, practice_key) = if exam.exam_type.has_sections() {
        (keys::EXAM_ID_UNIVERSITY, keys::IS_PRACTICE_EXAM_UNIVERSITY)
    } else {
        (keys::EXAM_ID_TRACK, keys::IS_PRACTICE_EXAM_TRACK)
    };
    session::set_all(&[(id_key, exam.id.to_string()), (practice_key, exam.is_practice_exam.to_string())]);
}

#[component]
pub fn ExamListPanel(
    exam_type: ExamType,
    scope: ExamScope,
    new_href: &'static str,
    review_href: &'static str,
) -> impl IntoView {
    let state = RwSignal::new(ListState::<Exam>::default());
    let modal = RwSignal::new(ModalState::<Exam>::Closed);
    let importing = RwSignal::new(false);

    let list_path = scope.list_path(exam_type);
    let reload = Callback::new(move |()| match &list_path {
        Ok(path) => load_into(state, path.clone()),
        Err(err) => state.update(|s| s.finish(Err(err.to_string()))),
    });
    Effect::new(move || reload.run(()));

    let review = RowAction::link("Review", review_href, Callback::new(|exam: Exam| remember_exam(&exam)));
    let close = Callback::new(move |()| modal.set(ModalState::Closed));
    let changed = Callback::new(move |()| {
        modal.set(ModalState::Closed);
        reload.run(());
    });

    view! {
        <section class="panel">
            <header class="panel__header">
                <h2>{format!("{}s", exam_type.label())}</h2>
                <span class="toolbar__spacer"></span>
                <button class="btn" on:click=move |_| importing.set(true)>
                    "Import"
                </button>
                <a class="btn btn--primary" href=new_href>
                    {format!("New {}", exam_type.label().to_lowercase())}
                </a>
            </header>
            <ResourceTable
                state=state
                on_retry=reload
                actions=vec![review]
                on_edit=Callback::new(move |exam| modal.set(ModalState::Edit(exam)))
                on_delete=Callback::new(move |exam| modal.set(ModalState::Delete(exam)))
                empty_text="No exams yet."
            />
            <Show when=move || importing.get()>
                <ImportModal
                    exam_type=exam_type
                    scope=scope
                    on_close=Callback::new(move |()| importing.set(false))
                    on_imported=Callback::new(move |()| {
                        importing.set(false);
                        reload.run(());
                    })
                />
            </Show>
            {move || match modal.get() {
                ModalState::Edit(exam) => view! {
                    <ExamDetailsModal exam=exam on_close=close on_saved=changed />
                }
                .into_any(),
                ModalState::Delete(exam) => view! {
                    <ConfirmDelete
                        label="Exam"
                        name=exam.title.clone()
                        path=exam.exam_type.resource().detail(exam.id)
                        on_close=close
                        on_deleted=changed
                    />
                }
                .into_any(),
                ModalState::Closed | ModalState::Create => ().into_any(),
            }}
        </section>
    }
}

/// Edit an exam's title, description and practice flag.
#[component]
pub fn ExamDetailsModal(exam: Exam, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let title = RwSignal::new(exam.title.clone());
    let description = RwSignal::new(exam.description.clone());
    let is_practice = RwSignal::new(exam.is_practice_exam);
    let status = RwSignal::new(SubmitStatus::Idle);
    let path = exam.exam_type.resource().detail(exam.id);

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }
        let title_value = title.get_untracked().trim().to_owned();
        if title_value.is_empty() {
            status.set(SubmitStatus::Failed(BuilderError::TitleRequired.to_string()));
            return;
        }
        let payload = Payload::from_form(
            FormPayload::new()
                .value("title", title_value)
                .value("description", description.get_untracked())
                .value("is_practice_exam", is_practice.get_untracked()),
        );
        let path = path.clone();
        status.set(SubmitStatus::Submitting);
        spawn(async move {
            match api::send(Method::Patch, &path, payload).await {
                Ok(_) => {
                    status.set(SubmitStatus::Succeeded);
                    notify_success(toasts, "Exam updated");
                    on_saved.run(());
                }
                Err(err) => status.set(SubmitStatus::Failed(err.to_string())),
            }
        });
    };

    view! {
        <Dialog title="Edit exam" on_close=on_close>
            <form class="dialog__form" on:submit=save>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <DescriptionField value=description />
                <label class="dialog__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || is_practice.get()
                        on:change=move |ev| is_practice.set(event_target_checked(&ev))
                    />
                    "Practice exam"
                </label>
                <FormError message=Signal::derive(move || status.with(|s| s.error().map(ToOwned::to_owned))) />
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || status.get().is_submitting()>
                        "Save"
                    </button>
                </div>
            </form>
        </Dialog>
    }
}
