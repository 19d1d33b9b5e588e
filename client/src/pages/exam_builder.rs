//! Builders for grand tests (`/grand-tests/new`) and chapter tests
//! (`/chapter-tests/new`).

use leptos::prelude::*;
use records::{ExamType, Resource};

use crate::components::dashboard_layout::{Crumb, DashboardLayout};
use crate::components::markdown_preview::DescriptionField;
use crate::components::question_composer::QuestionComposer;
use crate::components::question_table::QuestionTable;
use crate::components::selection_notice::RequireSelection;
use crate::components::toast_host::{notify_error, notify_success};
use crate::net::api::{self, Method};
use crate::net::loader::spawn;
use crate::net::payload::Payload;
use crate::state::exam_builder::{ExamBuilder, ExamScope};
use crate::state::modal::SubmitStatus;
use crate::state::question_draft::QuestionDraft;
use crate::state::toast::ToastState;
use crate::util::nav;
use crate::util::session::{keys, use_selection, use_text};

#[component]
pub fn GrandTestBuilderPage() -> impl IntoView {
    view! { <ExamBuilderPage exam_type=ExamType::Grand /> }
}

#[component]
pub fn ChapterTestBuilderPage() -> impl IntoView {
    view! { <ExamBuilderPage exam_type=ExamType::Chapter /> }
}

/// Selection key, parent name key and return route for a flat exam type.
fn scope_route(exam_type: ExamType) -> (&'static str, &'static str, &'static str) {
    match exam_type {
        ExamType::Chapter => (keys::CHAPTER_ID, keys::CHAPTER_NAME, "/chapter"),
        ExamType::Grand | ExamType::University => (keys::ID_SUBJECT, keys::SUBJECT_NAME, "/grand-tests"),
    }
}

#[component]
fn ExamBuilderPage(exam_type: ExamType) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let (scope_key, name_key, back_href) = scope_route(exam_type);
    let selection = use_selection(scope_key);
    let parent_name = use_text(name_key);
    let builder = RwSignal::new(ExamBuilder::new(exam_type));
    let description = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitStatus::Idle);

    let on_add = Callback::new(move |draft: QuestionDraft| {
        let mut result = Ok(());
        builder.update(|b| result = b.add_question(&draft));
        result
    });
    let on_remove = Callback::new(move |index: usize| {
        builder.update(|b| {
            b.remove_question(index);
        });
    });

    let submit = move |_| {
        if status.get_untracked().is_submitting() {
            return;
        }
        builder.update_untracked(|b| b.description = description.get_untracked());
        let exam = match builder.with_untracked(|b| b.to_submission(&ExamScope::from_session())) {
            Ok(exam) => exam,
            Err(err) => {
                notify_error(toasts, err.to_string());
                return;
            }
        };
        let body = match serde_json::to_value(&exam) {
            Ok(body) => body,
            Err(err) => {
                notify_error(toasts, format!("Could not encode exam: {err}"));
                return;
            }
        };
        status.set(SubmitStatus::Submitting);
        spawn(async move {
            match api::send(Method::Post, Resource::TrackExams.collection(), Payload::Json(body)).await {
                Ok(_) => {
                    status.set(SubmitStatus::Succeeded);
                    notify_success(toasts, format!("{} saved", exam_type.label()));
                    nav::go(back_href);
                }
                Err(err) => {
                    status.set(SubmitStatus::Failed(err.to_string()));
                    notify_error(toasts, err.to_string());
                }
            }
        });
    };

    view! {
        <DashboardLayout
            title=format!("New {}", exam_type.label().to_lowercase())
            crumbs=Signal::derive(move || {
                vec![Crumb::link("Tracks", "/"), Crumb::link(parent_name.get(), back_href), Crumb::here("New exam")]
            })
        >
            <RequireSelection selection=selection back_href=back_href let:_scope>
                <section class="panel builder">
                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || builder.with(|b| b.title.clone())
                            on:input=move |ev| builder.update(|b| b.title = event_target_value(&ev))
                        />
                    </label>
                    <DescriptionField value=description />
                    <label class="dialog__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || builder.with(|b| b.is_practice_exam)
                            on:change=move |ev| builder.update(|b| b.is_practice_exam = event_target_checked(&ev))
                        />
                        "Practice exam"
                    </label>
                    <p class="builder__total">
                        "Total marks: " {move || builder.with(|b| b.total_marks)}
                        " · Questions: " {move || builder.with(|b| b.questions.len())}
                    </p>
                </section>
                <QuestionComposer on_add=on_add />
                <section class="panel">
                    <h3>"Questions"</h3>
                    <QuestionTable questions=Signal::derive(move || builder.with(|b| b.questions.clone())) on_remove=on_remove />
                </section>
                <div class="page-actions">
                    <a class="btn" href=back_href>
                        "Cancel"
                    </a>
                    <button class="btn btn--primary" disabled=move || status.get().is_submitting() on:click=submit>
                        {move || if status.get().is_submitting() { "Saving..." } else { "Save exam" }}
                    </button>
                </div>
            </RequireSelection>
        </DashboardLayout>
    }
}
