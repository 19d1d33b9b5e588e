//! Exam review: browse a saved exam and edit or delete its sections,
//! questions and choices in place.
//!
//! SYSTEM CONTEXT
//! ==============
//! Track exams (`/exam`) and university exams (`/university-tests/review`)
//! share this page; the exam id comes from session storage. A successful
//! PUT or DELETE is spliced into the local copy first, then the exam is
//! refetched. A failed refetch is logged and the spliced copy stays.

use leptos::prelude::*;
use records::{Exam, ExamType, Question, RecordId, Resource};

use crate::components::confirm_delete::ConfirmDelete;
use crate::components::dashboard_layout::{Crumb, DashboardLayout};
use crate::components::dialog::{Dialog, FormError};
use crate::components::markdown_preview::MarkdownPreview;
use crate::components::selection_notice::RequireSelection;
use crate::components::toast_host::notify_success;
use crate::net::api::{self, Method};
use crate::net::loader::spawn;
use crate::net::payload::Payload;
use crate::state::exam_review::{ExamReviewState, ReviewTarget};
use crate::state::modal::SubmitStatus;
use crate::state::toast::ToastState;
use crate::util::session::{Selection, keys, use_selection};

#[component]
pub fn TrackExamReviewPage() -> impl IntoView {
    view! { <ExamReviewPage resource=Resource::TrackExams id_key=keys::EXAM_ID_TRACK back_href="/" /> }
}

#[component]
pub fn UniversityExamReviewPage() -> impl IntoView {
    view! {
        <ExamReviewPage
            resource=Resource::UniversityExams
            id_key=keys::EXAM_ID_UNIVERSITY
            back_href="/university-tests"
        />
    }
}

/// List page an exam of `exam_type` is reached from.
fn exam_list_href(exam_type: ExamType) -> &'static str {
    match exam_type {
        ExamType::Chapter => "/chapter",
        ExamType::Grand => "/grand-tests",
        ExamType::University => "/university-tests",
    }
}

/// Fetch the exam into `state`. A quiet fetch keeps the current copy and
/// only logs on failure.
fn fetch_exam(state: RwSignal<ExamReviewState>, path: String, quiet: bool) {
    if !quiet {
        state.update(|s| {
            s.loading = true;
            s.error = None;
        });
    }
    spawn(async move {
        match api::fetch_one::<Exam>(&path).await {
            Ok(exam) => state.update(|s| s.loaded(exam)),
            Err(err) => {
                leptos::logging::warn!("loading exam {path} failed: {err}");
                if !quiet {
                    state.update(|s| {
                        s.loading = false;
                        s.error = Some(err.to_string());
                    });
                }
            }
        }
    });
}

#[component]
fn ExamReviewPage(resource: Resource, id_key: &'static str, back_href: &'static str) -> impl IntoView {
    let selection = use_selection(id_key);
    let state = RwSignal::new(ExamReviewState::default());
    let editing = RwSignal::new(None::<ReviewTarget>);
    let deleting = RwSignal::new(None::<ReviewTarget>);

    let load = Callback::new(move |quiet: bool| {
        if let Selection::Ready(id) = selection.get_untracked() {
            fetch_exam(state, resource.detail(id), quiet);
        }
    });
    Effect::new(move || {
        if matches!(selection.get(), Selection::Ready(_)) {
            load.run(false);
        }
    });

    let on_saved = Callback::new(move |()| {
        editing.set(None);
        load.run(true);
    });
    let on_deleted = Callback::new(move |()| {
        if let Some(target) = deleting.get_untracked() {
            state.update(|s| {
                s.remove(&target);
            });
        }
        deleting.set(None);
        load.run(true);
    });

    let title = Signal::derive(move || {
        state.with(|s| s.exam.as_ref().map_or_else(|| "Exam".to_owned(), |e| e.title.clone()))
    });
    let list_href = move || state.with(|s| s.exam.as_ref().map_or(back_href, |e| exam_list_href(e.exam_type)));

    view! {
        <DashboardLayout
            title=title
            crumbs=Signal::derive(move || {
                vec![Crumb::link("Tracks", "/"), Crumb::link("Exams", list_href()), Crumb::here(title.get())]
            })
        >
            <RequireSelection selection=selection back_href=back_href let:_exam>
                {move || {
                    let (loading, error) = state.with(|s| (s.loading, s.error.clone()));
                    match (state.with(|s| s.exam.clone()), error) {
                        (_, Some(error)) => view! {
                            <div class="page-error" role="alert">
                                <p>{error}</p>
                                <button class="btn" on:click=move |_| load.run(false)>
                                    "Retry"
                                </button>
                            </div>
                        }
                        .into_any(),
                        (None, None) if loading => view! { <p class="page-loading">"Loading exam..."</p> }.into_any(),
                        (None, None) => ().into_any(),
                        (Some(exam), None) => view! {
                            <ExamOutline exam=exam state=state editing=editing deleting=deleting />
                        }
                        .into_any(),
                    }
                }}
                {move || editing.get().map(|target| view! {
                    <EditTargetModal
                        target=target
                        state=state
                        on_close=Callback::new(move |()| editing.set(None))
                        on_saved=on_saved
                    />
                })}
                {move || deleting.get().map(|target| view! {
                    <ConfirmDelete
                        label=target.label()
                        name=target.display_name()
                        path=target.path()
                        on_close=Callback::new(move |()| deleting.set(None))
                        on_deleted=on_deleted
                    />
                })}
            </RequireSelection>
        </DashboardLayout>
    }
}

#[component]
fn ExamOutline(
    exam: Exam,
    state: RwSignal<ExamReviewState>,
    editing: RwSignal<Option<ReviewTarget>>,
    deleting: RwSignal<Option<ReviewTarget>>,
) -> impl IntoView {
    let description = Signal::stored(exam.description.clone());
    let summary = format!(
        "{} · {} questions · {} marks{}",
        exam.exam_type.label(),
        exam.question_count(),
        exam.total_marks,
        if exam.is_practice_exam { " · practice" } else { "" },
    );

    let sections = exam
        .sections
        .into_iter()
        .map(|section| {
            let target = ReviewTarget::section(&section);
            let delete_target = target.clone();
            let marks = section.total_marks();
            let description = Signal::stored(section.description);
            view! {
                <section class="panel review__section">
                    <header class="panel__header">
                        <h3>{section.name}</h3>
                        <span class="muted">{format!("{marks} marks")}</span>
                        <span class="toolbar__spacer"></span>
                        <button class="btn btn--small" on:click=move |_| editing.set(Some(target.clone()))>
                            "Edit"
                        </button>
                        <button
                            class="btn btn--small btn--danger"
                            on:click=move |_| deleting.set(Some(delete_target.clone()))
                        >
                            "Delete"
                        </button>
                    </header>
                    <MarkdownPreview source=description />
                    <QuestionRows questions=section.questions state=state editing=editing deleting=deleting />
                </section>
            }
        })
        .collect::<Vec<_>>();
    let flat = (!exam.questions.is_empty()).then(|| {
        view! {
            <section class="panel">
                <QuestionRows questions=exam.questions state=state editing=editing deleting=deleting />
            </section>
        }
    });

    view! {
        <div class="review">
            <p class="review__summary">{summary}</p>
            <MarkdownPreview source=description />
            {sections}
            {flat}
        </div>
    }
}

#[component]
fn QuestionRows(
    questions: Vec<Question>,
    state: RwSignal<ExamReviewState>,
    editing: RwSignal<Option<ReviewTarget>>,
    deleting: RwSignal<Option<ReviewTarget>>,
) -> impl IntoView {
    if questions.is_empty() {
        return view! { <p class="muted">"No questions."</p> }.into_any();
    }
    let rows = questions
        .into_iter()
        .enumerate()
        .map(|(index, question)| {
            let id: RecordId = question.id;
            let target = ReviewTarget::question(&question);
            let delete_target = target.clone();
            let choices = question.choices.clone();
            view! {
                <li class="review__question">
                    <div class="review__question-row">
                        <button
                            class="btn btn--icon"
                            title="Show options"
                            on:click=move |_| state.update(|s| s.toggle(id))
                        >
                            {move || if state.with(|s| s.is_expanded(id)) { "▾" } else { "▸" }}
                        </button>
                        <span class="review__index">{index + 1} "."</span>
                        <span class="review__text">{question.text.clone()}</span>
                        <span class="muted">{format!("{} marks", question.marks)}</span>
                        <button class="btn btn--small" on:click=move |_| editing.set(Some(target.clone()))>
                            "Edit"
                        </button>
                        <button
                            class="btn btn--small btn--danger"
                            on:click=move |_| deleting.set(Some(delete_target.clone()))
                        >
                            "Delete"
                        </button>
                    </div>
                    {question.graphics.clone().map(|src| view! { <img class="review__image" src=src alt="" /> })}
                    <Show when=move || state.with(|s| s.is_expanded(id))>
                        <ChoiceList choices=choices.clone() editing=editing deleting=deleting />
                    </Show>
                </li>
            }
        })
        .collect::<Vec<_>>();
    view! { <ol class="review__questions">{rows}</ol> }.into_any()
}

#[component]
fn ChoiceList(
    choices: Vec<records::Choice>,
    editing: RwSignal<Option<ReviewTarget>>,
    deleting: RwSignal<Option<ReviewTarget>>,
) -> impl IntoView {
    let items = choices
        .into_iter()
        .map(|choice| {
            let target = ReviewTarget::choice(&choice);
            let delete_target = target.clone();
            view! {
                <li class="review__choice" class:review__choice--correct=choice.is_correct>
                    <span>{if choice.is_correct { "✓ " } else { "" }} {choice.text.clone()}</span>
                    {choice.graphics.clone().map(|src| view! { <img class="review__image" src=src alt="" /> })}
                    <button class="btn btn--small" on:click=move |_| editing.set(Some(target.clone()))>
                        "Edit"
                    </button>
                    <button
                        class="btn btn--small btn--danger"
                        on:click=move |_| deleting.set(Some(delete_target.clone()))
                    >
                        "Delete"
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();
    view! { <ul class="review__choices">{items}</ul> }
}

/// Edit form for whichever node `target` names.
#[component]
fn EditTargetModal(
    target: ReviewTarget,
    state: RwSignal<ExamReviewState>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let label = target.label();
    let draft = RwSignal::new(target);
    let status = RwSignal::new(SubmitStatus::Idle);

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }
        let update = match draft.with_untracked(ReviewTarget::to_update) {
            Ok(update) => update,
            Err(err) => {
                status.set(SubmitStatus::Failed(err.to_string()));
                return;
            }
        };
        let body = match update.body() {
            Ok(body) => body,
            Err(err) => {
                status.set(SubmitStatus::Failed(err.to_string()));
                return;
            }
        };
        status.set(SubmitStatus::Submitting);
        spawn(async move {
            match api::send(Method::Put, &update.path(), Payload::Json(body)).await {
                Ok(_) => {
                    status.set(SubmitStatus::Succeeded);
                    state.update(|s| {
                        s.apply(&update);
                    });
                    notify_success(toasts, format!("{label} updated"));
                    on_saved.run(());
                }
                Err(err) => status.set(SubmitStatus::Failed(err.to_string())),
            }
        });
    };

    // Rendered once: the variant never changes while the modal is open.
    let fields = match draft.get_untracked() {
        ReviewTarget::Section { name, description, .. } => view! {
            <label class="dialog__label">
                "Name"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=name
                    on:input=move |ev| draft.update(|t| {
                        if let ReviewTarget::Section { name, .. } = t {
                            *name = event_target_value(&ev);
                        }
                    })
                />
            </label>
            <label class="dialog__label">
                "Description"
                <textarea
                    class="dialog__input dialog__textarea"
                    rows="4"
                    prop:value=description
                    on:input=move |ev| draft.update(|t| {
                        if let ReviewTarget::Section { description, .. } = t {
                            *description = event_target_value(&ev);
                        }
                    })
                ></textarea>
            </label>
        }
        .into_any(),
        ReviewTarget::Question { text, marks, .. } => view! {
            <label class="dialog__label">
                "Question text"
                <textarea
                    class="dialog__input dialog__textarea"
                    rows="3"
                    prop:value=text
                    on:input=move |ev| draft.update(|t| {
                        if let ReviewTarget::Question { text, .. } = t {
                            *text = event_target_value(&ev);
                        }
                    })
                ></textarea>
            </label>
            <label class="dialog__label">
                "Marks"
                <input
                    class="dialog__input"
                    type="number"
                    min="0"
                    step="0.5"
                    prop:value=marks
                    on:input=move |ev| draft.update(|t| {
                        if let ReviewTarget::Question { marks, .. } = t {
                            *marks = event_target_value(&ev);
                        }
                    })
                />
            </label>
        }
        .into_any(),
        ReviewTarget::Choice { text, is_correct, .. } => view! {
            <label class="dialog__label">
                "Option text"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=text
                    on:input=move |ev| draft.update(|t| {
                        if let ReviewTarget::Choice { text, .. } = t {
                            *text = event_target_value(&ev);
                        }
                    })
                />
            </label>
            <label class="dialog__checkbox">
                <input
                    type="checkbox"
                    prop:checked=is_correct
                    on:change=move |ev| draft.update(|t| {
                        if let ReviewTarget::Choice { is_correct, .. } = t {
                            *is_correct = event_target_checked(&ev);
                        }
                    })
                />
                "Correct"
            </label>
        }
        .into_any(),
    };

    view! {
        <Dialog title=format!("Edit {}", label.to_lowercase()) on_close=on_close>
            <form class="dialog__form" on:submit=save>
                {fields}
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
