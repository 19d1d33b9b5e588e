//! University test builder (`/university-tests/new`).
//!
//! Questions are composed into the current section, and a section joins the
//! exam once it has a name and at least one question. Images ride along as
//! multipart file parts, so every picked file is released when the page
//! goes away or a section carrying it is removed.

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
use crate::state::exam_builder::ExamScope;
use crate::state::modal::SubmitStatus;
use crate::state::question_draft::{QuestionDraft, QuestionEntry};
use crate::state::toast::ToastState;
use crate::state::university_builder::UniversityExamBuilder;
use crate::util::files;
use crate::util::nav;
use crate::util::session::{keys, use_selection, use_text};

const BACK_HREF: &str = "/university-tests";

#[component]
pub fn UniversityBuilderPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let selection = use_selection(keys::ID_UNIVERSITY);
    let university_name = use_text(keys::UNIVERSITY_NAME);
    let builder = RwSignal::new(UniversityExamBuilder::default());
    let status = RwSignal::new(SubmitStatus::Idle);

    on_cleanup(move || {
        if !matches!(status.get_untracked(), SubmitStatus::Succeeded) {
            files::release_all(&builder.with_untracked(UniversityExamBuilder::files));
        }
    });

    let on_add = Callback::new(move |draft: QuestionDraft| {
        let mut result = Ok(());
        builder.update(|b| result = b.add_question(&draft));
        result
    });
    let on_remove_question = Callback::new(move |index: usize| {
        let mut removed = None;
        builder.update(|b| removed = b.remove_section_question(index));
        if let Some(entry) = removed {
            files::release_all(&entry.files());
        }
    });

    let section_description = RwSignal::new(String::new());
    let exam_description = RwSignal::new(String::new());

    let add_section = move |_| {
        let mut result = Ok(());
        builder.update(|b| {
            b.section.description = section_description.get_untracked();
            result = b.add_section();
        });
        match result {
            Ok(()) => section_description.set(String::new()),
            Err(err) => notify_error(toasts, err.to_string()),
        }
    };
    let remove_section = move |index: usize| {
        let mut removed = None;
        builder.update(|b| removed = b.remove_section(index));
        if let Some(section) = removed {
            let picked: Vec<_> = section.questions.iter().flat_map(QuestionEntry::files).collect();
            files::release_all(&picked);
        }
    };

    let submit = move |_| {
        if status.get_untracked().is_submitting() {
            return;
        }
        builder.update_untracked(|b| b.description = exam_description.get_untracked());
        let payload = match builder.with_untracked(|b| b.to_submission(&ExamScope::from_session())) {
            Ok((_, payload)) => payload,
            Err(err) => {
                notify_error(toasts, err.to_string());
                return;
            }
        };
        status.set(SubmitStatus::Submitting);
        spawn(async move {
            match api::send(Method::Post, Resource::UniversityExams.collection(), payload).await {
                Ok(_) => {
                    status.set(SubmitStatus::Succeeded);
                    files::release_all(&builder.with_untracked(UniversityExamBuilder::files));
                    notify_success(toasts, format!("{} saved", ExamType::University.label()));
                    nav::go(BACK_HREF);
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
            title="New university test"
            crumbs=Signal::derive(move || {
                vec![Crumb::link("Tracks", "/"), Crumb::link(university_name.get(), BACK_HREF), Crumb::here("New exam")]
            })
        >
            <RequireSelection selection=selection back_href=BACK_HREF let:_university>
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
                    <DescriptionField value=exam_description />
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
                        " · Sections: " {move || builder.with(|b| b.sections.len())}
                    </p>
                </section>

                <section class="panel">
                    <h3>"Sections"</h3>
                    <Show
                        when=move || builder.with(|b| !b.sections.is_empty())
                        fallback=|| view! { <p class="muted">"No sections yet."</p> }
                    >
                        <ol class="section-list">
                            {move || {
                                builder
                                    .with(|b| b.sections.clone())
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, section)| {
                                        view! {
                                            <li class="section-list__item">
                                                <strong>{section.name.clone()}</strong>
                                                <span class="muted">
                                                    {format!(
                                                        " · {} questions · {} marks",
                                                        section.questions.len(),
                                                        section.total_marks,
                                                    )}
                                                </span>
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    on:click=move |_| remove_section(index)
                                                >
                                                    "Remove"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ol>
                    </Show>
                </section>

                <section class="panel builder__section">
                    <h3>"New section"</h3>
                    <label class="dialog__label">
                        "Section name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || builder.with(|b| b.section.name.clone())
                            on:input=move |ev| builder.update(|b| b.section.name = event_target_value(&ev))
                        />
                    </label>
                    <DescriptionField value=section_description />
                    <QuestionComposer on_add=on_add with_images=true />
                    <h4>
                        "Section questions · "
                        {move || builder.with(|b| b.section.total_marks())}
                        " marks"
                    </h4>
                    <QuestionTable
                        questions=Signal::derive(move || builder.with(|b| b.section.questions.clone()))
                        on_remove=on_remove_question
                    />
                    <div class="composer__actions">
                        <button class="btn" type="button" on:click=add_section>
                            "Add section"
                        </button>
                    </div>
                </section>

                <div class="page-actions">
                    <a class="btn" href=BACK_HREF>
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
