//! Form for composing one question and its options.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both exam builders embed this composer. It owns the in-progress question;
//! the builder decides where an accepted question goes through `on_add`,
//! which returns the validation result so the composer knows whether to
//! reset. Failures are shown as toasts.

use leptos::prelude::*;
use records::UploadKind;

use crate::components::file_drop_zone::{FileDropZone, clear_slot};
use crate::components::toast_host::notify_error;
use crate::state::file_slot::FileSlot;
use crate::state::question_draft::{BuilderError, QuestionDraft};
use crate::state::toast::ToastState;
use crate::util::files;

#[component]
pub fn QuestionComposer(
    on_add: Callback<QuestionDraft, Result<(), BuilderError>>,
    /// Allow question and option images (university tests).
    #[prop(optional)]
    with_images: bool,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let draft = RwSignal::new(QuestionDraft::default());
    let question_image = RwSignal::new(FileSlot::default());
    let choice_image = RwSignal::new(FileSlot::default());

    on_cleanup(move || {
        files::release_all(&draft.get_untracked().files());
        clear_slot(question_image);
        clear_slot(choice_image);
    });

    let add_choice = move || {
        let mut result = Ok(());
        draft.update(|d| {
            if with_images {
                d.choice_input.graphics = choice_image.with_untracked(|s| s.file.clone());
            }
            result = d.add_choice();
        });
        match result {
            Ok(()) => choice_image.update(|s| {
                s.take();
            }),
            Err(err) => notify_error(toasts, err.to_string()),
        }
    };

    let remove_choice = move |index: usize| {
        let mut removed = None;
        draft.update(|d| removed = d.remove_choice(index));
        if let Some(file) = removed.and_then(|c| c.graphics) {
            files::release(&file);
        }
    };

    let add_question = move |_| {
        let mut candidate = draft.get_untracked();
        if with_images {
            candidate.graphics = question_image.with_untracked(|s| s.file.clone());
        }
        match on_add.run(candidate) {
            Ok(()) => {
                // Files now belong to the builder.
                draft.set(QuestionDraft::default());
                question_image.update(|s| {
                    s.take();
                });
            }
            Err(err) => notify_error(toasts, err.to_string()),
        }
    };

    view! {
        <section class="composer">
            <h3>"Question"</h3>
            <label class="dialog__label">
                "Question text"
                <textarea
                    class="dialog__input dialog__textarea"
                    rows="3"
                    prop:value=move || draft.with(|d| d.text.clone())
                    on:input=move |ev| draft.update(|d| d.text = event_target_value(&ev))
                ></textarea>
            </label>
            <label class="dialog__label composer__marks">
                "Marks"
                <input
                    class="dialog__input"
                    type="number"
                    min="0"
                    step="0.5"
                    prop:value=move || draft.with(|d| d.marks.clone())
                    on:input=move |ev| draft.update(|d| d.marks = event_target_value(&ev))
                />
            </label>
            {with_images.then(|| view! {
                <FileDropZone kind=UploadKind::Image file_slot=question_image label="Question image" />
            })}

            <h4>"Options"</h4>
            <ul class="composer__choices">
                {move || {
                    draft
                        .with(|d| d.choices.clone())
                        .into_iter()
                        .enumerate()
                        .map(|(index, choice)| {
                            view! {
                                <li class="composer__choice" class:composer__choice--correct=choice.is_correct>
                                    <label class="dialog__checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=choice.is_correct
                                            on:change=move |_| draft.update(|d| d.toggle_correct(index))
                                        />
                                        {choice.text.clone()}
                                    </label>
                                    {choice.graphics.as_ref().map(|file| view! {
                                        <span class="composer__choice-file">{file.meta.name.clone()}</span>
                                    })}
                                    <button
                                        class="btn btn--icon"
                                        type="button"
                                        title="Remove option"
                                        on:click=move |_| remove_choice(index)
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <div class="composer__choice-input">
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Option text"
                    prop:value=move || draft.with(|d| d.choice_input.text.clone())
                    on:input=move |ev| draft.update(|d| d.choice_input.text = event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add_choice();
                        }
                    }
                />
                <label class="dialog__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.choice_input.is_correct)
                        on:change=move |ev| draft.update(|d| d.choice_input.is_correct = event_target_checked(&ev))
                    />
                    "Correct"
                </label>
                <button class="btn" type="button" on:click=move |_| add_choice()>
                    "Add option"
                </button>
            </div>
            {with_images.then(|| view! {
                <FileDropZone kind=UploadKind::Image file_slot=choice_image label="Option image" />
            })}
            <div class="composer__actions">
                <button class="btn btn--primary" type="button" on:click=add_question>
                    "Add question"
                </button>
            </div>
        </section>
    }
}
