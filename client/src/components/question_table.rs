//! Read-only list of questions already accepted by a builder.

use leptos::prelude::*;

use crate::state::question_draft::QuestionEntry;

#[component]
pub fn QuestionTable(
    #[prop(into)] questions: Signal<Vec<QuestionEntry>>,
    on_remove: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show
            when=move || questions.with(|q| !q.is_empty())
            fallback=|| view! { <p class="muted">"No questions yet."</p> }
        >
            <table class="table question-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Question"</th>
                        <th>"Options"</th>
                        <th>"Marks"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        questions
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, question)| {
                                let options = question
                                    .choices
                                    .iter()
                                    .map(|c| if c.is_correct { format!("✓ {}", c.text) } else { c.text.clone() })
                                    .collect::<Vec<_>>()
                                    .join(" · ");
                                view! {
                                    <tr>
                                        <td>{index + 1}</td>
                                        <td>
                                            {question.text.clone()}
                                            {question.graphics.as_ref().map(|file| view! {
                                                <span class="muted">" (" {file.meta.name.clone()} ")"</span>
                                            })}
                                        </td>
                                        <td>{options}</td>
                                        <td>{question.weight()}</td>
                                        <td>
                                            <button class="btn btn--small btn--danger" on:click=move |_| on_remove.run(index)>
                                                "Remove"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </Show>
    }
}
