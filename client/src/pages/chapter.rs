//! One chapter: its notes, videos and chapter tests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the chapter list with `chapter_id` in session storage. Notes
//! and videos have their own tables and modals; opening one writes the
//! preview keys read by `/chapter/note` and `/chapter/video`.

use leptos::prelude::*;
use records::{ExamType, Note, RecordId, Resource, Video};

use crate::components::crud_modals::CrudModals;
use crate::components::dashboard_layout::{Crumb, DashboardLayout};
use crate::components::exam_list::ExamListPanel;
use crate::components::markdown_preview::MarkdownPreview;
use crate::components::resource_table::{ResourceTable, RowAction};
use crate::components::selection_notice::RequireSelection;
use crate::net::loader::load_into;
use crate::state::exam_builder::ExamScope;
use crate::state::modal::ModalState;
use crate::state::resource::ListState;
use crate::util::session::{self, keys, use_selection, use_text};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ChapterTab {
    #[default]
    Notes,
    Videos,
    Tests,
}

#[component]
pub fn ChapterPage() -> impl IntoView {
    let selection = use_selection(keys::CHAPTER_ID);
    let subject_name = use_text(keys::SUBJECT_NAME);
    let chapter_name = use_text(keys::CHAPTER_NAME);
    let chapter_description = use_text(keys::CHAPTER_DESCRIPTION);
    let tab = RwSignal::new(ChapterTab::default());

    let tab_button = move |value: ChapterTab, label: &'static str| {
        view! {
            <button
                class="tabs__tab"
                class:tabs__tab--active=move || tab.get() == value
                on:click=move |_| tab.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <DashboardLayout
            title=Signal::derive(move || chapter_name.get())
            crumbs=Signal::derive(move || {
                vec![Crumb::link("Tracks", "/"), Crumb::link(subject_name.get(), "/chapters"), Crumb::here(chapter_name.get())]
            })
        >
            <RequireSelection selection=selection back_href="/chapters" let:chapter>
                <MarkdownPreview source=chapter_description />
                <nav class="tabs">
                    {tab_button(ChapterTab::Notes, "Notes")}
                    {tab_button(ChapterTab::Videos, "Videos")}
                    {tab_button(ChapterTab::Tests, "Chapter tests")}
                </nav>
                {move || match tab.get() {
                    ChapterTab::Notes => view! { <NotesPanel chapter=chapter /> }.into_any(),
                    ChapterTab::Videos => view! { <VideosPanel chapter=chapter /> }.into_any(),
                    ChapterTab::Tests => {
                        let scope = ExamScope { chapter: Some(chapter), ..ExamScope::from_session() };
                        view! {
                            <ExamListPanel
                                exam_type=ExamType::Chapter
                                scope=scope
                                new_href="/chapter-tests/new"
                                review_href="/exam"
                            />
                        }
                        .into_any()
                    }
                }}
            </RequireSelection>
        </DashboardLayout>
    }
}

#[component]
fn NotesPanel(chapter: RecordId) -> impl IntoView {
    let state = RwSignal::new(ListState::<Note>::default());
    let modal = RwSignal::new(ModalState::<Note>::Closed);
    let reload = Callback::new(move |()| load_into(state, Resource::Notes.list(Some(chapter))));
    Effect::new(move || reload.run(()));

    let open = RowAction::link(
        "View",
        "/chapter/note",
        Callback::new(|note: Note| {
            session::set_all(&[(keys::NOTE_NAME, note.name.clone()), (keys::NOTE_SOURCE, note.source.clone().unwrap_or_default())]);
        }),
    )
    .only_if(|note| note.source.is_some());

    view! {
        <section class="panel">
            <header class="panel__header">
                <h2>"Notes"</h2>
                <span class="toolbar__spacer"></span>
                <button class="btn btn--primary" on:click=move |_| modal.set(ModalState::Create)>
                    "New note"
                </button>
            </header>
            <ResourceTable
                state=state
                on_retry=reload
                actions=vec![open]
                on_edit=Callback::new(move |note| modal.set(ModalState::Edit(note)))
                on_delete=Callback::new(move |note| modal.set(ModalState::Delete(note)))
                empty_text="No notes yet."
            />
            <CrudModals modal=modal parent=Signal::stored(Some(chapter)) on_changed=reload />
        </section>
    }
}

#[component]
fn VideosPanel(chapter: RecordId) -> impl IntoView {
    let state = RwSignal::new(ListState::<Video>::default());
    let modal = RwSignal::new(ModalState::<Video>::Closed);
    let reload = Callback::new(move |()| load_into(state, Resource::Videos.list(Some(chapter))));
    Effect::new(move || reload.run(()));

    let open = RowAction::link(
        "Watch",
        "/chapter/video",
        Callback::new(|video: Video| {
            session::set_all(&[(keys::VIDEO_NAME, video.name.clone()), (keys::VIDEO_URL, video.video.clone().unwrap_or_default())]);
        }),
    )
    .only_if(|video| video.video.is_some());

    view! {
        <section class="panel">
            <header class="panel__header">
                <h2>"Videos"</h2>
                <span class="toolbar__spacer"></span>
                <button class="btn btn--primary" on:click=move |_| modal.set(ModalState::Create)>
                    "New video"
                </button>
            </header>
            <ResourceTable
                state=state
                on_retry=reload
                actions=vec![open]
                on_edit=Callback::new(move |video| modal.set(ModalState::Edit(video)))
                on_delete=Callback::new(move |video| modal.set(ModalState::Delete(video)))
                empty_text="No videos yet."
            />
            <CrudModals modal=modal parent=Signal::stored(Some(chapter)) on_changed=reload />
        </section>
    }
}
