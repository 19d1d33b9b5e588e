//! Chapters of the selected subject.

use leptos::prelude::*;
use records::{Chapter, Resource};

use crate::components::crud_modals::CrudModals;
use crate::components::dashboard_layout::{Crumb, DashboardLayout};
use crate::components::markdown_preview::MarkdownPreview;
use crate::components::resource_table::{ResourceTable, RowAction};
use crate::components::selection_notice::RequireSelection;
use crate::net::loader::load_into;
use crate::state::modal::ModalState;
use crate::state::resource::ListState;
use crate::util::session::{self, Selection, keys, use_selection, use_text};

fn remember_chapter(chapter: &Chapter) {
    session::set_all(&[
        (keys::CHAPTER_ID, chapter.id.to_string()),
        (keys::CHAPTER_NAME, chapter.name.clone()),
        (keys::CHAPTER_DESCRIPTION, chapter.description.clone()),
    ]);
}

#[component]
pub fn ChaptersPage() -> impl IntoView {
    let selection = use_selection(keys::ID_SUBJECT);
    let track_name = use_text(keys::TRACK_NAME);
    let subject_name = use_text(keys::SUBJECT_NAME);
    let subject_description = use_text(keys::SUBJECT_DESCRIPTION);
    let state = RwSignal::new(ListState::<Chapter>::default());
    let modal = RwSignal::new(ModalState::<Chapter>::Closed);

    let reload = Callback::new(move |()| {
        if let Selection::Ready(subject) = selection.get_untracked() {
            load_into(state, Resource::Chapters.list(Some(subject)));
        }
    });
    Effect::new(move || {
        if matches!(selection.get(), Selection::Ready(_)) {
            reload.run(());
        }
    });

    let actions = vec![RowAction::link("Open", "/chapter", Callback::new(|chapter: Chapter| remember_chapter(&chapter)))];

    view! {
        <DashboardLayout
            title=Signal::derive(move || format!("Chapters · {}", subject_name.get()))
            crumbs=Signal::derive(move || {
                vec![Crumb::link("Tracks", "/"), Crumb::link(track_name.get(), "/subjects"), Crumb::here(subject_name.get())]
            })
        >
            <RequireSelection selection=selection back_href="/subjects" let:subject>
                <MarkdownPreview source=subject_description />
                <div class="page-actions">
                    <a class="btn" href="/grand-tests">
                        "Grand tests"
                    </a>
                    <button class="btn btn--primary" on:click=move |_| modal.set(ModalState::Create)>
                        "New chapter"
                    </button>
                </div>
                <ResourceTable
                    state=state
                    on_retry=reload
                    actions=actions.clone()
                    on_edit=Callback::new(move |chapter| modal.set(ModalState::Edit(chapter)))
                    on_delete=Callback::new(move |chapter| modal.set(ModalState::Delete(chapter)))
                    empty_text="No chapters in this subject yet."
                />
                <CrudModals modal=modal parent=Signal::stored(Some(subject)) on_changed=reload />
            </RequireSelection>
        </DashboardLayout>
    }
}
