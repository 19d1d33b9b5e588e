//! Subjects of the selected track.

use leptos::prelude::*;
use records::{Resource, Subject};

use crate::components::crud_modals::CrudModals;
use crate::components::dashboard_layout::{Crumb, DashboardLayout};
use crate::components::resource_table::{ResourceTable, RowAction};
use crate::components::selection_notice::RequireSelection;
use crate::net::loader::load_into;
use crate::state::modal::ModalState;
use crate::state::resource::ListState;
use crate::util::session::{self, Selection, keys, use_selection, use_text};

fn remember_subject(subject: &Subject) {
    session::set_all(&[
        (keys::ID_SUBJECT, subject.id.to_string()),
        (keys::SUBJECT_NAME, subject.name.clone()),
        (keys::SUBJECT_DESCRIPTION, subject.description.clone()),
    ]);
}

#[component]
pub fn SubjectsPage() -> impl IntoView {
    let selection = use_selection(keys::ID_TRACK);
    let track_name = use_text(keys::TRACK_NAME);
    let state = RwSignal::new(ListState::<Subject>::default());
    let modal = RwSignal::new(ModalState::<Subject>::Closed);

    let reload = Callback::new(move |()| {
        if let Selection::Ready(track) = selection.get_untracked() {
            load_into(state, Resource::Subjects.list(Some(track)));
        }
    });
    Effect::new(move || {
        if matches!(selection.get(), Selection::Ready(_)) {
            reload.run(());
        }
    });

    let actions = vec![
        RowAction::link("Chapters", "/chapters", Callback::new(|subject: Subject| remember_subject(&subject))),
        RowAction::link("Grand tests", "/grand-tests", Callback::new(|subject: Subject| remember_subject(&subject))),
    ];

    view! {
        <DashboardLayout
            title=Signal::derive(move || format!("Subjects · {}", track_name.get()))
            crumbs=Signal::derive(move || vec![Crumb::link("Tracks", "/"), Crumb::here(track_name.get())])
        >
            <RequireSelection selection=selection back_href="/" let:track>
                <div class="page-actions">
                    <button class="btn btn--primary" on:click=move |_| modal.set(ModalState::Create)>
                        "New subject"
                    </button>
                </div>
                <ResourceTable
                    state=state
                    on_retry=reload
                    actions=actions.clone()
                    on_edit=Callback::new(move |subject| modal.set(ModalState::Edit(subject)))
                    on_delete=Callback::new(move |subject| modal.set(ModalState::Delete(subject)))
                    empty_text="No subjects in this track yet."
                />
                <CrudModals modal=modal parent=Signal::stored(Some(track)) on_changed=reload />
            </RequireSelection>
        </DashboardLayout>
    }
}
