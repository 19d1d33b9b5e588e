//! Universities affiliated with the selected track.

use leptos::prelude::*;
use records::{Resource, University};

use crate::components::crud_modals::CrudModals;
use crate::components::dashboard_layout::{Crumb, DashboardLayout};
use crate::components::resource_table::{ResourceTable, RowAction};
use crate::components::selection_notice::RequireSelection;
use crate::net::loader::load_into;
use crate::state::modal::ModalState;
use crate::state::resource::ListState;
use crate::util::session::{self, Selection, keys, use_selection, use_text};

#[component]
pub fn UniversitiesPage() -> impl IntoView {
    let selection = use_selection(keys::ID_TRACK);
    let track_name = use_text(keys::TRACK_NAME);
    let state = RwSignal::new(ListState::<University>::default());
    let modal = RwSignal::new(ModalState::<University>::Closed);

    let reload = Callback::new(move |()| {
        if let Selection::Ready(track) = selection.get_untracked() {
            load_into(state, Resource::Universities.list(Some(track)));
        }
    });
    Effect::new(move || {
        if matches!(selection.get(), Selection::Ready(_)) {
            reload.run(());
        }
    });

    let tests = RowAction::link(
        "Tests",
        "/university-tests",
        Callback::new(|university: University| {
            session::set_all(&[
                (keys::ID_UNIVERSITY, university.id.to_string()),
                (keys::UNIVERSITY_NAME, university.name.clone()),
            ]);
        }),
    );

    view! {
        <DashboardLayout
            title=Signal::derive(move || format!("Universities · {}", track_name.get()))
            crumbs=Signal::derive(move || vec![Crumb::link("Tracks", "/"), Crumb::here(track_name.get())])
        >
            <RequireSelection selection=selection back_href="/" let:track>
                <div class="page-actions">
                    <button class="btn btn--primary" on:click=move |_| modal.set(ModalState::Create)>
                        "New university"
                    </button>
                </div>
                <ResourceTable
                    state=state
                    on_retry=reload
                    actions=vec![tests]
                    on_edit=Callback::new(move |university| modal.set(ModalState::Edit(university)))
                    on_delete=Callback::new(move |university| modal.set(ModalState::Delete(university)))
                    empty_text="No universities in this track yet."
                />
                <CrudModals modal=modal parent=Signal::stored(Some(track)) on_changed=reload />
            </RequireSelection>
        </DashboardLayout>
    }
}
