//! Tracks: the dashboard landing page.

use leptos::prelude::*;
use records::{Resource, Track};

use crate::components::crud_modals::CrudModals;
use crate::components::dashboard_layout::{Crumb, DashboardLayout};
use crate::components::resource_table::{ResourceTable, RowAction};
use crate::net::loader::load_into;
use crate::state::modal::ModalState;
use crate::state::resource::ListState;
use crate::util::session::{self, keys};

fn remember_track(track: &Track) {
    session::set_all(&[(keys::ID_TRACK, track.id.to_string()), (keys::TRACK_NAME, track.name.clone())]);
}

#[component]
pub fn TracksPage() -> impl IntoView {
    let state = RwSignal::new(ListState::<Track>::default());
    let modal = RwSignal::new(ModalState::<Track>::Closed);

    let reload = Callback::new(move |()| load_into(state, Resource::Tracks.list(None)));
    Effect::new(move || reload.run(()));

    let actions = vec![
        RowAction::link("Subjects", "/subjects", Callback::new(|track: Track| remember_track(&track))),
        RowAction::link("Universities", "/universities", Callback::new(|track: Track| remember_track(&track)))
            .only_if(|track| track.has_university),
    ];

    view! {
        <DashboardLayout title="Tracks".to_owned() crumbs=vec![Crumb::here("Tracks")]>
            <div class="page-actions">
                <button class="btn btn--primary" on:click=move |_| modal.set(ModalState::Create)>
                    "New track"
                </button>
            </div>
            <ResourceTable
                state=state
                on_retry=reload
                actions=actions
                on_edit=Callback::new(move |track| modal.set(ModalState::Edit(track)))
                on_delete=Callback::new(move |track| modal.set(ModalState::Delete(track)))
                empty_text="No tracks yet."
            />
            <CrudModals modal=modal parent=Signal::stored(None) on_changed=reload />
        </DashboardLayout>
    }
}
