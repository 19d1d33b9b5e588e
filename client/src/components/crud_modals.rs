//! Create/edit/delete modals for one entity list, driven by `ModalState`.

use leptos::prelude::*;
use records::RecordId;

use crate::components::confirm_delete::ConfirmDelete;
use crate::components::entity_form_modal::EntityFormModal;
use crate::state::entity_form::{Editable, EntityDraft};
use crate::state::modal::ModalState;
use crate::state::resource::TableRecord;

/// Links a record to its stored files for the edit form.
pub trait StoredFiles {
    fn attachment_url(&self) -> Option<String> {
        None
    }
}

impl StoredFiles for records::Track {}
impl StoredFiles for records::Subject {}
impl StoredFiles for records::Chapter {}
impl StoredFiles for records::University {}

impl StoredFiles for records::Note {
    fn attachment_url(&self) -> Option<String> {
        self.source.clone()
    }
}

impl StoredFiles for records::Video {
    fn attachment_url(&self) -> Option<String> {
        self.video.clone()
    }
}

#[component]
pub fn CrudModals<T>(
    modal: RwSignal<ModalState<T>>,
    /// Parent id for new records (track for subjects, chapter for notes...).
    #[prop(into)]
    parent: Signal<Option<RecordId>>,
    on_changed: Callback<()>,
) -> impl IntoView
where
    T: Editable + TableRecord + StoredFiles + PartialEq,
{
    let kind = T::KIND;
    let close = Callback::new(move |()| modal.set(ModalState::Closed));
    let done = Callback::new(move |()| {
        modal.set(ModalState::Closed);
        on_changed.run(());
    });

    move || match modal.get() {
        ModalState::Closed => ().into_any(),
        ModalState::Create => view! {
            <EntityFormModal
                kind=kind
                draft=EntityDraft::create(parent.get_untracked())
                on_close=close
                on_saved=done
            />
        }
        .into_any(),
        ModalState::Edit(record) => {
            let thumbnail_url = record.thumbnail().map(ToOwned::to_owned).unwrap_or_default();
            let attachment_url = record.attachment_url().unwrap_or_default();
            view! {
                <EntityFormModal
                    kind=kind
                    draft=record.draft()
                    thumbnail_url=thumbnail_url
                    attachment_url=attachment_url
                    on_close=close
                    on_saved=done
                />
            }
            .into_any()
        }
        ModalState::Delete(record) => view! {
            <ConfirmDelete
                label=kind.label()
                name=record.title().to_owned()
                path=kind.resource().detail(record.record_id())
                on_close=close
                on_deleted=done
            />
        }
        .into_any(),
    }
}
