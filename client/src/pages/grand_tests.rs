//! Grand tests of the selected subject.

use leptos::prelude::*;
use records::ExamType;

use crate::components::dashboard_layout::{Crumb, DashboardLayout};
use crate::components::exam_list::ExamListPanel;
use crate::components::selection_notice::RequireSelection;
use crate::state::exam_builder::ExamScope;
use crate::util::session::{keys, use_selection, use_text};

#[component]
pub fn GrandTestsPage() -> impl IntoView {
    let selection = use_selection(keys::ID_SUBJECT);
    let track_name = use_text(keys::TRACK_NAME);
    let subject_name = use_text(keys::SUBJECT_NAME);

    view! {
        <DashboardLayout
            title=Signal::derive(move || format!("Grand tests · {}", subject_name.get()))
            crumbs=Signal::derive(move || {
                vec![
                    Crumb::link("Tracks", "/"),
                    Crumb::link(track_name.get(), "/subjects"),
                    Crumb::link(subject_name.get(), "/chapters"),
                    Crumb::here("Grand tests"),
                ]
            })
        >
            <RequireSelection selection=selection back_href="/subjects" let:subject>
                <ExamListPanel
                    exam_type=ExamType::Grand
                    scope={ExamScope { subject: Some(subject), ..ExamScope::from_session() }}
                    new_href="/grand-tests/new"
                    review_href="/exam"
                />
            </RequireSelection>
        </DashboardLayout>
    }
}
