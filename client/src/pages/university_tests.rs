//! University tests of the selected university.

use leptos::prelude::*;
use records::ExamType;

use crate::components::dashboard_layout::{Crumb, DashboardLayout};
use crate::components::exam_list::ExamListPanel;
use crate::components::selection_notice::RequireSelection;
use crate::state::exam_builder::ExamScope;
use crate::util::session::{keys, use_selection, use_text};

#[component]
pub fn UniversityTestsPage() -> impl IntoView {
    let selection = use_selection(keys::ID_UNIVERSITY);
    let track_name = use_text(keys::TRACK_NAME);
    let university_name = use_text(keys::UNIVERSITY_NAME);

    view! {
        <DashboardLayout
            title=Signal::derive(move || format!("University tests · {}", university_name.get()))
            crumbs=Signal::derive(move || {
                vec![
                    Crumb::link("Tracks", "/"),
                    Crumb::link(track_name.get(), "/universities"),
                    Crumb::here(university_name.get()),
                ]
            })
        >
            <RequireSelection selection=selection back_href="/universities" let:university>
                <ExamListPanel
                    exam_type=ExamType::University
                    scope={ExamScope { university: Some(university), ..ExamScope::from_session() }}
                    new_href="/university-tests/new"
                    review_href="/university-tests/review"
                />
            </RequireSelection>
        </DashboardLayout>
    }
}
