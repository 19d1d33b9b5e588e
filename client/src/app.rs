//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::chapter::ChapterPage;
use crate::pages::chapters::ChaptersPage;
use crate::pages::content_preview::{NotePreviewPage, VideoPreviewPage};
use crate::pages::exam_builder::{ChapterTestBuilderPage, GrandTestBuilderPage};
use crate::pages::exam_review::{TrackExamReviewPage, UniversityExamReviewPage};
use crate::pages::grand_tests::GrandTestsPage;
use crate::pages::login::LoginPage;
use crate::pages::subjects::SubjectsPage;
use crate::pages::tracks::TracksPage;
use crate::pages::universities::UniversitiesPage;
use crate::pages::university_builder::UniversityBuilderPage;
use crate::pages::university_tests::UniversityTestsPage;
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and toast contexts and sets up client-side routing.
/// The token is read from session storage after mount, so the first render
/// matches the server's.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    Effect::new(move || auth.set(AuthState::from_session()));

    view! {
        <Stylesheet id="leptos" href="/pkg/lms-admin.css"/>
        <Title text="LMS Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("auth") view=LoginPage/>
                <Route path=StaticSegment("") view=TracksPage/>
                <Route path=StaticSegment("subjects") view=SubjectsPage/>
                <Route path=StaticSegment("chapters") view=ChaptersPage/>
                <Route path=StaticSegment("chapter") view=ChapterPage/>
                <Route path=(StaticSegment("chapter"), StaticSegment("note")) view=NotePreviewPage/>
                <Route path=(StaticSegment("chapter"), StaticSegment("video")) view=VideoPreviewPage/>
                <Route path=StaticSegment("grand-tests") view=GrandTestsPage/>
                <Route path=(StaticSegment("grand-tests"), StaticSegment("new")) view=GrandTestBuilderPage/>
                <Route path=(StaticSegment("chapter-tests"), StaticSegment("new")) view=ChapterTestBuilderPage/>
                <Route path=StaticSegment("exam") view=TrackExamReviewPage/>
                <Route path=StaticSegment("universities") view=UniversitiesPage/>
                <Route path=StaticSegment("university-tests") view=UniversityTestsPage/>
                <Route path=(StaticSegment("university-tests"), StaticSegment("new")) view=UniversityBuilderPage/>
                <Route path=(StaticSegment("university-tests"), StaticSegment("review")) view=UniversityExamReviewPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
