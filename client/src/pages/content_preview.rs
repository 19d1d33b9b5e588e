//! Note (PDF) and video preview pages.

use leptos::prelude::*;

use crate::components::dashboard_layout::{Crumb, DashboardLayout};
use crate::util::session::{keys, use_text};

#[component]
fn PreviewMissing(what: &'static str) -> impl IntoView {
    view! {
        <div class="page-error" role="alert">
            <p>{format!("No {what} selected. Go back and choose one first.")}</p>
            <a class="btn" href="/chapter">
                "Go back"
            </a>
        </div>
    }
}

#[component]
pub fn NotePreviewPage() -> impl IntoView {
    let chapter_name = use_text(keys::CHAPTER_NAME);
    let name = use_text(keys::NOTE_NAME);
    let source = use_text(keys::NOTE_SOURCE);

    view! {
        <DashboardLayout
            title=Signal::derive(move || name.get())
            crumbs=Signal::derive(move || {
                vec![Crumb::link("Tracks", "/"), Crumb::link(chapter_name.get(), "/chapter"), Crumb::here(name.get())]
            })
        >
            <Show when=move || !source.get().is_empty() fallback=|| view! { <PreviewMissing what="note" /> }>
                <div class="preview">
                    <iframe class="preview__frame" src=move || source.get() title=move || name.get()></iframe>
                    <a class="btn" href=move || source.get() target="_blank" rel="noopener">
                        "Open PDF"
                    </a>
                </div>
            </Show>
        </DashboardLayout>
    }
}

#[component]
pub fn VideoPreviewPage() -> impl IntoView {
    let chapter_name = use_text(keys::CHAPTER_NAME);
    let name = use_text(keys::VIDEO_NAME);
    let url = use_text(keys::VIDEO_URL);

    view! {
        <DashboardLayout
            title=Signal::derive(move || name.get())
            crumbs=Signal::derive(move || {
                vec![Crumb::link("Tracks", "/"), Crumb::link(chapter_name.get(), "/chapter"), Crumb::here(name.get())]
            })
        >
            <Show when=move || !url.get().is_empty() fallback=|| view! { <PreviewMissing what="video" /> }>
                <div class="preview">
                    <video class="preview__video" controls src=move || url.get()></video>
                </div>
            </Show>
        </DashboardLayout>
    }
}
