//! Authenticated page chrome: navigation, header and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route except `/auth` renders inside this layout. It owns the
//! unauthenticated redirect, so pages only deal with their own selection.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{install_unauth_redirect, sign_out};

/// One breadcrumb entry; the last one is the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<&'static str>,
}

impl Crumb {
    #[must_use]
    pub fn link(label: impl Into<String>, href: &'static str) -> Self {
        Self { label: label.into(), href: Some(href) }
    }

    #[must_use]
    pub fn here(label: impl Into<String>) -> Self {
        Self { label: label.into(), href: None }
    }
}

#[component]
pub fn DashboardLayout(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] crumbs: Signal<Vec<Crumb>>,
    children: Children,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <div class="dashboard">
            <nav class="dashboard__nav">
                <a class="dashboard__brand" href="/">
                    "LMS Admin"
                </a>
                <a class="dashboard__nav-link" href="/">
                    "Tracks"
                </a>
            </nav>
            <div class="dashboard__main">
                <header class="dashboard__header toolbar">
                    <div class="dashboard__titles">
                        <ol class="breadcrumbs">
                            {move || {
                                crumbs
                                    .get()
                                    .into_iter()
                                    .map(|crumb| match crumb.href {
                                        Some(href) => view! {
                                            <li><a href=href>{crumb.label}</a></li>
                                        }
                                        .into_any(),
                                        None => view! { <li aria-current="page">{crumb.label}</li> }.into_any(),
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ol>
                        <h1 class="dashboard__title">{move || title.get()}</h1>
                    </div>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">{move || auth.get().display_name()}</span>
                    <button class="btn toolbar__logout" title="Logout" on:click=move |_| sign_out(auth)>
                        "Logout"
                    </button>
                </header>
                <Show when=move || auth.get().loading>
                    <p class="page-loading">"Loading..."</p>
                </Show>
                <main class="dashboard__content" class:hidden=move || !auth.get().is_authenticated()>
                    {children()}
                </main>
            </div>
        </div>
    }
}
