//! Searchable, paged table used by every list page.
//!
//! DESIGN
//! ======
//! The table renders whatever `ListState` holds; fetching stays with the
//! page, which passes `on_retry` so a failed load can be re-run by hand.

use leptos::prelude::*;

use crate::state::resource::{ListState, TableRecord};

/// Extra per-row button. With `href` it renders as a link so the click
/// handler can write session keys before the router navigates.
pub struct RowAction<T: 'static> {
    pub label: &'static str,
    pub href: Option<&'static str>,
    pub run: Callback<T>,
    /// Show the action only for rows this accepts.
    pub when: Option<fn(&T) -> bool>,
}

impl<T: 'static> Clone for RowAction<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RowAction<T> {}

impl<T: 'static> RowAction<T> {
    #[must_use]
    pub fn link(label: &'static str, href: &'static str, run: Callback<T>) -> Self {
        Self { label, href: Some(href), run, when: None }
    }

    #[must_use]
    pub fn only_if(mut self, when: fn(&T) -> bool) -> Self {
        self.when = Some(when);
        self
    }
}

#[component]
pub fn ResourceTable<T>(
    state: RwSignal<ListState<T>>,
    on_retry: Callback<()>,
    #[prop(optional)] actions: Vec<RowAction<T>>,
    #[prop(optional)] on_edit: Option<Callback<T>>,
    #[prop(optional)] on_delete: Option<Callback<T>>,
    #[prop(optional)] empty_text: Option<&'static str>,
) -> impl IntoView
where
    T: TableRecord,
{
    let empty_text = empty_text.unwrap_or("Nothing here yet.");
    let column_count = T::HEADERS.len() + 2;

    let rows = move || {
        let page = state.with(ListState::page);
        if page.rows.is_empty() {
            return view! {
                <tr class="table__empty">
                    <td colspan=column_count>{empty_text}</td>
                </tr>
            }
            .into_any();
        }
        let actions = actions.clone();
        page.rows
            .into_iter()
            .map(|row| {
                let thumb = row.thumbnail().map(ToOwned::to_owned);
                let cells = row.cells();
                let row_actions = actions
                    .iter()
                    .filter(|a| a.when.is_none_or(|when| when(&row)))
                    .map(|action| {
                        let action = *action;
                        let item = row.clone();
                        match action.href {
                            Some(href) => view! {
                                <a class="btn btn--small" href=href on:click=move |_| action.run.run(item.clone())>
                                    {action.label}
                                </a>
                            }
                            .into_any(),
                            None => view! {
                                <button class="btn btn--small" on:click=move |_| action.run.run(item.clone())>
                                    {action.label}
                                </button>
                            }
                            .into_any(),
                        }
                    })
                    .collect::<Vec<_>>();
                let edit_row = row.clone();
                let delete_row = row.clone();
                view! {
                    <tr>
                        <td class="table__thumb">
                            {thumb.map(|src| view! { <img src=src alt="" loading="lazy" /> })}
                        </td>
                        {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}
                        <td class="table__actions">
                            {row_actions}
                            {on_edit.map(|edit| view! {
                                <button class="btn btn--small" on:click=move |_| edit.run(edit_row.clone())>
                                    "Edit"
                                </button>
                            })}
                            {on_delete.map(|delete| view! {
                                <button class="btn btn--small btn--danger" on:click=move |_| delete.run(delete_row.clone())>
                                    "Delete"
                                </button>
                            })}
                        </td>
                    </tr>
                }
                .into_any()
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    let pager = move || state.with(ListState::page);

    view! {
        <div class="resource-table">
            <div class="resource-table__toolbar">
                <input
                    class="resource-table__search"
                    type="search"
                    placeholder="Search"
                    prop:value=move || state.with(|s| s.query.search.clone())
                    on:input=move |ev| state.update(|s| s.set_search(event_target_value(&ev)))
                />
                <span class="resource-table__count">
                    {move || {
                        let total = pager().total;
                        if total == 1 { "1 result".to_owned() } else { format!("{total} results") }
                    }}
                </span>
            </div>
            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="resource-table__error" role="alert">
                    <span>{move || state.with(|s| s.error.clone().unwrap_or_default())}</span>
                    <button class="btn" on:click=move |_| on_retry.run(())>
                        "Retry"
                    </button>
                </div>
            </Show>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <p class="page-loading">"Loading..."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th></th>
                            {T::HEADERS.iter().map(|h| view! { <th>{*h}</th> }).collect::<Vec<_>>()}
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows.clone()}</tbody>
                </table>
            </Show>
            <div class="pager">
                <button
                    class="btn"
                    disabled=move || !pager().has_previous()
                    on:click=move |_| state.update(|s| {
                        let page = s.page().page;
                        s.set_page(page.saturating_sub(1));
                    })
                >
                    "Previous"
                </button>
                <span class="pager__label">
                    {move || {
                        let page = pager();
                        format!("Page {} of {}", page.page, page.page_count.max(1))
                    }}
                </span>
                <button
                    class="btn"
                    disabled=move || !pager().has_next()
                    on:click=move |_| state.update(|s| {
                        let page = s.page().page;
                        s.set_page(page + 1);
                    })
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
