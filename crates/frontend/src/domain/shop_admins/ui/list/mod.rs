mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::shop_admins::storefront;
use crate::domain::shops::api;
use crate::layout::notify::use_notify;
use crate::shared::bulk::run_bulk_settled;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{RowCheckbox, SelectAllCheckbox};
use crate::shared::icons::icon;
use crate::shared::selection::SelectionSet;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAuth;
use state::create_state;

#[component]
pub fn ShopAdminsListPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ShopAdminsList />
        </RequireAuth>
    }
}

/// Approved shops only. The approval predicate runs in the backend query,
/// so totals and page boundaries come from the server already filtered.
#[component]
fn ShopAdminsList() -> impl IntoView {
    let state = create_state();
    let selection = RwSignal::new(SelectionSet::default());
    let (loading, set_loading) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let confirm_delete = RwSignal::new(false);
    let notify = use_notify();
    let (auth_state, _) = use_auth();

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            let session = auth_state.get_untracked().session;
            let (page, limit, search) = state.with_untracked(|s| {
                (
                    s.paging.page,
                    s.paging.page_size,
                    s.paging.search_query.clone(),
                )
            });

            let result = api::fetch_approved_shops(&session, page, limit, &search).await;
            state.update(|s| match result.data {
                Some(items) => {
                    selection
                        .update(|sel| sel.sync_ids(items.iter().map(|c| c.id.clone()).collect()));
                    s.items = items;
                    s.paging.set_total(result.total);
                    s.error = None;
                    s.is_loaded = true;
                }
                None => {
                    selection.update(|sel| sel.sync_ids(Vec::new()));
                    s.items = Vec::new();
                    s.paging.set_total(0);
                    s.error = result.error;
                }
            });
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let go_to_page = move |page: usize| {
        state.update(|s| s.paging.set_page(page));
        load_data();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.paging.set_page_size(size));
        load_data();
    };

    let apply_search = move |query: String| {
        let mut changed = false;
        state.update(|s| changed = s.paging.set_search(query));
        if changed {
            load_data();
        }
    };

    let row_ids = Signal::derive(move || {
        state
            .get()
            .items
            .iter()
            .map(|c| c.id.clone())
            .collect::<Vec<_>>()
    });
    let selected_signal = Signal::derive(move || selection.get().selected().clone());
    let selected_any = Signal::derive(move || selection.get().selected_any());

    let toggle_row = move |(id, checked): (String, bool)| {
        selection.update(|sel| {
            if checked {
                sel.select_one(&id);
            } else {
                sel.deselect_one(&id);
            }
        });
    };

    let toggle_all = move |check_all: bool| {
        selection.update(|sel| {
            if check_all {
                sel.select_all();
            } else {
                sel.deselect_all();
            }
        });
    };

    let run_delete = move || {
        let ids = selection.with_untracked(|sel| sel.selected().clone());
        if ids.is_empty() {
            notify.warning("Shop admins", "No rows selected");
            return;
        }
        set_deleting.set(true);
        spawn_local(async move {
            let session = auth_state.get_untracked().session;
            run_bulk_settled(
                &ids,
                |id| {
                    let session = session.clone();
                    async move { api::delete_shop(&session, &id).await }
                },
                |outcome| {
                    selection.update(|sel| sel.deselect_all());
                    if outcome.all_ok() {
                        notify.success("Shop admins", &outcome.summary("Deleted"));
                    } else {
                        notify.error("Shop admins", &outcome.summary("Deleted"));
                    }
                    set_deleting.set(false);
                    load_data();
                },
            )
            .await;
        });
    };

    let login_as_admin = move || {
        let session = auth_state.get_untracked().session;
        storefront::open_storefront(&session);
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Shop admins"</h1>
                    <Badge>
                        {move || state.get().paging.total_count.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| login_as_admin()
                    >
                        {icon("external")}
                        " Login as admin"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| confirm_delete.set(true)
                        disabled=Signal::derive(move || !selected_any.get() || deleting.get())
                    >
                        {icon("trash")}
                        {move || if deleting.get() { " Deleting..." } else { " Delete" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    state
                        .get()
                        .error
                        .map(|e| view! { <div class="alert alert--error">{e}</div> })
                }}

                <FilterBar
                    placeholder="Shop name or email..."
                    on_search=Callback::new(apply_search)
                />

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <SelectAllCheckbox
                                    row_ids=row_ids
                                    selected=selected_signal
                                    on_change=Callback::new(toggle_all)
                                />
                                <TableHeaderCell>"Shop name"</TableHeaderCell>
                                <TableHeaderCell>"Owner"</TableHeaderCell>
                                <TableHeaderCell>"Description"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|s| s.id.clone()
                                children=move |shop| {
                                    let id = shop.id.clone();
                                    let owner = shop
                                        .owner
                                        .as_ref()
                                        .map(|o| format!("{} {}", o.first_name, o.last_name))
                                        .unwrap_or_else(|| "-".into());
                                    view! {
                                        <TableRow>
                                            <RowCheckbox
                                                row_id=id
                                                selected=selected_signal
                                                on_change=Callback::new(toggle_row)
                                            />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{shop.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{owner}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {shop.description.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {shop.email.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="badge badge--success">"Approved"</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    page=Signal::derive(move || state.get().paging.page)
                    page_size=Signal::derive(move || state.get().paging.page_size)
                    total_count=Signal::derive(move || state.get().paging.total_count)
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                />
            </div>

            <ConfirmDialog
                open=confirm_delete
                title="Delete shop admins"
                message=Signal::derive(move || {
                    format!(
                        "Delete {} selected shop(s) and their admin accounts? This cannot be undone.",
                        selection.get().selected().len(),
                    )
                })
                confirm_label="Delete"
                on_confirm=Callback::new(move |_| run_delete())
            />
        </div>
    }
}
