mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::customers::api;
use crate::layout::notify::use_notify;
use crate::shared::bulk::run_bulk_settled;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{RowCheckbox, SelectAllCheckbox};
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::selection::SelectionSet;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAuth;
use state::create_state;

#[component]
pub fn CustomersListPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <CustomersList />
        </RequireAuth>
    }
}

#[component]
fn CustomersList() -> impl IntoView {
    let state = create_state();
    let selection = RwSignal::new(SelectionSet::default());
    let (loading, set_loading) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let (granting, set_granting) = signal(false);
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

            let result = api::fetch_customers(&session, page, limit, &search).await;
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
            notify.warning("Customers", "No rows selected");
            return;
        }
        set_deleting.set(true);
        spawn_local(async move {
            let session = auth_state.get_untracked().session;
            run_bulk_settled(
                &ids,
                |id| {
                    let session = session.clone();
                    async move { api::delete_customer(&session, &id).await }
                },
                |outcome| {
                    selection.update(|sel| sel.deselect_all());
                    if outcome.all_ok() {
                        notify.success("Customers", &outcome.summary("Deleted"));
                    } else {
                        notify.error("Customers", &outcome.summary("Deleted"));
                    }
                    set_deleting.set(false);
                    load_data();
                },
            )
            .await;
        });
    };

    let run_grant_admin = move || {
        let ids = selection.with_untracked(|sel| sel.selected().clone());
        if ids.is_empty() {
            notify.warning("Customers", "No rows selected");
            return;
        }
        set_granting.set(true);
        spawn_local(async move {
            let session = auth_state.get_untracked().session;
            run_bulk_settled(
                &ids,
                |id| {
                    let session = session.clone();
                    async move { api::grant_admin(&session, &id).await }
                },
                |outcome| {
                    selection.update(|sel| sel.deselect_all());
                    if outcome.all_ok() {
                        notify.success("Customers", &outcome.summary("Granted admin to"));
                    } else {
                        notify.error("Customers", &outcome.summary("Granted admin to"));
                    }
                    set_granting.set(false);
                    load_data();
                },
            )
            .await;
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Customers"</h1>
                    <Badge>
                        {move || state.get().paging.total_count.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| confirm_delete.set(true)
                        disabled=Signal::derive(move || !selected_any.get() || deleting.get())
                    >
                        {icon("trash")}
                        {move || if deleting.get() { " Deleting..." } else { " Delete" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| run_grant_admin()
                        disabled=Signal::derive(move || !selected_any.get() || granting.get())
                    >
                        {icon("admin")}
                        {move || if granting.get() { " Granting..." } else { " Make admin" }}
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
                    placeholder="Name or email..."
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
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Phone"</TableHeaderCell>
                                <TableHeaderCell>"Role"</TableHeaderCell>
                                <TableHeaderCell>"Signed up"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|c| c.id.clone()
                                children=move |customer| {
                                    let id = customer.id.clone();
                                    let created = format_date_opt(&customer.created_at);
                                    view! {
                                        <TableRow>
                                            <RowCheckbox
                                                row_id=id
                                                selected=selected_signal
                                                on_change=Callback::new(toggle_row)
                                            />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {format!(
                                                            "{} {}",
                                                            customer.first_name,
                                                            customer.last_name,
                                                        )}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {customer.email.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {customer.phone_number.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if customer.is_admin {
                                                        view! {
                                                            <span class="badge badge--warning">"Admin"</span>
                                                        }
                                                            .into_any()
                                                    } else {
                                                        view! {
                                                            <span class="badge badge--neutral">"Customer"</span>
                                                        }
                                                            .into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
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
                title="Delete customers"
                message=Signal::derive(move || {
                    format!(
                        "Delete {} selected customer(s)? This cannot be undone.",
                        selection.get().selected().len(),
                    )
                })
                confirm_label="Delete"
                on_confirm=Callback::new(move |_| run_delete())
            />
        </div>
    }
}
