mod state;

use contracts::domain::shop::Shop;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::couriers::api;
use crate::domain::couriers::api::{LicenseFile, LicenseKind};
use crate::domain::shops;
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
pub fn CouriersListPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <CouriersList />
        </RequireAuth>
    }
}

#[component]
fn CouriersList() -> impl IntoView {
    let state = create_state();
    let selection = RwSignal::new(SelectionSet::default());
    let (loading, set_loading) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let confirm_delete = RwSignal::new(false);
    let assign_open = RwSignal::new(false);
    let license_view = RwSignal::new(None::<LicenseFile>);
    let (license_loading, set_license_loading) = signal(false);
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

            let result = api::fetch_couriers(&session, page, limit, &search).await;
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
            notify.warning("Delivery", "No rows selected");
            return;
        }
        set_deleting.set(true);
        spawn_local(async move {
            let session = auth_state.get_untracked().session;
            run_bulk_settled(
                &ids,
                |id| {
                    let session = session.clone();
                    async move { api::delete_courier(&session, &id).await }
                },
                |outcome| {
                    selection.update(|sel| sel.deselect_all());
                    if outcome.all_ok() {
                        notify.success("Delivery", &outcome.summary("Deleted"));
                    } else {
                        notify.error("Delivery", &outcome.summary("Deleted"));
                    }
                    set_deleting.set(false);
                    load_data();
                },
            )
            .await;
        });
    };

    let run_assign = move |shop_id: String| {
        let ids = selection.with_untracked(|sel| sel.selected().clone());
        if ids.is_empty() {
            notify.warning("Delivery", "No rows selected");
            return;
        }
        spawn_local(async move {
            let session = auth_state.get_untracked().session;
            run_bulk_settled(
                &ids,
                |id| {
                    let session = session.clone();
                    let shop_id = shop_id.clone();
                    async move { api::assign_shop(&session, &id, &shop_id).await }
                },
                |outcome| {
                    selection.update(|sel| sel.deselect_all());
                    if outcome.all_ok() {
                        notify.success("Delivery", &outcome.summary("Assigned"));
                    } else {
                        notify.error("Delivery", &outcome.summary("Assigned"));
                    }
                    load_data();
                },
            )
            .await;
        });
    };

    let open_license = move |file_name: String| {
        set_license_loading.set(true);
        spawn_local(async move {
            let session = auth_state.get_untracked().session;
            match api::fetch_license(&session, &file_name).await {
                Ok(file) => license_view.set(Some(file)),
                Err(err) => notify.error("Delivery", &err.to_string()),
            }
            set_license_loading.set(false);
        });
    };

    let close_license = move || {
        if let Some(file) = license_view.get_untracked() {
            api::revoke_license_url(&file.object_url);
        }
        license_view.set(None);
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Delivery personnel"</h1>
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
                        on_click=move |_| {
                            if selection.with_untracked(|sel| sel.selected_any()) {
                                assign_open.set(true);
                            } else {
                                notify.warning("Delivery", "No rows selected");
                            }
                        }
                        disabled=Signal::derive(move || !selected_any.get())
                    >
                        {icon("shop")}
                        " Assign shop"
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
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Phone"</TableHeaderCell>
                                <TableHeaderCell>"Shop"</TableHeaderCell>
                                <TableHeaderCell>"Signed up"</TableHeaderCell>
                                <TableHeaderCell>"License"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|c| c.id.clone()
                                children=move |courier| {
                                    let id = courier.id.clone();
                                    let created = format_date_opt(&courier.created_at);
                                    let inactive = courier.is_inactive();
                                    let license = courier.license_file_name();
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
                                                            courier.first_name,
                                                            courier.last_name,
                                                        )}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {courier.email.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if inactive {
                                                        view! {
                                                            <span class="badge badge--neutral">"Inactive"</span>
                                                        }
                                                            .into_any()
                                                    } else {
                                                        view! {
                                                            <span class="badge badge--success">"Active"</span>
                                                        }
                                                            .into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {courier.phone_number.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {courier.shop_name.clone().unwrap_or_else(|| "-".into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {match license {
                                                        Some(file_name) => {
                                                            view! {
                                                                <Button
                                                                    appearance=ButtonAppearance::Subtle
                                                                    on_click=move |_| open_license(file_name.clone())
                                                                    disabled=Signal::derive(move || {
                                                                        license_loading.get()
                                                                    })
                                                                >
                                                                    {icon("file")}
                                                                    " View"
                                                                </Button>
                                                            }
                                                                .into_any()
                                                        }
                                                        None => view! { <span>"-"</span> }.into_any(),
                                                    }}
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
                title="Delete delivery personnel"
                message=Signal::derive(move || {
                    format!(
                        "Delete {} selected account(s)? This cannot be undone.",
                        selection.get().selected().len(),
                    )
                })
                confirm_label="Delete"
                on_confirm=Callback::new(move |_| run_delete())
            />

            <AssignShopDialog open=assign_open on_assign=Callback::new(run_assign) />
            <LicenseDialog file=license_view on_close=Callback::new(move |_| close_license()) />
        </div>
    }
}

/// Dialog with a shop picker, applied to every selected courier at once.
#[component]
fn AssignShopDialog(open: RwSignal<bool>, on_assign: Callback<String>) -> impl IntoView {
    let shop_options = RwSignal::new(Vec::<Shop>::new());
    let picked = RwSignal::new(String::new());
    let (options_loaded, set_options_loaded) = signal(false);
    let (auth_state, _) = use_auth();

    // The picker list is loaded lazily, the first time the dialog opens.
    Effect::new(move |_| {
        if open.get() && !options_loaded.get_untracked() {
            set_options_loaded.set(true);
            spawn_local(async move {
                let session = auth_state.get_untracked().session;
                let result = shops::api::fetch_shops(&session, 0, 100, "").await;
                if let Some(items) = result.data {
                    shop_options.set(items);
                }
            });
        }
    });

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div class="modal-overlay" on:click=move |_| open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Assign to shop"</h2>
                    </div>
                    <div class="modal-body">
                        <Label>"Shop"</Label>
                        <select
                            class="modal-select"
                            on:change=move |ev| picked.set(event_target_value(&ev))
                        >
                            <option value="">"Choose a shop..."</option>
                            <For
                                each=move || shop_options.get()
                                key=|s| s.id.clone()
                                children=move |shop| {
                                    view! { <option value=shop.id.clone()>{shop.name.clone()}</option> }
                                }
                            />
                        </select>
                    </div>
                    <div class="modal-footer">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                let shop_id = picked.get_untracked();
                                if !shop_id.is_empty() {
                                    open.set(false);
                                    on_assign.run(shop_id);
                                }
                            }
                            disabled=Signal::derive(move || picked.get().is_empty())
                        >
                            "Assign"
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Inline viewer for a fetched license document. PDFs render in an iframe,
/// anything else as an image.
#[component]
fn LicenseDialog(file: RwSignal<Option<LicenseFile>>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || file.get().is_some() fallback=|| ()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal modal--wide" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Delivery license"</h2>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| on_close.run(())
                        >
                            {icon("x")}
                        </Button>
                    </div>
                    <div class="modal-body modal-body--document">
                        {move || {
                            file.get()
                                .map(|f| match f.kind {
                                    LicenseKind::Pdf => {
                                        view! {
                                            <iframe
                                                src=f.object_url.clone()
                                                class="license-frame"
                                                title="Delivery license"
                                            ></iframe>
                                        }
                                            .into_any()
                                    }
                                    LicenseKind::Image => {
                                        view! {
                                            <img
                                                src=f.object_url.clone()
                                                class="license-image"
                                                alt="Delivery license"
                                            />
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
