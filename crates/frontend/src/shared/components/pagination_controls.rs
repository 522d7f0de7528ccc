use crate::shared::icons::icon;
use crate::shared::paging::{range_label, total_pages};
use leptos::prelude::*;

/// Pagination footer shared by every management table.
///
/// Pages are zero-based; `total_count` is the server-reported row count
/// across the whole query, so the control works without ever knowing more
/// than the currently displayed page.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    page: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Server-side total row count
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options (defaults to [5, 10, 25])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![5, 10, 25]);

    let on_last_page = move || {
        let pages = total_pages(total_count.get(), page_size.get());
        page.get() + 1 >= pages
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-label">"Rows per page:"</span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(5);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <span class="pagination-info">
                {move || range_label(page.get(), page_size.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if page.get() > 0 {
                        on_page_change.run(0);
                    }
                }
                disabled=move || page.get() == 0
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let current = page.get();
                    if current > 0 {
                        on_page_change.run(current - 1);
                    }
                }
                disabled=move || page.get() == 0
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if !on_last_page() {
                        on_page_change.run(page.get() + 1);
                    }
                }
                disabled=on_last_page
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if !on_last_page() {
                        let pages = total_pages(total_count.get(), page_size.get());
                        on_page_change.run(pages.saturating_sub(1));
                    }
                }
                disabled=on_last_page
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
