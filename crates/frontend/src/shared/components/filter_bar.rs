use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;

const DEBOUNCE_MS: u32 = 400;

/// Free-text search bar above a management table.
///
/// Invokes `on_search` after a short typing pause, and immediately on the
/// search button or Enter. The parent treats an unchanged query as a no-op,
/// so duplicate invocations are harmless.
#[component]
pub fn FilterBar(
    #[prop(into)] placeholder: String,
    on_search: Callback<String>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    // Only the latest debounce timer may fire.
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let _ = query.get();
        let gen = generation.with_value(|g| *g) + 1;
        generation.set_value(gen);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.with_value(|g| *g) == gen {
                on_search.run(query.get_untracked());
            }
        });
    });

    let submit = move || on_search.run(query.get_untracked());

    view! {
        <div class="filter-bar">
            <form on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <div class="filter-bar__input">
                        <Input value=query placeholder=placeholder />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| submit()
                    >
                        {icon("search")}
                        " Search"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| {
                            query.set(String::new());
                            submit();
                        }
                    >
                        {icon("x")}
                    </Button>
                </Flex>
            </form>
        </div>
    }
}
