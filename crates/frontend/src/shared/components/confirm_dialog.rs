use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Modal confirmation for destructive bulk actions.
#[component]
pub fn ConfirmDialog(
    /// Controls visibility; the dialog closes itself on both buttons.
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into, optional)] confirm_label: String,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let confirm_label = if confirm_label.is_empty() {
        "Confirm".to_string()
    } else {
        confirm_label
    };
    let title_view = title.clone();

    view! {
        {move || {
            if !open.get() {
                return ().into_any();
            }
            let title = title_view.clone();
            let confirm_label = confirm_label.clone();
            view! {
                <div class="modal-overlay" on:click=move |_| open.set(false)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <h2 class="modal-title">{title}</h2>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| open.set(false)
                            >
                                {icon("x")}
                            </Button>
                        </div>

                        <div class="modal-body">
                            <p>{move || message.get()}</p>
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
                                    open.set(false);
                                    on_confirm.run(());
                                }
                            >
                                {confirm_label}
                            </Button>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}
