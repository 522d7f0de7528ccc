use contracts::domain::shop::NewShop;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::shops::api;
use crate::layout::notify::use_notify;
use crate::system::auth::context::use_auth;

/// Modal form for creating a shop together with its owner account.
#[component]
pub fn AddShopForm(open: RwSignal<bool>, on_created: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);
    let notify = use_notify();
    let (auth_state, _) = use_auth();

    let reset = move || {
        name.set(String::new());
        description.set(String::new());
        first_name.set(String::new());
        last_name.set(String::new());
        phone_number.set(String::new());
        email.set(String::new());
        password.set(String::new());
    };

    let can_submit = Signal::derive(move || {
        !name.get().trim().is_empty()
            && !email.get().trim().is_empty()
            && !password.get().is_empty()
            && !saving.get()
    });

    let submit = move || {
        let shop = NewShop {
            name: name.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
            phone_number: phone_number.get_untracked().trim().to_string(),
        };
        set_saving.set(true);
        spawn_local(async move {
            let session = auth_state.get_untracked().session;
            match api::add_shop(&session, &shop).await {
                Ok(()) => {
                    notify.success("Shops", &format!("Shop \"{}\" created", shop.name));
                    reset();
                    open.set(false);
                    on_created.run(());
                }
                Err(err) => notify.error("Shops", &err.to_string()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div class="modal-overlay" on:click=move |_| open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Add shop"</h2>
                    </div>
                    <div class="modal-body">
                        <div class="form-field">
                            <Label>"Shop name"</Label>
                            <Input value=name placeholder="Shop name" />
                        </div>
                        <div class="form-field">
                            <Label>"Description"</Label>
                            <Input value=description placeholder="Short description" />
                        </div>
                        <Flex gap=FlexGap::Small>
                            <div class="form-field">
                                <Label>"Owner first name"</Label>
                                <Input value=first_name placeholder="First name" />
                            </div>
                            <div class="form-field">
                                <Label>"Owner last name"</Label>
                                <Input value=last_name placeholder="Last name" />
                            </div>
                        </Flex>
                        <div class="form-field">
                            <Label>"Phone number"</Label>
                            <Input value=phone_number placeholder="+1..." />
                        </div>
                        <div class="form-field">
                            <Label>"Owner email"</Label>
                            <Input value=email placeholder="owner@example.com" />
                        </div>
                        <div class="form-field">
                            <Label>"Password"</Label>
                            <Input value=password input_type=InputType::Password />
                        </div>
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
                            on_click=move |_| submit()
                            disabled=Signal::derive(move || !can_submit.get())
                        >
                            {move || if saving.get() { "Saving..." } else { "Create shop" }}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
