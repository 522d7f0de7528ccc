use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;

use super::session::Session;
use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Session,
    pub user_info: Option<UserInfo>,
}

/// Auth context provider component.
///
/// Restores a persisted session on mount and provides the read/write signal
/// pair to the whole tree. This is the only place that touches token
/// storage; everything below receives an explicit [`Session`].
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        if let Some(token) = storage::get_token() {
            set_auth_state.set(AuthState {
                session: Session::new(token),
                user_info: None,
            });
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Persist a successful login and switch the app into the signed-in state.
pub fn complete_login(set_auth_state: WriteSignal<AuthState>, response: LoginResponse) {
    storage::save_token(&response.token);
    set_auth_state.set(AuthState {
        session: Session::new(response.token),
        user_info: Some(response.user),
    });
}

/// Drop the persisted token and reset the auth state.
pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}
