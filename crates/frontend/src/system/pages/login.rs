use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::http::use_api;
use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (user_kode, set_user_kode) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let api_client = use_api();
    let session = use_session();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let user_kode_val = user_kode.get_untracked();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        let api_client = api_client.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&api_client, user_kode_val, password_val).await {
                Ok(token) => {
                    session.login(token);
                    set_is_loading.set(false);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    log::warn!("Login rejected: {:?}", e.kind);
                    set_error_message.set(Some(e.message));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page-container">
            <form class="login-form" on:submit=on_submit>
                <h2>"Label Printing Login"</h2>
                <p>"Sign in to continue"</p>

                <div class="input-group">
                    <label for="user-kode">"User code"</label>
                    <input
                        type="text"
                        id="user-kode"
                        autofocus=true
                        prop:value=move || user_kode.get()
                        on:input=move |ev| set_user_kode.set(event_target_value(&ev))
                        required
                        disabled=move || is_loading.get()
                    />
                </div>

                <div class="input-group">
                    <label for="password">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        required
                        disabled=move || is_loading.get()
                    />
                </div>

                <Show when=move || error_message.get().is_some()>
                    <p class="error-text">
                        {move || error_message.get().unwrap_or_default()}
                    </p>
                </Show>

                <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                    <Show when=move || is_loading.get() fallback=|| "Login">
                        <Spinner size=SpinnerSize::Small />
                        " Loading..."
                    </Show>
                </button>
            </form>
        </div>
    }
}
