//! TopHeader component - application top bar with the title and logout.

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let session = use_session();

    let logout = move |_| {
        session.logout();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Label Print Queue"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=logout title="Logout">
                    {icon("log-out")}
                    <span>"Logout"</span>
                </button>
            </div>
        </div>
    }
}
