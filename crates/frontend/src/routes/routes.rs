use crate::domain::a001_packing::ui::list::PackingHistoryPage;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell>
                <PackingHistoryPage />
            </Shell>
        </RequireAuth>
    }
}

/// Login page; an operator who already holds a token goes straight home.
#[component]
fn LoginRoute() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || !session.is_authenticated()
            fallback=|| view! { <Redirect path="/" /> }
        >
            <LoginPage />
        </Show>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <Route path=path!("/login") view=LoginRoute />
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
