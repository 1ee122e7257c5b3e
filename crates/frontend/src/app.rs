use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::shared::http::ApiClient;
use crate::system::auth::context::Session;
use crate::system::auth::storage::BrowserTokenStore;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // Session rehydrates from localStorage before anything reads it.
    let session = Session::new(Arc::new(BrowserTokenStore::new(&config.token_storage_key)));
    let api = ApiClient::new(&config, session.clone());

    provide_context(config);
    provide_context(session);
    provide_context(api);

    view! {
        <AppRoutes />
    }
}
