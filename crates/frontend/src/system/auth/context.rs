use std::sync::Arc;

use leptos::prelude::*;

use super::storage::TokenStore;

/// Auth session shared by the whole console.
///
/// `login`/`logout` are the only writers of the token; the request layer and
/// the route guard only read it.
#[derive(Clone)]
pub struct Session {
    token: RwSignal<Option<String>>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// Rehydrate from the persistent slot
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        let token = RwSignal::new(store.load());
        Self { token, store }
    }

    pub fn login(&self, token: String) {
        self.store.save(&token);
        self.token.set(Some(token));
        log::info!("Session started");
    }

    pub fn logout(&self) {
        self.store.clear();
        self.token.set(None);
        log::info!("Session ended");
    }

    pub fn current_token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Reactive check, for guards and views
    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }
}

/// Hook to access the session
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::super::storage::MemoryTokenStore;
    use super::*;

    #[test]
    fn test_rehydrates_from_store() {
        let session = Session::new(Arc::new(MemoryTokenStore::with_token("abc")));
        assert_eq!(session.current_token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_login_and_logout_update_store() {
        let store = Arc::new(MemoryTokenStore::default());
        let session = Session::new(store.clone());
        assert_eq!(session.current_token(), None);

        session.login("tok-1".to_string());
        assert_eq!(session.current_token().as_deref(), Some("tok-1"));
        assert_eq!(store.load().as_deref(), Some("tok-1"));

        session.logout();
        assert_eq!(session.current_token(), None);
        assert_eq!(store.load(), None);
    }
}
