//! Request layer: one `ApiClient` shared through context.
//!
//! Every call attaches the session's bearer token, unwraps the
//! `{ data, pagination?, message? }` envelope and maps failures to
//! [`AppError`].

use contracts::shared::envelope::{ApiEnvelope, ApiErrorBody};
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::{api_base, join_url};
use crate::shared::config::AppConfig;
use crate::shared::error::{AppError, AppResult, ErrorKind};
use crate::system::auth::context::Session;

#[derive(Clone)]
pub struct ApiClient {
    base: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Session) -> Self {
        Self {
            base: api_base(&config.api_base),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.current_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, what: &str) -> AppResult<ApiEnvelope<T>> {
        let request = self.authorize(Request::get(&self.url(path)));
        self.send(request.build(), what).await
    }

    /// GET with a query string serialized by `serde_qs`
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q, what: &str) -> AppResult<ApiEnvelope<T>>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let qs = serde_qs::to_string(query)
            .map_err(|e| AppError::validation(format!("Failed to encode query: {}", e)))?;
        let url = format!("{}?{}", self.url(path), qs);
        let request = self.authorize(Request::get(&url));
        self.send(request.build(), what).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B, what: &str) -> AppResult<ApiEnvelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let request = self.authorize(Request::post(&self.url(path)));
        self.send(request.json(body), what).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B, what: &str) -> AppResult<ApiEnvelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let request = self.authorize(Request::put(&self.url(path)));
        self.send(request.json(body), what).await
    }

    /// DELETE; the response body is not inspected on success
    pub async fn delete(&self, path: &str, what: &str) -> AppResult<()> {
        let request = self
            .authorize(Request::delete(&self.url(path)))
            .build()
            .map_err(|e| AppError::transport(format!("Failed to build request: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| AppError::transport(format!("Failed to send request: {}", e)))?;
        if !response.ok() {
            return Err(self.failure(response, what).await);
        }
        Ok(())
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: Result<Request, gloo_net::Error>,
        what: &str,
    ) -> AppResult<ApiEnvelope<T>> {
        let request =
            request.map_err(|e| AppError::transport(format!("Failed to serialize request: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| AppError::transport(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(self.failure(response, what).await);
        }

        response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|e| AppError::decode(format!("{}: failed to parse response: {}", what, e)))
    }

    async fn failure(&self, response: Response, what: &str) -> AppError {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        let err = AppError::from_status(status, message, what);

        // An expired token ends the session; the router then shows the login page.
        if err.is(ErrorKind::Unauthorized) && self.session.current_token().is_some() {
            log::warn!("{}: token rejected, logging out", what);
            self.session.logout();
        }
        err
    }
}

/// Hook to access the shared client
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found in component tree")
}
