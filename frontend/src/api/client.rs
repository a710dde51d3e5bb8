use std::cell::RefCell;
use std::rc::Rc;

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};

use crate::api::types::ApiError;
use crate::config;
use crate::utils::{nav, storage};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const CURRENT_USER_KEY: &str = "current_user";

type UnauthorizedHook = Rc<dyn Fn()>;

/// HTTP entry point. Every request except the credential exchange goes out
/// with the persisted bearer token attached, and every response is screened
/// for 401 before the caller sees it.
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    unauthorized_hooks: RefCell<Vec<UnauthorizedHook>>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            unauthorized_hooks: RefCell::new(Vec::new()),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            unauthorized_hooks: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Registered hooks run on every 401, after the persisted session is
    /// cleared and before the error reaches the caller. The root composition
    /// uses this to reset the live session store.
    pub fn on_unauthorized(&self, hook: impl Fn() + 'static) {
        self.unauthorized_hooks.borrow_mut().push(Rc::new(hook));
    }

    /// `Authorization: Bearer <token>` when a token is persisted, nothing
    /// otherwise. The login and register calls never go through here.
    pub(crate) fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = storage::get_item(ACCESS_TOKEN_KEY) {
            if let Ok(value) = format!("Bearer {}", token).parse() {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    pub(crate) fn handle_unauthorized_status(&self, status: StatusCode) {
        if status != StatusCode::UNAUTHORIZED {
            return;
        }
        Self::clear_persisted_session();
        let hooks: Vec<UnauthorizedHook> = self.unauthorized_hooks.borrow().clone();
        for hook in &hooks {
            hook();
        }
        nav::redirect_to("/login");
    }

    pub(crate) fn clear_persisted_session() {
        storage::remove_item(ACCESS_TOKEN_KEY);
        storage::remove_item(CURRENT_USER_KEY);
    }

    pub(crate) async fn error_body(response: Response) -> ApiError {
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::unknown(format!("Request failed with status {}", status)),
        }
    }
}
