use std::cell::RefCell;
use std::rc::Rc;

use crate::api::{
    ApiClient, ApiError, LoginRequest, RegisterRequest, User, ACCESS_TOKEN_KEY, CURRENT_USER_KEY,
};
use crate::state::channel::{StateChannel, SubscriptionId};
use crate::utils::storage;

/// Single source of truth for "who is logged in". Exactly one instance is
/// live per app; consumers get a cloned handle from the root composition.
#[derive(Clone)]
pub struct SessionStore {
    api: Rc<ApiClient>,
    token: Rc<RefCell<Option<String>>>,
    channel: StateChannel<Option<User>>,
}

impl SessionStore {
    pub fn new(api: Rc<ApiClient>) -> Self {
        Self {
            api,
            token: Rc::new(RefCell::new(None)),
            channel: StateChannel::new(None),
        }
    }

    /// Picks up the persisted session, if any. The token is not verified
    /// remotely; an expired token surfaces as a 401 on the next request.
    /// A token with no readable user record stays authenticated for the
    /// token-presence predicate while role checks come up empty.
    pub fn restore(&self) {
        let Some(token) = storage::get_item(ACCESS_TOKEN_KEY) else {
            return;
        };
        let user = match storage::get_item(CURRENT_USER_KEY) {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(error) => {
                    log::warn!("Discarding corrupted session cache: {}", error);
                    ApiClient::clear_persisted_session();
                    return;
                }
            },
            None => None,
        };
        *self.token.borrow_mut() = Some(token);
        self.channel.publish(user);
    }

    /// On success the session is persisted, committed, and broadcast before
    /// this returns. On failure nothing changes and the remote message is
    /// handed back for the form to display; there is no retry.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let response = self
            .api
            .login(LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        match serde_json::to_string(&response.user) {
            Ok(user_json) => {
                if let Err(error) = storage::set_item(CURRENT_USER_KEY, &user_json) {
                    log::warn!("Failed to persist user profile: {}", error);
                }
            }
            Err(error) => log::warn!("Failed to encode user profile: {}", error),
        }
        if let Err(error) = storage::set_item(ACCESS_TOKEN_KEY, &response.token) {
            log::warn!("Failed to persist access token: {}", error);
        }

        *self.token.borrow_mut() = Some(response.token);
        self.channel.publish(Some(response.user.clone()));
        Ok(response.user)
    }

    /// Registration does not authenticate; callers wanting a session chain a
    /// `login` explicitly.
    pub async fn register(&self, request: RegisterRequest) -> Result<User, ApiError> {
        let response = self.api.register(request).await?;
        Ok(response.user)
    }

    /// Idempotent; never calls the remote store.
    pub fn logout(&self) {
        ApiClient::clear_persisted_session();
        self.force_clear();
    }

    /// Authorization-pipeline entry point: when a 401 lands here the
    /// persisted session is already gone, so only the live state resets.
    pub fn force_clear(&self) {
        *self.token.borrow_mut() = None;
        self.channel.publish(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub fn current_user(&self) -> Option<User> {
        self.channel.get()
    }

    pub fn role(&self) -> String {
        self.channel
            .with(|user| user.as_ref().map(|user| user.role.clone()))
            .unwrap_or_default()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.channel
            .with(|user| user.as_ref().map_or(false, |user| user.role == role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role("admin")
    }

    pub fn subscribe(&self, observer: impl Fn(&Option<User>) + 'static) -> SubscriptionId {
        self.channel.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.channel.unsubscribe(id)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::cell::RefCell;

    fn store_for(server: &MockServer) -> SessionStore {
        SessionStore::new(Rc::new(ApiClient::new_with_base_url(server.base_url())))
    }

    fn client_user_json() -> serde_json::Value {
        json!({ "id": 1, "name": "Amel", "email": "a@b.com", "role": "client" })
    }

    #[tokio::test]
    async fn login_persists_session_and_broadcasts_user() {
        storage::clear();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/login");
            then.status(200).json_body(json!({
                "message": "Login successful",
                "token": "T1",
                "user": client_user_json()
            }));
        });

        let store = store_for(&server);
        let broadcasts = Rc::new(RefCell::new(Vec::new()));
        {
            let broadcasts = Rc::clone(&broadcasts);
            store.subscribe(move |user| broadcasts.borrow_mut().push(user.clone()));
        }

        let user = store.login("a@b.com", "x").await.unwrap();

        assert_eq!(user.role, "client");
        assert!(store.is_authenticated());
        assert_eq!(store.role(), "client");
        assert!(!store.is_admin());
        assert_eq!(storage::get_item(ACCESS_TOKEN_KEY).as_deref(), Some("T1"));
        assert!(storage::get_item(CURRENT_USER_KEY).is_some());
        // Replay (None) followed by the login broadcast.
        assert_eq!(broadcasts.borrow().len(), 2);
        assert!(broadcasts.borrow()[1].is_some());
    }

    #[tokio::test]
    async fn failed_login_leaves_prior_state_untouched() {
        storage::clear();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/login");
            then.status(401)
                .json_body(json!({ "message": "Invalid credentials" }));
        });

        let store = store_for(&server);
        let error = store.login("a@b.com", "wrong").await.unwrap_err();

        assert_eq!(error.message, "Invalid credentials");
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
        assert!(storage::get_item(ACCESS_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn logout_clears_storage_and_is_idempotent() {
        storage::clear();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/login");
            then.status(200).json_body(json!({
                "token": "T1",
                "user": client_user_json()
            }));
        });

        let store = store_for(&server);
        store.login("a@b.com", "x").await.unwrap();

        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
        assert!(storage::get_item(ACCESS_TOKEN_KEY).is_none());
        assert!(storage::get_item(CURRENT_USER_KEY).is_none());

        // Second logout is a no-op, not a panic.
        store.logout();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn restore_picks_up_persisted_session() {
        storage::clear();
        storage::set_item(ACCESS_TOKEN_KEY, "T1").unwrap();
        storage::set_item(CURRENT_USER_KEY, &client_user_json().to_string()).unwrap();

        let store = SessionStore::new(Rc::new(ApiClient::new_with_base_url("http://unused")));
        store.restore();

        assert!(store.is_authenticated());
        assert_eq!(store.role(), "client");
    }

    #[test]
    fn restore_discards_corrupted_user_record() {
        storage::clear();
        storage::set_item(ACCESS_TOKEN_KEY, "T1").unwrap();
        storage::set_item(CURRENT_USER_KEY, "{not json").unwrap();

        let store = SessionStore::new(Rc::new(ApiClient::new_with_base_url("http://unused")));
        store.restore();

        assert!(!store.is_authenticated());
        assert!(storage::get_item(ACCESS_TOKEN_KEY).is_none());
        assert!(storage::get_item(CURRENT_USER_KEY).is_none());
    }

    #[test]
    fn restore_with_token_but_no_user_keeps_token_and_empty_role() {
        storage::clear();
        storage::set_item(ACCESS_TOKEN_KEY, "T1").unwrap();

        let store = SessionStore::new(Rc::new(ApiClient::new_with_base_url("http://unused")));
        store.restore();

        assert!(store.is_authenticated());
        assert!(store.current_user().is_none());
        assert_eq!(store.role(), "");
        assert!(!store.is_admin());
    }

    #[test]
    fn late_subscriber_receives_current_value_immediately() {
        storage::clear();
        storage::set_item(ACCESS_TOKEN_KEY, "T1").unwrap();
        storage::set_item(CURRENT_USER_KEY, &client_user_json().to_string()).unwrap();

        let store = SessionStore::new(Rc::new(ApiClient::new_with_base_url("http://unused")));
        store.restore();

        let seen = Rc::new(RefCell::new(None));
        {
            let seen = Rc::clone(&seen);
            store.subscribe(move |user| *seen.borrow_mut() = user.clone());
        }
        assert_eq!(
            seen.borrow().as_ref().map(|user| user.name.clone()),
            Some("Amel".to_string())
        );
    }
}
