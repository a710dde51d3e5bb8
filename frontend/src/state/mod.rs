pub mod channel;
pub mod favorites;
pub mod session;

use std::collections::BTreeSet;
use std::rc::Rc;

use leptos::*;

use crate::api::{ApiClient, User};
use favorites::FavoritesStore;
use session::SessionStore;

/// The two stores owned by the application root. Everything downstream
/// receives cloned handles; nothing reaches them through a global.
#[derive(Clone)]
pub struct Stores {
    pub api: Rc<ApiClient>,
    pub session: SessionStore,
    pub favorites: FavoritesStore,
}

pub fn create_stores() -> Stores {
    create_stores_with_client(Rc::new(ApiClient::new()))
}

pub fn create_stores_with_client(api: Rc<ApiClient>) -> Stores {
    let session = SessionStore::new(Rc::clone(&api));
    let favorites = FavoritesStore::new(Rc::clone(&api));

    // A 401 anywhere resets the live session before the caller's error
    // handler runs.
    {
        let session = session.clone();
        api.on_unauthorized(move || session.force_clear());
    }

    // Restore before wiring the favorites subscription: the replayed value
    // must reflect the persisted session, or a cached favorites set would be
    // wiped on every authenticated cold start.
    session.restore();
    {
        let favorites = favorites.clone();
        session.subscribe(move |user| {
            if user.is_none() {
                favorites.clear_favorites();
            }
        });
    }

    Stores {
        api,
        session,
        favorites,
    }
}

/// Signal mirror of the session channel for reactive views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub authenticated: bool,
}

#[derive(Clone)]
pub struct StoreContext {
    pub stores: Stores,
    pub session: ReadSignal<SessionState>,
    pub favorites: ReadSignal<BTreeSet<i64>>,
}

fn build_context(stores: Stores) -> StoreContext {
    let (session, set_session) = create_signal(SessionState {
        user: stores.session.current_user(),
        authenticated: stores.session.is_authenticated(),
    });
    {
        let store = stores.session.clone();
        stores.session.subscribe(move |user| {
            set_session.set(SessionState {
                user: user.clone(),
                authenticated: store.is_authenticated(),
            })
        });
    }

    let (favorites, set_favorites) = create_signal(stores.favorites.snapshot());
    stores
        .favorites
        .subscribe(move |ids| set_favorites.set(ids.clone()));

    StoreContext {
        stores,
        session,
        favorites,
    }
}

pub fn provide_stores() -> StoreContext {
    provide_stores_with(create_stores())
}

pub fn provide_stores_with(stores: Stores) -> StoreContext {
    let ctx = build_context(stores);
    provide_context(ctx.clone());
    ctx
}

pub fn use_stores() -> StoreContext {
    use_context::<StoreContext>().unwrap_or_else(|| build_context(create_stores()))
}

#[component]
pub fn StoreProvider(children: Children) -> impl IntoView {
    provide_stores();
    view! { <>{children()}</> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ACCESS_TOKEN_KEY, CURRENT_USER_KEY};
    use crate::state::favorites::FAVORITES_KEY;
    use crate::utils::storage;
    use httpmock::prelude::*;
    use serde_json::json;

    fn stores_for(server: &MockServer) -> Stores {
        create_stores_with_client(Rc::new(ApiClient::new_with_base_url(server.base_url())))
    }

    #[tokio::test]
    async fn login_toggle_rollback_logout_scenario() {
        storage::clear();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/login");
            then.status(200).json_body(json!({
                "token": "T1",
                "user": { "id": 1, "name": "Amel", "email": "a@b.com", "role": "client" }
            }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/favorites");
            then.status(503).json_body(json!({ "message": "unreachable" }));
        });

        let stores = stores_for(&server);
        stores.session.login("a@b.com", "x").await.unwrap();
        assert!(stores.session.is_authenticated());
        assert_eq!(stores.session.role(), "client");

        assert!(!stores.favorites.is_favorite(7));
        let settle = stores.favorites.toggle_favorite(7);
        assert!(stores.favorites.is_favorite(7));
        settle.await;
        assert!(!stores.favorites.is_favorite(7));

        stores.session.logout();
        assert!(!stores.session.is_authenticated());
        assert_eq!(stores.favorites.favorites_count(), 0);
        assert!(storage::get_item(ACCESS_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn expired_token_forces_logout_and_clears_everything() {
        storage::clear();
        storage::set_item(ACCESS_TOKEN_KEY, "EXPIRED").unwrap();
        storage::set_item(
            CURRENT_USER_KEY,
            &json!({ "id": 1, "name": "Amel", "email": "a@b.com", "role": "client" }).to_string(),
        )
        .unwrap();
        storage::set_item(FAVORITES_KEY, "[3]").unwrap();

        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/favorites");
            then.status(401).json_body(json!({ "message": "Token expired" }));
        });

        let stores = stores_for(&server);
        assert!(stores.session.is_authenticated());
        assert!(stores.favorites.is_favorite(3));

        let error = stores.favorites.refresh().await.unwrap_err();
        assert_eq!(error.message, "Token expired");
        assert!(!stores.session.is_authenticated());
        assert_eq!(stores.favorites.favorites_count(), 0);
        assert!(storage::get_item(ACCESS_TOKEN_KEY).is_none());
        assert!(storage::get_item(CURRENT_USER_KEY).is_none());
        assert!(storage::get_item(FAVORITES_KEY).is_none());
    }

    #[test]
    fn authenticated_cold_start_keeps_cached_favorites() {
        storage::clear();
        storage::set_item(ACCESS_TOKEN_KEY, "T1").unwrap();
        storage::set_item(
            CURRENT_USER_KEY,
            &json!({ "id": 1, "name": "Amel", "email": "a@b.com", "role": "client" }).to_string(),
        )
        .unwrap();
        storage::set_item(FAVORITES_KEY, "[3,9]").unwrap();

        let stores = create_stores_with_client(Rc::new(ApiClient::new_with_base_url("http://unused")));
        assert!(stores.session.is_authenticated());
        assert_eq!(stores.favorites.favorites_count(), 2);
        assert_eq!(storage::get_item(FAVORITES_KEY).as_deref(), Some("[3,9]"));
    }

    #[test]
    fn logged_out_cold_start_drops_stale_favorites() {
        storage::clear();
        storage::set_item(FAVORITES_KEY, "[3,9]").unwrap();

        let stores = create_stores_with_client(Rc::new(ApiClient::new_with_base_url("http://unused")));
        assert!(!stores.session.is_authenticated());
        assert_eq!(stores.favorites.favorites_count(), 0);
        assert!(storage::get_item(FAVORITES_KEY).is_none());
    }
}
