#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod helpers {
    use std::rc::Rc;

    use crate::api::{ApiClient, ACCESS_TOKEN_KEY, CURRENT_USER_KEY};
    use crate::state::favorites::FAVORITES_KEY;
    use crate::state::{create_stores_with_client, provide_stores_with, StoreContext};
    use crate::utils::storage;
    use serde_json::json;

    /// Seeds durable storage with a session for `role` (or none) and provides
    /// the store context, backed by a client that never reaches a server.
    pub fn provide_session(role: Option<&str>) -> StoreContext {
        provide_session_with_favorites(role, &[])
    }

    pub fn provide_session_with_favorites(role: Option<&str>, favorite_ids: &[i64]) -> StoreContext {
        storage::clear();
        if let Some(role) = role {
            storage::set_item(ACCESS_TOKEN_KEY, "T-test").unwrap();
            storage::set_item(
                CURRENT_USER_KEY,
                &json!({ "id": 1, "name": "Amel", "email": "a@b.com", "role": role }).to_string(),
            )
            .unwrap();
            storage::set_item(
                FAVORITES_KEY,
                &serde_json::to_string(favorite_ids).unwrap(),
            )
            .unwrap();
        }
        let stores =
            create_stores_with_client(Rc::new(ApiClient::new_with_base_url("http://unused")));
        provide_stores_with(stores)
    }
}
