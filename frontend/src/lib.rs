use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod state;
pub mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

use pages::{
    admin::AdminPage, destination_detail::DestinationDetailPage, destinations::DestinationsPage,
    favorites::FavoritesPage, home::HomePage, login::LoginPage, signup::SignupPage,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    view! {
        <state::StoreProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/signup" view=SignupPage/>
                    <Route path="/destinations" view=DestinationsPage/>
                    <Route path="/destinations/:id" view=DestinationDetailPage/>
                    <Route path="/favorites" view=ProtectedFavorites/>
                    <Route path="/admin" view=ProtectedAdmin/>
                </Routes>
            </Router>
        </state::StoreProvider>
    }
}

#[component]
fn ProtectedFavorites() -> impl IntoView {
    view! { <components::guard::RequireAuth><FavoritesPage/></components::guard::RequireAuth> }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <components::guard::RequireAdmin><AdminPage/></components::guard::RequireAdmin> }
}

#[cfg(target_arch = "wasm32")]
pub fn run_app() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting Voyago frontend (wasm)");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__VOYAGO_ENV is present (env.js), it takes precedence.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    mount_to_body(App);
}
