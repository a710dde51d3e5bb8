use crate::{state::use_stores, utils::nav};
use leptos::*;

/// Heart toggle. The press lands on the in-memory set immediately; the
/// remote call settles in the background and a failure quietly reverts the
/// heart (the store logs it).
#[component]
pub fn FavoriteButton(destination_id: i64) -> impl IntoView {
    let ctx = use_stores();
    let session = ctx.session;
    let favorites = ctx.favorites;
    let is_favorite = create_memo(move |_| favorites.get().contains(&destination_id));
    let stores = ctx.stores.clone();
    let on_click = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        if !session.get_untracked().authenticated {
            nav::redirect_to("/login");
            return;
        }
        spawn_local(stores.favorites.toggle_favorite(destination_id));
    };
    view! {
        <button
            type="button"
            class="text-2xl leading-none text-rose-500 hover:scale-110 transition-transform"
            aria-pressed=move || is_favorite.get().to_string()
            on:click=on_click
        >
            {move || if is_favorite.get() { "\u{2665}" } else { "\u{2661}" }}
        </button>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::FavoriteButton;
    use crate::test_support::helpers::provide_session_with_favorites;
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn renders_filled_heart_for_favorited_destination() {
        let html = render_to_string(move || {
            provide_session_with_favorites(Some("client"), &[7]);
            view! { <FavoriteButton destination_id=7/> }
        });
        assert!(html.contains('\u{2665}'));
        assert!(html.contains("aria-pressed=\"true\""));
    }

    #[test]
    fn renders_outline_heart_otherwise() {
        let html = render_to_string(move || {
            provide_session_with_favorites(Some("client"), &[]);
            view! { <FavoriteButton destination_id=7/> }
        });
        assert!(html.contains('\u{2661}'));
        assert!(html.contains("aria-pressed=\"false\""));
    }
}
