use crate::{
    api::{ApiError, User},
    pages::login::utils,
    state::use_stores,
    utils::nav,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let ctx = use_stores();
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let stores = ctx.stores.clone();
    let login_action = create_action(move |credentials: &(String, String)| {
        let (email, password) = credentials.clone();
        let stores = stores.clone();
        async move {
            let user = stores.session.login(&email, &password).await?;
            // Wholesale favorites fetch now that a token is live; on failure
            // the cached mirror stands in until the next refresh.
            if let Err(error) = stores.favorites.refresh().await {
                log::warn!("Failed to load favorites after login: {}", error);
            }
            Ok::<User, ApiError>(user)
        }
    });
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(user) => {
                    set_error.set(None);
                    if user.role == "admin" {
                        nav::redirect_to("/admin");
                    } else {
                        nav::redirect_to("/");
                    }
                }
                Err(error) => set_error.set(Some(error.message)),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(message) = utils::validate_credentials(&email_value, &password_value) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        login_action.dispatch((email_value, password_value));
    };

    view! {
        <div class="w-full max-w-md bg-white rounded-lg shadow-sm border border-slate-200 p-8">
            <h1 class="text-2xl font-bold text-slate-900 mb-6">"Sign in"</h1>
            <Show when=move || error.get().is_some() fallback=|| ()>
                <div class="rounded-md bg-rose-50 border border-rose-200 text-rose-700 px-4 py-3 mb-4 text-sm">
                    {move || error.get()}
                </div>
            </Show>
            <form on:submit=handle_submit>
                <label class="block text-sm font-medium text-slate-700 mb-1" for="email">
                    "Email"
                </label>
                <input
                    id="email"
                    type="email"
                    class="w-full rounded-md border border-slate-300 px-3 py-2 mb-4 focus:outline-none focus:ring-2 focus:ring-sky-500"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <label class="block text-sm font-medium text-slate-700 mb-1" for="password">
                    "Password"
                </label>
                <input
                    id="password"
                    type="password"
                    class="w-full rounded-md border border-slate-300 px-3 py-2 mb-6 focus:outline-none focus:ring-2 focus:ring-sky-500"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="w-full bg-sky-600 hover:bg-sky-700 text-white font-medium rounded-md px-4 py-2 disabled:opacity-60"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="mt-4 text-sm text-slate-600">
                "No account yet? "
                <a href="/signup" class="text-sky-600 hover:text-sky-700 font-medium">
                    "Sign up"
                </a>
            </p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::LoginPanel;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn renders_credential_form() {
        let html = render_to_string(move || {
            provide_session(None);
            view! { <LoginPanel/> }
        });
        assert!(html.contains("id=\"email\""));
        assert!(html.contains("id=\"password\""));
        assert!(html.contains("Sign in"));
    }
}
