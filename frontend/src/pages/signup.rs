use crate::{
    api::RegisterRequest,
    pages::login::utils,
    state::use_stores,
    utils::nav,
};
use leptos::{ev::SubmitEvent, *};
use leptos_meta::Title;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <Title text="Sign up - Voyago"/>
        <div class="min-h-screen bg-slate-50 flex items-center justify-center px-4">
            <SignupPanel/>
        </div>
    }
}

#[component]
fn SignupPanel() -> impl IntoView {
    let ctx = use_stores();
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm_password, set_confirm_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let stores = ctx.stores.clone();
    // Registration does not sign the user in; the login page does that.
    let register_action = create_action(move |request: &RegisterRequest| {
        let request = request.clone();
        let stores = stores.clone();
        async move { stores.session.register(request).await }
    });
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => {
                    set_error.set(None);
                    nav::redirect_to("/login");
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
        if let Err(message) = validate_signup(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        register_action.dispatch(RegisterRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            phone: None,
        });
    };

    view! {
        <div class="w-full max-w-md bg-white rounded-lg shadow-sm border border-slate-200 p-8">
            <h1 class="text-2xl font-bold text-slate-900 mb-6">"Create your account"</h1>
            <Show when=move || error.get().is_some() fallback=|| ()>
                <div class="rounded-md bg-rose-50 border border-rose-200 text-rose-700 px-4 py-3 mb-4 text-sm">
                    {move || error.get()}
                </div>
            </Show>
            <form on:submit=handle_submit>
                <label class="block text-sm font-medium text-slate-700 mb-1" for="name">
                    "Name"
                </label>
                <input
                    id="name"
                    type="text"
                    class="w-full rounded-md border border-slate-300 px-3 py-2 mb-4 focus:outline-none focus:ring-2 focus:ring-sky-500"
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
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
                    class="w-full rounded-md border border-slate-300 px-3 py-2 mb-4 focus:outline-none focus:ring-2 focus:ring-sky-500"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <label class="block text-sm font-medium text-slate-700 mb-1" for="confirm-password">
                    "Confirm password"
                </label>
                <input
                    id="confirm-password"
                    type="password"
                    class="w-full rounded-md border border-slate-300 px-3 py-2 mb-6 focus:outline-none focus:ring-2 focus:ring-sky-500"
                    prop:value=confirm_password
                    on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="w-full bg-sky-600 hover:bg-sky-700 text-white font-medium rounded-md px-4 py-2 disabled:opacity-60"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>
            <p class="mt-4 text-sm text-slate-600">
                "Already registered? "
                <a href="/login" class="text-sky-600 hover:text-sky-700 font-medium">
                    "Sign in"
                </a>
            </p>
        </div>
    }
}

fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".into());
    }
    utils::validate_credentials(email, password)?;
    if password != confirm_password {
        return Err("Passwords do not match".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_signup;

    #[test]
    fn signup_requires_name_and_matching_passwords() {
        assert!(validate_signup("", "a@b.com", "x", "x").is_err());
        assert!(validate_signup("Amel", "a@b.com", "x", "y").is_err());
        assert!(validate_signup("Amel", "not-an-email", "x", "x").is_err());
        assert!(validate_signup("Amel", "a@b.com", "x", "x").is_ok());
    }
}
