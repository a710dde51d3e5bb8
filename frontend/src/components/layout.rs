use crate::{state::use_stores, utils::nav};
use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center py-12">
            <div class="animate-spin rounded-full h-10 w-10 border-b-2 border-sky-600"></div>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_stores();
    let session = ctx.session;
    let favorites = ctx.favorites;
    let favorites_count = create_memo(move |_| favorites.get().len());
    let is_authenticated = create_memo(move |_| session.get().authenticated);
    let is_admin = create_memo(move |_| {
        session
            .get()
            .user
            .as_ref()
            .map(|user| user.role == "admin")
            .unwrap_or(false)
    });
    let user_name = create_memo(move |_| {
        session
            .get()
            .user
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_default()
    });
    let stores = ctx.stores.clone();
    let on_logout = move |_| {
        stores.session.logout();
        nav::redirect_to("/");
    };
    view! {
        <header class="bg-white shadow-sm border-b border-slate-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-8">
                        <a href="/" class="text-xl font-semibold text-slate-900">
                            "Voyago"
                        </a>
                        <nav class="hidden sm:flex space-x-4">
                            <a href="/destinations" class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium">
                                "Destinations"
                            </a>
                            <Show when=move || is_authenticated.get() fallback=|| ()>
                                <a href="/favorites" class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium">
                                    "Favorites"
                                    <span class="ml-1 inline-flex items-center justify-center px-2 py-0.5 rounded-full text-xs font-medium bg-rose-100 text-rose-700">
                                        {move || favorites_count.get()}
                                    </span>
                                </a>
                            </Show>
                            <Show when=move || is_admin.get() fallback=|| ()>
                                <a href="/admin" class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium">
                                    "Admin"
                                </a>
                            </Show>
                        </nav>
                    </div>
                    <div class="flex items-center gap-3">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=|| {
                                view! {
                                    <a href="/login" class="text-slate-600 hover:text-slate-900 px-3 py-2 text-sm font-medium">
                                        "Sign in"
                                    </a>
                                    <a href="/signup" class="bg-sky-600 hover:bg-sky-700 text-white px-4 py-2 rounded-md text-sm font-medium">
                                        "Sign up"
                                    </a>
                                }
                            }
                        >
                            <span class="text-sm text-slate-600">{move || user_name.get()}</span>
                            <button
                                type="button"
                                class="text-slate-600 hover:text-slate-900 px-3 py-2 text-sm font-medium"
                                on:click=on_logout.clone()
                            >
                                "Sign out"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </header>
    }
}
