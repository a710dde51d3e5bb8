use crate::api::Destination;
use crate::components::{
    favorite_button::FavoriteButton,
    layout::{Header, LoadingSpinner},
};
use crate::state::use_stores;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let ctx = use_stores();
    let (destinations, set_destinations) = create_signal(Vec::<Destination>::new());
    let (loading, set_loading) = create_signal(true);

    // Wholesale refresh from the remote store, then the destination list the
    // favorite ids are joined against. A failed refresh keeps the cached set.
    {
        let stores = ctx.stores.clone();
        create_effect(move |_| {
            let stores = stores.clone();
            spawn_local(async move {
                if let Err(error) = stores.favorites.refresh().await {
                    log::warn!("Failed to refresh favorites: {}", error);
                }
                match stores.api.get_destinations().await {
                    Ok(items) => set_destinations.set(items),
                    Err(error) => log::error!("Failed to load destinations: {}", error),
                }
                set_loading.set(false);
            });
        });
    }

    let favorites = ctx.favorites;
    let favorite_destinations = create_memo(move |_| {
        let ids = favorites.get();
        destinations
            .get()
            .into_iter()
            .filter(|destination| ids.contains(&destination.id))
            .collect::<Vec<_>>()
    });
    let has_favorites = create_memo(move |_| !favorite_destinations.get().is_empty());

    let stores = ctx.stores.clone();
    let on_clear_all = move |_| {
        spawn_local(stores.favorites.clear_all());
    };

    view! {
        <Title text="My favorites - Voyago"/>
        <div class="min-h-screen bg-slate-50">
            <Header/>
            <div class="max-w-7xl mx-auto py-8 px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between mb-6">
                    <h1 class="text-2xl font-bold text-slate-900">"My favorites"</h1>
                    <Show when=move || has_favorites.get() fallback=|| ()>
                        <button
                            type="button"
                            class="text-sm font-medium text-rose-600 hover:text-rose-700"
                            on:click=on_clear_all.clone()
                        >
                            "Clear all"
                        </button>
                    </Show>
                </div>
                <Show when=move || !loading.get() fallback=LoadingSpinner>
                    <Show
                        when=move || has_favorites.get()
                        fallback=|| {
                            view! {
                                <div class="text-center py-16">
                                    <p class="text-slate-600">"No favorites yet."</p>
                                    <a href="/destinations" class="mt-2 inline-block text-sky-600 hover:text-sky-700 font-medium">
                                        "Find a destination to love"
                                    </a>
                                </div>
                            }
                        }
                    >
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                            <For
                                each=move || favorite_destinations.get()
                                key=|destination| destination.id
                                children=move |destination: Destination| {
                                    view! { <FavoriteCard destination/> }
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn FavoriteCard(destination: Destination) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-sm border border-slate-200 overflow-hidden">
            {destination.image.as_ref().map(|image| {
                view! { <img src=image.clone() alt=destination.name.clone() class="h-44 w-full object-cover"/> }
            })}
            <div class="p-4 flex items-start justify-between">
                <div>
                    <h2 class="text-lg font-semibold text-slate-900">{destination.name.clone()}</h2>
                    {destination.country.as_ref().map(|country| {
                        view! { <p class="text-sm text-slate-500">{country.clone()}</p> }
                    })}
                </div>
                <FavoriteButton destination_id=destination.id/>
            </div>
        </div>
    }
}
