use crate::api::{ApiError, Destination};
use crate::components::{favorite_button::FavoriteButton, layout::{Header, LoadingSpinner}};
use crate::state::use_stores;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn DestinationsPage() -> impl IntoView {
    let ctx = use_stores();
    let (destinations, set_destinations) = create_signal(Vec::<Destination>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<ApiError>);

    {
        let api = ctx.stores.api.clone();
        create_effect(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.get_destinations().await {
                    Ok(items) => set_destinations.set(items),
                    Err(error) => {
                        log::error!("Failed to load destinations: {}", error);
                        set_error.set(Some(error));
                    }
                }
                set_loading.set(false);
            });
        });
    }

    view! {
        <Title text="Destinations - Voyago"/>
        <div class="min-h-screen bg-slate-50">
            <Header/>
            <div class="max-w-7xl mx-auto py-8 px-4 sm:px-6 lg:px-8">
                <h1 class="text-2xl font-bold text-slate-900 mb-6">"Destinations"</h1>
                <Show when=move || error.get().is_some() fallback=|| ()>
                    <div class="rounded-md bg-rose-50 border border-rose-200 text-rose-700 px-4 py-3 mb-6">
                        {move || error.get().map(|error| error.message)}
                    </div>
                </Show>
                <Show when=move || !loading.get() fallback=LoadingSpinner>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || destinations.get()
                            key=|destination| destination.id
                            children=move |destination: Destination| {
                                view! { <DestinationCard destination/> }
                            }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn DestinationCard(destination: Destination) -> impl IntoView {
    let price = destination
        .price
        .map(|price| format!("${:.0}", price))
        .unwrap_or_default();
    view! {
        <div class="bg-white rounded-lg shadow-sm border border-slate-200 overflow-hidden">
            {destination.image.as_ref().map(|image| {
                view! { <img src=image.clone() alt=destination.name.clone() class="h-44 w-full object-cover"/> }
            })}
            <div class="p-4">
                <div class="flex items-start justify-between">
                    <div>
                        <h2 class="text-lg font-semibold text-slate-900">{destination.name.clone()}</h2>
                        {destination.country.as_ref().map(|country| {
                            view! { <p class="text-sm text-slate-500">{country.clone()}</p> }
                        })}
                    </div>
                    <FavoriteButton destination_id=destination.id/>
                </div>
                {destination.description.as_ref().map(|description| {
                    view! { <p class="mt-2 text-sm text-slate-600">{description.clone()}</p> }
                })}
                <div class="mt-3 flex items-center justify-between">
                    <span class="text-base font-medium text-slate-900">{price}</span>
                    <a href=format!("/destinations/{}", destination.id) class="text-sm font-medium text-sky-600 hover:text-sky-700">
                        "View details"
                    </a>
                </div>
            </div>
        </div>
    }
}
