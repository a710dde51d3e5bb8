use crate::api::Destination;
use crate::components::{
    favorite_button::FavoriteButton,
    layout::{Header, LoadingSpinner},
};
use crate::state::use_stores;
use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn DestinationDetailPage() -> impl IntoView {
    let ctx = use_stores();
    let params = use_params_map();
    let (destination, set_destination) = create_signal(None::<Destination>);
    let (loading, set_loading) = create_signal(true);

    {
        let api = ctx.stores.api.clone();
        create_effect(move |_| {
            let id = params
                .get()
                .get("id")
                .and_then(|raw| raw.parse::<i64>().ok());
            let api = api.clone();
            spawn_local(async move {
                if let Some(id) = id {
                    match api.get_destination(id).await {
                        Ok(found) => set_destination.set(found),
                        Err(error) => log::error!("Failed to load destination {}: {}", id, error),
                    }
                }
                set_loading.set(false);
            });
        });
    }

    view! {
        <div class="min-h-screen bg-slate-50">
            <Header/>
            <div class="max-w-3xl mx-auto py-8 px-4 sm:px-6 lg:px-8">
                <Show when=move || !loading.get() fallback=LoadingSpinner>
                    {move || match destination.get() {
                        Some(destination) => view! { <DestinationDetail destination/> }.into_view(),
                        None => view! {
                            <p class="text-slate-600">"This destination does not exist."</p>
                        }
                        .into_view(),
                    }}
                </Show>
            </div>
        </div>
    }
}

#[component]
fn DestinationDetail(destination: Destination) -> impl IntoView {
    let price = destination
        .price
        .map(|price| format!("${:.0} per person", price))
        .unwrap_or_default();
    view! {
        <div class="bg-white rounded-lg shadow-sm border border-slate-200 overflow-hidden">
            {destination.image.as_ref().map(|image| {
                view! { <img src=image.clone() alt=destination.name.clone() class="h-64 w-full object-cover"/> }
            })}
            <div class="p-6">
                <div class="flex items-start justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-slate-900">{destination.name.clone()}</h1>
                        {destination.country.as_ref().map(|country| {
                            view! { <p class="text-slate-500">{country.clone()}</p> }
                        })}
                    </div>
                    <FavoriteButton destination_id=destination.id/>
                </div>
                {destination.description.as_ref().map(|description| {
                    view! { <p class="mt-4 text-slate-700">{description.clone()}</p> }
                })}
                <p class="mt-4 text-lg font-medium text-slate-900">{price}</p>
            </div>
        </div>
    }
}
