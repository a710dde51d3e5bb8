use crate::components::layout::Header;
use crate::state::use_stores;
use leptos::*;
use leptos_meta::Title;

/// Role-gated landing for back-office users. Dashboard analytics live in a
/// separate tool; this page only anchors the admin navigation.
#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_stores();
    let session = ctx.session;
    let admin_name = create_memo(move |_| {
        session
            .get()
            .user
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_default()
    });
    view! {
        <Title text="Admin - Voyago"/>
        <div class="min-h-screen bg-slate-50">
            <Header/>
            <div class="max-w-7xl mx-auto py-8 px-4 sm:px-6 lg:px-8">
                <h1 class="text-2xl font-bold text-slate-900">"Administration"</h1>
                <p class="mt-2 text-slate-600">
                    {move || format!("Signed in as {}", admin_name.get())}
                </p>
            </div>
        </div>
    }
}
