use leptos::*;
use leptos_meta::Title;

pub mod utils;

mod panel;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Sign in - Voyago"/>
        <div class="min-h-screen bg-slate-50 flex items-center justify-center px-4">
            <LoginPanel/>
        </div>
    }
}
