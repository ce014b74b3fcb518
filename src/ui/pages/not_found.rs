//! Not found page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found - Northwind Studio" />

        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <h2 class="not-found__title">"Page Not Found"</h2>
            <p class="not-found__text">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <A href="/" attr:class="btn btn--primary">
                "Go Home"
            </A>
        </div>
    }
}
