//! Placeholder page that echoes the current route.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Content area below the navigation bar.
#[component]
pub fn ContentPage() -> impl IntoView {
    let location = use_location();
    let path = move || location.pathname.get();

    view! {
        <section class="content-page">
            <h1 class="content-page__title">{move || heading_for(&path())}</h1>
            <p class="content-page__path">{path}</p>
        </section>
    }
}

/// Human heading for a route path: the last segment in title case.
pub fn heading_for(path: &str) -> String {
    let Some(segment) = path.split(['?', '#']).next().and_then(|p| p.rsplit('/').find(|s| !s.is_empty())) else {
        return "Home".to_owned();
    };
    segment
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
        })
        .collect::<Vec<_>>()
        .join(" ")
}
