//! Server-side rendering of components for markup assertions in tests.

use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::location::RequestUrl;

/// Render `view_fn` inside a `Router` at `/` and return the HTML.
pub(crate) fn render_html<F, V>(view_fn: F) -> String
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoView + 'static,
{
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new("/"));
        view! { <Router>{view_fn()}</Router> }.to_html()
    })
}

/// Opening tag of the first element whose markup contains `marker`.
pub(crate) fn opening_tag<'a>(html: &'a str, marker: &str) -> &'a str {
    let at = html.find(marker).unwrap_or_else(|| panic!("{marker:?} not rendered in {html}"));
    let start = html[..at].rfind('<').unwrap_or(0);
    let end = at + html[at..].find('>').map_or(html.len() - at, |i| i + 1);
    &html[start..end]
}

/// Markup between the opening tag containing `marker` and the next `close`.
pub(crate) fn inner_after<'a>(html: &'a str, marker: &str, close: &str) -> &'a str {
    let tag = opening_tag(html, marker);
    let body_start = html.find(tag).map_or(0, |i| i + tag.len());
    let rest = &html[body_start..];
    &rest[..rest.find(close).unwrap_or(rest.len())]
}
