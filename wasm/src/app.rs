use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::components::{A, RouteChildren, Router, Routes};
use leptos_router::hooks::use_location;

use crate::router::{ViewFn, nested_routes};
use crate::routes::RouteTable;

/// Root of the component tree. Browser-native history, no catch-all route.
#[component]
pub fn App(routes: RouteTable<ViewFn>) -> impl IntoView {
    let routes = nested_routes(&routes);

    view! {
        <Router>
            <header class="navbar">
                <span class="navbar-brand">"Plex Playlist Importer"</span>
                <nav class="navbar-menu">
                    <A href="/">"Playlists"</A>
                    <A href="/settings">"Settings"</A>
                </nav>
            </header>
            <main class="container">
                <Routes
                    fallback=|| view! { <NoMatch /> }
                    children=RouteChildren::to_children(move || routes)
                />
            </main>
        </Router>
    }
}

/// Renders nothing for an unregistered location.
#[component]
fn NoMatch() -> impl IntoView {
    let location = use_location();
    warn!("No route matches {}", location.pathname.get_untracked());
}
