use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section id="home-view" class="section">
            <h1 class="title">"Playlists"</h1>
            <p>"Import M3U playlists into your Plex music library."</p>
        </section>
    }
}

#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <section id="settings-view" class="section">
            <h1 class="title">"Settings"</h1>
            <p>"Plex server connection and playlist folder."</p>
        </section>
    }
}

pub fn home_view() -> AnyView {
    view! { <Home /> }.into_any()
}

pub fn settings_view() -> AnyView {
    view! { <Settings /> }.into_any()
}
