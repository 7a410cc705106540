use leptos::logging::log;
use leptos::mount::mount_to;
use leptos::prelude::*;
use snafu::OptionExt;
use web_sys::{Document, window};

use crate::Result;
use crate::app::App;
use crate::config::BootConfig;
use crate::error::WhateverSnafu;
use crate::mount::{APP_MOUNT, MountGuard, locate_target};
use crate::router::ViewFn;
use crate::routes::{RouteEntry, RouteTable};
use crate::views::{home_view, settings_view};

/// Client-side routes of the application.
///
/// There is no catch-all entry: an unknown path renders an empty view.
pub fn app_routes() -> Result<RouteTable<ViewFn>> {
    RouteTable::new(vec![
        RouteEntry::new("/", "Home", home_view as ViewFn),
        RouteEntry::new("/settings", "Settings", settings_view as ViewFn),
    ])
}

/// Entry point: reads the page configuration and mounts the application.
pub fn start() -> Result<()> {
    let window = window().context(WhateverSnafu {
        msg: "Unable to read global window var",
    })?;
    let config = BootConfig::from_window(&window);

    run(&config)
}

pub fn run(config: &BootConfig) -> Result<()> {
    let routes = app_routes()?;

    let document = window()
        .and_then(|w| w.document())
        .context(WhateverSnafu {
            msg: "Unable to read global document var",
        })?;

    mount_app(&document, &config.mount_id, &APP_MOUNT, routes)
}

/// Mounts a fresh application tree routing over `routes` into `#id`.
///
/// Claiming the guard is the last step that can fail, so an error never
/// leaves the guard claimed without a mounted tree.
pub fn mount_app(
    document: &Document,
    id: &str,
    guard: &MountGuard,
    routes: RouteTable<ViewFn>,
) -> Result<()> {
    let target = locate_target(document, id)?;
    guard.claim()?;

    log!("Mounting application into #{} ({} routes)", id, routes.len());

    // Lives until the page unloads
    mount_to(target, move || view! { <App routes=routes /> }).forget();

    Ok(())
}
