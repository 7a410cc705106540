use leptos::prelude::*;
use leptos::tachys::view::iterators::StaticVec;
use leptos_router::{NestedRoute, StaticSegment};

use crate::routes::RouteTable;

/// Builds the view bound to a route.
pub type ViewFn = fn() -> AnyView;

pub type AppRoute = NestedRoute<StaticSegment<&'static str>, (), (), ViewFn>;

/// Route definitions handed to `<Routes>`, in table order.
pub fn nested_routes(table: &RouteTable<ViewFn>) -> StaticVec<AppRoute> {
    table
        .entries()
        .iter()
        .map(|entry| {
            let segment = StaticSegment(entry.path.trim_start_matches('/'));
            NestedRoute::new(segment, entry.view)
        })
        .collect::<Vec<_>>()
        .into()
}
