//! Client-Side Router
//!
//! Holds the current route, pushes history entries for in-page links and
//! re-resolves on back/forward.

use leptos::prelude::*;

use crate::commands;
use crate::route::Route;
use crate::view_model::ViewRequest;

#[derive(Clone, Copy)]
pub struct Router {
    route: RwSignal<Route>,
    /// Shared with the search boxes; the view region follows it
    request: RwSignal<ViewRequest>,
    hash_routing: bool,
}

impl Router {
    pub fn new(initial: Route, request: RwSignal<ViewRequest>, hash_routing: bool) -> Self {
        Self {
            route: RwSignal::new(initial),
            request,
            hash_routing,
        }
    }

    pub fn route(&self) -> ReadSignal<Route> {
        self.route.read_only()
    }

    pub fn href(&self, route: &Route) -> String {
        route.href(self.hash_routing)
    }

    pub fn is_active(&self, route: &Route) -> bool {
        self.route.with(|current| current == route)
    }

    /// Follow an in-page link
    pub fn navigate(&self, route: Route) {
        if let Err(err) = commands::push_history(&self.href(&route)) {
            log::warn!("[ROUTER] pushState failed: {}", err);
        }
        self.show(route);
    }

    /// Re-resolve on back/forward
    pub fn listen(&self) {
        let router = *self;
        if let Err(err) = commands::bind_history_listener(self.hash_routing, move |route| router.show(route)) {
            log::error!("[ROUTER] Cannot listen for history changes: {}", err);
        }
    }

    fn show(&self, route: Route) {
        log::debug!("[ROUTER] Navigating to {:?}", route);
        self.route.set(route.clone());
        self.request.set(ViewRequest::Route(route));
    }
}

/// Get the router from context
pub fn use_router() -> Router {
    expect_context::<Router>()
}
