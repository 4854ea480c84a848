/// Path every fresh session lands on unless settings override it.
pub(crate) const DEFAULT_LANDING_ROUTE: &str = "/dashboard";

/// Page resolved from the active route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Page {
    Dashboard,
    Unrouted(String),
}

/// Holds the active route and resolves it to a page.
#[derive(Debug, Clone)]
pub(crate) struct Router {
    active_route: String,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(DEFAULT_LANDING_ROUTE)
    }
}

impl Router {
    pub(crate) fn new(landing_route: &str) -> Self {
        Self {
            active_route: landing_route.to_string(),
        }
    }

    pub(crate) fn active_route(&self) -> &str {
        &self.active_route
    }

    /// Replace the active route. Returns `false` when `path` is already
    /// active.
    pub(crate) fn navigate_to(&mut self, path: &str) -> bool {
        if self.active_route == path {
            return false;
        }

        self.active_route = path.to_string();
        true
    }

    pub(crate) fn page(&self) -> Page {
        match self.active_route.as_str() {
            "/" | "/dashboard" => Page::Dashboard,
            other => Page::Unrouted(other.to_string()),
        }
    }
}

/// Return whether `path` highlights for `active_route`.
///
/// Matches the exact path or any descendant at a `/` boundary, so
/// `/products` is active for `/products/inventory` while `/product` is not.
pub(crate) fn is_active(active_route: &str, path: &str) -> bool {
    if path.is_empty() {
        return false;
    }

    match active_route.strip_prefix(path) {
        Some("") => true,
        Some(rest) => rest.starts_with('/') || path.ends_with('/'),
        None => false,
    }
}
