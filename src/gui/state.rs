//! State for route-based layout modes and discovery beacons.

use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};

use crate::config::RouteConfig;
use crate::mvi::StoreState;

/// How a stream is rendered on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Grid,
    List,
}

/// Compiled route pattern. Compares and serializes by its source text.
#[derive(Debug, Clone)]
pub struct RoutePattern(Regex);

impl RoutePattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Unanchored match, so `/discover` also matches `/discover/trending`.
    pub fn matches(&self, pathname: &str) -> bool {
        self.0.is_match(pathname)
    }
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for RoutePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutRoute {
    pub label: String,
    pub mode: LayoutMode,
    pub pattern: RoutePattern,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiState {
    /// Routes in match priority order.
    pub routes: Vec<LayoutRoute>,
    /// Current location, as last reported by the router.
    pub pathname: Option<String>,
    pub last_discover_beacon_version: Option<String>,
    pub last_following_beacon_version: Option<String>,
    pub last_starred_beacon_version: Option<String>,
}

impl StoreState for GuiState {}

impl Default for GuiState {
    fn default() -> Self {
        Self::with_routes(&crate::config::LayoutConfig::default().routes)
    }
}

impl GuiState {
    /// Build the initial state from configured routes.
    ///
    /// Routes with an invalid pattern are skipped; `Config::validate`
    /// rejects them before they get here.
    pub fn with_routes(routes: &[RouteConfig]) -> Self {
        let routes = routes
            .iter()
            .filter_map(|route| match RoutePattern::new(&route.pattern) {
                Ok(pattern) => Some(LayoutRoute {
                    label: route.label.clone(),
                    mode: route.mode,
                    pattern,
                }),
                Err(e) => {
                    tracing::warn!(label = %route.label, "skipping layout route: {}", e);
                    None
                }
            })
            .collect();
        Self {
            routes,
            pathname: None,
            last_discover_beacon_version: None,
            last_following_beacon_version: None,
            last_starred_beacon_version: None,
        }
    }

    /// Index of the first route matching the current location.
    pub fn active_route(&self) -> Option<usize> {
        let pathname = self.pathname.as_deref()?;
        self.routes
            .iter()
            .position(|route| route.pattern.matches(pathname))
    }

    /// Layout mode for the current location, if any route matches.
    pub fn layout_mode(&self) -> Option<LayoutMode> {
        self.active_route().map(|index| self.routes[index].mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(pathname: &str) -> GuiState {
        GuiState {
            pathname: Some(pathname.to_string()),
            ..GuiState::default()
        }
    }

    #[test]
    fn default_routes_follow_priority_order() {
        assert_eq!(at("/discover/trending").layout_mode(), Some(LayoutMode::Grid));
        assert_eq!(at("/starred").layout_mode(), Some(LayoutMode::List));
        assert_eq!(at("/someone/post/abc").layout_mode(), Some(LayoutMode::List));
        assert_eq!(at("/someone/loves").layout_mode(), Some(LayoutMode::Grid));
        assert_eq!(at("/someone").layout_mode(), Some(LayoutMode::List));
    }

    #[test]
    fn no_location_means_no_mode() {
        assert_eq!(GuiState::default().layout_mode(), None);
    }

    #[test]
    fn invalid_patterns_are_skipped() {
        let state = GuiState::with_routes(&[RouteConfig {
            label: "broken".into(),
            mode: LayoutMode::Grid,
            pattern: "(".into(),
        }]);
        assert!(state.routes.is_empty());
    }
}
