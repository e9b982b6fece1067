use serde::{Deserialize, Serialize};

use crate::gui::LayoutMode;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub invalidation: InvalidationConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Settings for the normalization reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// How many `repostedSource` levels are normalized below a post (default: 8).
    #[serde(default = "default_max_repost_depth")]
    pub max_repost_depth: usize,
}

/// Pages dropped when the cached data behind them goes stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvalidationConfig {
    /// Page keys cleared when the user follows or unfollows categories.
    #[serde(default = "default_subscribed_pages")]
    pub subscribed_pages: Vec<String>,
}

/// Route-based layout modes. Order matters: the first matching route wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_routes")]
    pub routes: Vec<RouteConfig>,
}

/// One layout route (e.g. `label = "discover"`, `mode = "grid"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub label: String,
    pub mode: LayoutMode,
    /// Regular expression matched against the current pathname.
    pub pattern: String,
}

impl RouteConfig {
    fn new(label: &str, mode: LayoutMode, pattern: &str) -> Self {
        Self {
            label: label.to_string(),
            mode,
            pattern: pattern.to_string(),
        }
    }
}

fn default_max_repost_depth() -> usize {
    8
}

fn default_subscribed_pages() -> Vec<String> {
    vec![
        "/discover/subscribed".to_string(),
        "/discover/subscribed/trending".to_string(),
        "/discover/subscribed/recent".to_string(),
    ]
}

fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("discover", LayoutMode::Grid, r"/discover|/explore"),
        RouteConfig::new("following", LayoutMode::Grid, r"/following"),
        RouteConfig::new("invitations", LayoutMode::Grid, r"/invitations"),
        RouteConfig::new("search", LayoutMode::Grid, r"/search|/find"),
        RouteConfig::new("starred", LayoutMode::List, r"/starred"),
        RouteConfig::new("posts", LayoutMode::List, r"/[\w\-]+/post/.+"),
        RouteConfig::new("users/following", LayoutMode::Grid, r"/[\w\-]+/following"),
        RouteConfig::new("users/followers", LayoutMode::Grid, r"/[\w\-]+/followers"),
        RouteConfig::new("users/loves", LayoutMode::Grid, r"/[\w\-]+/loves"),
        RouteConfig::new("users", LayoutMode::List, r"/[\w\-]+"),
    ]
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            max_repost_depth: default_max_repost_depth(),
        }
    }
}

impl Default for InvalidationConfig {
    fn default() -> Self {
        Self {
            subscribed_pages: default_subscribed_pages(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            routes: default_routes(),
        }
    }
}
