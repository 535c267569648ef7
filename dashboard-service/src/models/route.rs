//! Top-level navigation.

use serde::{Deserialize, Serialize};

/// The two pages the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Dashboard,
    NotFound,
}

impl Route {
    pub const ROOT: &'static str = "/";

    /// Only the root path shows the dashboard; everything else is a 404.
    /// Query strings and fragments are ignored.
    pub fn resolve(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        match path {
            "" | Self::ROOT => Route::Dashboard,
            _ => Route::NotFound,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::NotFound => "not_found",
        }
    }
}

/// Static content of the 404 page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotFoundPage {
    pub code: u16,
    pub title: &'static str,
    pub message: &'static str,
    pub back_link: &'static str,
    pub back_label: &'static str,
}

impl Default for NotFoundPage {
    fn default() -> Self {
        Self {
            code: 404,
            title: "Page Not Found",
            message: "The page you're looking for doesn't exist or has been moved. \
                      Please check the URL or navigate back to the dashboard.",
            back_link: Route::ROOT,
            back_label: "Back to Dashboard",
        }
    }
}
