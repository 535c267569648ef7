//! Sidebar tabs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Dashboard,
    Guests,
    Rooms,
    Billing,
    Bookings,
    Settings,
}

impl Tab {
    /// Sidebar order.
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Guests,
        Tab::Rooms,
        Tab::Billing,
        Tab::Bookings,
        Tab::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Guests => "guests",
            Tab::Rooms => "rooms",
            Tab::Billing => "billing",
            Tab::Bookings => "bookings",
            Tab::Settings => "settings",
        }
    }

    pub fn from_string(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Guests => "Guests",
            Tab::Rooms => "Rooms",
            Tab::Billing => "Billing",
            Tab::Bookings => "Bookings",
            Tab::Settings => "Settings",
        }
    }
}

/// Holds the active tab. Starts on billing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelector {
    active: Tab,
}

impl Default for TabSelector {
    fn default() -> Self {
        Self {
            active: Tab::Billing,
        }
    }
}

impl TabSelector {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }
}
