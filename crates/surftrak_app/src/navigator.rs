//! Tab navigation
//!
//! Four tabs are registered, in bar order. The navigator keeps exactly one
//! mounted screen; switching tabs drops the old screen (which stops its
//! animations and timers) before mounting the new one.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::element::{div, Element};
use crate::error::AppError;
use crate::screens::{mount, Screen, ScreenContext};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Home,
    Sessions,
    Forecast,
    Profile,
}

/// Registration of one tab: route name, bar title and icon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TabSpec {
    pub tab: Tab,
    pub name: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

pub static TABS: [TabSpec; 4] = [
    TabSpec {
        tab: Tab::Home,
        name: "index",
        title: "Home",
        icon: "home-variant",
    },
    TabSpec {
        tab: Tab::Sessions,
        name: "sessions/index",
        title: "Sessions",
        icon: "map-marker-path",
    },
    TabSpec {
        tab: Tab::Forecast,
        name: "forecast/index",
        title: "Forecast",
        icon: "beach",
    },
    TabSpec {
        tab: Tab::Profile,
        name: "profile/index",
        title: "Profile",
        icon: "account",
    },
];

impl Tab {
    pub fn spec(&self) -> &'static TabSpec {
        match self {
            Tab::Home => &TABS[0],
            Tab::Sessions => &TABS[1],
            Tab::Forecast => &TABS[2],
            Tab::Profile => &TABS[3],
        }
    }

    pub fn title(&self) -> &'static str {
        self.spec().title
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Tab {
    type Err = AppError;

    /// Accepts a title ("Sessions") or a route name ("sessions/index"),
    /// case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TABS.iter()
            .find(|spec| {
                spec.title.eq_ignore_ascii_case(wanted) || spec.name.eq_ignore_ascii_case(wanted)
            })
            .map(|spec| spec.tab)
            .ok_or_else(|| AppError::UnknownScreen(s.to_string()))
    }
}

/// Owns the active screen
pub struct Navigator {
    active: Tab,
    /// Empty only while a switch is in progress
    screen: Option<Box<dyn Screen>>,
}

impl Navigator {
    /// Mount the initial tab
    pub fn new(initial: Tab, ctx: &ScreenContext) -> Self {
        Self {
            active: initial,
            screen: Some(mount(initial, ctx)),
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switch tabs; selecting the active tab keeps its screen mounted
    ///
    /// Returns whether a new screen was mounted.
    pub fn select(&mut self, tab: Tab, ctx: &ScreenContext) -> bool {
        if tab == self.active {
            return false;
        }
        tracing::info!(from = %self.active, to = %tab, "tab selected");

        // Unmount before mounting so the outgoing values leave the scheduler
        drop(self.screen.take());
        self.screen = Some(mount(tab, ctx));
        self.active = tab;
        true
    }

    /// Advance the active screen's local timers
    pub fn tick(&mut self, dt_ms: f32) {
        if let Some(screen) = self.screen.as_mut() {
            screen.tick(dt_ms);
        }
    }

    /// Render the active screen's content
    pub fn render(&self) -> Element {
        self.screen
            .as_ref()
            .map_or_else(div, |screen| screen.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab() {
        assert_eq!("home".parse::<Tab>().unwrap(), Tab::Home);
        assert_eq!("Sessions".parse::<Tab>().unwrap(), Tab::Sessions);
        assert_eq!("profile/index".parse::<Tab>().unwrap(), Tab::Profile);
        assert_eq!("index".parse::<Tab>().unwrap(), Tab::Home);
        let err = "settings".parse::<Tab>().unwrap_err();
        assert!(matches!(err, AppError::UnknownScreen(ref s) if s == "settings"));
    }

    #[test]
    fn test_registration_order() {
        let titles: Vec<_> = TABS.iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Home", "Sessions", "Forecast", "Profile"]);
        for spec in &TABS {
            assert_eq!(spec.tab.spec(), spec);
        }
        assert_eq!(Tab::Forecast.to_string(), "Forecast");
    }
}
