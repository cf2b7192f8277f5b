//! SurfTrak App
//!
//! The SurfTrak front end without a platform attached: screens, components
//! and tab navigation rendered to an element tree, laid out headlessly with
//! taffy and animated by the `surftrak_animation` scheduler.
//!
//! # Modules
//!
//! - **element** / **layout**: element tree builders and flexbox layout
//! - **components**: goal card, stat cards, session cards, menu rows, tab bar
//! - **screens**: Home, Sessions, Profile and the Forecast placeholder
//! - **navigator**: tab registration and the mounted screen
//! - **app**: the shell that owns the scheduler and dispatches presses

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod element;
pub mod error;
pub mod layout;
pub mod live_style;
pub mod navigator;
pub mod screens;
pub mod theme;
pub mod timer;

pub use app::SurftrakApp;
pub use auth::{AuthError, AuthProvider, AuthUser, MockAuth};
pub use config::{AppConfig, CONFIG_FILE};
pub use element::{Action, Brush, Element};
pub use error::{AppError, Result};
pub use layout::{compute_layout, LayoutNode};
pub use navigator::{Navigator, Tab, TabSpec, TABS};
pub use screens::{Screen, ScreenContext};

/// Common imports for hosts and tests
pub mod prelude {
    pub use crate::app::SurftrakApp;
    pub use crate::auth::{AuthProvider, AuthUser, MockAuth};
    pub use crate::config::AppConfig;
    pub use crate::element::{div, icon, image, text, Action, Brush, Element};
    pub use crate::error::{AppError, Result};
    pub use crate::layout::LayoutNode;
    pub use crate::navigator::{Tab, TABS};
    pub use surftrak_core::{Color, DataProvider, StaticDataProvider};
}
