//! Screens
//!
//! A screen composes components over injected data. It owns its animated
//! components, so dropping a screen stops every animation it started.

use std::sync::Arc;

use surftrak_animation::SchedulerHandle;
use surftrak_core::DataProvider;

use crate::auth::AuthProvider;
use crate::config::AppConfig;
use crate::element::{div, Element};
use crate::navigator::Tab;
use crate::theme;

pub mod forecast;
pub mod home;
pub mod profile;
pub mod sessions;

pub use forecast::ForecastScreen;
pub use home::HomeScreen;
pub use profile::ProfileScreen;
pub use sessions::SessionsScreen;

pub trait Screen {
    fn tab(&self) -> Tab;

    /// Advance UI-local timers; animations run on the scheduler
    fn tick(&mut self, _dt_ms: f32) {}

    fn render(&self) -> Element;
}

/// Collaborators a screen may read at mount or render time
#[derive(Clone)]
pub struct ScreenContext {
    pub scheduler: SchedulerHandle,
    pub data: Arc<dyn DataProvider>,
    pub auth: Arc<dyn AuthProvider>,
    pub config: AppConfig,
}

/// Build the screen registered for `tab`
pub fn mount(tab: Tab, ctx: &ScreenContext) -> Box<dyn Screen> {
    tracing::debug!(screen = %tab, "mounting screen");
    match tab {
        Tab::Home => Box::new(HomeScreen::new(ctx)),
        Tab::Sessions => Box::new(SessionsScreen::new(ctx)),
        Tab::Forecast => Box::new(ForecastScreen),
        Tab::Profile => Box::new(ProfileScreen::new(ctx)),
    }
}

/// Full-height column on the app background
pub(crate) fn screen_frame() -> Element {
    div()
        .w_full()
        .flex_1()
        .min_h_0()
        .flex_col()
        .bg(theme::background())
}

/// Content area below a header
pub(crate) fn content() -> Element {
    div().w_full().flex_col().pb_px(20.0)
}
