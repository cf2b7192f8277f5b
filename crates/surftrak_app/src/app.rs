//! Application shell
//!
//! [`SurftrakApp`] owns the animation scheduler, the tab navigator and the
//! injected collaborators. A host drives it one frame at a time:
//!
//! ```rust
//! use surftrak_app::prelude::*;
//!
//! let mut app = SurftrakApp::with_sample_data(AppConfig::default()).unwrap();
//! app.frame(16.0);
//! app.dispatch(&Action::SelectTab(Tab::Sessions));
//! assert_eq!(app.active_tab(), Tab::Sessions);
//! assert!(app.render().contains_text("Huntington Beach"));
//! ```

use std::sync::Arc;

use surftrak_animation::{AnimationScheduler, TickReport};
use surftrak_core::{DataProvider, StaticDataProvider};

use crate::auth::{AuthProvider, AuthUser, MockAuth};
use crate::components::tab_bar;
use crate::config::AppConfig;
use crate::element::{div, Action, Element};
use crate::error::Result;
use crate::layout::{compute_layout, LayoutNode};
use crate::navigator::{Navigator, Tab};
use crate::screens::ScreenContext;

pub struct SurftrakApp {
    navigator: Navigator,
    ctx: ScreenContext,
    scheduler: AnimationScheduler,
}

impl SurftrakApp {
    pub fn new(
        config: AppConfig,
        data: Arc<dyn DataProvider>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        let scheduler = AnimationScheduler::new();
        scheduler.set_target_fps(config.animation.target_fps);

        let ctx = ScreenContext {
            scheduler: scheduler.handle(),
            data,
            auth,
            config,
        };
        let navigator = Navigator::new(Tab::default(), &ctx);
        tracing::debug!(fps = scheduler.target_fps(), "app started");

        Self {
            navigator,
            ctx,
            scheduler,
        }
    }

    /// App over the bundled sample records, signed in as the sample user
    pub fn with_sample_data(config: AppConfig) -> Result<Self> {
        let data = StaticDataProvider::sample()?;
        let user = data.user().as_ref().map(AuthUser::from);
        Ok(Self::new(
            config,
            Arc::new(data),
            Arc::new(MockAuth::new(user)),
        ))
    }

    pub fn config(&self) -> &AppConfig {
        &self.ctx.config
    }

    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    pub fn auth(&self) -> &Arc<dyn AuthProvider> {
        &self.ctx.auth
    }

    pub fn active_tab(&self) -> Tab {
        self.navigator.active()
    }

    /// Advance animations, then screen timers, by `dt_ms`
    pub fn frame(&mut self, dt_ms: f32) -> TickReport {
        let report = self.scheduler.advance(dt_ms);
        self.navigator.tick(dt_ms);
        report
    }

    /// Advance by one frame at the configured rate
    pub fn step(&mut self) -> TickReport {
        self.frame(self.scheduler.frame_interval_ms())
    }

    pub fn select_tab(&mut self, tab: Tab) -> bool {
        self.navigator.select(tab, &self.ctx)
    }

    /// Active screen above the tab bar
    pub fn render(&self) -> Element {
        let layout = &self.ctx.config.layout;
        div()
            .key("app")
            .size(layout.screen_width, layout.screen_height)
            .flex_col()
            .child(self.navigator.render())
            .child(tab_bar(self.navigator.active()))
    }

    pub fn layout(&self) -> Result<LayoutNode> {
        let layout = &self.ctx.config.layout;
        compute_layout(&self.render(), layout.screen_width, layout.screen_height)
    }

    /// Handle a press
    pub fn dispatch(&mut self, action: &Action) {
        match action {
            Action::SelectTab(tab) => {
                self.select_tab(*tab);
            }
            Action::OpenSession(id) => {
                tracing::info!(session = %id, "session pressed");
            }
            Action::SignOut => match self.ctx.auth.sign_out() {
                Ok(()) => tracing::info!("signed out"),
                Err(err) => tracing::error!(error = %err, "error signing out"),
            },
            other => tracing::info!(action = ?other, "pressed"),
        }
    }

    /// Lay out the current frame and press whatever sits under `(x, y)`
    pub fn press_at(&mut self, x: f32, y: f32) -> Result<Option<Action>> {
        let action = self.layout()?.hit_test(x, y).cloned();
        if let Some(action) = &action {
            self.dispatch(action);
        }
        Ok(action)
    }
}
