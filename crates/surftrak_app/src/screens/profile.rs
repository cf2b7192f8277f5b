//! User profile and account menu

use std::sync::Arc;

use surftrak_core::LifetimeStats;

use crate::auth::AuthProvider;
use crate::components::{
    header_spacer, icon_button, menu_card, profile_card, screen_header, Identity, MenuItem,
};
use crate::element::{div, Action, Element};
use crate::navigator::Tab;
use crate::screens::{content, screen_frame, Screen, ScreenContext};

pub struct ProfileScreen {
    auth: Arc<dyn AuthProvider>,
    stats: LifetimeStats,
}

impl ProfileScreen {
    pub fn new(ctx: &ScreenContext) -> Self {
        Self {
            auth: Arc::clone(&ctx.auth),
            stats: ctx.data.lifetime_stats(),
        }
    }

    /// Who the card shows right now
    pub fn identity(&self) -> Identity {
        Identity::resolve(self.auth.user().as_ref())
    }
}

impl Screen for ProfileScreen {
    fn tab(&self) -> Tab {
        Tab::Profile
    }

    fn render(&self) -> Element {
        screen_frame()
            .key("screen:profile")
            .child(screen_header(
                header_spacer(),
                "Profile",
                icon_button("settings-outline", Action::OpenSettings),
            ))
            .child(
                content()
                    .child(profile_card(&self.identity(), &self.stats))
                    .child(
                        div()
                            .w_full()
                            .flex_col()
                            .mt(2.0)
                            .children(MenuItem::ALL.into_iter().map(menu_card)),
                    ),
            )
    }
}
