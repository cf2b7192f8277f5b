//! Session history

use surftrak_core::Session;

use crate::components::{icon_button, screen_header, session_card, AddButton};
use crate::element::{Action, Element};
use crate::navigator::Tab;
use crate::screens::{content, screen_frame, Screen, ScreenContext};

pub struct SessionsScreen {
    add: AddButton,
    sessions: Vec<Session>,
}

impl SessionsScreen {
    pub fn new(ctx: &ScreenContext) -> Self {
        let sessions = ctx.data.sessions();
        tracing::debug!(count = sessions.len(), "sessions loaded");
        Self {
            add: AddButton::new(&ctx.scheduler),
            sessions,
        }
    }

    pub fn add_button(&self) -> &AddButton {
        &self.add
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }
}

impl Screen for SessionsScreen {
    fn tab(&self) -> Tab {
        Tab::Sessions
    }

    fn render(&self) -> Element {
        screen_frame()
            .key("screen:sessions")
            .child(screen_header(
                self.add.render(),
                "Sessions",
                icon_button("filter-outline", Action::FilterSessions),
            ))
            .child(
                content()
                    .pt_px(8.0)
                    .children(self.sessions.iter().map(session_card)),
            )
    }
}
