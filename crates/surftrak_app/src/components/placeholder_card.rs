//! Icon, title and blurb card for content that isn't built yet

use crate::element::{div, icon, text, Element};
use crate::theme;

pub struct PlaceholderCard {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

impl PlaceholderCard {
    pub const fn new(icon: &'static str, title: &'static str, description: &'static str) -> Self {
        Self {
            icon,
            title,
            description,
        }
    }

    pub fn news() -> Self {
        Self::new(
            "newspaper",
            "News",
            "View the newest SurfTrak news and updates",
        )
    }

    pub fn user_guide() -> Self {
        Self::new(
            "book-open-variant",
            "User Guide",
            "Learn how to use SurfTrak with our comprehensive guide",
        )
    }

    pub fn title(&self) -> &'static str {
        self.title
    }
}

impl From<PlaceholderCard> for Element {
    fn from(card: PlaceholderCard) -> Self {
        div()
            .key(format!("placeholder:{}", card.title))
            .mx(4.0)
            .mb(5.0)
            .p(5.0)
            .flex_row()
            .items_start()
            .gap(4.0)
            .bg(theme::surface())
            .rounded(16.0)
            .child(
                div()
                    .square(48.0)
                    .rounded(12.0)
                    .bg(theme::accent_well())
                    .center()
                    .child(icon(card.icon, 28.0, theme::ocean_blue())),
            )
            .child(
                div()
                    .flex_col()
                    .flex_1()
                    .gap(1.0)
                    .child(text(card.title).size(16.0).semibold().color(theme::text_primary()))
                    .child(text(card.description).size(13.0).color(theme::text_muted())),
            )
    }
}
