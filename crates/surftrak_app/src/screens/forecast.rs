//! Forecast tab
//!
//! Registered in the tab bar without a body yet.

use crate::components::{header_spacer, screen_header};
use crate::element::{div, text, Element};
use crate::navigator::Tab;
use crate::screens::{screen_frame, Screen};
use crate::theme;

pub struct ForecastScreen;

impl Screen for ForecastScreen {
    fn tab(&self) -> Tab {
        Tab::Forecast
    }

    fn render(&self) -> Element {
        screen_frame()
            .key("screen:forecast")
            .child(screen_header(header_spacer(), "Forecast", header_spacer()))
            .child(
                div()
                    .w_full()
                    .flex_1()
                    .center()
                    .child(text("Coming soon").size(16.0).color(theme::text_muted())),
            )
    }
}
