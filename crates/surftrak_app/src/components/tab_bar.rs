//! Bottom tab bar

use crate::element::{div, icon, text, Action, Element};
use crate::navigator::{Tab, TABS};
use crate::theme;

pub const HEIGHT: f32 = 80.0;
/// Platform tab icon size plus the bar's 4px bump
const ICON_SIZE: f32 = 28.0;
const LABEL_SIZE: f32 = 12.0;

pub fn tab_bar(active: Tab) -> Element {
    div()
        .key("tab-bar")
        .w_full()
        .h(HEIGHT)
        .flex_row()
        .flex_shrink_0()
        .pt_px(12.0)
        .pb_px(16.0)
        .bg(theme::frost(0.95))
        .children(TABS.iter().map(|spec| {
            let color = if spec.tab == active {
                theme::tab_active()
            } else {
                theme::tab_inactive()
            };
            div()
                .key(format!("tab:{}", spec.name))
                .flex_1()
                .flex_col()
                .items_center()
                .on_press(Action::SelectTab(spec.tab))
                .child(icon(spec.icon, ICON_SIZE, color))
                .child(text(spec.title).size(LABEL_SIZE).medium().color(color).mt(0.5))
        }))
}
