//! Profile menu rows

use surftrak_core::Color;

use crate::element::{div, icon, text, Action, Brush, Element};
use crate::theme;

/// Entries of the profile menu, top to bottom
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Settings,
    DeviceManager,
    HelpSupport,
    LogOut,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Settings,
        MenuItem::DeviceManager,
        MenuItem::HelpSupport,
        MenuItem::LogOut,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MenuItem::Settings => "Settings",
            MenuItem::DeviceManager => "Device Manager",
            MenuItem::HelpSupport => "Help & Support",
            MenuItem::LogOut => "Log Out",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MenuItem::Settings => "cog-outline",
            MenuItem::DeviceManager => "devices",
            MenuItem::HelpSupport => "help-circle-outline",
            MenuItem::LogOut => "logout-variant",
        }
    }

    pub fn accent(&self) -> Color {
        match self {
            MenuItem::Settings => Color::from_hex(0x1A73E8),
            MenuItem::DeviceManager => Color::from_hex(0x16A34A),
            MenuItem::HelpSupport => Color::from_hex(0xEA580C),
            MenuItem::LogOut => Color::from_hex(0xDC2626),
        }
    }

    /// Pale well behind the icon, a tint of the accent
    pub fn icon_well(&self) -> Color {
        match self {
            MenuItem::Settings => Color::from_hex(0xE0F2FE),
            MenuItem::DeviceManager => Color::from_hex(0xDCFCE7),
            MenuItem::HelpSupport => Color::from_hex(0xFFEDD5),
            MenuItem::LogOut => Color::from_hex(0xFEE2E2),
        }
    }

    pub fn action(&self) -> Action {
        match self {
            MenuItem::LogOut => Action::SignOut,
            other => Action::OpenMenu(other.title()),
        }
    }
}

pub fn menu_card(item: MenuItem) -> Element {
    let accent = item.accent();
    div()
        .key(format!("menu:{}", item.title()))
        .mx(4.0)
        .my(2.0)
        .p(4.0)
        .flex_row()
        .items_center()
        .justify_between()
        .rounded(16.0)
        .background(Brush::linear([Color::WHITE, Color::from_hex(0xF8FAFC)]))
        .on_press(item.action())
        .child(
            div()
                .flex_row()
                .items_center()
                .child(
                    div()
                        .square(40.0)
                        .rounded_full()
                        .bg(item.icon_well())
                        .center()
                        .child(icon(item.icon(), 22.0, accent)),
                )
                .child(
                    div().ml(4.0).child(
                        text(item.title())
                            .size(18.0)
                            .medium()
                            .color(theme::text_primary()),
                    ),
                ),
        )
        .child(icon("chevron-right", 24.0, theme::tab_inactive()))
}
