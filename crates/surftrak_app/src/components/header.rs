//! Top bars and screen headers

use crate::element::{div, icon, image, text, Action, Element};
use crate::theme;

/// Bundled placeholder for users without a photo
pub const PROFILE_PLACEHOLDER: &str = "placeholder-profilephoto.png";

/// Bundled wordmark shown in the home top bar
pub const LOGO: &str = "surftrak-logo.jpeg";

/// Round tappable icon on a light blue well
pub fn icon_button(name: &'static str, action: Action) -> Element {
    div()
        .square(48.0)
        .rounded_full()
        .bg(theme::accent_well())
        .center()
        .on_press(action)
        .child(icon(name, 24.0, theme::ocean_blue()))
}

/// A user photo, or the bundled placeholder
pub fn avatar(photo_url: Option<&str>, size: f32) -> Element {
    image(photo_url.unwrap_or(PROFILE_PLACEHOLDER))
        .key("avatar")
        .square(size)
        .rounded_full()
}

fn bar() -> Element {
    div()
        .w_full()
        .flex_row()
        .items_center()
        .justify_between()
        .px(5.0)
        .py(4.0)
        .bg(theme::frost(0.8))
}

/// Home top bar: avatar, logo and settings
pub fn top_bar(photo_url: Option<&str>) -> Element {
    bar()
        .key("top-bar")
        .child(avatar(photo_url, 56.0))
        .child(image(LOGO).size(160.0, 48.0))
        .child(icon_button("settings-outline", Action::OpenSettings).key("settings"))
}

/// Screen title centered between a leading and a trailing element
pub fn screen_header(leading: Element, title: &str, trailing: Element) -> Element {
    bar()
        .key("screen-header")
        .child(leading)
        .child(text(title).size(30.0).bold().color(theme::text_primary()))
        .child(trailing)
}

/// Empty slot that balances a header's trailing button
pub fn header_spacer() -> Element {
    div().w(48.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(el: &Element) -> Vec<String> {
        let mut sources = Vec::new();
        el.walk(&mut |e| {
            if e.kind.name() == "image" {
                sources.extend(e.kind.label().map(str::to_string));
            }
        });
        sources
    }

    #[test]
    fn test_top_bar_contents() {
        let bar = top_bar(None);
        assert_eq!(images(&bar), vec![PROFILE_PLACEHOLDER, LOGO]);
        assert_eq!(bar.actions(), vec![Action::OpenSettings]);
    }

    #[test]
    fn test_top_bar_photo() {
        let bar = top_bar(Some("https://example.com/me.png"));
        assert_eq!(images(&bar)[0], "https://example.com/me.png");
    }

    #[test]
    fn test_screen_header() {
        let header = screen_header(
            header_spacer(),
            "Profile",
            icon_button("settings-outline", Action::OpenSettings),
        );
        assert_eq!(header.texts(), vec!["Profile"]);
        assert_eq!(header.children.len(), 3);
        assert_eq!(header.actions(), vec![Action::OpenSettings]);
    }
}
