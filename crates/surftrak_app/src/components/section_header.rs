//! Section title with an optional "See All" link

use crate::element::{div, text, Action, Element};
use crate::theme;

pub struct SectionHeader {
    title: String,
    see_all: bool,
}

impl SectionHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            see_all: false,
        }
    }

    /// Show a "See All" link that dispatches [`Action::SeeAll`]
    pub fn see_all(mut self) -> Self {
        self.see_all = true;
        self
    }
}

impl From<SectionHeader> for Element {
    fn from(header: SectionHeader) -> Self {
        let mut row = div()
            .w_full()
            .flex_row()
            .items_center()
            .justify_between()
            .px(4.0)
            .mt(6.0)
            .mb(3.0)
            .child(
                text(header.title.as_str())
                    .size(20.0)
                    .bold()
                    .color(theme::text_primary()),
            );

        if header.see_all {
            row = row.child(
                div()
                    .key(format!("see-all:{}", header.title))
                    .on_press(Action::SeeAll(header.title))
                    .child(text("See All").size(14.0).semibold().color(theme::ocean_blue())),
            );
        }
        row
    }
}

pub fn section_header(title: impl Into<String>) -> SectionHeader {
    SectionHeader::new(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_header() {
        let el: Element = section_header("Lifetime Stats").into();
        assert_eq!(el.texts(), vec!["Lifetime Stats"]);
        assert!(el.actions().is_empty());
    }

    #[test]
    fn test_see_all_dispatches_title() {
        let el: Element = section_header("Recommended").see_all().into();
        assert_eq!(el.texts(), vec!["Recommended", "See All"]);
        assert_eq!(el.actions(), vec![Action::SeeAll("Recommended".into())]);
    }
}
