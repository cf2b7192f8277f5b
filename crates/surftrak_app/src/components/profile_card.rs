//! Profile summary: photo, identity and headline stats

use surftrak_core::LifetimeStats;

use crate::auth::AuthUser;
use crate::components::header::avatar;
use crate::element::{div, text, Element};
use crate::theme;

pub const FALLBACK_NAME: &str = "John Doe";
pub const FALLBACK_EMAIL: &str = "johndoe@surftrak.com";

/// Name, email and photo to show, with fallbacks for missing fields
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub display_name: String,
    pub email: String,
    pub photo_url: Option<String>,
}

impl Identity {
    pub fn resolve(user: Option<&AuthUser>) -> Self {
        let non_empty = |s: Option<&String>| s.filter(|s| !s.is_empty()).cloned();
        Self {
            display_name: non_empty(user.and_then(|u| u.display_name.as_ref()))
                .unwrap_or_else(|| FALLBACK_NAME.to_string()),
            email: non_empty(user.and_then(|u| u.email.as_ref()))
                .unwrap_or_else(|| FALLBACK_EMAIL.to_string()),
            photo_url: non_empty(user.and_then(|u| u.photo_url.as_ref())),
        }
    }
}

fn summary(value: String, label: &'static str) -> Element {
    div()
        .flex_col()
        .items_center()
        .child(text(value).size(24.0).bold().color(theme::ocean_blue()))
        .child(text(label).size(14.0).color(theme::text_muted()))
}

pub fn profile_card(identity: &Identity, stats: &LifetimeStats) -> Element {
    div()
        .key("profile-card")
        .w_full()
        .flex_col()
        .items_center()
        .px(6.0)
        .pt_px(24.0)
        .pb_px(8.0)
        .child(div().mb(4.0).child(avatar(identity.photo_url.as_deref(), 128.0)))
        .child(
            text(identity.display_name.as_str())
                .size(24.0)
                .bold()
                .color(theme::text_primary()),
        )
        .child(
            text(identity.email.as_str())
                .size(16.0)
                .color(theme::text_muted())
                .mt(1.0)
                .mb(4.0),
        )
        .child(
            div()
                .key("profile-stats")
                .w_full()
                .flex_row()
                .justify_between()
                .mt(2.0)
                .mb(6.0)
                .child(summary(stats.session_count.to_string(), "Sessions"))
                .child(summary(stats.wave_count.to_string(), "Waves"))
                .child(summary(format!("{:.0}mph", stats.best_speed), "Top Speed")),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> LifetimeStats {
        LifetimeStats {
            session_count: 4,
            wave_count: 44,
            best_speed: 22.0,
            ..LifetimeStats::default()
        }
    }

    #[test]
    fn test_fallback_identity() {
        let identity = Identity::resolve(None);
        assert_eq!(identity.display_name, FALLBACK_NAME);
        assert_eq!(identity.email, FALLBACK_EMAIL);
        assert_eq!(identity.photo_url, None);

        let partial = AuthUser {
            display_name: Some(String::new()),
            email: Some("kai@example.com".into()),
            photo_url: None,
        };
        let identity = Identity::resolve(Some(&partial));
        assert_eq!(identity.display_name, FALLBACK_NAME);
        assert_eq!(identity.email, "kai@example.com");
    }

    #[test]
    fn test_card_texts() {
        let card = profile_card(&Identity::resolve(None), &stats());
        assert_eq!(
            card.texts(),
            vec![
                FALLBACK_NAME,
                FALLBACK_EMAIL,
                "4",
                "Sessions",
                "44",
                "Waves",
                "22mph",
                "Top Speed",
            ]
        );
    }
}
