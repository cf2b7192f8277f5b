//! Session history card

use chrono::{DateTime, Duration, Utc};
use surftrak_core::{Color, Session};

use crate::element::{div, icon, text, Action, Element};
use crate::theme;

/// "April 10, 2023"
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// "10:30 AM - 12:45 PM"
pub fn format_time_range(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!("{} - {}", start.format("%-I:%M %p"), end.format("%-I:%M %p"))
}

/// "2h 15m", or "45m" under an hour
pub fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Map preview stand-in: a gray well with a marker
fn map_placeholder() -> Element {
    div()
        .w_full()
        .h(128.0)
        .bg(Color::from_hex(0xE5E7EB))
        .center()
        .child(icon("map-marker", 28.0, theme::ocean_blue()))
}

fn stat(icon_name: &'static str, value: String) -> Element {
    div()
        .flex_row()
        .items_center()
        .gap(1.0)
        .child(icon(icon_name, 16.0, theme::ocean_blue()))
        .child(text(value).size(14.0).color(theme::text_muted()))
}

/// Card for one session; pressing it dispatches [`Action::OpenSession`]
pub fn session_card(session: &Session) -> Element {
    div()
        .key(format!("session:{}", session.session_id))
        .mx(4.0)
        .my(2.0)
        .flex_col()
        .rounded(16.0)
        .bg(theme::surface())
        .on_press(Action::OpenSession(session.session_id.clone()))
        .child(map_placeholder())
        .child(
            div()
                .p(4.0)
                .flex_col()
                .gap(1.0)
                .child(
                    text(session.location_name.as_str())
                        .size(18.0)
                        .semibold()
                        .color(theme::text_primary()),
                )
                .child(text(format_date(session.start_time)).size(14.0).color(theme::text_muted()))
                .child(
                    text(format_time_range(session.start_time, session.end_time))
                        .size(14.0)
                        .color(theme::text_muted()),
                )
                .child(
                    div()
                        .mt(2.0)
                        .flex_row()
                        .justify_between()
                        .child(stat("waves", format!("{} waves", session.wave_count)))
                        .child(stat("clock-outline", format_duration(session.duration())))
                        .child(stat("speedometer", format!("{:.0} mph", session.max_speed))),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use surftrak_core::GeoPoint;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 4, 10, h, m, 0).unwrap()
    }

    fn huntington() -> Session {
        Session {
            session_id: "1".into(),
            user_id: "user-1".into(),
            location: GeoPoint::new(33.6553, -118.0036),
            location_name: "Huntington Beach".into(),
            start_time: at(10, 30),
            end_time: at(12, 45),
            wave_count: 12,
            average_speed: 11.0,
            max_speed: 18.0,
            total_duration: 8100,
            created_at: at(12, 45),
            updated_at: at(12, 45),
        }
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_date(at(10, 30)), "April 10, 2023");
        assert_eq!(format_time_range(at(8, 15), at(11, 0)), "8:15 AM - 11:00 AM");
        assert_eq!(format_time_range(at(10, 30), at(12, 45)), "10:30 AM - 12:45 PM");
        assert_eq!(format_duration(Duration::minutes(135)), "2h 15m");
        assert_eq!(format_duration(Duration::minutes(45)), "45m");
        assert_eq!(format_duration(Duration::minutes(-5)), "0m");
    }

    #[test]
    fn test_card_contents() {
        let card = session_card(&huntington());
        assert_eq!(
            card.texts(),
            vec![
                "Huntington Beach",
                "April 10, 2023",
                "10:30 AM - 12:45 PM",
                "12 waves",
                "2h 15m",
                "18 mph",
            ]
        );
        assert_eq!(card.actions(), vec![Action::OpenSession("1".into())]);
    }
}
