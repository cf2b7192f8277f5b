//! Lifetime stat cards
//!
//! Small gradient tiles that spring into place when mounted.

use surftrak_animation::{Animated, SchedulerHandle, SpringConfig, StyleProps};
use surftrak_core::{Color, LifetimeStats};

use crate::element::{div, icon, text, Brush, Element};
use crate::live_style::{scalar, value_ids, LiveStyle};
use crate::theme;

const MOUNT_SCALE: f32 = 0.95;
pub const CARD_HEIGHT: f32 = 130.0;
/// Card width as a share of the screen width
pub const WIDTH_FRACTION: f32 = 0.4;

/// Static description of one tile
#[derive(Clone, Debug, PartialEq)]
pub struct StatTile {
    pub title: &'static str,
    pub value: String,
    pub icon: &'static str,
    pub gradient: [Color; 2],
}

impl StatTile {
    /// The four lifetime tiles, in display order
    pub fn lifetime(stats: &LifetimeStats) -> Vec<StatTile> {
        let has_sessions = stats.session_count > 0;
        let speed = |mph: f32| {
            if has_sessions {
                format!("{mph:.0} mph")
            } else {
                "--".to_string()
            }
        };

        vec![
            StatTile {
                title: "Avg Speed",
                value: speed(stats.average_speed),
                icon: "speedometer",
                gradient: [theme::ocean_blue(), theme::deep_cerulean()],
            },
            StatTile {
                title: "Longest Wave",
                value: stats
                    .longest_wave_secs
                    .map_or_else(|| "--".to_string(), |secs| format!("{secs:.0} sec")),
                icon: "clock-outline",
                gradient: [theme::deep_cerulean(), theme::navy()],
            },
            StatTile {
                title: "Total Distance",
                value: stats
                    .total_distance_miles
                    .map_or_else(|| "--".to_string(), |miles| format!("{miles:.1} mi")),
                icon: "map-marker-distance",
                gradient: [theme::lighter_azure(), Color::from_hex(0x2576AD)],
            },
            StatTile {
                title: "Best Speed",
                value: speed(stats.best_speed),
                icon: "lightning-bolt",
                gradient: [theme::surf_blue(), Color::from_hex(0x3A8ED0)],
            },
        ]
    }
}

/// A mounted tile with its entrance spring
pub struct StatCard {
    tile: StatTile,
    width: f32,
    scale: Animated<f32>,
    style: LiveStyle,
}

impl StatCard {
    pub fn new(handle: &SchedulerHandle, tile: StatTile, screen_width: f32) -> Self {
        let scale = Animated::new(handle.clone(), MOUNT_SCALE);
        scale.start_spring(1.0, SpringConfig::default());

        let id = scale.id();
        let style = LiveStyle::new(handle.clone(), &value_ids([id]), move |v| {
            StyleProps::new().scale(scalar(v, id, 1.0))
        });

        Self {
            tile,
            width: screen_width * WIDTH_FRACTION,
            scale,
            style,
        }
    }

    pub fn tile(&self) -> &StatTile {
        &self.tile
    }

    pub fn scale(&self) -> f32 {
        self.scale.get()
    }

    pub fn is_settled(&self) -> bool {
        !self.scale.is_animating()
    }

    pub fn render(&self) -> Element {
        div()
            .key(format!("stat:{}", self.tile.title))
            .size(self.width, CARD_HEIGHT)
            .flex_shrink_0()
            .mr(4.0)
            .p(5.0)
            .flex_col()
            .justify_between()
            .rounded(16.0)
            .background(Brush::linear(self.tile.gradient))
            .animated(self.style.get())
            .child(
                div()
                    .p(2.0)
                    .rounded(8.0)
                    .bg(theme::frost(0.2))
                    .child(icon(self.tile.icon, 20.0, theme::surface())),
            )
            .child(
                div()
                    .flex_col()
                    .child(
                        text(self.tile.title)
                            .size(14.0)
                            .medium()
                            .color(theme::surface())
                            .mb(1.0),
                    )
                    .child(
                        text(self.tile.value.as_str())
                            .size(24.0)
                            .bold()
                            .color(theme::surface()),
                    ),
            )
    }
}

/// Horizontal strip of lifetime stat cards
pub fn stats_row(cards: &[StatCard]) -> Element {
    div()
        .key("lifetime-stats")
        .w_full()
        .flex_row()
        .px(4.0)
        .py(2.0)
        .children(cards.iter().map(StatCard::render))
}

#[cfg(test)]
mod tests {
    use super::*;
    use surftrak_animation::AnimationScheduler;

    fn stats() -> LifetimeStats {
        LifetimeStats {
            session_count: 4,
            wave_count: 44,
            average_speed: 11.375,
            best_speed: 22.0,
            longest_wave_secs: Some(45.0),
            total_distance_miles: Some(0.212),
        }
    }

    #[test]
    fn test_lifetime_tiles() {
        let tiles = StatTile::lifetime(&stats());
        let values: Vec<_> = tiles.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["11 mph", "45 sec", "0.2 mi", "22 mph"]);
        assert_eq!(tiles[0].gradient[0].to_hex_string(), "#1A73E8");
        assert_eq!(tiles[2].gradient[1].to_hex_string(), "#2576AD");
    }

    #[test]
    fn test_empty_stats_show_dashes() {
        let tiles = StatTile::lifetime(&LifetimeStats::default());
        assert!(tiles.iter().all(|t| t.value == "--"));
    }

    #[test]
    fn test_card_springs_to_full_size() {
        let scheduler = AnimationScheduler::new();
        let tile = StatTile::lifetime(&stats()).remove(0);
        let card = StatCard::new(&scheduler.handle(), tile, 390.0);
        assert_eq!(card.scale(), MOUNT_SCALE);
        assert!(!card.is_settled());

        for _ in 0..300 {
            scheduler.advance(1000.0 / 60.0);
        }
        assert!(card.is_settled());
        assert!((card.scale() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_render_size() {
        let scheduler = AnimationScheduler::new();
        let tile = StatTile::lifetime(&stats()).remove(1);
        let card = StatCard::new(&scheduler.handle(), tile, 390.0);
        let root = crate::layout::compute_layout(&card.render(), 390.0, 844.0).unwrap();
        assert!((root.width - 156.0).abs() < 0.01);
        assert_eq!(root.height, CARD_HEIGHT);
        assert_eq!(root.label, None);
        assert_eq!(card.render().texts(), vec!["Longest Wave", "45 sec"]);
    }
}
