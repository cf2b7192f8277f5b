//! Weekly goal card
//!
//! A gradient card with an animated progress bar, a glow pulsing over the
//! filled part of the bar, a ripple behind the options button and a
//! motivational line that rotates on a fixed timer.

use surftrak_animation::{
    interpolate, Animated, Easing, SchedulerHandle, StyleProps, TimelineSpec,
};

use crate::element::{div, icon, text, Action, Brush, Element};
use crate::live_style::{scalar, value_ids, LiveStyle};
use crate::theme;
use crate::timer::Interval;

pub const MESSAGES: [&str; 5] = [
    "Every wave is a step toward mastery",
    "Focus on progress, not perfection",
    "The best surfers simply surf more",
    "Consistency builds excellence over time",
    "Small improvements compound into greatness",
];

const FILL_MS: f32 = 1500.0;
const RIPPLE_MS: f32 = 2000.0;
const GLOW_MS: f32 = 1500.0;
const GLOW_PEAK: f32 = 0.6;

/// Where the user stands against this week's goal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoalProgress {
    pub waves: u32,
    pub goal: u32,
    pub days_left: u32,
}

impl GoalProgress {
    /// Completed share of the goal, capped at 1
    pub fn fraction(&self) -> f32 {
        if self.goal == 0 {
            return 1.0;
        }
        (self.waves as f32 / self.goal as f32).min(1.0)
    }
}

pub struct GoalCard {
    goal: GoalProgress,
    progress: Animated<f32>,
    ripple: Animated<f32>,
    glow: Animated<f32>,
    bar_style: LiveStyle,
    ripple_style: LiveStyle,
    glow_style: LiveStyle,
    message_index: usize,
    rotation: Interval,
}

impl GoalCard {
    /// Mount the card and start its animations
    pub fn new(handle: &SchedulerHandle, goal: GoalProgress, rotation_ms: u64) -> Self {
        let progress = Animated::new(handle.clone(), 0.0_f32);
        progress.start_timeline(
            TimelineSpec::new(goal.fraction(), FILL_MS).easing(Easing::STANDARD),
        );

        // One 0..1 driver for both ripple properties
        let ripple = Animated::new(handle.clone(), 0.0_f32);
        ripple.start_timeline(
            TimelineSpec::new(1.0, RIPPLE_MS)
                .easing(Easing::STANDARD)
                .loop_infinite()
                .ping_pong(true),
        );

        let glow = Animated::new(handle.clone(), 0.0_f32);
        glow.start_timeline(
            TimelineSpec::new(GLOW_PEAK, GLOW_MS)
                .easing(Easing::STANDARD)
                .loop_infinite()
                .ping_pong(true),
        );

        let progress_id = progress.id();
        let bar_style = LiveStyle::new(handle.clone(), &value_ids([progress_id]), move |v| {
            StyleProps::new().width_fraction(scalar(v, progress_id, 0.0))
        });

        let ripple_id = ripple.id();
        let ripple_style = LiveStyle::new(handle.clone(), &value_ids([ripple_id]), move |v| {
            let t = scalar(v, ripple_id, 0.0);
            StyleProps::new()
                .scale(interpolate(t, &[0.0, 1.0], &[1.0, 1.2]))
                .opacity(interpolate(t, &[0.0, 1.0], &[0.7, 0.1]))
        });

        let glow_id = glow.id();
        let glow_style = LiveStyle::new(
            handle.clone(),
            &value_ids([progress_id, glow_id]),
            move |v| {
                StyleProps::new()
                    .width_fraction(scalar(v, progress_id, 0.0))
                    .opacity(scalar(v, glow_id, 0.0))
            },
        );

        tracing::debug!(
            waves = goal.waves,
            goal = goal.goal,
            "goal card mounted"
        );

        Self {
            goal,
            progress,
            ripple,
            glow,
            bar_style,
            ripple_style,
            glow_style,
            message_index: 0,
            rotation: Interval::new(rotation_ms as f32),
        }
    }

    pub fn goal(&self) -> GoalProgress {
        self.goal
    }

    /// Current bar fill, 0..1
    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    pub fn glow_opacity(&self) -> f32 {
        self.glow.get()
    }

    /// Ripple driver position, 0..1
    pub fn ripple_phase(&self) -> f32 {
        self.ripple.get()
    }

    pub fn message(&self) -> &'static str {
        MESSAGES[self.message_index]
    }

    pub fn message_index(&self) -> usize {
        self.message_index
    }

    /// Advance the message rotation timer
    pub fn tick(&mut self, dt_ms: f32) {
        let fired = self.rotation.advance(dt_ms) as usize;
        if fired > 0 {
            self.message_index = (self.message_index + fired) % MESSAGES.len();
            tracing::debug!(index = self.message_index, "goal message rotated");
        }
    }

    pub fn render(&self) -> Element {
        let header = div()
            .w_full()
            .flex_row()
            .justify_between()
            .items_center()
            .mb(4.0)
            .child(
                div()
                    .flex_col()
                    .child(text("Weekly Goal").size(20.0).bold().color(theme::surface()))
                    .child(
                        text(format!("{} days left", self.goal.days_left))
                            .size(14.0)
                            .color(theme::accent_well()),
                    ),
            )
            .child(
                div()
                    .relative()
                    .square(32.0)
                    .child(
                        div()
                            .key("goal-ripple")
                            .absolute_fill()
                            .rounded_full()
                            .bg(theme::frost(0.3))
                            .animated(self.ripple_style.get()),
                    )
                    .child(
                        div()
                            .key("goal-options")
                            .square(32.0)
                            .rounded_full()
                            .bg(theme::frost(0.2))
                            .center()
                            .on_press(Action::GoalOptions)
                            .child(icon("options-outline", 18.0, theme::surface())),
                    ),
            );

        let track = div()
            .key("goal-track")
            .relative()
            .w_full()
            .h(20.0)
            .rounded_full()
            .bg(theme::frost(0.2))
            .child(
                div()
                    .key("goal-fill")
                    .h_full()
                    .rounded_full()
                    .bg(theme::frost(0.8))
                    .animated(self.bar_style.get()),
            )
            .child(
                div()
                    .key("goal-glow")
                    .absolute_top_left()
                    .h_full()
                    .rounded_full()
                    .bg(theme::surface())
                    .animated(self.glow_style.get()),
            );

        div()
            .key("goal-card")
            .mx(4.0)
            .mt(5.0)
            .mb(3.0)
            .p(5.0)
            .flex_col()
            .rounded(24.0)
            .background(Brush::linear([
                theme::deep_cerulean(),
                theme::ocean_blue(),
                theme::surf_blue(),
            ]))
            .child(header)
            .child(
                div()
                    .w_full()
                    .flex_col()
                    .items_center()
                    .py(2.0)
                    .child(
                        text(format!("{}/{} waves", self.goal.waves, self.goal.goal))
                            .size(24.0)
                            .bold()
                            .color(theme::surface())
                            .mb(2.0),
                    )
                    .child(track),
            )
            .child(
                text(self.message())
                    .size(14.0)
                    .color(theme::surface())
                    .mt(3.0),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surftrak_animation::AnimationScheduler;

    const FRAME_MS: f32 = 1000.0 / 60.0;

    fn demo() -> GoalProgress {
        GoalProgress {
            waves: 15,
            goal: 50,
            days_left: 5,
        }
    }

    #[test]
    fn test_fraction() {
        assert!((demo().fraction() - 0.3).abs() < 1e-6);
        let over = GoalProgress {
            waves: 80,
            ..demo()
        };
        assert_eq!(over.fraction(), 1.0);
        let none = GoalProgress { goal: 0, ..demo() };
        assert_eq!(none.fraction(), 1.0);
    }

    #[test]
    fn test_progress_fills_then_holds() {
        let scheduler = AnimationScheduler::new();
        let card = GoalCard::new(&scheduler.handle(), demo(), 5000);
        assert_eq!(card.progress(), 0.0);

        scheduler.advance(750.0);
        let mid = card.progress();
        assert!(mid > 0.0 && mid < 0.3);

        scheduler.advance(750.0);
        assert!((card.progress() - 0.3).abs() < 1e-4);
        scheduler.advance(3000.0);
        assert!((card.progress() - 0.3).abs() < 1e-4);
    }

    #[test]
    fn test_glow_and_ripple_ping_pong() {
        let scheduler = AnimationScheduler::new();
        let card = GoalCard::new(&scheduler.handle(), demo(), 5000);

        scheduler.advance(GLOW_MS);
        assert!((card.glow_opacity() - GLOW_PEAK).abs() < 1e-4);
        scheduler.advance(GLOW_MS);
        assert!(card.glow_opacity().abs() < 1e-4);

        // 4000ms in: the ripple has been out and back once
        scheduler.advance(1000.0);
        assert!(card.ripple_phase().abs() < 1e-4);
    }

    #[test]
    fn test_ripple_style_projection() {
        let scheduler = AnimationScheduler::new();
        let card = GoalCard::new(&scheduler.handle(), demo(), 5000);
        let start = card.ripple_style.get();
        assert_eq!(start.scale, Some(1.0));
        assert!((start.opacity.unwrap_or_default() - 0.7).abs() < 1e-6);

        scheduler.advance(RIPPLE_MS);
        let peak = card.ripple_style.get();
        assert!((peak.scale.unwrap_or_default() - 1.2).abs() < 1e-4);
        assert!((peak.opacity.unwrap_or_default() - 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_message_rotation() {
        let scheduler = AnimationScheduler::new();
        let mut card = GoalCard::new(&scheduler.handle(), demo(), 5000);
        assert_eq!(card.message(), MESSAGES[0]);

        for _ in 0..499 {
            card.tick(10.0);
        }
        assert_eq!(card.message_index(), 0);
        card.tick(10.0);
        assert_eq!(card.message_index(), 1);

        card.tick(5000.0 * 4.0);
        assert_eq!(card.message_index(), 0);
    }

    #[test]
    fn test_render() {
        let scheduler = AnimationScheduler::new();
        let card = GoalCard::new(&scheduler.handle(), demo(), 5000);
        scheduler.advance(FILL_MS);
        let el = card.render();
        assert_eq!(
            el.texts(),
            vec!["Weekly Goal", "5 days left", "15/50 waves", MESSAGES[0]]
        );
        let fill = el.find("goal-fill").and_then(|f| f.animated.clone());
        assert!((fill.and_then(|s| s.width_fraction).unwrap_or_default() - 0.3).abs() < 1e-4);
        assert_eq!(el.actions(), vec![Action::GoalOptions]);
    }
}
