//! Animated "add session" button
//!
//! Four values drive it: an outer pulse (scale sequence and opacity), a
//! gentle breathing scale on the button itself and a color progress that
//! walks both gradient stops through a three-color ramp.

use surftrak_animation::{
    interpolate_color, Animated, Easing, SchedulerHandle, SequenceSpec, StyleProps, TimelineSpec,
};
use surftrak_core::Color;

use crate::element::{div, icon, Action, Element};
use crate::live_style::{scalar, value_ids, LiveStyle};
use crate::theme;

pub const SIZE: f32 = 56.0;

/// Progress positions of the gradient ramps
const RAMP_STOPS: [f32; 3] = [0.0, 0.5, 1.0];

/// Leading and trailing gradient colors at each ramp stop
pub fn gradient_ramps() -> ([Color; 3], [Color; 3]) {
    (
        [
            theme::ocean_blue(),
            theme::deep_cerulean(),
            Color::from_hex(0x004494),
        ],
        [
            theme::surf_blue(),
            theme::ocean_blue(),
            Color::from_hex(0x0066CC),
        ],
    )
}

fn eased(target: f32, duration_ms: f32) -> TimelineSpec<f32> {
    TimelineSpec::new(target, duration_ms).easing(Easing::STANDARD)
}

pub struct AddButton {
    pulse_scale: Animated<f32>,
    pulse_opacity: Animated<f32>,
    button_scale: Animated<f32>,
    color_progress: Animated<f32>,
    pulse_style: LiveStyle,
    button_style: LiveStyle,
}

impl AddButton {
    pub fn new(handle: &SchedulerHandle) -> Self {
        let pulse_scale = Animated::new(handle.clone(), 1.0_f32);
        pulse_scale.start_sequence(
            SequenceSpec::new(vec![
                eased(1.2, 1000.0),
                eased(1.05, 800.0),
                eased(1.15, 600.0),
            ])
            .loop_infinite()
            .ping_pong(true),
        );

        let pulse_opacity = Animated::new(handle.clone(), 0.7_f32);
        pulse_opacity.start_timeline(eased(0.2, 2400.0).loop_infinite().ping_pong(true));

        let button_scale = Animated::new(handle.clone(), 1.0_f32);
        button_scale.start_sequence(
            SequenceSpec::new(vec![eased(1.05, 1000.0), eased(1.0, 1000.0)])
                .loop_infinite()
                .ping_pong(true),
        );

        let color_progress = Animated::new(handle.clone(), 0.0_f32);
        color_progress.start_timeline(eased(1.0, 3000.0).loop_infinite().ping_pong(true));

        let (scale_id, opacity_id) = (pulse_scale.id(), pulse_opacity.id());
        let pulse_style = LiveStyle::new(
            handle.clone(),
            &value_ids([scale_id, opacity_id]),
            move |v| {
                StyleProps::new()
                    .scale(scalar(v, scale_id, 1.0))
                    .opacity(scalar(v, opacity_id, 0.7))
            },
        );

        let (button_id, color_id) = (button_scale.id(), color_progress.id());
        let (leading, trailing) = gradient_ramps();
        let button_style = LiveStyle::new(
            handle.clone(),
            &value_ids([button_id, color_id]),
            move |v| {
                let t = scalar(v, color_id, 0.0);
                StyleProps::new().scale(scalar(v, button_id, 1.0)).gradient([
                    interpolate_color(t, &RAMP_STOPS, &leading),
                    interpolate_color(t, &RAMP_STOPS, &trailing),
                ])
            },
        );

        Self {
            pulse_scale,
            pulse_opacity,
            button_scale,
            color_progress,
            pulse_style,
            button_style,
        }
    }

    pub fn pulse_scale(&self) -> f32 {
        self.pulse_scale.get()
    }

    pub fn pulse_opacity(&self) -> f32 {
        self.pulse_opacity.get()
    }

    pub fn button_scale(&self) -> f32 {
        self.button_scale.get()
    }

    pub fn color_progress(&self) -> f32 {
        self.color_progress.get()
    }

    /// Current gradient stops of the button face
    pub fn gradient(&self) -> Vec<Color> {
        self.button_style
            .get()
            .gradient
            .map(|stops| stops.to_vec())
            .unwrap_or_default()
    }

    pub fn render(&self) -> Element {
        div()
            .key("add-session")
            .relative()
            .square(SIZE)
            .child(
                div()
                    .key("add-pulse")
                    .absolute_fill()
                    .rounded(SIZE / 2.0)
                    .bg(theme::ocean_blue())
                    .animated(self.pulse_style.get()),
            )
            .child(
                div()
                    .key("add-button")
                    .square(SIZE)
                    .rounded_full()
                    .center()
                    .animated(self.button_style.get())
                    .on_press(Action::AddSession)
                    .child(icon("add", 32.0, theme::surface())),
            )
    }
}
