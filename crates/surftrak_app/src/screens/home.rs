//! Home dashboard

use crate::components::{
    section_header, stats_row, top_bar, GoalCard, GoalProgress, PlaceholderCard, StatCard,
    StatTile,
};
use crate::element::{div, Element};
use crate::navigator::Tab;
use crate::screens::{content, screen_frame, Screen, ScreenContext};

/// Demo figures until wave tracking reports weekly totals
const WAVES_THIS_WEEK: u32 = 15;
const DAYS_LEFT: u32 = 5;

pub struct HomeScreen {
    photo_url: Option<String>,
    goal: GoalCard,
    stats: Vec<StatCard>,
}

impl HomeScreen {
    pub fn new(ctx: &ScreenContext) -> Self {
        let goal = GoalCard::new(
            &ctx.scheduler,
            GoalProgress {
                waves: WAVES_THIS_WEEK,
                goal: ctx.config.home.weekly_goal,
                days_left: DAYS_LEFT,
            },
            ctx.config.home.message_rotation_ms,
        );

        let lifetime = ctx.data.lifetime_stats();
        let stats = StatTile::lifetime(&lifetime)
            .into_iter()
            .map(|tile| StatCard::new(&ctx.scheduler, tile, ctx.config.layout.screen_width))
            .collect();

        Self {
            photo_url: ctx.auth.user().and_then(|u| u.photo_url),
            goal,
            stats,
        }
    }

    pub fn goal(&self) -> &GoalCard {
        &self.goal
    }

    pub fn stats(&self) -> &[StatCard] {
        &self.stats
    }
}

impl Screen for HomeScreen {
    fn tab(&self) -> Tab {
        Tab::Home
    }

    fn tick(&mut self, dt_ms: f32) {
        self.goal.tick(dt_ms);
    }

    fn render(&self) -> Element {
        screen_frame()
            .key("screen:home")
            .child(top_bar(self.photo_url.as_deref()))
            .child(
                content()
                    .child(self.goal.render())
                    .child(
                        div()
                            .w_full()
                            .flex_col()
                            .mt(5.0)
                            .child(section_header("Lifetime Stats").see_all())
                            .child(stats_row(&self.stats)),
                    )
                    .child(
                        div()
                            .w_full()
                            .flex_col()
                            .mt(5.0)
                            .child(section_header("Recommended").see_all())
                            .child(PlaceholderCard::news())
                            .child(PlaceholderCard::user_guide()),
                    ),
            )
    }
}
