//! Presentational building blocks
//!
//! Stateless components are plain functions (or small builders) that return
//! an [`Element`](crate::element::Element). Animated components are structs
//! that own their animated values and frame subscriptions; dropping one
//! stops its motion.

pub mod add_button;
pub mod goal_card;
pub mod header;
pub mod menu_card;
pub mod placeholder_card;
pub mod profile_card;
pub mod section_header;
pub mod session_card;
pub mod stat_card;
pub mod tab_bar;

pub use add_button::AddButton;
pub use goal_card::{GoalCard, GoalProgress};
pub use header::{avatar, header_spacer, icon_button, screen_header, top_bar};
pub use menu_card::{menu_card, MenuItem};
pub use placeholder_card::PlaceholderCard;
pub use profile_card::{profile_card, Identity};
pub use section_header::{section_header, SectionHeader};
pub use session_card::session_card;
pub use stat_card::{stats_row, StatCard, StatTile};
pub use tab_bar::tab_bar;
