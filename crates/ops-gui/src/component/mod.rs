//! Reusable UI components for Line Ops Studio.
//!
//! Building blocks for the viewers:
//!
//! - **Display**: `badge`, `tinted_badge`, `simple_table`, `metadata_item`
//! - **Containers**: `SectionCard`, `card`, `panel`, `status_panel`, `alert`
//! - **Navigation**: `tab_bar`, `sidebar`
//! - **Progress**: `ProgressBar`, `step_indicator`
//! - **Interaction**: `collapsible` (open flag lives in viewer state)
//! - **Feedback**: `EmptyState`
//!
//! Components use the builder pattern or plain functions and return
//! `Element<M>`. Icons come from `iced_fonts::lucide` directly
//! (<https://lucide.dev/icons/>).

mod alert;
mod badge;
mod card;
mod collapsible;
mod empty_state;
mod metadata;
mod progress_bar;
mod sidebar;
mod step_indicator;
mod tab_bar;
mod table;

pub use alert::{AlertVariant, alert};
pub use badge::{BadgeVariant, badge, badge_with_icon, tinted_badge};
pub use card::{SectionCard, card, panel, status_panel};
pub use collapsible::collapsible;
pub use empty_state::EmptyState;
pub use metadata::{metadata_item, metadata_row};
pub use progress_bar::ProgressBar;
pub use sidebar::{SidebarItem, sidebar};
pub use step_indicator::step_indicator;
pub use tab_bar::{Tab, tab_bar};
pub use table::{TableColumn, simple_table};
