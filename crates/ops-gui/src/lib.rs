//! Line Ops Studio - GUI library.
//!
//! Renders operational documents (recipes, SOPs, checklists, equipment
//! guides, reference guides) as interactive views.
//!
//! Built with Iced 0.14 using the Elm architecture.

pub mod app;
pub mod component;
pub mod message;
pub mod settings;
pub mod state;
pub mod theme;
pub mod util;
pub mod view;
