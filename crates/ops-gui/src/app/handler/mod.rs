//! Message handlers organized by viewer.
//!
//! Each module mutates the matching `ViewerState` variant; messages for
//! a viewer that is no longer active are dropped silently (the user
//! navigated away before the event landed).

pub mod checklist;
pub mod equipment;
pub mod guide;
pub mod recipe;
pub mod sop;
