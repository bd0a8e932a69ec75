//! Checklist viewer messages.

#[derive(Debug, Clone)]
pub enum ChecklistMessage {
    /// Toggle an item's checked state by id.
    ItemToggled(String),
    /// Raw text typed into an item's numeric field.
    ValueChanged(String, String),
    /// Free-text notes for items that require them.
    NotesChanged(String, String),
    /// Clear every response unconditionally.
    ResetAll,
}
