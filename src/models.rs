//! Frontend Models
//!
//! Data structures for the board.

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// View filter for the item list
///
/// UI-local state; selecting a filter never mutates the list itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Whether `item` belongs to this filter's view
    pub fn accepts(self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }
}
