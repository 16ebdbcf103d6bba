use anyhow::Result;

use crate::core::models::GameRecord;

/// The surface result cards are rendered into.
pub trait ResultsContainer: Send + Sync {
    fn clear(&self) -> Result<()>;

    /// Appends the card for `record`; `position` is its zero-based index in
    /// the result set and drives the entrance delay.
    fn append_card(&self, record: &GameRecord, position: usize) -> Result<()>;

    fn child_count(&self) -> usize;

    /// Commits the current cards to the rendering target.
    fn present(&self) -> Result<()>;
}
