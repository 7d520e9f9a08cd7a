//! Storage seam used by the accounting core.

use crate::errors::AppResult;
use crate::models::shift::Shift;

/// Record store holding the shift collection plus the suggestion lists
/// (known staff and event names) offered on input.
pub trait ShiftRepository {
    /// Every stored shift, ordered by start instant.
    fn all(&self) -> AppResult<Vec<Shift>>;

    fn get(&self, id: &str) -> AppResult<Option<Shift>>;

    /// Insert or fully replace a shift together with its breaks.
    fn upsert(&mut self, shift: &Shift) -> AppResult<()>;

    /// Remove a shift and its breaks. Returns false when the id is unknown.
    fn delete(&mut self, id: &str) -> AppResult<bool>;

    fn known_names(&self) -> AppResult<Vec<String>>;

    fn known_events(&self) -> AppResult<Vec<String>>;

    fn remember_name(&mut self, name: &str) -> AppResult<()>;

    fn remember_event(&mut self, event: &str) -> AppResult<()>;

    /// Audit hook; stores without a log simply ignore it.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}
