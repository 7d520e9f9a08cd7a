//! In-memory repository. Nothing survives the process; handy for tests and
//! for embedding the accounting core without a database.

use crate::db::repository::ShiftRepository;
use crate::errors::AppResult;
use crate::models::shift::Shift;
use std::collections::BTreeSet;

#[derive(Debug, Default)]
pub struct MemoryStore {
    shifts: Vec<Shift>,
    names: BTreeSet<String>,
    events: BTreeSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShiftRepository for MemoryStore {
    fn all(&self) -> AppResult<Vec<Shift>> {
        let mut out = self.shifts.clone();
        out.sort_by_key(|s| s.start);
        Ok(out)
    }

    fn get(&self, id: &str) -> AppResult<Option<Shift>> {
        Ok(self.shifts.iter().find(|s| s.id == id).cloned())
    }

    fn upsert(&mut self, shift: &Shift) -> AppResult<()> {
        match self.shifts.iter_mut().find(|s| s.id == shift.id) {
            Some(existing) => *existing = shift.clone(),
            None => self.shifts.push(shift.clone()),
        }
        Ok(())
    }

    fn delete(&mut self, id: &str) -> AppResult<bool> {
        let before = self.shifts.len();
        self.shifts.retain(|s| s.id != id);
        Ok(self.shifts.len() != before)
    }

    fn known_names(&self) -> AppResult<Vec<String>> {
        Ok(self.names.iter().cloned().collect())
    }

    fn known_events(&self) -> AppResult<Vec<String>> {
        Ok(self.events.iter().cloned().collect())
    }

    fn remember_name(&mut self, name: &str) -> AppResult<()> {
        self.names.insert(name.to_string());
        Ok(())
    }

    fn remember_event(&mut self, event: &str) -> AppResult<()> {
        self.events.insert(event.to_string());
        Ok(())
    }
}
