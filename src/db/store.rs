//! SQLite-backed repository: shifts survive restarts, so active shifts are
//! the persisted drafts that `resume` brings back.

use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_shift, load_all_shifts, load_shift, load_suggestions, remember_suggestion,
    upsert_shift,
};
use crate::db::repository::ShiftRepository;
use crate::errors::AppResult;
use crate::models::shift::Shift;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
        })
    }

    pub fn in_memory() -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::in_memory()?,
        })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

impl ShiftRepository for SqliteStore {
    fn all(&self) -> AppResult<Vec<Shift>> {
        load_all_shifts(&self.pool.conn)
    }

    fn get(&self, id: &str) -> AppResult<Option<Shift>> {
        load_shift(&self.pool.conn, id)
    }

    fn upsert(&mut self, shift: &Shift) -> AppResult<()> {
        upsert_shift(&mut self.pool.conn, shift)
    }

    fn delete(&mut self, id: &str) -> AppResult<bool> {
        delete_shift(&mut self.pool.conn, id)
    }

    fn known_names(&self) -> AppResult<Vec<String>> {
        load_suggestions(&self.pool.conn, "name")
    }

    fn known_events(&self) -> AppResult<Vec<String>> {
        load_suggestions(&self.pool.conn, "event")
    }

    fn remember_name(&mut self, name: &str) -> AppResult<()> {
        remember_suggestion(&self.pool.conn, "name", name)
    }

    fn remember_event(&mut self, event: &str) -> AppResult<()> {
        remember_suggestion(&self.pool.conn, "event", event)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        audit(&self.pool.conn, operation, target, message)
    }
}
