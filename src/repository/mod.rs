//! # Persistence Layer
//!
//! This module defines the persistence abstraction for dolist. The
//! [`Repository`] trait allows the manager to work with different storage
//! backends.
//!
//! ## Design Rationale
//!
//! Persistence is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryRepository` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep the list manager **decoupled** from storage details
//!
//! ## Implementations
//!
//! - [`fs::FileRepository`]: Production file-based storage
//!   - The full collection stored as a JSON array in a single file
//!   - The array form preserves insertion order across reload
//!
//! - [`memory::InMemoryRepository`]: In-memory storage for testing
//!   - No persistence
//!   - Records save calls so tests can assert persistence policy
//!
//! ## Contract
//!
//! `load_items` may return an empty collection (a fresh store) and must not
//! visibly mutate the repository. `save_items` always receives the full
//! unfiltered collection and must round-trip `id`, `title`, `is_done`, and
//! `created_at` losslessly.

use crate::error::Result;
use crate::model::Item;

pub mod fs;
pub mod memory;

/// Abstract interface for to-do item persistence.
pub trait Repository {
    /// Load the full item collection. An empty store yields an empty vec.
    fn load_items(&self) -> Result<Vec<Item>>;

    /// Make `items` the durable source of truth, replacing whatever was
    /// stored before.
    fn save_items(&mut self, items: &[Item]) -> Result<()>;
}
