//! # List Manager
//!
//! The observable core of the crate. [`ListManager`] owns the authoritative
//! item collection, the active filter, and the derived visible projection.
//!
//! ## Publish Discipline
//!
//! Every mutating operation ends with a publish step that runs three ordered
//! actions:
//!
//! 1. Recompute `visible_items` via the pure [`project`] function
//! 2. Notify every subscriber with the new projection
//! 3. Persist the **full unfiltered collection** through the repository
//!
//! The projection is never mutated directly, only recomputed, so it cannot
//! drift from the full collection. Persistence always serializes the
//! authoritative set, independent of the active filter: switching filters
//! never loses data, and a reload after restart restores the unfiltered set
//! with the last-used completion states.
//!
//! ## Match Policies
//!
//! `toggle_completion` affects the *first* item matching the id;
//! `remove` deletes *every* match. These are two separate policies and must
//! stay that way (see the method docs).
//!
//! ## Error Posture
//!
//! The manager is deliberately permissive: unknown ids are silent no-ops,
//! empty titles are stored as given, and save failures are logged rather than
//! surfaced. Only construction returns `Result`, since a failed load precedes
//! any state worth protecting.

use uuid::Uuid;

use crate::error::Result;
use crate::model::{FilterMode, Item};
use crate::repository::Repository;

/// Callback invoked with the new visible projection after every publish.
pub type Subscriber = Box<dyn FnMut(&[Item])>;

/// The observable to-do list manager.
///
/// Generic over [`Repository`] to allow different storage backends:
/// - Production: `ListManager<FileRepository>`
/// - Testing: `ListManager<InMemoryRepository>`
///
/// All mutation goes through `&mut self`, so exclusive ownership (the
/// single-writer discipline the design requires) is enforced by the borrow
/// checker.
pub struct ListManager<R: Repository> {
    repository: R,
    all_items: Vec<Item>,
    current_filter: FilterMode,
    visible_items: Vec<Item>,
    subscribers: Vec<Subscriber>,
}

impl<R: Repository> ListManager<R> {
    /// Loads the full collection from the repository. An empty store yields
    /// an empty list. The filter starts at `All`, so the initial projection
    /// is the full collection. Construction triggers no save and no
    /// notification: loading is not a mutation.
    pub fn new(repository: R) -> Result<Self> {
        let all_items = repository.load_items()?;
        let visible_items = all_items.clone();
        Ok(Self {
            repository,
            all_items,
            current_filter: FilterMode::All,
            visible_items,
            subscribers: Vec::new(),
        })
    }

    /// The current filtered projection, in insertion order.
    pub fn visible_items(&self) -> &[Item] {
        &self.visible_items
    }

    pub fn filter(&self) -> FilterMode {
        self.current_filter
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Registers an observer of the visible projection. Subscribers are
    /// notified on every publish, before the save step.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&[Item]) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Appends `item` to the end of the collection.
    ///
    /// Empty-title rejection is the caller's job; the manager stores whatever
    /// it is given.
    pub fn add(&mut self, item: Item) {
        self.all_items.push(item);
        self.publish();
    }

    /// Flips the completion state of the first item matching `id`.
    ///
    /// First match only — if duplicate ids exist, later occurrences are
    /// untouched (`remove` deliberately differs). An unknown id is a silent
    /// no-op: nothing changes and nothing is published.
    pub fn toggle_completion(&mut self, id: Uuid) {
        if let Some(item) = self.all_items.iter_mut().find(|item| item.id == id) {
            item.is_done = !item.is_done;
            self.publish();
        }
    }

    /// Deletes every item matching `id` (all matches, unlike
    /// `toggle_completion`'s first-match lookup). An unknown id leaves the
    /// collection untouched; the projection is republished either way.
    pub fn remove(&mut self, id: Uuid) {
        self.all_items.retain(|item| item.id != id);
        self.publish();
    }

    /// Switches the active filter and republishes the projection.
    pub fn set_filter(&mut self, mode: FilterMode) {
        self.current_filter = mode;
        self.publish();
    }

    /// Recompute the projection, notify subscribers, persist the full
    /// collection. Always in that order, and always the full collection,
    /// never the filtered view.
    fn publish(&mut self) {
        self.visible_items = project(&self.all_items, self.current_filter);
        for subscriber in &mut self.subscribers {
            subscriber(&self.visible_items);
        }
        // Persistence is fire-and-forget from the manager's perspective;
        // failures are the repository's concern.
        if let Err(err) = self.repository.save_items(&self.all_items) {
            log::warn!(
                "failed to persist {} item(s): {}",
                self.all_items.len(),
                err
            );
        }
    }
}

/// Order-preserving projection of `items` under `mode`.
pub fn project(items: &[Item], mode: FilterMode) -> Vec<Item> {
    match mode {
        FilterMode::All => items.to_vec(),
        FilterMode::Done => items.iter().filter(|item| item.is_done).cloned().collect(),
        FilterMode::NotDone => items.iter().filter(|item| !item.is_done).cloned().collect(),
    }
}
