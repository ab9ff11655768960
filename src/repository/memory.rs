use super::Repository;
use crate::error::Result;
use crate::model::Item;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryRepository {
    items: Vec<Item>,
    save_count: usize,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `save_items` has been called.
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    /// The collection as last saved (or as seeded).
    pub fn stored_items(&self) -> &[Item] {
        &self.items
    }
}

impl Repository for InMemoryRepository {
    fn load_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn save_items(&mut self, items: &[Item]) -> Result<()> {
        self.items = items.to_vec();
        self.save_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builder for pre-seeded repositories. Seeding writes the backing vec
    /// directly, so `save_count` stays at zero until the manager saves.
    pub struct RepositoryFixture {
        pub repository: InMemoryRepository,
    }

    impl Default for RepositoryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RepositoryFixture {
        pub fn new() -> Self {
            Self {
                repository: InMemoryRepository::new(),
            }
        }

        pub fn with_items(mut self, count: usize) -> Self {
            for i in 0..count {
                let item = Item::new(format!("Task {}", i + 1));
                self.repository.items.push(item);
            }
            self
        }

        pub fn with_pending_item(mut self, title: &str) -> Self {
            self.repository.items.push(Item::new(title));
            self
        }

        pub fn with_done_item(mut self, title: &str) -> Self {
            let mut item = Item::new(title);
            item.is_done = true;
            self.repository.items.push(item);
            self
        }
    }
}
