//! # Dolist Architecture
//!
//! Dolist is a **UI-agnostic to-do list library**. It owns the task collection,
//! the active filter, and the derived visible projection; any UI (desktop,
//! terminal, web) is an external consumer that reads the projection and issues
//! intents.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Layer (not part of this crate)                          │
//! │  - Renders the visible projection, collects user intents    │
//! │  - The ONLY place input validation (empty titles) happens   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Manager Layer (manager.rs)                                 │
//! │  - Authoritative item collection + filter + projection      │
//! │  - Publishes the projection to subscribers on every change  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence Layer (repository/)                            │
//! │  - Abstract Repository trait                                │
//! │  - FileRepository (production), InMemoryRepository (testing)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From [`manager`] inward, code:
//! - Takes regular Rust function arguments
//! - **Never** writes to stdout/stderr
//! - **Never** assumes a terminal environment
//!
//! The one I/O seam is the [`repository::Repository`] trait; the manager never
//! knows whether it is backed by a file or a test double.
//!
//! ## Persistence Discipline
//!
//! The manager persists the **full unfiltered collection** after every
//! mutation, never the filtered view. Switching filters can never lose data:
//! a reload after restart restores the unfiltered set with the last-used
//! completion states.
//!
//! ## Module Overview
//!
//! - [`manager`]: The observable list manager—entry point for all operations
//! - [`model`]: Core data types ([`model::Item`], [`model::FilterMode`])
//! - [`repository`]: Persistence abstraction and implementations
//! - [`error`]: Error types

pub mod error;
pub mod manager;
pub mod model;
pub mod repository;

pub use error::{DolistError, Result};
pub use manager::{project, ListManager};
pub use model::{FilterMode, Item};
pub use repository::Repository;
