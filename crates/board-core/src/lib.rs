//! Board Core
//!
//! Reconciliation engine for a board of ordered columns holding ordered
//! items, driven by drag gestures.
//!
//! Layered architecture:
//! - domain: entities, identifiers and errors
//! - store: ownership of both collections and the per-parent projection
//! - reorder: single-element relocation
//! - resolver: drag-over classification and mutation
//! - session: drag state machine
//! - board: facade used by the presentation layer

pub mod board;
pub mod config;
pub mod domain;
pub mod reorder;
pub mod resolver;
pub mod session;
pub mod store;

pub use board::{Board, Ghost};
pub use config::BoardConfig;
pub use domain::{BoardError, BoardResult, Column, Entity, Id, Item};
pub use resolver::Resolution;
pub use session::{DragKey, DragSession, EntityKind};
pub use store::EntityStore;
