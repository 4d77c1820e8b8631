//! # Kanban Board
//!
//! Snapshot-based state model for a drag-and-drop kanban board.
//!
//! A [`Board`] holds columns, tasks, and the left-to-right column order.
//! Operations never mutate a board in place; they return a new snapshot,
//! so anything still holding an older one (a renderer mid-frame, say) keeps
//! a consistent view. Gesture capture and rendering live outside this
//! crate and talk to it through [`DragResult`] and [`BoardView`].

pub mod domain;
pub mod error;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig, Column, ColumnId},
    drag::{DragLocation, DragResult},
    task::{Task, TaskId},
    view::{BoardView, ColumnView},
};
pub use error::{BoardError, Result};
pub use session::BoardSession;
pub use state::BoardState;
