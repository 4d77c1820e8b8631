pub mod board;
pub mod drag;
pub mod task;
pub mod view;

pub use board::{Board, BoardConfig, Column, ColumnId};
pub use drag::{DragLocation, DragResult};
pub use task::{Task, TaskId};
pub use view::{BoardView, ColumnView};
