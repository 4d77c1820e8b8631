use crate::{
    domain::{Board, BoardConfig, BoardView, ColumnId, DragResult, TaskId},
    error::Result,
};
use std::sync::Arc;

/// Holds the current board snapshot and swaps in a new one per operation.
///
/// Snapshots handed out by [`BoardState::snapshot`] are never mutated; a
/// holder keeps a consistent view for as long as it keeps the `Arc`. A failed
/// or no-op operation leaves the current snapshot in place.
#[derive(Debug, Clone)]
pub struct BoardState {
    current: Arc<Board>,
}

impl BoardState {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            current: Arc::new(Board::new(config)),
        }
    }

    /// Starts from an existing board, checking its invariants first
    pub fn from_board(board: Board) -> Result<Self> {
        board.validate()?;
        Ok(Self {
            current: Arc::new(board),
        })
    }

    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.current)
    }

    pub fn board(&self) -> &Board {
        &self.current
    }

    pub fn view(&self) -> BoardView {
        self.current.view()
    }

    pub fn move_task(&mut self, drag: &DragResult) -> Result<Arc<Board>> {
        let next = self.current.move_task(drag)?;
        Ok(self.publish(next))
    }

    pub fn add_task(&mut self, column_id: &ColumnId, content: &str) -> Result<Arc<Board>> {
        self.add_task_with_id(column_id, content)?;
        Ok(self.snapshot())
    }

    pub fn add_column(&mut self, title: &str) -> Result<Arc<Board>> {
        self.add_column_with_id(title)?;
        Ok(self.snapshot())
    }

    /// Like [`BoardState::add_task`], returning the new task's ID, or `None`
    /// when the content was blank
    pub fn add_task_with_id(
        &mut self,
        column_id: &ColumnId,
        content: &str,
    ) -> Result<Option<TaskId>> {
        let id = self.current.next_task_id();
        let next = self.current.add_task(column_id, content)?;
        let added = next.is_some().then_some(id);
        self.publish(next);
        Ok(added)
    }

    /// Like [`BoardState::add_column`], returning the new column's ID, or
    /// `None` when the title was blank
    pub fn add_column_with_id(&mut self, title: &str) -> Result<Option<ColumnId>> {
        let id = self.current.next_column_id();
        let next = self.current.add_column(title)?;
        let added = next.is_some().then_some(id);
        self.publish(next);
        Ok(added)
    }

    fn publish(&mut self, next: Option<Board>) -> Arc<Board> {
        if let Some(board) = next {
            self.current = Arc::new(board);
        }
        self.snapshot()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}
