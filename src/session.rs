use crate::{
    domain::{Board, BoardConfig, BoardView, ColumnId, DragResult, TaskId},
    error::Result,
    state::BoardState,
};
use std::sync::Arc;

/// Board state plus the text currently typed into the two input fields.
///
/// The inputs are transient UI state and never part of a [`Board`]
/// snapshot. Each input is cleared only when submitting it actually
/// created something.
#[derive(Debug, Clone, Default)]
pub struct BoardSession {
    state: BoardState,
    new_task_content: String,
    new_column_title: String,
}

impl BoardSession {
    pub fn new(config: &BoardConfig) -> Self {
        Self::with_state(BoardState::new(config))
    }

    pub fn with_state(state: BoardState) -> Self {
        Self {
            state,
            new_task_content: String::new(),
            new_column_title: String::new(),
        }
    }

    pub fn board(&self) -> Arc<Board> {
        self.state.snapshot()
    }

    pub fn view(&self) -> BoardView {
        self.state.view()
    }

    pub fn new_task_content(&self) -> &str {
        &self.new_task_content
    }

    pub fn new_column_title(&self) -> &str {
        &self.new_column_title
    }

    pub fn set_new_task_content(&mut self, content: impl Into<String>) {
        self.new_task_content = content.into();
    }

    pub fn set_new_column_title(&mut self, title: impl Into<String>) {
        self.new_column_title = title.into();
    }

    pub fn on_drag_end(&mut self, drag: &DragResult) -> Result<Arc<Board>> {
        self.state.move_task(drag)
    }

    /// Adds the pending task text to a column
    pub fn submit_task(&mut self, column_id: &ColumnId) -> Result<Option<TaskId>> {
        let added = self
            .state
            .add_task_with_id(column_id, &self.new_task_content)?;
        if added.is_some() {
            self.new_task_content.clear();
        }
        Ok(added)
    }

    /// Adds a column titled with the pending column text
    pub fn submit_column(&mut self) -> Result<Option<ColumnId>> {
        let added = self.state.add_column_with_id(&self.new_column_title)?;
        if added.is_some() {
            self.new_column_title.clear();
        }
        Ok(added)
    }
}
