use crate::domain::{
    board::{Board, ColumnId},
    task::Task,
};
use serde::Serialize;

/// A column as the rendering layer draws it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub id: ColumnId,
    pub title: String,
    pub tasks: Vec<Task>,
}

/// Render-ready projection of a board: columns left to right, each with
/// its tasks resolved in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub name: String,
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    pub fn of(board: &Board) -> Self {
        let columns = board
            .columns_in_order()
            .map(|column| ColumnView {
                id: column.id.clone(),
                title: column.title.clone(),
                tasks: column
                    .task_ids
                    .iter()
                    .filter_map(|id| board.task(id).cloned())
                    .collect(),
            })
            .collect();

        Self {
            name: board.name.clone(),
            columns,
        }
    }

    pub fn column(&self, id: &ColumnId) -> Option<&ColumnView> {
        self.columns.iter().find(|column| &column.id == id)
    }
}
