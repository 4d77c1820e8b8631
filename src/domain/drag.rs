use crate::domain::{board::ColumnId, task::TaskId};
use serde::{Deserialize, Serialize};

/// Drop position reported by the drag-and-drop controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragLocation {
    pub column_id: ColumnId,
    pub index: usize,
}

/// Outcome of a drag gesture, delivered once when the drag ends.
///
/// The destination fields are absent when the drag was cancelled or the
/// task was dropped outside any column. A destination is only reported when
/// both the column and the index are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragResult {
    pub task_id: TaskId,
    pub source_column_id: ColumnId,
    pub source_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_column_id: Option<ColumnId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_index: Option<usize>,
}

impl DragResult {
    /// A drag that ended on a column
    pub fn dropped(
        task_id: TaskId,
        source: (ColumnId, usize),
        destination: (ColumnId, usize),
    ) -> Self {
        Self {
            task_id,
            source_column_id: source.0,
            source_index: source.1,
            destination_column_id: Some(destination.0),
            destination_index: Some(destination.1),
        }
    }

    /// A drag that ended without a drop target
    pub fn cancelled(task_id: TaskId, source: (ColumnId, usize)) -> Self {
        Self {
            task_id,
            source_column_id: source.0,
            source_index: source.1,
            destination_column_id: None,
            destination_index: None,
        }
    }

    pub fn source(&self) -> DragLocation {
        DragLocation {
            column_id: self.source_column_id.clone(),
            index: self.source_index,
        }
    }

    pub fn destination(&self) -> Option<DragLocation> {
        match (&self.destination_column_id, self.destination_index) {
            (Some(column_id), Some(index)) => Some(DragLocation {
                column_id: column_id.clone(),
                index,
            }),
            _ => None,
        }
    }

    /// True when the task was dropped back onto its starting slot
    pub fn is_in_place(&self) -> bool {
        self.destination().is_some_and(|dest| dest == self.source())
    }
}
