use crate::{
    domain::{
        drag::{DragLocation, DragResult},
        task::{Task, TaskId},
        view::BoardView,
    },
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fmt,
    str::FromStr,
    sync::Arc,
};
use tracing::{debug, warn};

/// Unique identifier for a column (e.g., column-1, column-2)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    const PREFIX: &'static str = "column-";

    /// Creates a new ColumnId from a counter
    pub fn new(counter: usize) -> Self {
        Self(format!("{}{}", Self::PREFIX, counter))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ColumnId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s
            .strip_prefix(Self::PREFIX)
            .and_then(|number| number.parse::<usize>().ok())
        {
            Some(n) if n > 0 && Self::new(n).0 == s => Ok(Self::new(n)),
            _ => Err(BoardError::InvalidColumnId(s.to_string())),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A titled, ordered list of task references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub task_ids: Vec<TaskId>,
}

impl Column {
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    /// Position of a task within this column
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task_id)
    }
}

/// Initial layout of a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "BoardConfig::default_name")]
    pub name: String,
    /// Column titles, left to right
    pub columns: Vec<String>,
}

impl BoardConfig {
    const DEFAULT_NAME: &'static str = "Default Board";

    fn default_name() -> String {
        Self::DEFAULT_NAME.to_string()
    }

    /// Parses a host-supplied config, rejecting blank names and column titles
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_column(mut self, title: impl Into<String>) -> Self {
        self.columns.push(title.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(BoardError::ConfigError("board name is empty".to_string()));
        }

        match self.columns.iter().position(|title| title.trim().is_empty()) {
            Some(index) => Err(BoardError::ConfigError(format!(
                "column {} has an empty title",
                index + 1
            ))),
            None => Ok(()),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            columns: vec![
                "To Do".to_string(),
                "In Progress".to_string(),
                "Done".to_string(),
            ],
        }
    }
}

/// Immutable snapshot of a kanban board.
///
/// Every operation borrows the current snapshot and, when it changes
/// anything, returns a fresh `Board`. `Ok(None)` means the operation was a
/// no-op and the caller should keep the snapshot it already has.
///
/// Tasks and columns sit behind `Arc`, so a new snapshot shares every entry
/// it did not replace with the one it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(default = "BoardConfig::default_name")]
    pub name: String,
    pub tasks: HashMap<TaskId, Arc<Task>>,
    pub columns: HashMap<ColumnId, Arc<Column>>,
    pub column_order: Vec<ColumnId>,
}

impl Board {
    pub fn new(config: &BoardConfig) -> Self {
        let mut board = Self {
            name: config.name.clone(),
            tasks: HashMap::new(),
            columns: HashMap::new(),
            column_order: Vec::new(),
        };

        for title in &config.columns {
            let id = board.next_column_id();
            board.column_order.push(id.clone());
            board
                .columns
                .insert(id.clone(), Arc::new(Column::new(id, title.clone())));
        }

        board
    }

    /// Parses a board snapshot and checks its invariants
    pub fn from_json(json: &str) -> Result<Self> {
        let board: Self = serde_json::from_str(json)?;
        board.validate()?;
        Ok(board)
    }

    /// The ID the next successful `add_task` will assign
    pub fn next_task_id(&self) -> TaskId {
        TaskId::new(self.tasks.len() + 1)
    }

    /// The ID the next successful `add_column` will assign
    pub fn next_column_id(&self) -> ColumnId {
        ColumnId::new(self.columns.len() + 1)
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id).map(Arc::as_ref)
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id).map(Arc::as_ref)
    }

    /// The column currently holding a task
    pub fn column_of(&self, task_id: &TaskId) -> Option<&Column> {
        self.columns
            .values()
            .find(|column| column.task_ids.contains(task_id))
            .map(Arc::as_ref)
    }

    pub fn columns_in_order(&self) -> impl Iterator<Item = &Column> {
        self.column_order.iter().filter_map(|id| self.column(id))
    }

    /// Tasks of a column, resolved and in display order
    pub fn tasks_in(&self, column_id: &ColumnId) -> Result<Vec<&Task>> {
        let column = self.require_column(column_id)?;
        Ok(column
            .task_ids
            .iter()
            .filter_map(|id| self.task(id))
            .collect())
    }

    pub fn view(&self) -> BoardView {
        BoardView::of(self)
    }

    /// Applies the outcome of a drag gesture
    pub fn move_task(&self, drag: &DragResult) -> Result<Option<Board>> {
        let Some(destination) = drag.destination() else {
            debug!(task = %drag.task_id, "drag ended without a destination");
            return Ok(None);
        };
        if drag.is_in_place() {
            debug!(
                task = %drag.task_id,
                column = %destination.column_id,
                "task dropped in place"
            );
            return Ok(None);
        }

        let changed = self
            .reorder(drag, &destination)
            .inspect_err(|err| {
                warn!(task = %drag.task_id, error = %err, "rejected task move")
            })?;

        let mut next = self.clone();
        for column in changed {
            next.columns.insert(column.id.clone(), Arc::new(column));
        }

        debug!(
            task = %drag.task_id,
            from = %drag.source_column_id,
            to = %destination.column_id,
            index = destination.index,
            "moved task"
        );
        Ok(Some(next))
    }

    /// Moves `task_id` from `source_index` in one column to
    /// `destination_index` in another (or the same) column.
    ///
    /// The task is removed first and then inserted into the shortened
    /// sequence, so for a same-column move `destination_index` refers to the
    /// position after removal.
    pub fn move_task_between(
        &self,
        source_column: &ColumnId,
        source_index: usize,
        destination_column: &ColumnId,
        destination_index: usize,
        task_id: &TaskId,
    ) -> Result<Option<Board>> {
        self.move_task(&DragResult::dropped(
            task_id.clone(),
            (source_column.clone(), source_index),
            (destination_column.clone(), destination_index),
        ))
    }

    /// Computes the replacement column(s) for a move without touching `self`
    fn reorder(&self, drag: &DragResult, destination: &DragLocation) -> Result<Vec<Column>> {
        let task_id = &drag.task_id;
        let mut source = self.require_column(&drag.source_column_id)?.clone();
        self.require_column(&destination.column_id)?;

        if !self.tasks.contains_key(task_id) {
            return Err(BoardError::TaskNotFound(task_id.to_string()));
        }

        match source.task_ids.get(drag.source_index) {
            None => {
                return Err(BoardError::IndexOutOfRange {
                    column: source.id.to_string(),
                    index: drag.source_index,
                    len: source.len(),
                })
            }
            Some(found) if found != task_id => {
                return Err(BoardError::TaskPositionMismatch {
                    column: source.id.to_string(),
                    index: drag.source_index,
                    expected: task_id.to_string(),
                    found: found.to_string(),
                })
            }
            Some(_) => {}
        }
        source.task_ids.remove(drag.source_index);

        if source.id == destination.column_id {
            insert_at(&mut source, destination.index, task_id)?;
            return Ok(vec![source]);
        }

        let mut target = self.require_column(&destination.column_id)?.clone();
        insert_at(&mut target, destination.index, task_id)?;
        Ok(vec![source, target])
    }

    /// Appends a new task to the end of a column.
    ///
    /// Content that is empty after trimming is ignored. Otherwise it is
    /// stored exactly as given.
    pub fn add_task(&self, column_id: &ColumnId, content: &str) -> Result<Option<Board>> {
        if content.trim().is_empty() {
            debug!(column = %column_id, "ignoring empty task content");
            return Ok(None);
        }

        let mut column = self
            .require_column(column_id)
            .inspect_err(|err| warn!(error = %err, "rejected new task"))?
            .clone();

        let id = self.next_task_id();
        column.task_ids.push(id.clone());

        let mut next = self.clone();
        next.tasks.insert(id.clone(), Arc::new(Task::new(id.clone(), content)));
        next.columns.insert(column_id.clone(), Arc::new(column));

        debug!(task = %id, column = %column_id, "added task");
        Ok(Some(next))
    }

    /// Appends a new empty column to the right of the board.
    ///
    /// Titles that are empty after trimming are ignored.
    pub fn add_column(&self, title: &str) -> Result<Option<Board>> {
        if title.trim().is_empty() {
            debug!("ignoring empty column title");
            return Ok(None);
        }

        let id = self.next_column_id();
        let mut next = self.clone();
        next.columns.insert(id.clone(), Arc::new(Column::new(id.clone(), title)));
        next.column_order.push(id.clone());

        debug!(column = %id, "added column");
        Ok(Some(next))
    }

    /// Checks the structural invariants of the board
    pub fn validate(&self) -> Result<()> {
        for n in 1..=self.tasks.len() {
            if !self.tasks.contains_key(&TaskId::new(n)) {
                return Err(corrupt(format!(
                    "task ids are not contiguous, missing {}",
                    TaskId::new(n)
                )));
            }
        }
        for (key, task) in &self.tasks {
            if key != &task.id {
                return Err(corrupt(format!("task {} stored under key {}", task.id, key)));
            }
        }

        for n in 1..=self.columns.len() {
            if !self.columns.contains_key(&ColumnId::new(n)) {
                return Err(corrupt(format!(
                    "column ids are not contiguous, missing {}",
                    ColumnId::new(n)
                )));
            }
        }

        let mut ordered = HashSet::new();
        for id in &self.column_order {
            if !self.columns.contains_key(id) {
                return Err(corrupt(format!("column order references unknown {}", id)));
            }
            if !ordered.insert(id) {
                return Err(corrupt(format!("column {} appears twice in column order", id)));
            }
        }
        if ordered.len() != self.columns.len() {
            return Err(corrupt("column order does not list every column".to_string()));
        }

        let mut placed = HashSet::new();
        for (key, column) in &self.columns {
            if key != &column.id {
                return Err(corrupt(format!(
                    "column {} stored under key {}",
                    column.id, key
                )));
            }
            for task_id in &column.task_ids {
                if !self.tasks.contains_key(task_id) {
                    return Err(corrupt(format!(
                        "column {} references unknown {}",
                        column.id, task_id
                    )));
                }
                if !placed.insert(task_id) {
                    return Err(corrupt(format!("{} is placed more than once", task_id)));
                }
            }
        }

        Ok(())
    }

    fn require_column(&self, id: &ColumnId) -> Result<&Column> {
        self.column(id)
            .ok_or_else(|| BoardError::ColumnNotFound(id.to_string()))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

fn insert_at(column: &mut Column, index: usize, task_id: &TaskId) -> Result<()> {
    if index > column.len() {
        return Err(BoardError::IndexOutOfRange {
            column: column.id.to_string(),
            index,
            len: column.len(),
        });
    }
    column.task_ids.insert(index, task_id.clone());
    Ok(())
}

fn corrupt(reason: String) -> BoardError {
    BoardError::CorruptBoard(reason)
}
