//! Todo List View Model
//!
//! Pure (todos, filter) → rendered output. The DOM layer only draws what
//! `render` returns.

use crate::filter::Filter;
use crate::model::{RecordId, Todo};

/// One rendered list row
#[derive(Debug, Clone, PartialEq)]
pub struct TodoRow {
    pub id: RecordId,
    pub text: String,
    pub completed: bool,
}

/// Everything the list section shows
#[derive(Debug, Clone, PartialEq)]
pub struct TodoListView {
    pub rows: Vec<TodoRow>,
    pub counter: String,
}

/// Todos matching `filter`, in their original order
pub fn filtered_todos(todos: &[Todo], filter: Filter) -> Vec<&Todo> {
    todos.iter().filter(|t| filter.matches(t)).collect()
}

/// Number of todos not yet completed
pub fn remaining_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.completed).count()
}

/// "1 task left" / "N tasks left"
pub fn remaining_label(count: usize) -> String {
    if count == 1 {
        "1 task left".to_string()
    } else {
        format!("{} tasks left", count)
    }
}

/// Render the list section.
///
/// The counter always counts the whole list, not the filtered subset.
pub fn render(todos: &[Todo], filter: Filter) -> TodoListView {
    let rows = filtered_todos(todos, filter)
        .into_iter()
        .map(|t| TodoRow {
            id: t.id.clone(),
            text: t.text.clone(),
            completed: t.completed,
        })
        .collect();

    TodoListView {
        rows,
        counter: remaining_label(remaining_count(todos)),
    }
}
