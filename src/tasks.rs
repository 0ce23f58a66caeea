//! "My Tasks" panel state.

use chrono::{DateTime, Local, TimeZone};
use tracing::{debug, info};

use crate::model::Task;

/// Due-date format for new tasks, e.g. "7 Mar 2026".
pub const DUE_DATE_FORMAT: &str = "%-d %b %Y";

pub const EMPTY_MESSAGE: &str = "No tasks yet. Add one!";

/// Task sequence (newest first) plus the add-task input affordance.
#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    /// Text typed into the add-task input.
    pub input: String,
    /// Whether the add-task input row is shown.
    pub show_input: bool,
    /// Highlighted row for keyboard interaction.
    pub cursor: usize,
    last_id: i64,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            input: String::new(),
            show_input: false,
            cursor: 0,
            last_id: 0,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// The empty-state message replaces the list only while the input is hidden.
    pub fn shows_empty_state(&self) -> bool {
        self.is_empty() && !self.show_input
    }

    /// Flip `completed` on the task with `id`. Unknown ids are ignored.
    pub fn toggle_complete(&mut self, id: &str) {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!(id, completed = task.completed, "task toggled");
            }
            None => debug!(id, "toggle for unknown task ignored"),
        }
    }

    /// Toggle the task under the cursor.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.tasks.get(self.cursor).map(|t| t.id.clone()) {
            self.toggle_complete(&id);
        }
    }

    pub fn toggle_input(&mut self) {
        self.show_input = !self.show_input;
    }

    /// Add the current input as a new task dated today.
    pub fn add_task(&mut self) {
        self.add_task_at(Local::now());
    }

    /// Add the current input as a new task, taking `now` as the clock.
    ///
    /// Whitespace-only input is ignored and leaves the input state as is.
    pub fn add_task_at<Tz: TimeZone>(&mut self, now: DateTime<Tz>)
    where
        Tz::Offset: std::fmt::Display,
    {
        let description = self.input.trim();
        if description.is_empty() {
            return;
        }

        // Millisecond timestamps, bumped when two adds land in the same tick.
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;

        let task = Task {
            id: id.to_string(),
            description: description.to_string(),
            completed: false,
            due_date: now.format(DUE_DATE_FORMAT).to_string(),
        };
        info!(id = %task.id, "task added");

        self.tasks.insert(0, task);
        self.input.clear();
        self.show_input = false;
        self.cursor = 0;
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.tasks.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::initial_tasks;
    use chrono::Utc;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap()
    }

    fn add(list: &mut TaskList, text: &str, now: DateTime<Utc>) {
        list.show_input = true;
        list.input = text.to_string();
        list.add_task_at(now);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut list = TaskList::new(initial_tasks());
        for task in initial_tasks() {
            list.toggle_complete(&task.id);
            list.toggle_complete(&task.id);
        }
        assert_eq!(list.tasks(), initial_tasks().as_slice());
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut list = TaskList::new(initial_tasks());
        list.toggle_complete("does-not-exist");
        assert_eq!(list.tasks(), initial_tasks().as_slice());
    }

    #[test]
    fn test_toggle_does_not_reorder() {
        let mut list = TaskList::new(initial_tasks());
        list.toggle_complete("3");
        let ids: Vec<&str> = list.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_add_empty_or_whitespace_ignored() {
        let mut list = TaskList::new(initial_tasks());
        add(&mut list, "", at(2026, 3, 7));
        add(&mut list, "   \t ", at(2026, 3, 7));
        assert_eq!(list.len(), 7);
        assert!(list.show_input);
    }

    #[test]
    fn test_add_prepends_and_resets_input() {
        let mut list = TaskList::new(initial_tasks());
        add(&mut list, "  Call vendor  ", at(2026, 3, 7));

        let first = &list.tasks()[0];
        assert_eq!(first.description, "Call vendor");
        assert!(!first.completed);
        assert_eq!(first.due_date, "7 Mar 2026");
        assert!(list.input.is_empty());
        assert!(!list.show_input);
    }

    #[test]
    fn test_add_n_most_recent_first() {
        let mut list = TaskList::new(initial_tasks());
        let now = at(2026, 10, 16);
        for name in ["a", "b", "c", "d"] {
            add(&mut list, name, now);
        }
        assert_eq!(list.len(), 11);
        let firsts: Vec<&str> = list.tasks()[..4]
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(firsts, vec!["d", "c", "b", "a"]);
        assert_eq!(list.tasks()[4].id, "1");
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut list = TaskList::new(Vec::new());
        let now = at(2026, 10, 16);
        add(&mut list, "one", now);
        add(&mut list, "two", now);
        add(&mut list, "three", now);
        let ids: Vec<i64> = list
            .tasks()
            .iter()
            .map(|t| t.id.parse().unwrap())
            .collect();
        assert!(ids[0] > ids[1] && ids[1] > ids[2]);
    }

    #[test]
    fn test_remaining_invariant() {
        let mut list = TaskList::new(initial_tasks());
        let check = |list: &TaskList| {
            assert_eq!(list.remaining_count(), list.len() - list.completed_count());
        };
        check(&list);
        for id in ["1", "2", "7", "2"] {
            list.toggle_complete(id);
            check(&list);
        }
        add(&mut list, "x", at(2026, 1, 1));
        check(&list);
    }

    #[test]
    fn test_scenario_call_vendor() {
        let mut list = TaskList::new(initial_tasks());
        assert_eq!(list.len(), 7);
        assert_eq!(list.completed_count(), 3);
        assert_eq!(list.remaining_count(), 4);

        list.toggle_complete("1");
        assert_eq!(list.remaining_count(), 3);
        assert_eq!(list.completed_count(), 4);

        add(&mut list, "Call vendor", at(2026, 10, 16));
        assert_eq!(list.len(), 8);
        assert_eq!(list.tasks()[0].description, "Call vendor");
        assert_eq!(list.remaining_count(), 4);
    }

    #[test]
    fn test_empty_state() {
        let mut list = TaskList::new(Vec::new());
        assert!(list.shows_empty_state());
        list.toggle_input();
        assert!(!list.shows_empty_state());
    }

    #[test]
    fn test_cursor_bounds_and_toggle_selected() {
        let mut list = TaskList::new(initial_tasks());
        list.cursor_up();
        assert_eq!(list.cursor, 0);
        for _ in 0..20 {
            list.cursor_down();
        }
        assert_eq!(list.cursor, 6);
        list.toggle_selected();
        assert!(list.tasks()[6].completed);
    }
}
