use chrono::NaiveDate;
use taskmaster_shared::{
  TaskDto,
  TaskId,
  TaskPriority
};

use crate::filter::TaskFilters;
use crate::task::is_overdue;

const NO_DESCRIPTION: &str =
  "No description";

/// Everything the renderer needs to draw one list item.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRowView {
  pub id:              TaskId,
  pub title:           String,
  pub description:     String,
  pub has_description: bool,
  pub priority:        TaskPriority,
  pub priority_label:  &'static str,
  pub badge_class:     &'static str,
  pub due_label:       Option<String>,
  pub completed:       bool,
  pub overdue:         bool,
  pub class:           String
}

impl TaskRowView {
  pub fn from_task(
    task: &TaskDto,
    today: NaiveDate
  ) -> Self {
    let overdue = is_overdue(task, today);
    let description = task
      .description
      .as_deref()
      .map(str::trim)
      .filter(|text| !text.is_empty());

    let mut class = format!(
      "task-item priority-{}",
      task.priority.as_key()
    );
    if task.completed {
      class.push_str(" task-completed");
    }
    if overdue {
      class.push_str(" overdue");
    }

    Self {
      id: task.id.clone(),
      title: task.title.clone(),
      description: description
        .unwrap_or(NO_DESCRIPTION)
        .to_string(),
      has_description: description
        .is_some(),
      priority: task.priority,
      priority_label: priority_label(
        task.priority
      ),
      badge_class: priority_badge_class(
        task.priority
      ),
      due_label: task.due_date.map(
        |due| {
          format!(
            "Due: {}",
            format_due_date(due)
          )
        }
      ),
      completed: task.completed,
      overdue,
      class
    }
  }
}

/// Filtered projection of the cache.
#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub struct TaskListView {
  pub rows:        Vec<TaskRowView>,
  pub count_label: String
}

impl TaskListView {
  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }
}

pub fn build_task_list_view(
  tasks: &[TaskDto],
  filters: &TaskFilters,
  today: NaiveDate
) -> TaskListView {
  let rows: Vec<TaskRowView> = filters
    .apply(tasks)
    .into_iter()
    .map(|task| {
      TaskRowView::from_task(task, today)
    })
    .collect();

  tracing::trace!(
    cached = tasks.len(),
    visible = rows.len(),
    "built task list view"
  );

  TaskListView {
    count_label: count_label(rows.len()),
    rows
  }
}

pub fn count_label(count: usize) -> String {
  if count == 1 {
    "1 task".to_string()
  } else {
    format!("{count} tasks")
  }
}

pub fn priority_label(
  priority: TaskPriority
) -> &'static str {
  match priority {
    | TaskPriority::Low => "Low",
    | TaskPriority::Medium => "Medium",
    | TaskPriority::High => "High"
  }
}

pub fn priority_description(
  priority: TaskPriority
) -> &'static str {
  match priority {
    | TaskPriority::Low => "Can wait",
    | TaskPriority::Medium => {
      "Important but not urgent"
    }
    | TaskPriority::High => {
      "Urgent and critical"
    }
  }
}

pub fn priority_badge_class(
  priority: TaskPriority
) -> &'static str {
  match priority {
    | TaskPriority::Low => "bg-success",
    | TaskPriority::Medium => {
      "bg-warning"
    }
    | TaskPriority::High => "bg-danger"
  }
}

/// `2024-03-05` -> `Mar 5, 2024`
pub fn format_due_date(
  date: NaiveDate
) -> String {
  date.format("%b %-d, %Y").to_string()
}
