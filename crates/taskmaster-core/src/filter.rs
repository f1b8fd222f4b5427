use chrono::NaiveDate;
use taskmaster_shared::{
  TaskDto,
  TaskPriority
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum StatusFilter {
  #[default]
  All,
  Pending,
  Completed
}

impl StatusFilter {
  pub const ALL: [StatusFilter; 3] = [
    StatusFilter::All,
    StatusFilter::Pending,
    StatusFilter::Completed
  ];

  pub fn as_key(self) -> &'static str {
    match self {
      | StatusFilter::All => "all",
      | StatusFilter::Pending => {
        "pending"
      }
      | StatusFilter::Completed => {
        "completed"
      }
    }
  }

  /// Unknown and empty keys mean "no narrowing".
  pub fn from_key(key: &str) -> Self {
    match key.trim() {
      | "pending" => {
        StatusFilter::Pending
      }
      | "completed" => {
        StatusFilter::Completed
      }
      | _ => StatusFilter::All
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | StatusFilter::All => "All",
      | StatusFilter::Pending => {
        "Pending"
      }
      | StatusFilter::Completed => {
        "Completed"
      }
    }
  }

  pub fn matches(
    self,
    task: &TaskDto
  ) -> bool {
    match self {
      | StatusFilter::All => true,
      | StatusFilter::Pending => {
        !task.completed
      }
      | StatusFilter::Completed => {
        task.completed
      }
    }
  }
}

/// Status tab plus the optional refinement selectors.
///
/// Every criterion narrows the result; a task is visible only when all of
/// them accept it.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct TaskFilters {
  pub tab:      StatusFilter,
  pub priority: Option<TaskPriority>,
  pub status:   StatusFilter,
  pub due_date: Option<NaiveDate>
}

impl TaskFilters {
  pub fn matches(
    &self,
    task: &TaskDto
  ) -> bool {
    if !self.tab.matches(task) {
      return false;
    }

    if let Some(priority) = self.priority
      && task.priority != priority
    {
      return false;
    }

    if !self.status.matches(task) {
      return false;
    }

    if let Some(date) = self.due_date
      && task.due_date != Some(date)
    {
      return false;
    }

    true
  }

  pub fn apply<'a>(
    &self,
    tasks: &'a [TaskDto]
  ) -> Vec<&'a TaskDto> {
    tasks
      .iter()
      .filter(|task| self.matches(task))
      .collect()
  }

  pub fn has_refinements(&self) -> bool {
    self.priority.is_some()
      || self.status
        != StatusFilter::All
      || self.due_date.is_some()
  }

  /// Resets the selectors; the status tab is left alone.
  pub fn clear_refinements(&mut self) {
    self.priority = None;
    self.status = StatusFilter::All;
    self.due_date = None;
  }
}

/// Reads the value of an `<input type="date">`; blank or malformed input
/// yields `None`.
pub fn parse_date_input(
  value: &str
) -> Option<NaiveDate> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  NaiveDate::parse_from_str(
    value, "%Y-%m-%d"
  )
  .ok()
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeMap;

  use chrono::NaiveDate;
  use taskmaster_shared::{
    TaskDto,
    TaskId,
    TaskPriority
  };

  use super::{
    StatusFilter,
    TaskFilters,
    parse_date_input
  };

  fn task(
    id: u64,
    priority: TaskPriority,
    completed: bool,
    due: Option<NaiveDate>
  ) -> TaskDto {
    TaskDto {
      id: TaskId::Number(id),
      title: format!("task {id}"),
      description: None,
      priority,
      due_date: due,
      completed,
      extra: BTreeMap::new()
    }
  }

  fn ids(
    tasks: Vec<&TaskDto>
  ) -> Vec<TaskId> {
    tasks
      .into_iter()
      .map(|task| task.id.clone())
      .collect()
  }

  #[test]
  fn pending_and_high_priority_is_conjunctive()
   {
    let tasks = vec![
      task(
        1,
        TaskPriority::High,
        false,
        None
      ),
      task(
        2,
        TaskPriority::High,
        true,
        None
      ),
      task(
        3,
        TaskPriority::Low,
        false,
        None
      ),
    ];

    let filters = TaskFilters {
      tab: StatusFilter::Pending,
      priority: Some(TaskPriority::High),
      ..TaskFilters::default()
    };

    assert_eq!(
      ids(filters.apply(&tasks)),
      vec![TaskId::Number(1)]
    );
  }

  #[test]
  fn refinement_status_narrows_after_tab()
  {
    let tasks = vec![
      task(
        1,
        TaskPriority::Medium,
        false,
        None
      ),
      task(
        2,
        TaskPriority::Medium,
        true,
        None
      ),
    ];

    let filters = TaskFilters {
      tab: StatusFilter::Pending,
      status: StatusFilter::Completed,
      ..TaskFilters::default()
    };
    assert!(filters.apply(&tasks).is_empty());

    let filters = TaskFilters {
      tab: StatusFilter::All,
      status: StatusFilter::Completed,
      ..TaskFilters::default()
    };
    assert_eq!(
      ids(filters.apply(&tasks)),
      vec![TaskId::Number(2)]
    );
  }

  #[test]
  fn date_filter_matches_exact_due_date()
  {
    let day =
      NaiveDate::from_ymd_opt(2024, 5, 2);
    let tasks = vec![
      task(
        1,
        TaskPriority::Low,
        false,
        day
      ),
      task(
        2,
        TaskPriority::Low,
        false,
        NaiveDate::from_ymd_opt(
          2024, 5, 3
        )
      ),
      task(3, TaskPriority::Low, false, None),
    ];

    let filters = TaskFilters {
      due_date: day,
      ..TaskFilters::default()
    };
    assert_eq!(
      ids(filters.apply(&tasks)),
      vec![TaskId::Number(1)]
    );
  }

  #[test]
  fn clearing_refinements_keeps_tab() {
    let mut filters = TaskFilters {
      tab:      StatusFilter::Completed,
      priority: Some(TaskPriority::Low),
      status:   StatusFilter::Pending,
      due_date: NaiveDate::from_ymd_opt(
        2024, 1, 1
      )
    };
    assert!(filters.has_refinements());

    filters.clear_refinements();
    assert!(!filters.has_refinements());
    assert_eq!(
      filters.tab,
      StatusFilter::Completed
    );
  }

  #[test]
  fn status_keys_fall_back_to_all() {
    assert_eq!(
      StatusFilter::from_key("pending"),
      StatusFilter::Pending
    );
    assert_eq!(
      StatusFilter::from_key(""),
      StatusFilter::All
    );
    assert_eq!(
      StatusFilter::from_key("archived"),
      StatusFilter::All
    );
  }

  #[test]
  fn date_input_parsing() {
    assert_eq!(
      parse_date_input("2024-02-29"),
      NaiveDate::from_ymd_opt(
        2024, 2, 29
      )
    );
    assert_eq!(parse_date_input(""), None);
    assert_eq!(
      parse_date_input("02/29/2024"),
      None
    );
  }
}
