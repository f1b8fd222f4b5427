use chrono::NaiveDate;
use taskmaster_shared::TaskDto;

use crate::task::is_overdue;

/// Counters shown in the statistics cards. Always derived from the whole
/// cache, independent of the active filters.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct Statistics {
  pub total:     usize,
  pub completed: usize,
  pub pending:   usize,
  pub overdue:   usize
}

impl Statistics {
  pub fn from_tasks(
    tasks: &[TaskDto],
    today: NaiveDate
  ) -> Self {
    let total = tasks.len();
    let completed = tasks
      .iter()
      .filter(|task| task.completed)
      .count();
    let overdue = tasks
      .iter()
      .filter(|task| {
        is_overdue(task, today)
      })
      .count();

    Self {
      total,
      completed,
      pending: total - completed,
      overdue
    }
  }
}
