use chrono::NaiveDate;
use taskmaster_shared::{
  TaskDto,
  TaskId
};

/// True when the task has a due date strictly before `today` and is still
/// open. Only the calendar date is compared.
pub fn is_overdue(
  task: &TaskDto,
  today: NaiveDate
) -> bool {
  if task.completed {
    return false;
  }
  task
    .due_date
    .is_some_and(|due| due < today)
}

pub fn find_task<'a>(
  tasks: &'a [TaskDto],
  id: &TaskId
) -> Option<&'a TaskDto> {
  tasks.iter().find(|task| &task.id == id)
}
