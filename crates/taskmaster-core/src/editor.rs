use taskmaster_shared::{
  TaskDto,
  TaskId,
  TaskPayload,
  TaskPriority
};
use thiserror::Error;

use crate::filter::parse_date_input;

/// Which backend call a dialog submission turns into. Captured when the
/// dialog opens and handed back unchanged on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorContext {
  Create,
  Edit {
    id: TaskId
  }
}

impl EditorContext {
  pub fn heading(&self) -> &'static str {
    match self {
      | EditorContext::Create => "New Task",
      | EditorContext::Edit {
        ..
      } => "Edit Task"
    }
  }

  pub fn success_message(
    &self
  ) -> &'static str {
    match self {
      | EditorContext::Create => {
        "Task created"
      }
      | EditorContext::Edit {
        ..
      } => "Task updated"
    }
  }
}

/// Raw form values of the create/edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
  pub title:       String,
  pub description: String,
  pub priority:    TaskPriority,
  pub due_date:    String
}

impl Default for TaskDraft {
  fn default() -> Self {
    Self {
      title:       String::new(),
      description: String::new(),
      priority:    TaskPriority::Medium,
      due_date:    String::new()
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum DraftError {
  #[error("Title is required")]
  TitleRequired,
  #[error(
    "Invalid due date {0:?}, expected \
     YYYY-MM-DD"
  )]
  InvalidDueDate(String)
}

impl TaskDraft {
  pub fn from_task(task: &TaskDto) -> Self {
    Self {
      title:       task.title.clone(),
      description: task
        .description
        .clone()
        .unwrap_or_default(),
      priority:    task.priority,
      due_date:    task
        .due_date
        .map(|date| {
          date.format("%Y-%m-%d").to_string()
        })
        .unwrap_or_default()
    }
  }

  pub fn to_payload(
    &self
  ) -> Result<TaskPayload, DraftError> {
    let title = self.title.trim();
    if title.is_empty() {
      return Err(DraftError::TitleRequired);
    }

    let due_raw = self.due_date.trim();
    let due_date = if due_raw.is_empty() {
      None
    } else {
      Some(
        parse_date_input(due_raw).ok_or_else(
          || {
            DraftError::InvalidDueDate(
              due_raw.to_string()
            )
          }
        )?
      )
    };

    Ok(TaskPayload {
      title: title.to_string(),
      description: self
        .description
        .trim()
        .to_string(),
      priority: self.priority,
      due_date
    })
  }
}

/// State of an open create/edit dialog. `seq` changes every time a dialog
/// is opened so the renderer can reset its form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDialog {
  pub seq:     u64,
  pub context: EditorContext,
  pub draft:   TaskDraft
}

/// Pending delete, shown to the user before any request goes out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
  pub id:    TaskId,
  pub title: String
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
    DraftError,
    TaskDraft
  };

  #[test]
  fn draft_from_task_round_trips_to_payload()
   {
    let task = TaskDto {
      id: TaskId::Number(4),
      title: "Book flights".to_string(),
      description: Some(
        "Lisbon, May".to_string()
      ),
      priority: TaskPriority::High,
      due_date: NaiveDate::from_ymd_opt(
        2024, 5, 1
      ),
      completed: false,
      extra: BTreeMap::new()
    };

    let draft = TaskDraft::from_task(&task);
    assert_eq!(draft.due_date, "2024-05-01");

    let payload = draft
      .to_payload()
      .expect("draft should be valid");
    assert_eq!(payload.title, "Book flights");
    assert_eq!(
      payload.description,
      "Lisbon, May"
    );
    assert_eq!(
      payload.priority,
      TaskPriority::High
    );
    assert_eq!(
      payload.due_date,
      task.due_date
    );
  }

  #[test]
  fn blank_title_is_rejected() {
    let draft = TaskDraft {
      title: "   ".to_string(),
      ..TaskDraft::default()
    };
    assert_eq!(
      draft.to_payload(),
      Err(DraftError::TitleRequired)
    );
  }

  #[test]
  fn malformed_due_date_is_rejected() {
    let draft = TaskDraft {
      title: "x".to_string(),
      due_date: "next week".to_string(),
      ..TaskDraft::default()
    };
    assert_eq!(
      draft.to_payload(),
      Err(DraftError::InvalidDueDate(
        "next week".to_string()
      ))
    );
  }

  #[test]
  fn empty_due_date_becomes_none() {
    let draft = TaskDraft {
      title: " Water plants ".to_string(),
      ..TaskDraft::default()
    };
    let payload = draft
      .to_payload()
      .expect("draft should be valid");
    assert_eq!(payload.title, "Water plants");
    assert_eq!(payload.due_date, None);
    assert_eq!(
      payload.priority,
      TaskPriority::Medium
    );
  }
}
