use std::cell::RefCell;
use std::rc::{
  Rc,
  Weak
};

use chrono::{
  Local,
  NaiveDate
};
use taskmaster_shared::{
  TaskDto,
  TaskId,
  TaskPriority
};
use tracing::{
  debug,
  error,
  info,
  instrument,
  warn
};

use crate::api::TaskApi;
use crate::editor::{
  DeleteConfirmation,
  EditorContext,
  TaskDialog,
  TaskDraft
};
use crate::filter::{
  StatusFilter,
  TaskFilters
};
use crate::notice::{
  Notice,
  NoticeKind,
  NoticeQueue
};
use crate::stats::Statistics;
use crate::task::find_task;
use crate::view::{
  TaskListView,
  build_task_list_view
};

/// Result of the last `/health` probe.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub enum BackendStatus {
  #[default]
  Unknown,
  Online(String),
  Offline(String)
}

#[derive(Debug, Clone, Default)]
struct ControllerState {
  tasks:               Vec<TaskDto>,
  filters:             TaskFilters,
  filters_visible:     bool,
  dialog:              Option<TaskDialog>,
  next_dialog_seq:     u64,
  delete_confirmation:
    Option<DeleteConfirmation>,
  notices:             NoticeQueue,
  in_flight:           usize,
  backend:             BackendStatus
}

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Listeners {
  next_id: u64,
  entries: Vec<(u64, Listener)>
}

/// Keeps a change listener registered; dropping it unregisters.
pub struct Subscription {
  id:        u64,
  listeners: Weak<RefCell<Listeners>>
}

impl Drop for Subscription {
  fn drop(&mut self) {
    if let Some(listeners) =
      self.listeners.upgrade()
    {
      listeners
        .borrow_mut()
        .entries
        .retain(|(id, _)| *id != self.id);
    }
  }
}

/// Mirrors the backend's task collection and turns UI intents into
/// backend calls.
///
/// All methods take `&self`. State lives behind a `RefCell` that is never
/// held across an `.await`, so overlapping calls on the UI thread are
/// fine; the cache reflects whichever response lands last.
pub struct TaskController<A> {
  api:       A,
  today:     Box<dyn Fn() -> NaiveDate>,
  state:     RefCell<ControllerState>,
  listeners: Rc<RefCell<Listeners>>
}

impl<A: TaskApi> TaskController<A> {
  pub fn new(
    api: A,
    today: impl Fn() -> NaiveDate + 'static
  ) -> Self {
    Self {
      api,
      today: Box::new(today),
      state: RefCell::new(
        ControllerState::default()
      ),
      listeners: Rc::new(RefCell::new(
        Listeners::default()
      ))
    }
  }

  /// Uses the local calendar date as "today".
  pub fn with_local_clock(api: A) -> Self {
    Self::new(api, || {
      Local::now().date_naive()
    })
  }

  pub fn subscribe(
    &self,
    listener: impl Fn() + 'static
  ) -> Subscription {
    let mut listeners =
      self.listeners.borrow_mut();
    listeners.next_id += 1;
    let id = listeners.next_id;
    listeners
      .entries
      .push((id, Rc::new(listener)));

    Subscription {
      id,
      listeners: Rc::downgrade(
        &self.listeners
      )
    }
  }

  fn notify(&self) {
    let snapshot: Vec<Listener> = self
      .listeners
      .borrow()
      .entries
      .iter()
      .map(|(_, listener)| listener.clone())
      .collect();
    for listener in snapshot {
      listener();
    }
  }

  fn update<R>(
    &self,
    apply: impl FnOnce(
      &mut ControllerState
    ) -> R
  ) -> R {
    let result =
      apply(&mut self.state.borrow_mut());
    self.notify();
    result
  }

  fn push_notice(
    &self,
    kind: NoticeKind,
    message: String
  ) {
    self.update(|state| {
      state.notices.push(kind, message);
    });
  }

  // ---- reads -------------------------------------------------------

  pub fn today(&self) -> NaiveDate {
    (self.today)()
  }

  pub fn tasks(&self) -> Vec<TaskDto> {
    self.state.borrow().tasks.clone()
  }

  pub fn filters(&self) -> TaskFilters {
    self.state.borrow().filters.clone()
  }

  pub fn filters_visible(&self) -> bool {
    self.state.borrow().filters_visible
  }

  pub fn dialog(&self) -> Option<TaskDialog> {
    self.state.borrow().dialog.clone()
  }

  pub fn delete_confirmation(
    &self
  ) -> Option<DeleteConfirmation> {
    self
      .state
      .borrow()
      .delete_confirmation
      .clone()
  }

  pub fn notices(&self) -> Vec<Notice> {
    self
      .state
      .borrow()
      .notices
      .items()
      .to_vec()
  }

  pub fn is_loading(&self) -> bool {
    self.state.borrow().in_flight > 0
  }

  pub fn backend_status(
    &self
  ) -> BackendStatus {
    self.state.borrow().backend.clone()
  }

  /// Filtered view-model of the cache for the current filters.
  pub fn view(&self) -> TaskListView {
    let today = self.today();
    let state = self.state.borrow();
    build_task_list_view(
      &state.tasks,
      &state.filters,
      today
    )
  }

  pub fn statistics(&self) -> Statistics {
    let today = self.today();
    Statistics::from_tasks(
      &self.state.borrow().tasks,
      today
    )
  }

  // ---- backend operations ------------------------------------------

  /// Replaces the cache with a fresh `GET /api/tasks`. On failure the
  /// previous cache stays in place.
  #[instrument(skip(self))]
  pub async fn load(&self) {
    self.update(|state| state.in_flight += 1);

    let result = self.api.list_tasks().await;

    self.update(|state| {
      state.in_flight =
        state.in_flight.saturating_sub(1);
      match result {
        | Ok(tasks) => {
          info!(
            count = tasks.len(),
            "loaded tasks"
          );
          state.tasks = tasks;
        }
        | Err(err) => {
          error!(error = %err, "task list request failed");
          state.notices.push(
            NoticeKind::Error,
            format!(
              "Could not load tasks: {err}"
            )
          );
        }
      }
    });
  }

  /// Sends the dialog contents as a create or update, depending on
  /// `context`. Success closes the dialog and reloads; failure keeps the
  /// dialog open and only adds an error notice.
  #[instrument(skip(self, draft))]
  pub async fn submit(
    &self,
    context: EditorContext,
    draft: TaskDraft
  ) {
    let payload = match draft.to_payload() {
      | Ok(payload) => payload,
      | Err(err) => {
        warn!(error = %err, "rejected task draft");
        self.push_notice(
          NoticeKind::Error,
          err.to_string()
        );
        return;
      }
    };

    self.update(|state| state.in_flight += 1);

    let result = match &context {
      | EditorContext::Create => {
        self.api.create_task(&payload).await
      }
      | EditorContext::Edit {
        id
      } => {
        self
          .api
          .update_task(id, &payload)
          .await
      }
    };

    match result {
      | Ok(saved) => {
        info!(id = %saved.id, "task saved");
        self.update(|state| {
          state.in_flight =
            state.in_flight.saturating_sub(1);
          if state.dialog.as_ref().is_some_and(
            |dialog| dialog.context == context
          ) {
            state.dialog = None;
          }
        });

        self.load().await;
        self.push_notice(
          NoticeKind::Success,
          context.success_message().to_string()
        );
      }
      | Err(err) => {
        error!(error = %err, "task save failed");
        self.update(|state| {
          state.in_flight =
            state.in_flight.saturating_sub(1);
          state.notices.push(
            NoticeKind::Error,
            format!(
              "Could not save task: {err}"
            )
          );
        });
      }
    }
  }

  /// Flips completion on the backend and swaps in the returned record.
  /// No reload; every other cached task is left untouched.
  #[instrument(skip(self))]
  pub async fn toggle_complete(
    &self,
    id: TaskId
  ) {
    match self.api.toggle_task(&id).await {
      | Ok(updated) => {
        self.update(|state| {
          match state
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
          {
            | Some(slot) => {
              debug!(
                completed = updated.completed,
                "toggled task"
              );
              *slot = updated;
            }
            | None => {
              debug!(
                "toggled task no longer \
                 cached"
              );
            }
          }
        });
      }
      | Err(err) => {
        error!(error = %err, "task toggle failed");
        self.push_notice(
          NoticeKind::Error,
          format!(
            "Could not change task status: \
             {err}"
          )
        );
      }
    }
  }

  /// Issues the `DELETE` the user confirmed.
  #[instrument(skip(self))]
  pub async fn confirm_delete(
    &self,
    confirmation: DeleteConfirmation
  ) {
    match self
      .api
      .delete_task(&confirmation.id)
      .await
    {
      | Ok(()) => {
        info!("task deleted");
        self.update(|state| {
          if state.delete_confirmation.as_ref()
            == Some(&confirmation)
          {
            state.delete_confirmation = None;
          }
        });

        self.load().await;
        self.push_notice(
          NoticeKind::Success,
          "Task deleted".to_string()
        );
      }
      | Err(err) => {
        error!(error = %err, "task delete failed");
        self.push_notice(
          NoticeKind::Error,
          format!(
            "Could not delete task: {err}"
          )
        );
      }
    }
  }

  /// Probes `/health` for the footer indicator. Never raises a notice.
  #[instrument(skip(self))]
  pub async fn check_health(&self) {
    let status = match self.api.health().await
    {
      | Ok(health) => {
        debug!(status = %health.status, "backend healthy");
        BackendStatus::Online(health.message)
      }
      | Err(err) => {
        warn!(error = %err, "backend health check failed");
        BackendStatus::Offline(err.to_string())
      }
    };
    self.update(|state| state.backend = status);
  }

  // ---- dialogs -----------------------------------------------------

  pub fn open_create_dialog(&self) {
    debug!("opening create dialog");
    self.open_dialog(
      EditorContext::Create,
      TaskDraft::default()
    );
  }

  /// Opens the edit dialog pre-filled from the cached task. Unknown ids
  /// are ignored.
  pub fn open_edit_dialog(
    &self,
    id: &TaskId
  ) {
    let draft = find_task(
      &self.state.borrow().tasks,
      id
    )
    .map(TaskDraft::from_task);

    let Some(draft) = draft else {
      debug!(%id, "edit requested for unknown task");
      return;
    };
    debug!(%id, "opening edit dialog");
    self.open_dialog(
      EditorContext::Edit {
        id: id.clone()
      },
      draft
    );
  }

  fn open_dialog(
    &self,
    context: EditorContext,
    draft: TaskDraft
  ) {
    self.update(|state| {
      state.next_dialog_seq += 1;
      state.dialog = Some(TaskDialog {
        seq: state.next_dialog_seq,
        context,
        draft
      });
    });
  }

  pub fn close_dialog(&self) {
    self.update(|state| state.dialog = None);
  }

  /// Asks for confirmation; no request is made until
  /// [`Self::confirm_delete`].
  pub fn request_delete(
    &self,
    id: &TaskId
  ) {
    let confirmation = find_task(
      &self.state.borrow().tasks,
      id
    )
    .map(|task| {
      DeleteConfirmation {
        id:    task.id.clone(),
        title: task.title.clone()
      }
    });

    match confirmation {
      | Some(confirmation) => {
        debug!(%id, "awaiting delete confirmation");
        self.update(|state| {
          state.delete_confirmation =
            Some(confirmation);
        });
      }
      | None => {
        debug!(%id, "delete requested for unknown task");
      }
    }
  }

  pub fn cancel_delete(&self) {
    self.update(|state| {
      state.delete_confirmation = None;
    });
  }

  // ---- filters & notices -------------------------------------------

  pub fn set_status_tab(
    &self,
    tab: StatusFilter
  ) {
    debug!(tab = tab.as_key(), "status tab");
    self.update(|state| state.filters.tab = tab);
  }

  pub fn set_priority_filter(
    &self,
    priority: Option<TaskPriority>
  ) {
    self.update(|state| {
      state.filters.priority = priority;
    });
  }

  pub fn set_status_filter(
    &self,
    status: StatusFilter
  ) {
    self.update(|state| {
      state.filters.status = status;
    });
  }

  pub fn set_date_filter(
    &self,
    date: Option<NaiveDate>
  ) {
    self.update(|state| {
      state.filters.due_date = date;
    });
  }

  pub fn clear_filters(&self) {
    debug!("clearing refinement filters");
    self.update(|state| {
      state.filters.clear_refinements();
    });
  }

  pub fn toggle_filter_panel(&self) {
    self.update(|state| {
      state.filters_visible =
        !state.filters_visible;
    });
  }

  pub fn dismiss_notice(&self, id: u64) {
    self.update(|state| {
      state.notices.dismiss(id);
    });
  }
}

#[cfg(test)]
mod tests {
  use std::cell::{
    Cell,
    RefCell
  };
  use std::collections::BTreeMap;
  use std::rc::Rc;

  use chrono::NaiveDate;
  use taskmaster_shared::{
    HealthDto,
    TaskDto,
    TaskId,
    TaskPayload,
    TaskPriority
  };

  use super::{
    BackendStatus,
    TaskController
  };
  use crate::api::{
    ApiError,
    TaskApi
  };
  use crate::filter::StatusFilter;
  use crate::notice::NoticeKind;

  /// Scripted backend: answers from a fixed list and can be told to fail.
  #[derive(Default)]
  struct ScriptedApi {
    tasks: RefCell<Vec<TaskDto>>,
    fail:  Rc<Cell<bool>>,
    calls: RefCell<Vec<String>>
  }

  impl ScriptedApi {
    fn outcome<T>(
      &self,
      call: String,
      value: T
    ) -> Result<T, ApiError> {
      self.calls.borrow_mut().push(call);
      if self.fail.get() {
        Err(ApiError::Status {
          status:  500,
          message: None
        })
      } else {
        Ok(value)
      }
    }
  }

  impl TaskApi for ScriptedApi {
    async fn list_tasks(
      &self
    ) -> Result<Vec<TaskDto>, ApiError> {
      let tasks = self.tasks.borrow().clone();
      self.outcome("GET".to_string(), tasks)
    }

    async fn create_task(
      &self,
      payload: &TaskPayload
    ) -> Result<TaskDto, ApiError> {
      let created =
        task(99, &payload.title, false);
      self.outcome(
        "POST".to_string(),
        created
      )
    }

    async fn update_task(
      &self,
      id: &TaskId,
      payload: &TaskPayload
    ) -> Result<TaskDto, ApiError> {
      let mut updated =
        task(0, &payload.title, false);
      updated.id = id.clone();
      self.outcome(
        format!("PUT {id}"),
        updated
      )
    }

    async fn toggle_task(
      &self,
      id: &TaskId
    ) -> Result<TaskDto, ApiError> {
      let current = self
        .tasks
        .borrow()
        .iter()
        .find(|task| &task.id == id)
        .cloned()
        .map(|mut task| {
          task.completed = !task.completed;
          task
        })
        .unwrap_or_else(|| task(0, "?", true));
      self.outcome(
        format!("TOGGLE {id}"),
        current
      )
    }

    async fn delete_task(
      &self,
      id: &TaskId
    ) -> Result<(), ApiError> {
      self.outcome(format!("DELETE {id}"), ())
    }

    async fn health(
      &self
    ) -> Result<HealthDto, ApiError> {
      self.outcome(
        "HEALTH".to_string(),
        HealthDto {
          status:  "healthy".to_string(),
          message: "TaskMaster API is running"
            .to_string()
        }
      )
    }
  }

  fn task(
    id: u64,
    title: &str,
    completed: bool
  ) -> TaskDto {
    TaskDto {
      id: TaskId::Number(id),
      title: title.to_string(),
      description: None,
      priority: TaskPriority::Medium,
      due_date: None,
      completed,
      extra: BTreeMap::new()
    }
  }

  /// Controller over a scripted backend plus the switch that makes every
  /// backend call fail.
  fn controller(
    tasks: Vec<TaskDto>
  ) -> (TaskController<ScriptedApi>, Rc<Cell<bool>>)
  {
    let api = ScriptedApi::default();
    *api.tasks.borrow_mut() = tasks;
    let fail = api.fail.clone();
    let ctl = TaskController::new(api, || {
      NaiveDate::from_ymd_opt(2024, 6, 10)
        .expect("valid date")
    });
    (ctl, fail)
  }

  #[tokio::test]
  async fn failed_load_keeps_previous_cache() {
    let (ctl, fail) =
      controller(vec![task(1, "a", false)]);
    ctl.load().await;
    assert_eq!(ctl.tasks().len(), 1);

    fail.set(true);
    ctl.load().await;

    assert_eq!(ctl.tasks().len(), 1);
    assert!(!ctl.is_loading());
    let notices = ctl.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert!(
      notices[0]
        .message
        .starts_with("Could not load tasks")
    );
  }

  #[tokio::test]
  async fn filter_changes_notify_subscribers() {
    let (ctl, _) = controller(vec![]);
    let hits = Rc::new(Cell::new(0_u32));
    let subscription = {
      let hits = hits.clone();
      ctl.subscribe(move || {
        hits.set(hits.get() + 1);
      })
    };

    ctl.set_status_tab(StatusFilter::Pending);
    ctl.toggle_filter_panel();
    assert_eq!(hits.get(), 2);
    assert!(ctl.filters_visible());

    drop(subscription);
    ctl.clear_filters();
    assert_eq!(hits.get(), 2);
    assert_eq!(
      ctl.filters().tab,
      StatusFilter::Pending
    );
  }

  #[tokio::test]
  async fn health_probe_sets_backend_status() {
    let (ctl, fail) = controller(vec![]);
    ctl.check_health().await;
    assert_eq!(
      ctl.backend_status(),
      BackendStatus::Online(
        "TaskMaster API is running".to_string()
      )
    );

    fail.set(true);
    ctl.check_health().await;
    assert!(matches!(
      ctl.backend_status(),
      BackendStatus::Offline(_)
    ));
    assert!(ctl.notices().is_empty());
  }

  #[tokio::test]
  async fn edit_dialog_ignores_unknown_ids() {
    let (ctl, _) =
      controller(vec![task(1, "a", false)]);
    ctl.load().await;

    ctl.open_edit_dialog(&TaskId::Number(42));
    assert!(ctl.dialog().is_none());

    ctl.open_edit_dialog(&TaskId::Number(1));
    let first = ctl.dialog().expect("dialog open");
    assert_eq!(first.draft.title, "a");

    ctl.open_create_dialog();
    let second =
      ctl.dialog().expect("dialog open");
    assert!(second.seq > first.seq);
    assert_eq!(second.draft.title, "");
  }
}
