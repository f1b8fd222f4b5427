use std::future::Future;

use taskmaster_shared::{
  HealthDto,
  TaskDto,
  TaskId,
  TaskPayload
};
use thiserror::Error;

/// Every way a backend call can fail. The controller treats all variants
/// the same: log, show an error notice, keep the last known good state.
#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum ApiError {
  #[error("network error: {0}")]
  Network(String),
  #[error(
    "server responded with status \
     {status}{}",
    detail_suffix(.message)
  )]
  Status {
    status:  u16,
    message: Option<String>
  },
  #[error("unreadable response: {0}")]
  Decode(String),
  #[error("could not encode request: {0}")]
  Encode(String)
}

impl ApiError {
  /// Builds a status error, lifting the `{"error": "..."}` message the
  /// backend sends on 4xx/5xx when there is one.
  pub fn from_status(
    status: u16,
    body: &str
  ) -> Self {
    let message =
      serde_json::from_str::<
        serde_json::Value
      >(body)
      .ok()
      .and_then(|value| {
        value
          .get("error")
          .and_then(|err| err.as_str())
          .map(str::to_string)
      })
      .filter(|msg| !msg.trim().is_empty());

    ApiError::Status {
      status,
      message
    }
  }
}

fn detail_suffix(
  message: &Option<String>
) -> String {
  match message {
    | Some(msg) => format!(": {msg}"),
    | None => String::new()
  }
}

/// Transport seam between [`crate::controller::TaskController`] and the
/// REST backend. Futures are not required to be `Send`; the controller
/// only ever runs on the UI thread.
pub trait TaskApi {
  /// `GET /api/tasks`
  fn list_tasks(
    &self
  ) -> impl Future<
    Output = Result<Vec<TaskDto>, ApiError>
  >;

  /// `POST /api/tasks`
  fn create_task(
    &self,
    payload: &TaskPayload
  ) -> impl Future<
    Output = Result<TaskDto, ApiError>
  >;

  /// `PUT /api/tasks/{id}`
  fn update_task(
    &self,
    id: &TaskId,
    payload: &TaskPayload
  ) -> impl Future<
    Output = Result<TaskDto, ApiError>
  >;

  /// `PUT /api/tasks/{id}/toggle`
  fn toggle_task(
    &self,
    id: &TaskId
  ) -> impl Future<
    Output = Result<TaskDto, ApiError>
  >;

  /// `DELETE /api/tasks/{id}`
  fn delete_task(
    &self,
    id: &TaskId
  ) -> impl Future<
    Output = Result<(), ApiError>
  >;

  /// `GET /health`
  fn health(
    &self
  ) -> impl Future<
    Output = Result<HealthDto, ApiError>
  >;
}
