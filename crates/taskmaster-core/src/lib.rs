//! Platform-independent half of the TaskMaster client: the controller that
//! mirrors the backend's task collection, plus the pure filtering,
//! statistics and view-model code the renderer draws from.

pub mod api;
pub mod config;
pub mod controller;
pub mod editor;
pub mod filter;
pub mod notice;
pub mod stats;
pub mod task;
pub mod view;

pub use api::{
  ApiError,
  TaskApi
};
pub use config::ClientConfig;
pub use controller::{
  BackendStatus,
  Subscription,
  TaskController
};
pub use editor::{
  DeleteConfirmation,
  DraftError,
  EditorContext,
  TaskDialog,
  TaskDraft
};
pub use filter::{
  StatusFilter,
  TaskFilters
};
pub use notice::{
  Notice,
  NoticeKind
};
pub use stats::Statistics;
pub use task::is_overdue;
pub use view::{
  TaskListView,
  TaskRowView
};
