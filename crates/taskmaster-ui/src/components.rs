mod backend_footer;
mod delete_modal;
mod filter_panel;
mod stats_panel;
mod status_tabs;
mod task_list;
mod task_list_row;
mod task_modal;
mod toast_stack;
mod toolbar;

pub use backend_footer::BackendFooter;
pub use delete_modal::DeleteModal;
pub use filter_panel::FilterPanel;
pub use stats_panel::StatsPanel;
pub use status_tabs::StatusTabs;
pub use task_list::TaskList;
pub use task_list_row::{
  TaskAction,
  TaskListRow
};
pub use task_modal::TaskModal;
pub use toast_stack::ToastStack;
pub use toolbar::Toolbar;
