use taskmaster_core::TaskListView;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::{
  TaskAction,
  TaskListRow
};

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub view:         TaskListView,
  pub loading:      bool,
  pub on_action:    Callback<TaskAction>,
  pub on_add_first: Callback<MouseEvent>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  let container_class = if props.loading {
    "tasks-container loading"
  } else {
    "tasks-container"
  };

  html! {
      <div class="panel list">
          <div class="header">
              { "Tasks" }
              <span class="task-count">{ props.view.count_label.clone() }</span>
          </div>
          {
              if props.loading {
                  html! { <div class="loading-spinner">{ "Loading…" }</div> }
              } else {
                  html! {}
              }
          }
          {
              if props.view.is_empty() {
                  html! {
                      <div class="empty-state">
                          <div>{ "No tasks to show." }</div>
                          <button class="btn primary" onclick={props.on_add_first.clone()}>
                              { "Add your first task" }
                          </button>
                      </div>
                  }
              } else {
                  html! {
                      <div class={container_class}>
                          {
                              for props.view.rows.iter().cloned().map(|row| html! {
                                  <TaskListRow
                                      key={row.id.to_string()}
                                      row={row.clone()}
                                      on_action={props.on_action.clone()}
                                  />
                              })
                          }
                      </div>
                  }
              }
          }
      </div>
  }
}
