use taskmaster_core::TaskRowView;
use taskmaster_shared::TaskId;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

/// What a row asks the app to do. One dispatch table in the app handles
/// all three.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskAction {
  Toggle(TaskId),
  Edit(TaskId),
  Delete(TaskId)
}

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:       TaskRowView,
  pub on_action: Callback<TaskAction>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let row = &props.row;

  let on_toggle = {
    let on_action =
      props.on_action.clone();
    let id = row.id.clone();
    Callback::from(
      move |_: web_sys::Event| {
        on_action
          .emit(TaskAction::Toggle(id.clone()));
      }
    )
  };
  let on_edit = {
    let on_action =
      props.on_action.clone();
    let id = row.id.clone();
    Callback::from(
      move |e: yew::MouseEvent| {
        e.prevent_default();
        on_action
          .emit(TaskAction::Edit(id.clone()));
      }
    )
  };
  let on_delete = {
    let on_action =
      props.on_action.clone();
    let id = row.id.clone();
    Callback::from(
      move |e: yew::MouseEvent| {
        e.prevent_default();
        on_action.emit(TaskAction::Delete(
          id.clone()
        ));
      }
    )
  };

  html! {
      <div class={row.class.clone()} data-task-id={row.id.to_string()}>
          <input
              type="checkbox"
              class="task-checkbox"
              checked={row.completed}
              onchange={on_toggle}
          />
          <div class="task-body">
              <div class="task-title">{ &row.title }</div>
              <div class={if row.has_description { "task-description" } else { "task-description muted" }}>
                  { &row.description }
              </div>
              <div class="task-meta">
                  <span class={format!("task-priority-badge badge {}", row.badge_class)}>
                      { row.priority_label }
                  </span>
                  {
                      if let Some(due) = row.due_label.clone() {
                          html! { <span class="task-due-date">{ due }</span> }
                      } else {
                          html! {}
                      }
                  }
                  {
                      if row.overdue {
                          html! { <span class="task-overdue-badge badge bg-danger">{ "Overdue" }</span> }
                      } else {
                          html! {}
                      }
                  }
              </div>
          </div>
          <div class="task-actions">
              <button class="btn edit-task" title="Edit" onclick={on_edit}>{ "Edit" }</button>
              <button class="btn danger delete-task" title="Delete" onclick={on_delete}>{ "Delete" }</button>
          </div>
      </div>
  }
}
