use taskmaster_core::view::{
  priority_description,
  priority_label
};
use taskmaster_core::{
  EditorContext,
  TaskDialog,
  TaskDraft
};
use taskmaster_shared::TaskPriority;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
  pub dialog:    TaskDialog,
  pub busy:      bool,
  pub on_submit:
    Callback<(EditorContext, TaskDraft)>,
  pub on_close:  Callback<()>
}

/// Create/edit form. The draft is local to the component; the parent keys
/// it by `dialog.seq` so each opening starts from the dialog's draft.
#[function_component(TaskModal)]
pub fn task_modal(
  props: &TaskModalProps
) -> Html {
  let draft = {
    let initial =
      props.dialog.draft.clone();
    use_state(move || initial)
  };

  let on_title = {
    let draft = draft.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let mut next = (*draft).clone();
        next.title = input.value();
        draft.set(next);
      }
    )
  };
  let on_description = {
    let draft = draft.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlTextAreaElement =
          e.target_unchecked_into();
        let mut next = (*draft).clone();
        next.description = input.value();
        draft.set(next);
      }
    )
  };
  let on_priority = {
    let draft = draft.clone();
    Callback::from(move |e: web_sys::Event| {
      let select: web_sys::HtmlSelectElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      next.priority =
        TaskPriority::from_key(&select.value())
          .unwrap_or_default();
      draft.set(next);
    })
  };
  let on_due = {
    let draft = draft.clone();
    Callback::from(move |e: web_sys::Event| {
      let input: web_sys::HtmlInputElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      next.due_date = input.value();
      draft.set(next);
    })
  };
  let on_form_submit = {
    let draft = draft.clone();
    let context =
      props.dialog.context.clone();
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        on_submit.emit((
          context.clone(),
          (*draft).clone()
        ));
      }
    )
  };
  let on_cancel = {
    let on_close = props.on_close.clone();
    Callback::from(move |_: MouseEvent| {
      on_close.emit(());
    })
  };
  let on_keydown = {
    let on_close = props.on_close.clone();
    Callback::from(
      move |e: web_sys::KeyboardEvent| {
        if e.key() == "Escape" {
          on_close.emit(());
        }
      }
    )
  };

  let priority = draft.priority;

  html! {
      <div class="modal-backdrop" onkeydown={on_keydown}>
          <div class="modal" id="taskModal">
              <div class="header" id="taskModalLabel">
                  { props.dialog.context.heading() }
              </div>
              <form class="content" id="taskForm" onsubmit={on_form_submit}>
                  <div class="field">
                      <label>{ "Title" }</label>
                      <input
                          id="taskTitle"
                          name="title"
                          required={true}
                          value={draft.title.clone()}
                          placeholder="Required task title"
                          oninput={on_title}
                      />
                  </div>
                  <div class="field">
                      <label>{ "Description (optional)" }</label>
                      <textarea
                          id="taskDescription"
                          name="description"
                          value={draft.description.clone()}
                          placeholder="Optional details"
                          oninput={on_description}
                      />
                  </div>
                  <div class="field">
                      <label>{ "Priority" }</label>
                      <select id="taskPriority" name="priority" onchange={on_priority}>
                          {
                              for TaskPriority::ALL.into_iter().map(|option| html! {
                                  <option value={option.as_key()} selected={option == priority}>
                                      { priority_label(option) }
                                  </option>
                              })
                          }
                      </select>
                      <div class="priority-preview" id="priorityPreview">
                          <strong id="priorityText">{ priority_label(priority) }</strong>
                          { " – " }
                          <span id="priorityDescription">{ priority_description(priority) }</span>
                      </div>
                  </div>
                  <div class="field">
                      <label>{ "Due Date" }</label>
                      <input
                          id="taskDueDate"
                          name="due_date"
                          type="date"
                          value={draft.due_date.clone()}
                          onchange={on_due}
                      />
                  </div>
                  <div class="actions">
                      <button type="button" class="btn" onclick={on_cancel}>{ "Cancel" }</button>
                      <button type="submit" class="btn primary" disabled={props.busy}>
                          { if props.busy { "Saving…" } else { "Save" } }
                      </button>
                  </div>
              </form>
          </div>
      </div>
  }
}
