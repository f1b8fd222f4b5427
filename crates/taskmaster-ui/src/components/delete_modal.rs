use taskmaster_core::DeleteConfirmation;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DeleteModalProps {
  pub confirmation: DeleteConfirmation,
  pub on_confirm:
    Callback<DeleteConfirmation>,
  pub on_cancel:    Callback<MouseEvent>
}

#[function_component(DeleteModal)]
pub fn delete_modal(
  props: &DeleteModalProps
) -> Html {
  let on_confirm_click = {
    let on_confirm =
      props.on_confirm.clone();
    let confirmation =
      props.confirmation.clone();
    Callback::from(move |_: MouseEvent| {
      on_confirm.emit(confirmation.clone());
    })
  };

  html! {
      <div class="modal-backdrop">
          <div class="modal" id="deleteModal">
              <div class="header">{ "Delete Task" }</div>
              <div class="content">
                  <p>{ "Are you sure you want to delete this task?" }</p>
                  <p><strong id="deleteTaskTitle">{ props.confirmation.title.clone() }</strong></p>
                  <p class="muted">{ "This cannot be undone." }</p>
              </div>
              <div class="actions">
                  <button class="btn" onclick={props.on_cancel.clone()}>{ "Cancel" }</button>
                  <button class="btn danger" id="confirmDeleteBtn" onclick={on_confirm_click}>
                      { "Delete" }
                  </button>
              </div>
          </div>
      </div>
  }
}
