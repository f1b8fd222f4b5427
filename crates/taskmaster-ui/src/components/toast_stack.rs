use gloo::timers::callback::Timeout;
use taskmaster_core::Notice;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_effect_with
};

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
  pub notices:    Vec<Notice>,
  pub timeout_ms: u32,
  pub on_dismiss: Callback<u64>
}

#[function_component(ToastStack)]
pub fn toast_stack(
  props: &ToastStackProps
) -> Html {
  html! {
      <div class="toast-stack">
          {
              for props.notices.iter().cloned().map(|notice| html! {
                  <Toast
                      key={notice.id.to_string()}
                      notice={notice.clone()}
                      timeout_ms={props.timeout_ms}
                      on_dismiss={props.on_dismiss.clone()}
                  />
              })
          }
      </div>
  }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
  notice:     Notice,
  timeout_ms: u32,
  on_dismiss: Callback<u64>
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
  {
    let on_dismiss =
      props.on_dismiss.clone();
    let timeout_ms = props.timeout_ms;
    use_effect_with(
      props.notice.id,
      move |id| {
        let id = *id;
        let handle =
          Timeout::new(timeout_ms, move || {
            on_dismiss.emit(id);
          });
        move || drop(handle)
      }
    );
  }

  let on_close = {
    let on_dismiss =
      props.on_dismiss.clone();
    let id = props.notice.id;
    Callback::from(move |_: MouseEvent| {
      on_dismiss.emit(id);
    })
  };

  html! {
      <div class={props.notice.kind.css_class()} role="status">
          <span>{ props.notice.message.clone() }</span>
          <button class="toast-close" onclick={on_close}>{ "×" }</button>
      </div>
  }
}
