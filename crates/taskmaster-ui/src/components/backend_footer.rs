use taskmaster_core::BackendStatus;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct BackendFooterProps {
  pub status: BackendStatus
}

#[function_component(BackendFooter)]
pub fn backend_footer(
  props: &BackendFooterProps
) -> Html {
  let (class, text) = match &props.status
  {
    | BackendStatus::Unknown => {
      return html! {};
    }
    | BackendStatus::Online(message) => (
      "backend online",
      if message.is_empty() {
        "Backend online".to_string()
      } else {
        message.clone()
      }
    ),
    | BackendStatus::Offline(reason) => (
      "backend offline",
      format!("Backend unreachable: {reason}")
    )
  };

  html! {
      <footer class={class}>{ text }</footer>
  }
}
