use taskmaster_core::StatusFilter;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatusTabsProps {
  pub active:    StatusFilter,
  pub on_select: Callback<StatusFilter>
}

#[function_component(StatusTabs)]
pub fn status_tabs(
  props: &StatusTabsProps
) -> Html {
  let make_tab = |tab: StatusFilter| {
    let class = if props.active == tab {
      "nav-link active"
    } else {
      "nav-link"
    };
    let on_select =
      props.on_select.clone();
    html! {
        <button
            class={class}
            id={format!("nav-{}", tab.as_key())}
            onclick={move |e: yew::MouseEvent| {
                e.prevent_default();
                on_select.emit(tab);
            }}
        >
            { tab.label() }
        </button>
    }
  };

  html! {
      <nav class="status-tabs">
          { for StatusFilter::ALL.into_iter().map(make_tab) }
      </nav>
  }
}
