use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
  pub filters_visible:  bool,
  /// A priority, status or date refinement is narrowing the list.
  pub filters_active:   bool,
  pub loading:          bool,
  pub on_add:           Callback<MouseEvent>,
  pub on_refresh:       Callback<MouseEvent>,
  pub on_toggle_filter: Callback<MouseEvent>
}

#[function_component(Toolbar)]
pub fn toolbar(
  props: &ToolbarProps
) -> Html {
  html! {
      <div class="actions toolbar">
          <button class="btn primary" id="addTaskBtn" onclick={props.on_add.clone()}>
              { "New Task" }
          </button>
          <button
              class="btn"
              id="refreshBtn"
              disabled={props.loading}
              onclick={props.on_refresh.clone()}
          >
              { "Refresh" }
          </button>
          <button
              class={if props.filters_visible { "btn on" } else { "btn" }}
              id="filterBtn"
              onclick={props.on_toggle_filter.clone()}
          >
              { "Filters" }
              if props.filters_active {
                  <span class="badge filter-dot" title="Filters applied">{ "•" }</span>
              }
          </button>
      </div>
  }
}
